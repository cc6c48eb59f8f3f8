//! VetX Core - Shared entity types.
//!
//! This crate provides the entity definitions used across the VetX Pharma
//! components:
//! - `store` - The in-process admin store (catalog, company, auth)
//! - `web` - Public site and admin panel binary
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no shared state, no HTTP.
//! Validation rules (non-empty fields, price range, email shape) live at the
//! form layer in `web`; the types here carry whatever they are given.
//!
//! # Modules
//!
//! - [`types`] - Product, Company, their patch types, and the `Email` wrapper

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
