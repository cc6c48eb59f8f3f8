//! VetX Store - the single source of truth for the site.
//!
//! This crate holds the product catalog, the company profile, and the admin
//! authentication flag, and exposes the operations every surface of the site
//! consumes. It is the only stateful component in the system.
//!
//! # Architecture
//!
//! - [`Store`] is constructed once at process start and handed to every
//!   consumer by reference (an `Arc` in practice). There are no ambient
//!   globals.
//! - All mutations are synchronous. After each one the store publishes a
//!   [`Snapshot`] on a watch channel, so a subscriber always observes the
//!   post-mutation state.
//! - Authentication survives a restart through the [`mirror`] seam: a
//!   durable flag keyed `vetx-admin-auth` whose value is the literal string
//!   `"true"`.
//! - The store never validates input. Required-field and format checks
//!   happen at the form layer before data gets here.
//!
//! # Modules
//!
//! - [`mirror`] - Persisted auth flag (file-backed and in-memory)
//! - [`query`] - Pure, derived catalog filtering
//! - [`seed`] - Fixed default catalog and company profile

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod mirror;
pub mod query;
pub mod seed;
mod store;

pub use mirror::{AuthMirror, FileAuthMirror, MemoryAuthMirror, MirrorError};
pub use store::{Snapshot, Store, StoreError};
