//! VetX Web library.
//!
//! This crate provides the website functionality as a library, allowing it
//! to be tested and reused. The binary in `main.rs` wires configuration,
//! the store, and the router together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;
