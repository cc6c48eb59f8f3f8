//! Core types for VetX Pharma.
//!
//! This module provides the entity shapes held by the admin store.

pub mod company;
pub mod email;
pub mod id;
pub mod product;

pub use company::{Company, CompanyPatch};
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use product::{NewProduct, Product, ProductPatch};
