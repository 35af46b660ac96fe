//! Typed bindings for a slice of the Microsoft Graph beta API.
//!
//! Models read and write through the [`serialization`] traits, never through a
//! wire format directly. Polymorphic base types are enums resolved from the
//! `@odata.type` discriminator.

#[macro_use]
mod macros;

pub mod error;
pub mod models;
pub mod serialization;

pub use error::{Error, Result};
