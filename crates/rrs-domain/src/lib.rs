//! Domain layer for Restaurant Review Search
//!
//! Core business types and contracts shared by every other crate in the
//! workspace: value objects, boundary validation, the error taxonomy, and
//! the provider ports implemented by the HTTP-backed providers.
//!
//! This crate performs no I/O.

pub mod constants;
pub mod error;
pub mod ports;
pub mod validation;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{Embedding, ReviewResult, SearchOptions, SearchSnapshot};
