//! Utility types for the library.
//!
//! This module contains fundamental types used throughout the library:
//! - [`NodePath`] - Normalized absolute node paths
//! - [`Error`] / [`Result`] - Error handling

mod error;
mod path;

pub use error::*;
pub use path::*;
