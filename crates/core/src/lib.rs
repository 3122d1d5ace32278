//! Core types for sortrace
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`Element`]: the value type being sorted
//! - [`EventKind`] / [`EventRecord`]: one logged observation of a container operation
//! - [`Error`] / [`Result`]: the unified error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod event;

pub use error::{Error, Result};
pub use event::{Element, EventKind, EventRecord};
