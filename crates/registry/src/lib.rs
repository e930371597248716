//! Student registry for the learning progress tracker.
//!
//! This crate owns every [`tracker_core::Student`], hands out ids, and
//! validates raw credential and point lines before touching any state.

#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod validation;

pub use error::{RegistryError, Result};
pub use registry::{Registry, RegistryConfig};
