//! vbump - A CLI tool that bumps a MAJOR.MINOR.PATCH version string.
//!
//! # Overview
//!
//! vbump parses a version such as `v1.2.3`, increments the major, minor or
//! patch component, resets the lower-order components to zero and renders
//! the result, keeping any single-letter prefix.

pub mod error;
pub mod version;

// Re-export commonly used types
pub use error::{BumpError, ErrorKind};
pub use version::{BumpTarget, Version, bump};
