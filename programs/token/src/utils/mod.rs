//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `assertions`: Common validation checks and checked arithmetic
//! - `parse`: Parsing of text arguments into typed values

pub mod assertions;
pub mod parse;

// Re-export all utilities for easy access
pub use assertions::*;
pub use parse::*;
