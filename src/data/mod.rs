//! # Data types
//!
//! The exact number type and the small configuration elements built on it.
pub mod elements;
pub mod rational;
