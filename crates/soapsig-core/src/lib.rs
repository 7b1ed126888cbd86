#![forbid(unsafe_code)]

//! Shared types for the soapsig workspace: the error taxonomy, the fixed
//! legacy namespace profile, and algorithm identifiers.

pub mod algorithm;
pub mod encoding;
pub mod error;
pub mod ns;

pub use error::{Error, Result};
