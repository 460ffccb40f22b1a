// src/utils/mod.rs
pub mod diagnostics;
pub mod error;
pub mod logging;

pub use error::{AppError, ErrorKind, UnpackError}; // Re-export error types for convenience
