// src/lib.rs
//! Extracts named sections from structured (`.mi`) text files.
//!
//! ```text
//! # comments and blank lines are ignored
//! -- Types
//!     Name: string
//! ==
//! ```
//!
//! Each `-- name` line opens a section and `==` closes it. Lines in between
//! become the section's content, with trailing whitespace removed.
pub mod extractors;
pub mod utils;

pub use extractors::{extract_sections, SectionExtractor, SectionTable};
pub use utils::{ErrorKind, UnpackError};
