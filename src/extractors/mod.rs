// src/extractors/mod.rs
pub mod rules;
pub mod section;
pub mod table;

// Re-export key extraction types for convenience
pub use rules::{classify, LineClass};
pub use section::{extract_sections, SectionExtractor};
pub use table::SectionTable;
