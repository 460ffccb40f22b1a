// src/extractors/section.rs

// --- Imports ---
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::extractors::rules::{self, LineClass};
use crate::extractors::table::SectionTable;
use crate::utils::error::UnpackError;

// --- Parser State ---
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParserState {
    Idle,
    InSection(String),
}

/// Per-call state: the open section and the table built so far.
struct Unpacker<'a> {
    file: &'a Path,
    state: ParserState,
    table: SectionTable,
}

impl<'a> Unpacker<'a> {
    fn new(file: &'a Path) -> Self {
        Self {
            file,
            state: ParserState::Idle,
            table: SectionTable::new(),
        }
    }

    /// Classifies one non-blank line and applies its transition.
    fn process(&mut self, line_no: usize, line: &str) -> Result<(), UnpackError> {
        match rules::classify(line) {
            Some(LineClass::SectionBegin { name }) => self.begin_section(line_no, line, name),
            Some(LineClass::SectionEnd) => self.end_section(line_no, line),
            Some(LineClass::Comment) => Ok(()),
            Some(LineClass::Content(content)) => self.add_content(line_no, content),
            None => Err(UnpackError::UnrecognizedLine {
                file: self.file.to_path_buf(),
                line_no,
                line: line.to_string(),
            }),
        }
    }

    fn begin_section(&mut self, line_no: usize, line: &str, name: &str) -> Result<(), UnpackError> {
        if let ParserState::InSection(open) = &self.state {
            tracing::debug!("Begin marker at line {} while '{}' is still open", line_no, open);
            return Err(UnpackError::DuplicateBegin {
                file: self.file.to_path_buf(),
                line_no,
                line: line.to_string(),
            });
        }
        if name.is_empty() {
            return Err(UnpackError::MissingSectionName {
                file: self.file.to_path_buf(),
                line_no,
                line: line.to_string(),
            });
        }
        if !self.table.open(name) {
            return Err(UnpackError::DuplicateSectionName {
                file: self.file.to_path_buf(),
                line_no,
                line: line.to_string(),
                section: name.to_string(),
            });
        }
        tracing::debug!("Opened section '{}' at line {}", name, line_no);
        self.state = ParserState::InSection(name.to_string());
        Ok(())
    }

    fn end_section(&mut self, line_no: usize, line: &str) -> Result<(), UnpackError> {
        match std::mem::replace(&mut self.state, ParserState::Idle) {
            ParserState::InSection(name) => {
                tracing::debug!("Closed section '{}' at line {}", name, line_no);
                Ok(())
            }
            ParserState::Idle => Err(UnpackError::StrayEnd {
                file: self.file.to_path_buf(),
                line_no,
                line: line.to_string(),
            }),
        }
    }

    fn add_content(&mut self, line_no: usize, content: &str) -> Result<(), UnpackError> {
        match &self.state {
            ParserState::InSection(name) => {
                self.table.push_line(name, content);
                Ok(())
            }
            ParserState::Idle => Err(UnpackError::ContentOutsideSection {
                file: self.file.to_path_buf(),
                line_no,
                line: content.to_string(),
            }),
        }
    }

    /// End-of-input checks. `last_line_no` is the final physical line (0 if none).
    fn finish(self, last_line_no: usize) -> Result<SectionTable, UnpackError> {
        if self.table.is_empty() {
            return Err(UnpackError::NoSectionsFound {
                file: self.file.to_path_buf(),
            });
        }
        if let ParserState::InSection(section) = self.state {
            return Err(UnpackError::UnclosedSection {
                file: self.file.to_path_buf(),
                line_no: last_line_no,
                section,
            });
        }
        Ok(self.table)
    }
}

// --- Main Extractor Structure ---
/// Extracts sections from structured (`.mi`) files.
///
/// Holds no state between calls; every extraction owns its own parser
/// state and table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Opens `path` and extracts all of its sections.
    ///
    /// The file handle is dropped on every return path.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<SectionTable, UnpackError> {
        let path = path.as_ref();
        tracing::debug!("Opening structured file: {}", path.display());
        let file = File::open(path).map_err(|source| UnpackError::CannotOpen {
            file: path.to_path_buf(),
            source,
        })?;
        self.extract_reader(BufReader::new(file), path)
    }

    /// Extracts sections from an already open reader. `source` names the
    /// input in diagnostics.
    pub fn extract_reader<R, P>(&self, reader: R, source: P) -> Result<SectionTable, UnpackError>
    where
        R: BufRead,
        P: AsRef<Path>,
    {
        let source = source.as_ref();
        let mut unpacker = Unpacker::new(source);
        let mut last_line_no = 0;

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|source_err| UnpackError::Read {
                file: source.to_path_buf(),
                line_no,
                source: source_err,
            })?;
            last_line_no = line_no;

            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            unpacker.process(line_no, line)?;
        }

        let table = unpacker.finish(last_line_no)?;
        tracing::info!(
            "Extracted {} section(s) from {} ({} lines)",
            table.len(),
            source.display(),
            last_line_no
        );
        Ok(table)
    }

    /// Extracts sections from in-memory text.
    pub fn extract_str<P: AsRef<Path>>(&self, text: &str, source: P) -> Result<SectionTable, UnpackError> {
        self.extract_reader(text.as_bytes(), source)
    }
}

/// Shorthand for `SectionExtractor::new().extract_file(path)`.
pub fn extract_sections<P: AsRef<Path>>(path: P) -> Result<SectionTable, UnpackError> {
    SectionExtractor::new().extract_file(path)
}
