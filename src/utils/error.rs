// src/utils/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can stop a section extraction.
///
/// Each variant carries the source file plus whatever location context
/// the failure has. Formatting for humans lives in `utils::diagnostics`.
#[derive(Error, Debug)]
pub enum UnpackError {
    #[error("Cannot open {}: {source}", .file.display())]
    CannotOpen {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read failed in {} at line {line_no}: {source}", .file.display())]
    Read {
        file: PathBuf,
        line_no: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("No sections found in {}", .file.display())]
    NoSectionsFound { file: PathBuf },

    #[error("Missing final section end for '{section}' in {} at line {line_no}", .file.display())]
    UnclosedSection {
        file: PathBuf,
        line_no: usize,
        section: String,
    },

    // Only reachable if the rule table loses its catch-all.
    #[error("Unrecognized line in {} at line {line_no}: {line}", .file.display())]
    UnrecognizedLine {
        file: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("Duplicate begin section in {} at line {line_no}: {line}", .file.display())]
    DuplicateBegin {
        file: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("Duplicate end section in {} at line {line_no}: {line}", .file.display())]
    StrayEnd {
        file: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("Missing section name in {} at line {line_no}: {line}", .file.display())]
    MissingSectionName {
        file: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("Content outside section in {} at line {line_no}: {line}", .file.display())]
    ContentOutsideSection {
        file: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("Duplicate section name '{section}' in {} at line {line_no}: {line}", .file.display())]
    DuplicateSectionName {
        file: PathBuf,
        line_no: usize,
        line: String,
        section: String,
    },
}

/// Field-less tag for each `UnpackError` variant, handy for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CannotOpen,
    Read,
    NoSectionsFound,
    UnclosedSection,
    UnrecognizedLine,
    DuplicateBegin,
    StrayEnd,
    MissingSectionName,
    ContentOutsideSection,
    DuplicateSectionName,
}

impl UnpackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UnpackError::CannotOpen { .. } => ErrorKind::CannotOpen,
            UnpackError::Read { .. } => ErrorKind::Read,
            UnpackError::NoSectionsFound { .. } => ErrorKind::NoSectionsFound,
            UnpackError::UnclosedSection { .. } => ErrorKind::UnclosedSection,
            UnpackError::UnrecognizedLine { .. } => ErrorKind::UnrecognizedLine,
            UnpackError::DuplicateBegin { .. } => ErrorKind::DuplicateBegin,
            UnpackError::StrayEnd { .. } => ErrorKind::StrayEnd,
            UnpackError::MissingSectionName { .. } => ErrorKind::MissingSectionName,
            UnpackError::ContentOutsideSection { .. } => ErrorKind::ContentOutsideSection,
            UnpackError::DuplicateSectionName { .. } => ErrorKind::DuplicateSectionName,
        }
    }

    /// Short problem statement, without file or line context.
    pub fn problem(&self) -> &'static str {
        match self.kind() {
            ErrorKind::CannotOpen => "Cannot open",
            ErrorKind::Read => "Cannot read",
            ErrorKind::NoSectionsFound => "No sections found",
            ErrorKind::UnclosedSection => "Missing final section end",
            ErrorKind::UnrecognizedLine => "Unrecognized line",
            ErrorKind::DuplicateBegin => "Duplicate begin section",
            ErrorKind::StrayEnd => "Duplicate end section",
            ErrorKind::MissingSectionName => "Missing section name",
            ErrorKind::ContentOutsideSection => "Content outside section",
            ErrorKind::DuplicateSectionName => "Duplicate section name",
        }
    }

    pub fn file(&self) -> &Path {
        match self {
            UnpackError::CannotOpen { file, .. }
            | UnpackError::Read { file, .. }
            | UnpackError::NoSectionsFound { file }
            | UnpackError::UnclosedSection { file, .. }
            | UnpackError::UnrecognizedLine { file, .. }
            | UnpackError::DuplicateBegin { file, .. }
            | UnpackError::StrayEnd { file, .. }
            | UnpackError::MissingSectionName { file, .. }
            | UnpackError::ContentOutsideSection { file, .. }
            | UnpackError::DuplicateSectionName { file, .. } => file,
        }
    }

    /// 1-based physical line the error is reported against, if any.
    pub fn line_no(&self) -> Option<usize> {
        match self {
            UnpackError::CannotOpen { .. } | UnpackError::NoSectionsFound { .. } => None,
            UnpackError::Read { line_no, .. }
            | UnpackError::UnclosedSection { line_no, .. }
            | UnpackError::UnrecognizedLine { line_no, .. }
            | UnpackError::DuplicateBegin { line_no, .. }
            | UnpackError::StrayEnd { line_no, .. }
            | UnpackError::MissingSectionName { line_no, .. }
            | UnpackError::ContentOutsideSection { line_no, .. }
            | UnpackError::DuplicateSectionName { line_no, .. } => Some(*line_no),
        }
    }

    /// Offending line text, when a specific line triggered the error.
    pub fn line(&self) -> Option<&str> {
        match self {
            UnpackError::UnrecognizedLine { line, .. }
            | UnpackError::DuplicateBegin { line, .. }
            | UnpackError::StrayEnd { line, .. }
            | UnpackError::MissingSectionName { line, .. }
            | UnpackError::ContentOutsideSection { line, .. }
            | UnpackError::DuplicateSectionName { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Errors raised by the command-line front end.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] UnpackError),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_for_line_error() {
        let err = UnpackError::StrayEnd {
            file: PathBuf::from("model.mi"),
            line_no: 4,
            line: "==".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::StrayEnd);
        assert_eq!(err.file(), Path::new("model.mi"));
        assert_eq!(err.line_no(), Some(4));
        assert_eq!(err.line(), Some("=="));
        assert_eq!(err.problem(), "Duplicate end section");
        assert_eq!(err.to_string(), "Duplicate end section in model.mi at line 4: ==");
    }

    #[test]
    fn test_accessors_for_file_error() {
        let err = UnpackError::NoSectionsFound { file: PathBuf::from("empty.mi") };
        assert_eq!(err.kind(), ErrorKind::NoSectionsFound);
        assert_eq!(err.line_no(), None);
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_unclosed_section_has_no_offending_text() {
        let err = UnpackError::UnclosedSection {
            file: PathBuf::from("a.mi"),
            line_no: 9,
            section: "Alpha".to_string(),
        };
        assert_eq!(err.line_no(), Some(9));
        assert_eq!(err.line(), None);
        assert!(err.to_string().contains("'Alpha'"));
    }

    #[test]
    fn test_app_error_wraps_unpack_error() {
        let err: AppError = UnpackError::NoSectionsFound { file: PathBuf::from("x.mi") }.into();
        assert!(matches!(err, AppError::Extraction(_)));
        assert!(err.to_string().starts_with("Extraction failed:"));
    }
}
