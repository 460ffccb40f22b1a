// src/utils/diagnostics.rs
use std::path::Path;

use crate::utils::error::UnpackError;

/// Renders an extraction failure as a multi-line message for the user.
///
/// File-level problems name the working directory the path was resolved
/// against; line-level problems quote the offending line.
pub fn render(err: &UnpackError, cwd: Option<&Path>) -> String {
    match err.line_no() {
        None => {
            let cwd = cwd
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "?".to_string());
            format!(
                "MI file access: {}\n  File: [{}]\n  In: [{}]",
                err.problem(),
                err.file().display(),
                cwd
            )
        }
        Some(line_no) => {
            let mut problem = err.problem().to_string();
            match err {
                UnpackError::UnclosedSection { section, .. }
                | UnpackError::DuplicateSectionName { section, .. } => {
                    problem.push_str(&format!(" '{}'", section));
                }
                UnpackError::Read { source, .. } => {
                    problem.push_str(&format!(": {}", source));
                }
                _ => {}
            }
            format!(
                "MI unpack error: {}\n  File: [{}], Line[{}]:\n  [{}]",
                problem,
                err.file().display(),
                line_no,
                err.line().unwrap_or("")
            )
        }
    }
}
