//! Error types shared by every build phase.
//!
//! The build tools historically reported plain integer codes. The variants
//! here keep that contract at the process boundary (see
//! [`BuildError::exit_code`]) while letting callers tell an I/O failure
//! apart from a failed external tool or a missing rule set.

use std::path::PathBuf;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

/// Sentinel exit code when a directory has no usable rule set.
pub const MISSING_RULES_CODE: i32 = 10;

#[derive(Debug, Error)]
pub enum BuildError {
    /// A copy, compare or folder operation failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external tool ran but returned a non zero exit code.
    #[error("{tool} exited with code {code}")]
    Tool { tool: String, code: i32 },

    /// No build rules exist for the requested directory.
    #[error("no build rules found for {0}")]
    MissingRules(String),
}

impl BuildError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }

    /// Map the error to the integer code handed back to the shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Io { source, .. } => source.raw_os_error().unwrap_or(1),
            BuildError::Tool { code, .. } => *code,
            BuildError::MissingRules(_) => MISSING_RULES_CODE,
        }
    }
}

/// Whether an optional external tool actually ran.
///
/// A tool that is not installed is a skip, not a failure, so it lives on
/// the `Ok` side of a [`BuildResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Ran,
    Missing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rules_uses_sentinel_code() {
        let err = BuildError::MissingRules("nowhere".to_string());
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn tool_error_propagates_exit_code() {
        let err = BuildError::Tool {
            tool: "makeheader".to_string(),
            code: 3,
        };
        assert_eq!(err.exit_code(), 3);
    }
}
