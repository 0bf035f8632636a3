use crate::core::io::error::{ParseErrorKind, QmParseError, line_prefix};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Required input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to parse '{}': {}{kind}", path.display(), line_prefix(line))]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        kind: ParseErrorKind,
    },

    #[error("Unrecognized element symbol '{symbol}' in '{}' (line {line})", path.display())]
    UnknownElement {
        path: PathBuf,
        line: usize,
        symbol: String,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Verification of written output failed: {0}")]
    Verification(String),
}

impl ConvertError {
    /// Attaches the offending file to a reader error.
    pub fn from_parse(path: &Path, err: QmParseError) -> Self {
        let path = path.to_path_buf();
        match err {
            QmParseError::Io(source) => ConvertError::Io { path, source },
            QmParseError::Parse { line, kind } => ConvertError::Parse { path, line, kind },
            QmParseError::UnknownElement { line, symbol } => ConvertError::UnknownElement {
                path,
                line,
                symbol,
            },
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parse_keeps_symbol_and_path() {
        let err = ConvertError::from_parse(
            Path::new("gradient"),
            QmParseError::UnknownElement {
                line: 4,
                symbol: "Xx".into(),
            },
        );
        let message = err.to_string();
        assert!(message.contains("'Xx'"));
        assert!(message.contains("gradient"));
        assert!(message.contains("line 4"));
    }

    #[test]
    fn parse_error_message_includes_line_when_known() {
        let err = ConvertError::from_parse(
            Path::new("energy"),
            QmParseError::Parse {
                line: Some(2),
                kind: ParseErrorKind::InvalidFloat {
                    field: "energy",
                    value: "abc".into(),
                },
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to parse 'energy': Line 2: Invalid energy value 'abc'"
        );

        let err = ConvertError::from_parse(
            Path::new("gradient"),
            QmParseError::Parse {
                line: None,
                kind: ParseErrorKind::UnpairedBlocks { lines: 6 },
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to parse 'gradient': File has 6 lines; expected 2 * n_atoms + 3"
        );
    }
}
