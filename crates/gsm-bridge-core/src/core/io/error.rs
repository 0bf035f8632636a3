use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QmParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{}{kind}", line_prefix(line))]
    Parse {
        line: Option<usize>,
        kind: ParseErrorKind,
    },
    #[error("Line {line}: unrecognized element symbol '{symbol}'")]
    UnknownElement { line: usize, symbol: String },
}

impl QmParseError {
    pub(crate) fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self::Parse {
            line: Some(line),
            kind,
        }
    }

    pub(crate) fn whole_file(kind: ParseErrorKind) -> Self {
        Self::Parse { line: None, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Invalid {field} value '{value}'")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Invalid integer {field} value '{value}'")]
    InvalidInt { field: &'static str, value: String },
    #[error("Missing {field} (expected at least {expected} whitespace-separated fields)")]
    MissingField { field: &'static str, expected: usize },
    #[error("File has {found} lines but at least {required} are required")]
    TooFewLines { found: usize, required: usize },
    #[error("File has {lines} lines; expected 2 * n_atoms + 3")]
    UnpairedBlocks { lines: usize },
    #[error("File contains no atoms")]
    NoAtoms,
    #[error("Line is not valid UTF-8 text")]
    InvalidEncoding,
    #[error("{0}")]
    Inconsistent(String),
}

pub(crate) fn line_prefix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!("Line {}: ", n),
        None => String::new(),
    }
}
