// error.rs - Error types for pattern decoding and catalogue construction

use thiserror::Error;

/// Malformed RLE input. Every variant carries enough context to point the
/// user at the offending part of the text; line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line_no}: unexpected line before the `x = .., y = ..` header: {line:?}")]
    UnexpectedLine { line_no: usize, line: String },

    #[error("line {line_no}: malformed header ({reason}): {line:?}")]
    MalformedHeader {
        line_no: usize,
        line: String,
        reason: &'static str,
    },

    #[error("pattern dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("no `x = .., y = ..` header found")]
    MissingHeader,

    #[error("line {line_no}: unexpected token {token:?} in {line:?}")]
    UnexpectedToken {
        token: char,
        line_no: usize,
        line: String,
    },

    #[error("line {line_no}: row {row} decodes to {len} cells but the pattern is {width} wide")]
    RowOverflow {
        row: usize,
        len: usize,
        width: usize,
        line_no: usize,
    },

    #[error("line {line_no}: run count does not fit in memory")]
    CountOverflow { line_no: usize },

    #[error("decoded {actual} cells, but a {width}x{height} pattern needs {expected}")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Invalid pattern catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("{count} patterns registered, but overlay tags only have room for 255")]
    TooManyPatterns { count: usize },

    #[error("built-in pattern {name:?} failed to decode")]
    Pattern {
        name: &'static str,
        #[source]
        source: FormatError,
    },
}
