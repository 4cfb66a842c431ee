use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GridError {
    #[error("Grid input is empty")]
    #[diagnostic(
        code(ceres_search::grid::empty),
        help("Provide at least one row of characters")
    )]
    Empty,

    #[error("First row of the grid is empty")]
    #[diagnostic(
        code(ceres_search::grid::empty_row),
        help("Remove leading blank lines from the input")
    )]
    EmptyRow,

    #[error("Row {row} has length {found}, expected {expected}")]
    #[diagnostic(
        code(ceres_search::grid::ragged_row),
        help("Every row must be as long as the first row")
    )]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Buffer of length {len} does not split into rows of {cols}")]
    #[diagnostic(code(ceres_search::grid::uneven_buffer))]
    UnevenBuffer { len: usize, cols: usize },

    /// Only reachable through [`crate::grid::Grid::at`] with unchecked indices.
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    #[diagnostic(code(ceres_search::grid::out_of_bounds))]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("Invalid grid character")]
    #[diagnostic(
        code(ceres_search::parse::invalid_char),
        help("Rows may only contain printable ASCII characters")
    )]
    InvalidChar {
        #[source_code]
        src: String,
        #[label("Unexpected character here")]
        span: SourceSpan,
    },

    #[error("Malformed grid")]
    #[diagnostic(code(ceres_search::parse::malformed))]
    Malformed {
        #[source_code]
        src: String,
        #[label("Problem starts here")]
        span: SourceSpan,
        #[source]
        cause: GridError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SearchError {
    #[error("Search needle is empty")]
    #[diagnostic(
        code(ceres_search::search::empty_needle),
        help("Use a needle of at least one character")
    )]
    EmptyNeedle,
}
