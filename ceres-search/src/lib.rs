use std::fmt;

use miette::Context;

pub mod error;
pub mod grid;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod template;

pub mod constants {
    pub const NEEDLE: &[u8] = b"XMAS";
    pub const CROSS_ARM: u8 = b'M';
    pub const CROSS_CENTER: u8 = b'A';
    pub const CROSS_TAIL: u8 = b'S';
}

use grid::Grid;
use part1::DirectionalSearch;
use part2::CrossSearch;

/// Match counts for both searches over one grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub directional: usize,
    pub shape: usize,
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.directional)?;
        write!(f, "{}", self.shape)
    }
}

#[tracing::instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
pub fn solve(grid: &Grid) -> Totals {
    let totals = Totals {
        directional: DirectionalSearch::default().count(grid),
        shape: CrossSearch::default().count(grid),
    };
    tracing::info!(
        directional = totals.directional,
        shape = totals.shape,
        "search complete"
    );
    totals
}

/// Parses `input` as a grid and runs both searches over it.
///
/// # Errors
/// * If the input does not form a rectangular ASCII grid
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<Totals> {
    let grid = parser::parse_grid(input).wrap_err("Failed to parse input grid")?;
    tracing::debug!("{} x {}\n{}", grid.rows(), grid.cols(), grid);
    Ok(solve(&grid))
}
