use crate::{
    constants::{CROSS_ARM, CROSS_CENTER, CROSS_TAIL},
    grid::{Grid, Position},
    parser::parse_grid,
    template::{self, Offset, Probe},
};

/// Arms on top, tails on the bottom:
///
/// ```text
/// M . M
/// . A .
/// S . S
/// ```
pub const BASE_CROSS: [Probe; 5] = [
    Probe::new(Offset::new(-1, -1), CROSS_ARM),
    Probe::new(Offset::new(-1, 1), CROSS_ARM),
    Probe::new(Offset::ORIGIN, CROSS_CENTER),
    Probe::new(Offset::new(1, -1), CROSS_TAIL),
    Probe::new(Offset::new(1, 1), CROSS_TAIL),
];

pub const CROSS_VARIANTS: [[Probe; 5]; 4] = template::rotations(BASE_CROSS);

/// Counts cells that center one of four rotations of a fixed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSearch<const N: usize> {
    variants: [[Probe; N]; 4],
}

impl<const N: usize> ShapeSearch<N> {
    pub const fn new(base: [Probe; N]) -> Self {
        Self {
            variants: template::rotations(base),
        }
    }

    pub fn variants(&self) -> &[[Probe; N]; 4] {
        &self.variants
    }

    /// 1 if any variant matches around `position`, otherwise 0. The first match wins.
    pub fn count_at(&self, grid: &Grid, position: Position) -> usize {
        usize::from(
            self.variants
                .iter()
                .any(|variant| template::matches(variant, grid, position)),
        )
    }

    #[tracing::instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn count(&self, grid: &Grid) -> usize {
        let total = grid.scan(|position| self.count_at(grid, position));
        tracing::debug!(total, "shape search done");
        total
    }
}

/// The X-shaped cross search.
pub type CrossSearch = ShapeSearch<5>;

impl Default for CrossSearch {
    fn default() -> Self {
        Self {
            variants: CROSS_VARIANTS,
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let grid = parse_grid(input)?;
    Ok(CrossSearch::default().count(&grid).to_string())
}
