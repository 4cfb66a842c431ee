//! Relative probe templates and the single match primitive both searches share.

use std::ops::Add;

use crate::grid::{Grid, Position};

/// Row and column delta from a reference cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dr: isize,
    pub dc: isize,
}

impl Offset {
    pub const ORIGIN: Offset = Offset::new(0, 0);

    pub const fn new(dr: isize, dc: isize) -> Self {
        Self { dr, dc }
    }

    pub const fn scale(self, factor: isize) -> Self {
        Self::new(self.dr * factor, self.dc * factor)
    }

    /// Quarter turn clockwise about the reference cell, with rows growing downward.
    pub const fn rotate_clockwise(self) -> Self {
        Self::new(self.dc, -self.dr)
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, offset: Offset) -> Position {
        Position::new(self.row + offset.dr, self.col + offset.dc)
    }
}

/// The eight compass directions, row-major around the origin.
pub const COMPASS: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];

/// An offset paired with the byte expected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Probe {
    pub offset: Offset,
    pub expected: u8,
}

impl Probe {
    pub const fn new(offset: Offset, expected: u8) -> Self {
        Self { offset, expected }
    }
}

/// True when every probe lands inside `grid` on its expected byte.
/// Stops at the first failing probe.
#[inline]
pub fn matches(probes: &[Probe], grid: &Grid, origin: Position) -> bool {
    probes
        .iter()
        .all(|probe| grid.get(origin + probe.offset) == Some(probe.expected))
}

/// Probes for reading `needle` from the origin one `direction` step at a time.
pub fn run(needle: &[u8], direction: Offset) -> Vec<Probe> {
    needle
        .iter()
        .enumerate()
        .map(|(step, &expected)| Probe::new(direction.scale(step as isize), expected))
        .collect()
}

/// Rotates every probe a quarter turn clockwise. Expected bytes move with their slot.
pub const fn rotate<const N: usize>(template: [Probe; N]) -> [Probe; N] {
    let mut rotated = template;
    let mut i = 0;
    while i < N {
        rotated[i] = Probe::new(template[i].offset.rotate_clockwise(), template[i].expected);
        i += 1;
    }
    rotated
}

/// `base` followed by its three successive clockwise rotations.
pub const fn rotations<const N: usize>(base: [Probe; N]) -> [[Probe; N]; 4] {
    let mut variants = [base; 4];
    let mut i = 1;
    while i < 4 {
        variants[i] = rotate(variants[i - 1]);
        i += 1;
    }
    variants
}
