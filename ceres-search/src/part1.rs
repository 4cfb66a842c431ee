use crate::{
    constants::NEEDLE,
    error::SearchError,
    grid::{Grid, Position},
    parser::parse_grid,
    template::{self, Offset, Probe, COMPASS},
};

/// Counts every (start cell, direction) pair from which the needle reads in a straight line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionalSearch {
    runs: Vec<Vec<Probe>>,
}

impl DirectionalSearch {
    pub fn new(needle: &[u8]) -> Result<Self, SearchError> {
        Self::with_directions(needle, &COMPASS)
    }

    pub fn with_directions(needle: &[u8], directions: &[Offset]) -> Result<Self, SearchError> {
        if needle.is_empty() {
            return Err(SearchError::EmptyNeedle);
        }
        Ok(Self::build(needle, directions))
    }

    fn build(needle: &[u8], directions: &[Offset]) -> Self {
        Self {
            runs: directions
                .iter()
                .map(|&direction| template::run(needle, direction))
                .collect(),
        }
    }

    /// Number of directions, 0 to 8, in which the needle reads from `position`.
    pub fn count_at(&self, grid: &Grid, position: Position) -> usize {
        self.runs
            .iter()
            .filter(|run| template::matches(run, grid, position))
            .count()
    }

    #[tracing::instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn count(&self, grid: &Grid) -> usize {
        let total = grid.scan(|position| self.count_at(grid, position));
        tracing::debug!(total, "directional search done");
        total
    }
}

impl Default for DirectionalSearch {
    fn default() -> Self {
        Self::build(NEEDLE, &COMPASS)
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let grid = parse_grid(input)?;
    Ok(DirectionalSearch::default().count(&grid).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = "MMMSXXMASM\n\
                          MSAMXMSMSA\n\
                          AMXSXMAAMM\n\
                          MSAMASMSMX\n\
                          XMASAMXAMM\n\
                          XXAMMXXAMA\n\
                          SMSMSASXSS\n\
                          SAXAMASAAA\n\
                          MAMMMXMMMM\n\
                          MXMXAXMASX";

    #[test_log::test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("18", process(SAMPLE)?);
        Ok(())
    }

    #[rstest]
    #[case::single_row("XMAS", 1)]
    #[case::backwards("SAMX", 1)]
    #[case::both_ways("XMASAMX", 2)]
    #[case::column("X\nM\nA\nS", 1)]
    #[case::diagonal("X...\n.M..\n..A.\n...S", 1)]
    #[case::anti_diagonal("...S\n..A.\n.M..\nX...", 1)]
    #[case::too_short("XMA", 0)]
    #[case::single_cell("X", 0)]
    #[case::nothing_here("ABCD\nEFGH", 0)]
    fn test_count(#[case] input: &str, #[case] expected: usize) -> miette::Result<()> {
        let grid = parse_grid(input)?;
        assert_eq!(expected, DirectionalSearch::default().count(&grid));
        Ok(())
    }

    #[test]
    fn test_count_at_star() -> miette::Result<()> {
        let grid = parse_grid(
            "S..S..S\n\
             .A.A.A.\n\
             ..MMM..\n\
             SAMXMAS\n\
             ..MMM..\n\
             .A.A.A.\n\
             S..S..S",
        )?;
        let search = DirectionalSearch::default();
        assert_eq!(8, search.count_at(&grid, Position::new(3, 3)));
        assert_eq!(0, search.count_at(&grid, Position::new(0, 0)));
        assert_eq!(8, search.count(&grid));
        Ok(())
    }

    #[test]
    fn test_direction_order_does_not_matter() -> miette::Result<()> {
        let grid = parse_grid(SAMPLE)?;
        let expected = DirectionalSearch::default().count(&grid);
        for shift in 1..COMPASS.len() {
            let mut directions = COMPASS;
            directions.rotate_left(shift);
            let search = DirectionalSearch::with_directions(NEEDLE, &directions)?;
            assert_eq!(expected, search.count(&grid));
        }
        Ok(())
    }

    #[rstest]
    #[case::palindrome_counts_both_ways(b"ABA", "ABA", 2)]
    #[case::single_char_counts_each_direction(b"A", "A", 8)]
    #[case::longer_needle(b"CERES", "CERES\nSEREC", 2)]
    fn test_custom_needle(
        #[case] needle: &[u8],
        #[case] input: &str,
        #[case] expected: usize,
    ) -> miette::Result<()> {
        let grid = parse_grid(input)?;
        assert_eq!(expected, DirectionalSearch::new(needle)?.count(&grid));
        Ok(())
    }

    #[test]
    fn test_default_matches_explicit_needle() -> miette::Result<()> {
        assert_eq!(DirectionalSearch::new(NEEDLE)?, DirectionalSearch::default());
        Ok(())
    }

    #[test]
    fn test_empty_needle() {
        assert_eq!(Err(SearchError::EmptyNeedle), DirectionalSearch::new(b""));
    }
}
