use shiftpick_core::{ShiftGrid, ShiftSet};

/// Which shift categories a period (column) has staffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnCoverage {
    col: usize,
    present: ShiftSet,
}

impl ColumnCoverage {
    /// Returns the column index.
    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the categories appearing at least once in the column.
    #[must_use]
    pub fn present(&self) -> ShiftSet {
        self.present
    }

    /// Returns the categories the column still lacks.
    #[must_use]
    pub fn missing(&self) -> ShiftSet {
        self.present.complement()
    }

    /// Returns how many distinct categories are present (0 to [`Shift::COUNT`](shiftpick_core::Shift::COUNT)).
    #[must_use]
    pub fn score(&self) -> usize {
        self.present.len()
    }

    /// Returns whether every category is present.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.present.is_full()
    }
}

/// Computes the coverage of one column.
///
/// # Panics
///
/// Panics if `col` is outside the grid.
#[must_use]
pub fn column_coverage(grid: &ShiftGrid, col: usize) -> ColumnCoverage {
    assert!(col < grid.dimensions().cols(), "column {col} out of range");
    let present = grid.column(col).filter_map(|cell| cell.as_shift()).collect();
    ColumnCoverage { col, present }
}

/// Computes the coverage of every column, left to right.
///
/// # Examples
///
/// ```
/// use shiftpick_core::{Shift, ShiftGrid};
/// use shiftpick_rules::coverage;
///
/// let grid: ShiftGrid = "AB\nCB\nD.".parse().unwrap();
/// let coverage = coverage(&grid);
/// assert_eq!(coverage[0].score(), 3);
/// assert_eq!(coverage[1].score(), 1);
/// assert!(coverage[1].missing().contains(Shift::E));
/// ```
#[must_use]
pub fn coverage(grid: &ShiftGrid) -> Vec<ColumnCoverage> {
    (0..grid.dimensions().cols())
        .map(|col| column_coverage(grid, col))
        .collect()
}

/// Returns whether every column has every category.
#[must_use]
pub fn is_fully_covered(coverage: &[ColumnCoverage]) -> bool {
    coverage.iter().all(ColumnCoverage::is_full)
}

#[cfg(test)]
mod tests {
    use shiftpick_core::Shift;

    use super::*;

    #[test]
    fn test_empty_grid_has_zero_coverage() {
        let grid: ShiftGrid = "...\n...".parse().unwrap();
        let coverage = coverage(&grid);
        assert_eq!(coverage.len(), 3);
        assert!(coverage.iter().all(|c| c.score() == 0));
        assert!(!is_fully_covered(&coverage));
    }

    #[test]
    fn test_duplicates_count_once() {
        let grid: ShiftGrid = "A\nA\nB".parse().unwrap();
        let column = column_coverage(&grid, 0);
        assert_eq!(column.col(), 0);
        assert_eq!(column.score(), 2);
        assert_eq!(
            column.present().iter().collect::<Vec<_>>(),
            [Shift::A, Shift::B]
        );
    }

    #[test]
    fn test_every_category_in_every_column_is_full() {
        let grid: ShiftGrid = "
            ABCDE
            BCDEA
            CDEAB
            DEABC
            EABCD
        "
        .parse()
        .unwrap();
        let coverage = coverage(&grid);
        assert!(
            coverage
                .iter()
                .all(|c| c.score() == Shift::COUNT && c.missing().is_empty())
        );
        assert!(is_fully_covered(&coverage));
    }
}
