//! N×N percolation grid backed by a weighted quick-union forest.
//!
//! Every cell owns one node of a [`UnionFind`] sized `N² + 2`. The two
//! extra nodes are virtual sentinels: `top` is joined to every open cell
//! of row 0 and `bottom` to every open cell of row `N − 1`, so the grid
//! percolates exactly when the sentinels share a root.
//!
//! Neighbor lookup is bounded per axis: a cell in the last column is never
//! joined to the first cell of the next row even though their flat indices
//! are adjacent.

use crate::collections::UnionFind;
use crate::error::{PercolationError, Result};

/// A square grid of sites that are opened one at a time.
///
/// # Examples
/// ```
/// use u_percolation::grid::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(3).unwrap();
/// grid.open(0, 1).unwrap();
/// grid.open(1, 1).unwrap();
/// assert!(!grid.percolates());
///
/// grid.open(2, 1).unwrap();
/// assert!(grid.percolates());
/// assert_eq!(grid.number_of_open_sites(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    sites: UnionFind,
    top: usize,
    bottom: usize,
}

impl PercolationGrid {
    /// Creates an `n × n` grid with every site closed.
    ///
    /// # Errors
    /// [`PercolationError::InvalidSize`] if `n == 0` or `n² + 2` does not
    /// fit in `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let cells = n
            .checked_mul(n)
            .filter(|&cells| cells > 0 && cells.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidSize { size: n })?;

        Ok(Self {
            n,
            open: vec![false; cells],
            open_count: 0,
            sites: UnionFind::new(cells + 2),
            top: cells,
            bottom: cells + 1,
        })
    }

    /// Side length of the grid.
    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Total number of cells, `N²`.
    pub fn site_count(&self) -> usize {
        self.open.len()
    }

    /// Maps `(row, col)` to its flat index `row * N + col`.
    ///
    /// # Errors
    /// [`PercolationError::InvalidCoordinate`] if either coordinate is
    /// outside `0..N`.
    pub fn grid_pos(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.n || col >= self.n {
            return Err(PercolationError::InvalidCoordinate {
                row,
                col,
                size: self.n,
            });
        }
        Ok(row * self.n + col)
    }

    /// Opens the site at `(row, col)` and joins it to its open neighbors.
    ///
    /// Opening an already-open site is a no-op.
    ///
    /// # Errors
    /// [`PercolationError::InvalidCoordinate`] for out-of-range coordinates.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let pos = self.grid_pos(row, col)?;
        if self.open[pos] {
            return Ok(());
        }
        self.open[pos] = true;
        self.open_count += 1;

        let n = self.n;
        if col > 0 {
            self.join_if_open(pos, pos - 1);
        }
        if col + 1 < n {
            self.join_if_open(pos, pos + 1);
        }
        if row > 0 {
            self.join_if_open(pos, pos - n);
        }
        if row + 1 < n {
            self.join_if_open(pos, pos + n);
        }

        // A 1×1 grid hits both branches.
        if row == 0 {
            self.sites.union(pos, self.top);
        }
        if row == n - 1 {
            self.sites.union(pos, self.bottom);
        }
        log::trace!("opened ({row}, {col}) -> site {pos}");
        Ok(())
    }

    /// Returns whether the site at `(row, col)` is open.
    ///
    /// # Errors
    /// [`PercolationError::InvalidCoordinate`] for out-of-range coordinates.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let pos = self.grid_pos(row, col)?;
        Ok(self.open[pos])
    }

    /// Returns whether two sites belong to the same open cluster.
    ///
    /// Closed sites are only ever connected to themselves.
    ///
    /// # Errors
    /// [`PercolationError::InvalidCoordinate`] if either site is out of range.
    pub fn sites_connected(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<bool> {
        let pa = self.grid_pos(a.0, a.1)?;
        let pb = self.grid_pos(b.0, b.1)?;
        Ok(self.sites.connected(pa, pb))
    }

    /// Number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` once an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.sites.connected(self.top, self.bottom)
    }

    fn join_if_open(&mut self, pos: usize, neighbor: usize) {
        if self.open[neighbor] {
            self.sites.union(pos, neighbor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert!(matches!(
            PercolationGrid::new(0),
            Err(PercolationError::InvalidSize { size: 0 })
        ));
    }

    #[test]
    fn test_new_rejects_overflow() {
        assert!(matches!(
            PercolationGrid::new(usize::MAX),
            Err(PercolationError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_new_all_closed() {
        let mut grid = PercolationGrid::new(4).unwrap();
        assert_eq!(grid.grid_size(), 4);
        assert_eq!(grid.site_count(), 16);
        assert_eq!(grid.number_of_open_sites(), 0);
        assert!(!grid.percolates());
        for row in 0..4 {
            for col in 0..4 {
                assert!(!grid.is_open(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_grid_pos_row_major() {
        let grid = PercolationGrid::new(5).unwrap();
        assert_eq!(grid.grid_pos(0, 0).unwrap(), 0);
        assert_eq!(grid.grid_pos(0, 4).unwrap(), 4);
        assert_eq!(grid.grid_pos(1, 0).unwrap(), 5);
        assert_eq!(grid.grid_pos(4, 4).unwrap(), 24);
    }

    #[test]
    fn test_grid_pos_bounds() {
        let grid = PercolationGrid::new(3).unwrap();
        assert!(matches!(
            grid.grid_pos(3, 0),
            Err(PercolationError::InvalidCoordinate { row: 3, col: 0, size: 3 })
        ));
        assert!(grid.grid_pos(0, 3).is_err());
        assert!(grid.grid_pos(2, 2).is_ok());
    }

    #[test]
    fn test_open_out_of_range_leaves_grid_untouched() {
        let mut grid = PercolationGrid::new(2).unwrap();
        assert!(grid.open(2, 0).is_err());
        assert!(grid.open(0, 2).is_err());
        assert_eq!(grid.number_of_open_sites(), 0);
    }

    #[test]
    fn test_single_cell_percolates() {
        let mut grid = PercolationGrid::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(0, 0).unwrap();
        assert!(grid.percolates());
        assert_eq!(grid.number_of_open_sites(), 1);
    }

    #[test]
    fn test_two_by_two_column_percolates() {
        let mut grid = PercolationGrid::new(2).unwrap();
        grid.open(0, 0).unwrap();
        grid.open(1, 0).unwrap();
        assert!(grid.percolates());
    }

    #[test]
    fn test_two_by_two_top_row_does_not_percolate() {
        let mut grid = PercolationGrid::new(2).unwrap();
        grid.open(0, 0).unwrap();
        grid.open(0, 1).unwrap();
        assert!(!grid.percolates());
        assert!(grid.sites_connected((0, 0), (0, 1)).unwrap());
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut once = PercolationGrid::new(3).unwrap();
        let mut twice = PercolationGrid::new(3).unwrap();
        for &(r, c) in &[(0, 0), (1, 0), (1, 1)] {
            once.open(r, c).unwrap();
            twice.open(r, c).unwrap();
            twice.open(r, c).unwrap();
        }
        assert_eq!(once.number_of_open_sites(), 3);
        assert_eq!(twice.number_of_open_sites(), 3);
        assert_eq!(once.percolates(), twice.percolates());
        assert_eq!(
            once.sites_connected((0, 0), (1, 1)).unwrap(),
            twice.sites_connected((0, 0), (1, 1)).unwrap()
        );
    }

    #[test]
    fn test_row_end_does_not_wrap_to_next_row() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(0, 2).unwrap();
        grid.open(1, 0).unwrap();
        assert!(!grid.sites_connected((0, 2), (1, 0)).unwrap());

        grid.open(1, 2).unwrap();
        grid.open(2, 0).unwrap();
        assert!(!grid.sites_connected((1, 2), (2, 0)).unwrap());
    }

    #[test]
    fn test_diagonal_wrap_does_not_percolate() {
        // (0,1) and (1,0) have flat indices 1 and 2.
        let mut grid = PercolationGrid::new(2).unwrap();
        grid.open(0, 1).unwrap();
        grid.open(1, 0).unwrap();
        assert!(!grid.percolates());
    }

    #[test]
    fn test_closed_neighbor_is_not_joined() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(0, 0).unwrap();
        grid.open(2, 0).unwrap();
        assert!(!grid.sites_connected((0, 0), (2, 0)).unwrap());
        assert!(!grid.percolates());

        grid.open(1, 0).unwrap();
        assert!(grid.sites_connected((0, 0), (2, 0)).unwrap());
        assert!(grid.percolates());
    }

    #[test]
    fn test_winding_path_percolates() {
        let mut grid = PercolationGrid::new(4).unwrap();
        for &(r, c) in &[(0, 3), (1, 3), (1, 2), (1, 1), (2, 1), (3, 1)] {
            assert!(!grid.percolates());
            grid.open(r, c).unwrap();
        }
        assert!(grid.percolates());
        assert!(!grid.is_open(0, 0).unwrap());
    }
}
