//! Grid statistics for monitoring.

use super::Grid;

/// Snapshot statistics over one grid.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GridStats {
    pub alive_cells: usize,
    pub total_cells: usize,
    pub density: f32,
}

impl GridStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let alive_cells = grid.alive_count();
        let total_cells = grid.rows() * grid.columns();
        Self {
            alive_cells,
            total_cells,
            density: alive_cells as f32 / total_cells as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_grid() {
        let mut grid = Grid::new(4, 5).unwrap();
        grid.set(0, 0, true);
        grid.set(3, 4, true);
        let stats = GridStats::from_grid(&grid);
        assert_eq!(stats.alive_cells, 2);
        assert_eq!(stats.total_cells, 20);
        assert!((stats.density - 0.1).abs() < 1e-6);
    }
}
