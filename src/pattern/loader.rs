//! Pattern file decoder.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::compute::Grid;

/// Characters that mark a live cell in a pattern line.
const ALIVE_CHARS: [char; 2] = ['*', 'O'];

/// Pattern loading errors.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("cannot read pattern file: {0}")]
    Io(#[from] io::Error),
    #[error("pattern file has no content lines after the header")]
    Empty,
}

/// Load a pattern file into `grid` at the given origin.
///
/// The first line is discarded as a header regardless of content. All
/// remaining lines are read before any cell is written, so a read failure
/// leaves the grid unmodified (all-or-nothing).
pub fn load_pattern<P: AsRef<Path>>(
    path: P,
    grid: &mut Grid,
    origin_row: usize,
    origin_column: usize,
) -> Result<(), PatternError> {
    let path = path.as_ref();
    let lines = read_pattern_lines(path)?;
    if lines.is_empty() {
        warn!("pattern file {} has no content lines", path.display());
        return Err(PatternError::Empty);
    }

    apply_pattern(&lines, grid, origin_row, origin_column);
    info!(
        "loaded pattern from {} ({} lines)",
        path.display(),
        lines.len()
    );
    Ok(())
}

/// Read pattern lines from a file, skipping the first (header) line.
fn read_pattern_lines(path: &Path) -> Result<Vec<String>, PatternError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Apply pattern lines to the grid with wrapping on both axes.
///
/// Only cells covered by the pattern's line/character extent are written;
/// `'*'` and `'O'` set a cell alive, every other character sets it dead.
pub fn apply_pattern(lines: &[String], grid: &mut Grid, origin_row: usize, origin_column: usize) {
    let rows = grid.rows();
    let columns = grid.columns();
    let mut row = origin_row % rows;

    for line in lines {
        for (i, ch) in line.chars().enumerate() {
            let column = (origin_column + i) % columns;
            grid.set(row, column, ALIVE_CHARS.contains(&ch));
        }
        row = (row + 1) % rows;
    }
}

/// Cheap sniff for whether a file looks like a pattern file: any of the
/// first 10 lines contains a pattern character.
pub fn is_pattern_file<P: AsRef<Path>>(path: P) -> bool {
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(_) => return false,
    };
    let reader = BufReader::new(file);
    for line in reader.lines().take(10) {
        match line {
            Ok(line) => {
                if line.contains('*') || line.contains('O') || line.contains('.') {
                    return true;
                }
            }
            Err(_) => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_ring_pattern_at_origin() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "ring.life", "#x\n***\n*.*\n***\n");

        let mut grid = Grid::new(20, 20).unwrap();
        load_pattern(&path, &mut grid, 5, 5).unwrap();

        for (r, c) in [(5, 5), (5, 6), (5, 7), (6, 5), (6, 7), (7, 5), (7, 6), (7, 7)] {
            assert!(grid.get(r, c), "cell ({r},{c}) should be alive");
        }
        assert!(!grid.get(6, 6), "center of the ring stays dead");
        assert_eq!(grid.alive_count(), 8);
    }

    #[test]
    fn test_header_line_always_discarded() {
        let dir = tempdir().unwrap();
        // Header looks like pattern data but must still be skipped
        let path = write_file(&dir, "header.life", "***\n*\n");

        let mut grid = Grid::new(10, 10).unwrap();
        load_pattern(&path, &mut grid, 0, 0).unwrap();
        assert!(grid.get(0, 0));
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn test_column_wrap() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "wrap.life", "#glider row\n***\n");

        let mut grid = Grid::new(10, 10).unwrap();
        let columns = grid.columns();
        load_pattern(&path, &mut grid, 3, columns - 2).unwrap();

        assert!(grid.get(3, columns - 2));
        assert!(grid.get(3, columns - 1));
        assert!(grid.get(3, 0));
        assert_eq!(grid.alive_count(), 3);
    }

    #[test]
    fn test_row_wrap() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "tall.life", "#\n*\n*\n*\n");

        let mut grid = Grid::new(4, 4).unwrap();
        load_pattern(&path, &mut grid, 3, 0).unwrap();

        assert!(grid.get(3, 0));
        assert!(grid.get(0, 0));
        assert!(grid.get(1, 0));
    }

    #[test]
    fn test_oversized_pattern_wraps_instead_of_failing() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "wide.life", "#\n*****\n");

        let mut grid = Grid::new(2, 3).unwrap();
        load_pattern(&path, &mut grid, 0, 0).unwrap();
        // Characters 3 and 4 wrapped onto columns 0 and 1, overwriting them
        assert!(grid.get(0, 0));
        assert!(grid.get(0, 1));
        assert!(grid.get(0, 2));
    }

    #[test]
    fn test_overwrites_only_covered_cells() {
        let dir = tempdir().unwrap();
        let long = write_file(&dir, "long.life", "#\n*****\n");
        let short = write_file(&dir, "short.life", "#\n..\n");

        let mut grid = Grid::new(10, 10).unwrap();
        load_pattern(&long, &mut grid, 2, 2).unwrap();
        load_pattern(&short, &mut grid, 2, 2).unwrap();

        // Covered cells were overwritten dead, the rest untouched
        assert!(!grid.get(2, 2));
        assert!(!grid.get(2, 3));
        assert!(grid.get(2, 4));
        assert!(grid.get(2, 5));
        assert!(grid.get(2, 6));
    }

    #[test]
    fn test_alternate_alive_marker() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "o.life", "#\nO.O\n");

        let mut grid = Grid::new(5, 5).unwrap();
        load_pattern(&path, &mut grid, 0, 0).unwrap();
        assert!(grid.get(0, 0));
        assert!(!grid.get(0, 1));
        assert!(grid.get(0, 2));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "empty.life", "");

        let mut grid = Grid::new(5, 5).unwrap();
        assert!(matches!(
            load_pattern(&path, &mut grid, 0, 0),
            Err(PatternError::Empty)
        ));
        assert!(grid.is_dead());
    }

    #[test]
    fn test_header_only_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "header_only.life", "#just a comment\n");

        let mut grid = Grid::new(5, 5).unwrap();
        assert!(matches!(
            load_pattern(&path, &mut grid, 0, 0),
            Err(PatternError::Empty)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.life");

        let mut grid = Grid::new(5, 5).unwrap();
        let mut witness = grid.clone();
        witness.set(0, 0, true);
        grid.set(0, 0, true);

        assert!(matches!(
            load_pattern(&path, &mut grid, 0, 0),
            Err(PatternError::Io(_))
        ));
        // Grid untouched on failure
        assert_eq!(grid, witness);
    }

    #[test]
    fn test_is_pattern_file() {
        let dir = tempdir().unwrap();
        let pattern = write_file(&dir, "p.life", "#\n.*.\n");
        let noise = write_file(&dir, "noise.txt", "no cells here\njust text\n");

        assert!(is_pattern_file(&pattern));
        assert!(!is_pattern_file(&noise));
        assert!(!is_pattern_file(dir.path().join("missing.life")));
    }
}
