//! Pattern file loading for the Game of Life.
//!
//! Supports the plain-text `.life` format: the first line is a header or
//! comment and is always discarded, every following line describes one grid
//! row, and within a line `'*'` or `'O'` marks a live cell while any other
//! character marks a dead one. Lines may have different lengths; there is no
//! declared width.
//!
//! Placement is purely positional with modular wrap on both axes: line `n`
//! lands on row `(origin_row + n) mod rows` and character `i` on column
//! `(origin_column + i) mod columns`. Oversized patterns are never rejected,
//! they wrap around and overwrite whatever they cover.

mod loader;

pub use loader::{PatternError, apply_pattern, is_pattern_file, load_pattern};
