//! Input shapes for the winner engine: boards and live score snapshots.

pub mod board;
pub mod digit;
pub mod live;
pub mod quarter;

pub use board::{cell_index, Axis, BoardData, Side, Squares, CELL_COUNT, GRID_SIZE};
pub use digit::{CoordinateKey, Digit};
pub use live::{CumulativeScore, GameState, LiveGameData, QuarterScore, ScoreBucket};
pub use quarter::{CurrentLabel, Quarter, QuarterLabel};
