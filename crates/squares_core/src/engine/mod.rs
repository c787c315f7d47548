//! # Winner Engine
//!
//! Pure functions from a board plus a live score snapshot to winning cells.
//!
//! ```rust
//! use squares_core::engine::{compute_current_leader, compute_quarter_winners};
//! use squares_core::models::{Axis, BoardData, GameState, LiveGameData};
//!
//! let board = BoardData::new(Axis::identity(), Axis::identity());
//! let live = LiveGameData {
//!     left_score: 7,
//!     top_score: 3,
//!     period: 2,
//!     state: GameState::InProgress,
//!     ..Default::default()
//! };
//!
//! let leader = compute_current_leader(Some(&live), &board).unwrap();
//! assert_eq!(leader.cell_index, Some(73));
//! assert_eq!(compute_quarter_winners(Some(&live)).len(), 1);
//! ```

pub mod axis;
pub mod highlight;
pub mod leader;
pub mod snapshot;
pub mod winners;

pub use axis::resolve_axis;
pub use highlight::{HighlightSet, HighlightTag};
pub use leader::{
    compute_current_leader, effective_quarter, resolve_owners, CellOwners, CurrentLeader,
};
pub use snapshot::{QuarterWinnerEntry, WinnersSnapshot};
pub use winners::{compute_quarter_winners, current_label, QuarterWinners, WinnerHighlights};
