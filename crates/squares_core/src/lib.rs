//! # squares_core - Football Squares Winner Engine
//!
//! Determines the winning squares of a 10x10 football squares board from a
//! live score snapshot.
//!
//! ## Features
//! - Static and per-quarter ("dynamic") axis resolution
//! - Quarter winners from cumulative per-quarter scoring
//! - Live leading square with owner lookup
//! - Highlight sets and dashboard snapshots
//! - JSON API for hosts that talk in strings
//!
//! Every computation is pure: the same board and snapshot always give the
//! same result, and nothing is cached between score refreshes.

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{
    compute_winners_json, resolve_axis_json, resolve_owners_json, WinnersRequest, WinnersResponse,
};
pub use engine::{
    compute_current_leader, compute_quarter_winners, current_label, effective_quarter,
    resolve_axis, resolve_owners, CellOwners, CurrentLeader, HighlightSet, HighlightTag,
    QuarterWinnerEntry, QuarterWinners, WinnerHighlights, WinnersSnapshot,
};
pub use error::{ApiError, BoardError, Result};
pub use models::{
    Axis, BoardData, CoordinateKey, CurrentLabel, Digit, GameState, LiveGameData, Quarter,
    QuarterLabel, QuarterScore, ScoreBucket, Side, Squares,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
