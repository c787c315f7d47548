//! Coordinate-to-owner resolution and the live leading square

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::axis::resolve_axis;
use crate::models::{
    cell_index, BoardData, CoordinateKey, GameState, LiveGameData, QuarterLabel, Side,
};

/// Owners of the cell a coordinate key lands on under one quarter's axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOwners<'a> {
    /// `None` when either digit is missing from its axis.
    pub cell_index: Option<usize>,
    pub names: &'a [String],
}

impl CellOwners<'_> {
    pub fn is_resolved(&self) -> bool {
        self.cell_index.is_some()
    }
}

/// Map `key` to a cell using the axes in effect for `quarter`.
pub fn resolve_owners(board: &BoardData, quarter: QuarterLabel, key: CoordinateKey) -> CellOwners<'_> {
    let top_axis = resolve_axis(board, Side::Top, Some(quarter));
    let left_axis = resolve_axis(board, Side::Left, Some(quarter));

    match (left_axis.position_of(key.left), top_axis.position_of(key.top)) {
        (Some(row), Some(col)) => {
            let index = cell_index(row, col);
            CellOwners { cell_index: Some(index), names: board.squares.cell(index) }
        }
        _ => {
            debug!(%key, %quarter, "coordinate not found on axes");
            CellOwners { cell_index: None, names: &[] }
        }
    }
}

/// Quarter whose axes apply right now, whether or not it has concluded.
pub fn effective_quarter(live: &LiveGameData) -> QuarterLabel {
    match live.state {
        GameState::Final => QuarterLabel::Final,
        _ => QuarterLabel::from_period(live.period),
    }
}

/// Square currently leading, from the live cumulative totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLeader {
    pub coordinate_key: CoordinateKey,
    pub quarter: QuarterLabel,
    pub player_names: Vec<String>,
    /// `-1` on the wire when the key cannot be placed on the grid.
    #[serde(with = "sentinel_index")]
    pub cell_index: Option<usize>,
}

impl CurrentLeader {
    pub fn cell_index_or_sentinel(&self) -> i32 {
        self.cell_index.map_or(-1, |index| index as i32)
    }
}

pub fn compute_current_leader(
    live: Option<&LiveGameData>,
    board: &BoardData,
) -> Option<CurrentLeader> {
    let live = live?;
    let quarter = effective_quarter(live);
    let coordinate_key = CoordinateKey::from_scores(live.top_score, live.left_score);
    let owners = resolve_owners(board, quarter, coordinate_key);

    Some(CurrentLeader {
        coordinate_key,
        quarter,
        player_names: owners.names.to_vec(),
        cell_index: owners.cell_index,
    })
}

pub(crate) mod sentinel_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        match index {
            Some(index) => serializer.serialize_i64(*index as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}
