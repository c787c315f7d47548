//! JSON entry points for hosts that exchange strings rather than Rust types

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{
    compute_current_leader, resolve_axis, resolve_owners, CurrentLeader, HighlightSet,
    QuarterWinners, WinnerHighlights, WinnersSnapshot,
};
use crate::error::{ApiError, Result};
use crate::models::{
    Axis, BoardData, CoordinateKey, CurrentLabel, LiveGameData, QuarterLabel, Side,
};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Deserialize)]
pub struct WinnersRequest {
    pub schema_version: u8,
    pub board: BoardData,
    #[serde(default)]
    pub live: Option<LiveGameData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinnersResponse {
    pub schema_version: u8,
    pub quarter_winners: QuarterWinners,
    pub current_label: CurrentLabel,
    pub current_leader: Option<CurrentLeader>,
    pub snapshot: WinnersSnapshot,
    pub highlights: HighlightSet,
}

impl WinnersResponse {
    pub fn compute(board: &BoardData, live: Option<&LiveGameData>) -> Self {
        let WinnerHighlights { quarter_winners, current_label } = WinnerHighlights::compute(live);
        Self {
            schema_version: SCHEMA_VERSION,
            quarter_winners,
            current_label,
            current_leader: compute_current_leader(live, board),
            snapshot: WinnersSnapshot::build(board, live),
            highlights: HighlightSet::compute(board, live),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AxisRequest {
    pub schema_version: u8,
    pub board: BoardData,
    pub side: Side,
    #[serde(default)]
    pub quarter: Option<QuarterLabel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisResponse {
    pub schema_version: u8,
    pub side: Side,
    pub quarter: Option<QuarterLabel>,
    pub axis: Axis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnersRequest {
    pub schema_version: u8,
    pub board: BoardData,
    pub quarter: QuarterLabel,
    pub coordinate_key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnersResponse {
    pub schema_version: u8,
    pub quarter: QuarterLabel,
    pub coordinate_key: CoordinateKey,
    #[serde(with = "crate::engine::leader::sentinel_index")]
    pub cell_index: Option<usize>,
    pub owners: Vec<String>,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(ApiError::UnsupportedSchema { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Full winner computation for one board and one live snapshot.
pub fn compute_winners_json(request_json: &str) -> Result<String> {
    let request: WinnersRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let response = WinnersResponse::compute(&request.board, request.live.as_ref());
    debug!(
        decided = response.quarter_winners.len(),
        highlighted = response.highlights.len(),
        "winners computed"
    );
    Ok(serde_json::to_string(&response)?)
}

pub fn resolve_axis_json(request_json: &str) -> Result<String> {
    let request: AxisRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let axis = *resolve_axis(&request.board, request.side, request.quarter);
    let response = AxisResponse {
        schema_version: SCHEMA_VERSION,
        side: request.side,
        quarter: request.quarter,
        axis,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Owners of a coordinate key under one quarter's axes.
pub fn resolve_owners_json(request_json: &str) -> Result<String> {
    let request: OwnersRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let coordinate_key: CoordinateKey = request.coordinate_key.parse()?;
    let owners = resolve_owners(&request.board, request.quarter, coordinate_key);
    let response = OwnersResponse {
        schema_version: SCHEMA_VERSION,
        quarter: request.quarter,
        coordinate_key,
        cell_index: owners.cell_index,
        owners: owners.names.to_vec(),
    };
    Ok(serde_json::to_string(&response)?)
}
