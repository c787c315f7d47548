//! Winners snapshot for the organizer dashboard
//!
//! Every decided quarter is resolved against the axes of that quarter, so a
//! dynamic board can report four different cells side by side.

use serde::{Deserialize, Serialize};

use super::leader::{compute_current_leader, resolve_owners, sentinel_index, CurrentLeader};
use super::winners::WinnerHighlights;
use crate::models::{BoardData, CoordinateKey, CurrentLabel, LiveGameData, QuarterLabel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterWinnerEntry {
    pub label: QuarterLabel,
    pub coordinate_key: CoordinateKey,
    #[serde(with = "sentinel_index")]
    pub cell_index: Option<usize>,
    pub owners: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnersSnapshot {
    pub entries: Vec<QuarterWinnerEntry>,
    pub current_label: CurrentLabel,
    pub current_leader: Option<CurrentLeader>,
}

impl WinnersSnapshot {
    pub fn build(board: &BoardData, live: Option<&LiveGameData>) -> Self {
        let highlights = WinnerHighlights::compute(live);

        let entries = highlights
            .quarter_winners
            .iter()
            .map(|(label, key)| {
                let owners = resolve_owners(board, label, key);
                QuarterWinnerEntry {
                    label,
                    coordinate_key: key,
                    cell_index: owners.cell_index,
                    owners: owners.names.to_vec(),
                }
            })
            .collect();

        Self {
            entries,
            current_label: highlights.current_label,
            current_leader: compute_current_leader(live, board),
        }
    }

    pub fn entry(&self, label: QuarterLabel) -> Option<&QuarterWinnerEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }
}
