//! Cell highlight set for grid rendering

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::leader::{compute_current_leader, resolve_owners};
use super::winners::{compute_quarter_winners, current_label};
use crate::models::{BoardData, CurrentLabel, LiveGameData, QuarterLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HighlightTag {
    Quarter(QuarterLabel),
    Current(CurrentLabel),
}

/// Resolvable cell index -> tags landing on that cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightSet(BTreeMap<usize, Vec<HighlightTag>>);

impl HighlightSet {
    pub fn compute(board: &BoardData, live: Option<&LiveGameData>) -> Self {
        let mut cells: BTreeMap<usize, Vec<HighlightTag>> = BTreeMap::new();

        for (label, key) in compute_quarter_winners(live).iter() {
            if let Some(index) = resolve_owners(board, label, key).cell_index {
                cells.entry(index).or_default().push(HighlightTag::Quarter(label));
            }
        }

        if let (Some(live), Some(leader)) = (live, compute_current_leader(live, board)) {
            if let Some(index) = leader.cell_index {
                cells.entry(index).or_default().push(HighlightTag::Current(current_label(live)));
            }
        }

        Self(cells)
    }

    pub fn tags(&self, index: usize) -> &[HighlightTag] {
        self.0.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
