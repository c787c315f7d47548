//! Quarter winner determination
//!
//! A quarter is decided once play has moved past it (or the game is over).
//! Its key comes from the cumulative score through that quarter, summed from
//! the per-quarter increments. The `Final` key comes straight from the
//! authoritative final totals, so overtime increments never feed any key on
//! their own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::models::{CoordinateKey, CurrentLabel, LiveGameData, QuarterLabel};

const SUMMED_QUARTERS: [QuarterLabel; 3] = [QuarterLabel::Q1, QuarterLabel::Q2, QuarterLabel::Q3];

/// Decided quarter labels and their winning coordinate keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuarterWinners(BTreeMap<QuarterLabel, CoordinateKey>);

impl QuarterWinners {
    pub fn get(&self, label: QuarterLabel) -> Option<CoordinateKey> {
        self.0.get(&label).copied()
    }

    pub fn contains(&self, label: QuarterLabel) -> bool {
        self.0.contains_key(&label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in display order (Q1, Q2, Q3, Final).
    pub fn iter(&self) -> impl Iterator<Item = (QuarterLabel, CoordinateKey)> + '_ {
        self.0.iter().map(|(label, key)| (*label, *key))
    }
}

pub fn compute_quarter_winners(live: Option<&LiveGameData>) -> QuarterWinners {
    let Some(live) = live else {
        return QuarterWinners::default();
    };
    if live.is_manual {
        return QuarterWinners::default();
    }
    if live.is_final() && !live.is_consistent() {
        warn!(
            left = live.left_score,
            top = live.top_score,
            "final totals disagree with per-quarter scores"
        );
    }

    let mut winners = BTreeMap::new();
    for (index, label) in SUMMED_QUARTERS.iter().enumerate() {
        let concluded = usize::from(live.period) > index + 1 || live.is_final();
        if !concluded {
            continue;
        }
        let through = live.cumulative_through(index);
        winners.insert(*label, CoordinateKey::from_totals(through.top, through.left));
    }

    if live.is_final() {
        winners.insert(QuarterLabel::Final, CoordinateKey::from_scores(live.top_score, live.left_score));
    }

    debug!(decided = winners.len(), period = live.period, "quarter winners computed");
    QuarterWinners(winners)
}

pub fn current_label(live: &LiveGameData) -> CurrentLabel {
    if live.is_final() {
        CurrentLabel::Final
    } else {
        CurrentLabel::Now
    }
}

/// Derived per refresh; never cached between score updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerHighlights {
    pub quarter_winners: QuarterWinners,
    pub current_label: CurrentLabel,
}

impl WinnerHighlights {
    pub fn compute(live: Option<&LiveGameData>) -> Self {
        Self {
            quarter_winners: compute_quarter_winners(live),
            current_label: live.map(current_label).unwrap_or(CurrentLabel::Now),
        }
    }
}
