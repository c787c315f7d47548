//! Live score snapshot handed over by the score poller

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Bucket for incremental per-period scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreBucket {
    Q1,
    Q2,
    Q3,
    Q4,
    OT,
}

impl ScoreBucket {
    pub const REGULATION: [ScoreBucket; 4] =
        [ScoreBucket::Q1, ScoreBucket::Q2, ScoreBucket::Q3, ScoreBucket::Q4];
}

/// Points scored within a single period (not cumulative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuarterScore {
    #[serde(default)]
    pub left: u32,
    #[serde(default)]
    pub top: u32,
}

impl QuarterScore {
    pub fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    #[default]
    #[serde(alias = "pre")]
    PreGame,
    #[serde(alias = "in")]
    InProgress,
    #[serde(alias = "post")]
    Final,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGameData {
    pub left_score: u32,
    pub top_score: u32,
    #[serde(default)]
    pub quarter_scores: BTreeMap<ScoreBucket, QuarterScore>,
    #[serde(default, deserialize_with = "clamped_period")]
    pub period: u8,
    #[serde(default)]
    pub state: GameState,
    #[serde(default)]
    pub is_manual: bool,
}

impl LiveGameData {
    pub fn is_final(&self) -> bool {
        self.state == GameState::Final
    }

    pub fn quarter_score(&self, bucket: ScoreBucket) -> QuarterScore {
        self.quarter_scores.get(&bucket).copied().unwrap_or_default()
    }

    /// Cumulative (left, top) through regulation quarter index `quarter`
    /// (0 = Q1). Missing buckets count as zero; OT is never included.
    pub fn cumulative_through(&self, quarter: usize) -> CumulativeScore {
        ScoreBucket::REGULATION
            .iter()
            .take(quarter + 1)
            .map(|bucket| self.quarter_score(*bucket))
            .fold(CumulativeScore::default(), CumulativeScore::add)
    }

    /// Whether the cumulative totals agree with the sum of every bucket.
    pub fn is_consistent(&self) -> bool {
        let total = self
            .quarter_scores
            .values()
            .copied()
            .fold(CumulativeScore::default(), CumulativeScore::add);
        total.left == u64::from(self.left_score) && total.top == u64::from(self.top_score)
    }
}

/// Running total of per-quarter increments, wide enough that summing
/// any number of `u32` buckets cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CumulativeScore {
    pub left: u64,
    pub top: u64,
}

impl CumulativeScore {
    pub fn new(left: u64, top: u64) -> Self {
        Self { left, top }
    }

    fn add(self, quarter: QuarterScore) -> Self {
        Self {
            left: self.left.saturating_add(u64::from(quarter.left)),
            top: self.top.saturating_add(u64::from(quarter.top)),
        }
    }
}

/// Clamps any integer period into `u8`; negatives read as pre-game 0.
fn clamped_period<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, i64::from(u8::MAX)) as u8)
}
