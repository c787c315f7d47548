use serde::{Deserialize, Serialize};
use std::fmt;

/// Regulation quarter that can own a dedicated axis pair on dynamic boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

/// Label used when asking "which quarter" for axis resolution and reporting.
///
/// `Final` shares Q4's axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuarterLabel {
    Q1,
    Q2,
    Q3,
    Q4,
    Final,
}

impl QuarterLabel {
    pub fn axis_quarter(self) -> Quarter {
        match self {
            QuarterLabel::Q1 => Quarter::Q1,
            QuarterLabel::Q2 => Quarter::Q2,
            QuarterLabel::Q3 => Quarter::Q3,
            QuarterLabel::Q4 | QuarterLabel::Final => Quarter::Q4,
        }
    }

    /// Quarter in play for a live period number. Overtime periods stay on Q4.
    pub fn from_period(period: u8) -> Self {
        match period {
            0 | 1 => QuarterLabel::Q1,
            2 => QuarterLabel::Q2,
            3 => QuarterLabel::Q3,
            _ => QuarterLabel::Q4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuarterLabel::Q1 => "Q1",
            QuarterLabel::Q2 => "Q2",
            QuarterLabel::Q3 => "Q3",
            QuarterLabel::Q4 => "Q4",
            QuarterLabel::Final => "Final",
        }
    }
}

impl fmt::Display for QuarterLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Semantic state of the live winning coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrentLabel {
    #[serde(rename = "NOW")]
    Now,
    #[serde(rename = "FINAL")]
    Final,
}

impl fmt::Display for CurrentLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurrentLabel::Now => f.pad("NOW"),
            CurrentLabel::Final => f.pad("FINAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_maps_to_q4() {
        assert_eq!(QuarterLabel::Final.axis_quarter(), Quarter::Q4);
        assert_eq!(QuarterLabel::Q4.axis_quarter(), Quarter::Q4);
        assert_eq!(QuarterLabel::Q2.axis_quarter(), Quarter::Q2);
    }

    #[test]
    fn test_from_period() {
        assert_eq!(QuarterLabel::from_period(0), QuarterLabel::Q1);
        assert_eq!(QuarterLabel::from_period(1), QuarterLabel::Q1);
        assert_eq!(QuarterLabel::from_period(3), QuarterLabel::Q3);
        assert_eq!(QuarterLabel::from_period(4), QuarterLabel::Q4);
        assert_eq!(QuarterLabel::from_period(6), QuarterLabel::Q4);
    }

    #[test]
    fn test_current_label_wire_names() {
        assert_eq!(serde_json::to_string(&CurrentLabel::Now).unwrap(), "\"NOW\"");
        assert_eq!(serde_json::to_string(&CurrentLabel::Final).unwrap(), "\"FINAL\"");
    }
}
