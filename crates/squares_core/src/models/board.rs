//! Board layout: axes, squares and per-quarter axis tables
//!
//! Cells are stored row-major, so the cell at (row, col) lives at
//! `row * GRID_SIZE + col`. Rows run along the left axis, columns along the
//! top axis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::digit::Digit;
use super::quarter::Quarter;
use crate::error::BoardError;

pub const GRID_SIZE: usize = 10;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

#[inline]
pub fn cell_index(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

/// Which edge of the grid an axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
}

/// Ten digit slots labelling one edge of the grid.
///
/// A `None` slot has not been drawn yet and never matches a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Axis([Option<Digit>; GRID_SIZE]);

impl Axis {
    pub fn new(slots: [Option<Digit>; GRID_SIZE]) -> Self {
        Self(slots)
    }

    pub fn unset() -> Self {
        Self::default()
    }

    /// 0, 1, 2, ... 9
    pub fn identity() -> Self {
        let mut slots = [None; GRID_SIZE];
        for (slot, digit) in slots.iter_mut().zip(Digit::all()) {
            *slot = Some(digit);
        }
        Self(slots)
    }

    /// Build from raw values; fails on anything above 9.
    pub fn from_values(values: [u8; GRID_SIZE]) -> Result<Self, BoardError> {
        let mut slots = [None; GRID_SIZE];
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = Some(Digit::try_from(value)?);
        }
        Ok(Self(slots))
    }

    pub fn slots(&self) -> &[Option<Digit>; GRID_SIZE] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<Digit> {
        self.0.get(position).copied().flatten()
    }

    pub fn set(&mut self, position: usize, digit: Option<Digit>) {
        if let Some(slot) = self.0.get_mut(position) {
            *slot = digit;
        }
    }

    /// First physical position holding `digit`.
    pub fn position_of(&self, digit: Digit) -> Option<usize> {
        self.0.iter().position(|slot| *slot == Some(digit))
    }

    /// Every slot set and every digit 0-9 used exactly once.
    pub fn is_complete(&self) -> bool {
        let mut seen = [false; GRID_SIZE];
        for slot in &self.0 {
            match slot {
                Some(d) if !seen[d.value() as usize] => seen[d.value() as usize] = true,
                _ => return false,
            }
        }
        true
    }
}

/// Exactly one hundred cells, each holding zero or more player names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Vec<String>>>", into = "Vec<Vec<String>>")]
pub struct Squares(Vec<Vec<String>>);

impl Default for Squares {
    fn default() -> Self {
        Self(vec![Vec::new(); CELL_COUNT])
    }
}

impl Squares {
    pub fn cell(&self, index: usize) -> &[String] {
        self.0.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cell_at(&self, row: usize, col: usize) -> &[String] {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return &[];
        }
        self.cell(cell_index(row, col))
    }

    pub fn assign(
        &mut self,
        row: usize,
        col: usize,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::InvalidCell { row, col });
        }
        self.0[cell_index(row, col)] = names.into_iter().map(Into::into).collect();
        Ok(())
    }

    pub fn filled_count(&self) -> usize {
        self.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.0.iter().map(Vec::as_slice)
    }
}

impl TryFrom<Vec<Vec<String>>> for Squares {
    type Error = BoardError;

    fn try_from(cells: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT {
            return Err(BoardError::InvalidSquareCount { expected: CELL_COUNT, found: cells.len() });
        }
        Ok(Self(cells))
    }
}

impl TryFrom<Vec<Option<Vec<String>>>> for Squares {
    type Error = BoardError;

    fn try_from(cells: Vec<Option<Vec<String>>>) -> Result<Self, Self::Error> {
        Squares::try_from(cells.into_iter().map(Option::unwrap_or_default).collect::<Vec<_>>())
    }
}

impl From<Squares> for Vec<Vec<String>> {
    fn from(squares: Squares) -> Self {
        squares.0
    }
}

/// A 10x10 squares board as handed over by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    pub left_axis: Axis,
    pub top_axis: Axis,
    #[serde(default)]
    pub squares: Squares,
    #[serde(default)]
    pub is_dynamic: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub left_axis_by_quarter: BTreeMap<Quarter, Axis>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub top_axis_by_quarter: BTreeMap<Quarter, Axis>,
}

impl BoardData {
    /// Static board with empty squares.
    pub fn new(left_axis: Axis, top_axis: Axis) -> Self {
        Self {
            left_axis,
            top_axis,
            squares: Squares::default(),
            is_dynamic: false,
            left_axis_by_quarter: BTreeMap::new(),
            top_axis_by_quarter: BTreeMap::new(),
        }
    }

    /// Give `quarter` its own axis pair and mark the board dynamic.
    pub fn with_quarter_axes(mut self, quarter: Quarter, left: Axis, top: Axis) -> Self {
        self.is_dynamic = true;
        self.left_axis_by_quarter.insert(quarter, left);
        self.top_axis_by_quarter.insert(quarter, top);
        self
    }

    pub fn with_squares(mut self, squares: Squares) -> Self {
        self.squares = squares;
        self
    }

    pub fn static_axis(&self, side: Side) -> &Axis {
        match side {
            Side::Left => &self.left_axis,
            Side::Top => &self.top_axis,
        }
    }

    pub fn quarter_axis(&self, side: Side, quarter: Quarter) -> Option<&Axis> {
        match side {
            Side::Left => self.left_axis_by_quarter.get(&quarter),
            Side::Top => self.top_axis_by_quarter.get(&quarter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    #[test]
    fn test_axis_position_of_first_match() {
        let mut axis = Axis::identity();
        axis.set(8, Some(d(3)));
        assert_eq!(axis.position_of(d(3)), Some(3));
        assert_eq!(axis.position_of(d(8)), None);
    }

    #[test]
    fn test_unset_slots_never_match() {
        let axis = Axis::unset();
        assert!(Digit::all().all(|digit| axis.position_of(digit).is_none()));
        assert!(!axis.is_complete());
    }

    #[test]
    fn test_axis_completeness() {
        assert!(Axis::identity().is_complete());
        assert!(Axis::from_values([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap().is_complete());
        assert!(!Axis::from_values([0, 0, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap().is_complete());
        assert!(Axis::from_values([0, 1, 2, 3, 4, 5, 6, 7, 8, 10]).is_err());
    }

    #[test]
    fn test_squares_require_hundred_cells() {
        let err = Squares::try_from(vec![Vec::<String>::new(); 99]).unwrap_err();
        assert_eq!(err, BoardError::InvalidSquareCount { expected: 100, found: 99 });
    }

    #[test]
    fn test_squares_assign_and_lookup() {
        let mut squares = Squares::default();
        squares.assign(7, 5, ["Alice", "Bob"]).unwrap();
        assert_eq!(squares.cell(75), ["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(squares.cell_at(7, 5).len(), 2);
        assert_eq!(squares.filled_count(), 1);
        assert_eq!(squares.iter().position(|cell| !cell.is_empty()), Some(75));
        assert!(squares.assign(10, 0, ["X"]).is_err());
    }

    #[test]
    fn test_board_json_shape() {
        let mut cells = vec![serde_json::Value::Null; 100];
        cells[3] = serde_json::json!(["Dana"]);
        let json = serde_json::json!({
            "leftAxis": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
            "topAxis": [null, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            "squares": cells,
            "isDynamic": true,
            "leftAxisByQuarter": { "Q2": [9, 8, 7, 6, 5, 4, 3, 2, 1, 0] }
        });
        let board: BoardData = serde_json::from_value(json).unwrap();
        assert!(board.is_dynamic);
        assert_eq!(board.top_axis.get(0), None);
        assert_eq!(board.squares.cell(3), ["Dana".to_string()]);
        assert!(board.quarter_axis(Side::Left, Quarter::Q2).is_some());
        assert!(board.quarter_axis(Side::Top, Quarter::Q2).is_none());
    }

    #[test]
    fn test_board_json_rejects_short_axis() {
        let json = serde_json::json!({
            "leftAxis": [0, 1, 2],
            "topAxis": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        });
        assert!(serde_json::from_value::<BoardData>(json).is_err());
    }
}
