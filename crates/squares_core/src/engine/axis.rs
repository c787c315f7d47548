//! Axis resolution
//!
//! Static boards use one axis pair for the whole game. Dynamic boards draw a
//! fresh pair per quarter; a quarter that has not been drawn falls back to
//! the static pair.

use tracing::trace;

use crate::models::{Axis, BoardData, QuarterLabel, Side};

/// Axis in effect for `side` during `quarter`.
pub fn resolve_axis(board: &BoardData, side: Side, quarter: Option<QuarterLabel>) -> &Axis {
    let Some(label) = quarter.filter(|_| board.is_dynamic) else {
        return board.static_axis(side);
    };

    match board.quarter_axis(side, label.axis_quarter()) {
        Some(axis) => axis,
        None => {
            trace!(?side, %label, "no per-quarter axis, using static axis");
            board.static_axis(side)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quarter;

    fn reversed() -> Axis {
        Axis::from_values([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap()
    }

    fn shifted() -> Axis {
        Axis::from_values([5, 6, 7, 8, 9, 0, 1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn test_static_board_ignores_quarter() {
        let board = BoardData::new(Axis::identity(), reversed());
        assert_eq!(resolve_axis(&board, Side::Left, Some(QuarterLabel::Q3)), &Axis::identity());
        assert_eq!(resolve_axis(&board, Side::Top, None), &reversed());
    }

    #[test]
    fn test_static_board_ignores_stray_quarter_axes() {
        let mut board = BoardData::new(Axis::identity(), reversed())
            .with_quarter_axes(Quarter::Q2, shifted(), shifted());
        board.is_dynamic = false;
        assert_eq!(resolve_axis(&board, Side::Left, Some(QuarterLabel::Q2)), &Axis::identity());
    }

    #[test]
    fn test_dynamic_board_uses_quarter_axis() {
        let board = BoardData::new(Axis::identity(), reversed())
            .with_quarter_axes(Quarter::Q2, shifted(), Axis::identity())
            .with_quarter_axes(Quarter::Q4, reversed(), shifted());

        assert_eq!(resolve_axis(&board, Side::Left, Some(QuarterLabel::Q2)), &shifted());
        assert_eq!(resolve_axis(&board, Side::Top, Some(QuarterLabel::Q2)), &Axis::identity());
        assert_eq!(resolve_axis(&board, Side::Top, Some(QuarterLabel::Final)), &shifted());
        assert_eq!(resolve_axis(&board, Side::Top, Some(QuarterLabel::Q4)), &shifted());
    }

    #[test]
    fn test_dynamic_board_falls_back_when_quarter_missing() {
        let board = BoardData::new(Axis::identity(), reversed())
            .with_quarter_axes(Quarter::Q2, shifted(), shifted());

        assert_eq!(resolve_axis(&board, Side::Left, Some(QuarterLabel::Q1)), &Axis::identity());
        assert_eq!(resolve_axis(&board, Side::Top, Some(QuarterLabel::Final)), &reversed());
        assert_eq!(resolve_axis(&board, Side::Left, None), &Axis::identity());
    }
}
