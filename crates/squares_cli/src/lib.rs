//! Squares CLI Library
//!
//! Board/live JSON files in, winner reports and ASCII grids out.

pub mod config;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use squares_core::engine::effective_quarter;
use squares_core::models::GRID_SIZE;
use squares_core::{
    resolve_axis, Axis, BoardData, CurrentLeader, HighlightSet, LiveGameData, QuarterLabel, Side,
    WinnersSnapshot,
};

pub use config::{ReportConfig, MIN_CELL_WIDTH, REPORT_CONFIG_PATH_ENV};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "squares_cli=info,squares_core=info";

/// Winners report as written by the `winners` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnersReport {
    /// RFC3339 timestamp
    pub generated_at: String,
    pub snapshot: WinnersSnapshot,
    pub highlights: HighlightSet,
}

pub fn load_board(path: &Path) -> Result<BoardData> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file: {}", path.display()))?;
    let board: BoardData = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse board JSON: {}", path.display()))?;
    debug!(
        filled = board.squares.filled_count(),
        dynamic = board.is_dynamic,
        "board loaded"
    );
    Ok(board)
}

pub fn load_live(path: &Path) -> Result<LiveGameData> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read live score file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse live score JSON: {}", path.display()))
}

pub fn build_report(board: &BoardData, live: Option<&LiveGameData>) -> WinnersReport {
    let snapshot = WinnersSnapshot::build(board, live);
    info!(decided = snapshot.entries.len(), label = %snapshot.current_label, "winners report built");
    WinnersReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        snapshot,
        highlights: HighlightSet::compute(board, live),
    }
}

pub fn to_json<T: Serialize>(value: &T, config: &ReportConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn format_owners(names: &[String], config: &ReportConfig) -> String {
    if names.is_empty() {
        config.empty_cell.clone()
    } else {
        names.join(&config.owner_separator)
    }
}

fn format_cell_index(index: Option<usize>) -> String {
    match index {
        Some(index) => format!("row {}, col {}", index / GRID_SIZE, index % GRID_SIZE),
        None => "unresolved".to_string(),
    }
}

/// Plain-text winners list, one line per decided quarter plus the live leader.
pub fn render_winners_text(report: &WinnersReport, config: &ReportConfig) -> String {
    let mut out = String::new();
    for entry in &report.snapshot.entries {
        let _ = writeln!(
            out,
            "{:<6} {}  {:<16} {}",
            entry.label,
            entry.coordinate_key,
            format_cell_index(entry.cell_index),
            format_owners(&entry.owners, config)
        );
    }
    if let Some(leader) = &report.snapshot.current_leader {
        let _ = writeln!(out, "{}", render_leader(leader, report.snapshot.current_label, config));
    }
    out
}

pub fn render_leader(
    leader: &CurrentLeader,
    label: squares_core::CurrentLabel,
    config: &ReportConfig,
) -> String {
    format!(
        "{:<6} {}  {:<16} {}",
        label,
        leader.coordinate_key,
        format_cell_index(leader.cell_index),
        format_owners(&leader.player_names, config)
    )
}

pub fn render_axis(axis: &Axis, config: &ReportConfig) -> String {
    axis.slots()
        .iter()
        .map(|slot| match slot {
            Some(digit) => digit.to_string(),
            None => config.empty_cell.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn fit(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    let used = cell.chars().count();
    cell.extend(std::iter::repeat(' ').take(width - used));
    cell
}

/// ASCII grid with the axes in effect for the live quarter.
///
/// Highlighted squares are prefixed with `*`.
pub fn render_grid(board: &BoardData, live: Option<&LiveGameData>, config: &ReportConfig) -> String {
    let quarter: Option<QuarterLabel> = live.map(effective_quarter);
    let top = resolve_axis(board, Side::Top, quarter);
    let left = resolve_axis(board, Side::Left, quarter);
    let highlights = HighlightSet::compute(board, live);
    let width = config.cell_width.max(MIN_CELL_WIDTH);

    let digit_or_empty = |slot: Option<squares_core::Digit>| match slot {
        Some(digit) => digit.to_string(),
        None => config.empty_cell.clone(),
    };

    let mut out = String::new();
    if let Some(label) = quarter {
        let _ = writeln!(out, "axes: {label}");
    }
    let _ = write!(out, "{}", fit("", 3));
    for col in 0..GRID_SIZE {
        let _ = write!(out, "|{}", fit(&digit_or_empty(top.get(col)), width));
    }
    out.push('\n');

    for row in 0..GRID_SIZE {
        let _ = write!(out, "{}", fit(&digit_or_empty(left.get(row)), 3));
        for col in 0..GRID_SIZE {
            let index = squares_core::models::cell_index(row, col);
            let owners = format_owners(board.squares.cell(index), config);
            let marker = if highlights.is_highlighted(index) { "*" } else { " " };
            let _ = write!(out, "|{}{}", marker, fit(&owners, width - 1));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use squares_core::models::{GameState, QuarterScore, ScoreBucket, Squares};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture_board() -> BoardData {
        let mut squares = Squares::default();
        squares.assign(7, 5, ["Alice"]).unwrap();
        squares.assign(3, 2, ["Bob", "Carol"]).unwrap();
        BoardData::new(
            Axis::identity(),
            Axis::from_values([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap(),
        )
        .with_squares(squares)
    }

    fn fixture_live() -> LiveGameData {
        let mut live = LiveGameData {
            left_score: 17,
            top_score: 24,
            period: 4,
            state: GameState::Final,
            ..Default::default()
        };
        live.quarter_scores.insert(ScoreBucket::Q1, QuarterScore::new(3, 7));
        live.quarter_scores.insert(ScoreBucket::Q2, QuarterScore::new(7, 10));
        live.quarter_scores.insert(ScoreBucket::Q3, QuarterScore::new(0, 3));
        live.quarter_scores.insert(ScoreBucket::Q4, QuarterScore::new(7, 4));
        live
    }

    #[test]
    fn test_load_board_and_live_files() -> Result<()> {
        let mut board_file = NamedTempFile::new()?;
        board_file.write_all(serde_json::to_string(&fixture_board())?.as_bytes())?;
        let mut live_file = NamedTempFile::new()?;
        live_file.write_all(serde_json::to_string(&fixture_live())?.as_bytes())?;

        let board = load_board(board_file.path())?;
        let live = load_live(live_file.path())?;
        assert_eq!(board, fixture_board());
        assert_eq!(live, fixture_live());
        Ok(())
    }

    #[test]
    fn test_load_board_reports_path() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(br#"{ "leftAxis": [] }"#)?;
        let err = load_board(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse board JSON"));
        Ok(())
    }

    #[test]
    fn test_report_text() {
        let live = fixture_live();
        let report = build_report(&fixture_board(), Some(&live));
        let text = render_winners_text(&report, &ReportConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Q1     7-3"));
        assert!(lines[0].ends_with("Bob / Carol"));
        assert!(lines[3].starts_with("Final  4-7"));
        assert!(lines[3].ends_with("Alice"));
        assert!(lines[4].starts_with("FINAL  4-7"));
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }

    #[test]
    fn test_render_axis_marks_unset() {
        let mut axis = Axis::identity();
        axis.set(0, None);
        assert_eq!(render_axis(&axis, &ReportConfig::default()), ". 1 2 3 4 5 6 7 8 9");
    }

    #[test]
    fn test_render_grid_marks_winners() {
        let live = fixture_live();
        let grid = render_grid(&fixture_board(), Some(&live), &ReportConfig::default());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines[0], "axes: Final");
        assert_eq!(lines.len(), 12);
        // row 7 is left digit 7; Alice sits in column 5 and is highlighted
        assert!(lines[9].starts_with("7  "));
        assert!(lines[9].contains("|*Alice  "));
        assert!(lines[5].contains("|*Bob / C"));
    }

    #[test]
    fn test_render_grid_widens_tiny_cells() {
        let config = ReportConfig { cell_width: 0, ..Default::default() };
        let grid = render_grid(&fixture_board(), Some(&fixture_live()), &config);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[9].contains("|*Al|"));
    }

    #[test]
    fn test_default_log_filter_covers_both_crates() {
        let targets: Vec<&str> = DEFAULT_LOG_FILTER
            .split(',')
            .filter_map(|directive| directive.split_once('=').map(|(target, _)| target))
            .collect();
        assert_eq!(targets, ["squares_cli", "squares_core"]);
    }
}
