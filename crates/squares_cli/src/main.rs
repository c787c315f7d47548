//! Squares CLI
//!
//! Board + live score JSON → quarter winners, live leader, axes, grid

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "squares")]
#[command(about = "Resolve football squares winners from a board and a live score", long_about = None)]
struct Cli {
    /// Report config JSON (falls back to $SQUARES_REPORT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Left,
    Top,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum QuarterArg {
    #[value(name = "Q1", alias = "q1")]
    Q1,
    #[value(name = "Q2", alias = "q2")]
    Q2,
    #[value(name = "Q3", alias = "q3")]
    Q3,
    #[value(name = "Q4", alias = "q4")]
    Q4,
    #[value(name = "Final", alias = "final")]
    Final,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Decided quarter winners plus the live leader
    Winners {
        /// Board JSON file
        #[arg(long)]
        board: PathBuf,

        /// Live score JSON file
        #[arg(long)]
        live: Option<PathBuf>,

        /// Print a JSON report instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Square currently in the lead
    Leader {
        #[arg(long)]
        board: PathBuf,

        #[arg(long)]
        live: PathBuf,
    },

    /// Axis in effect for a side and quarter
    Axis {
        #[arg(long)]
        board: PathBuf,

        #[arg(long, value_enum)]
        side: SideArg,

        #[arg(long, value_enum)]
        quarter: Option<QuarterArg>,
    },

    /// ASCII grid with highlighted squares
    Grid {
        #[arg(long)]
        board: PathBuf,

        #[arg(long)]
        live: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
impl From<SideArg> for squares_core::Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => squares_core::Side::Left,
            SideArg::Top => squares_core::Side::Top,
        }
    }
}

#[cfg(feature = "cli")]
impl From<QuarterArg> for squares_core::QuarterLabel {
    fn from(quarter: QuarterArg) -> Self {
        match quarter {
            QuarterArg::Q1 => squares_core::QuarterLabel::Q1,
            QuarterArg::Q2 => squares_core::QuarterLabel::Q2,
            QuarterArg::Q3 => squares_core::QuarterLabel::Q3,
            QuarterArg::Q4 => squares_core::QuarterLabel::Q4,
            QuarterArg::Final => squares_core::QuarterLabel::Final,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use squares_cli::{
        build_report, load_board, load_live, render_axis, render_grid, render_leader,
        render_winners_text, to_json, ReportConfig, DEFAULT_LOG_FILTER,
    };
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ReportConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Winners { board, live, json } => {
            let board = load_board(&board)?;
            let live = live.as_deref().map(load_live).transpose()?;
            let report = build_report(&board, live.as_ref());

            if json {
                println!("{}", to_json(&report, &config)?);
            } else if report.snapshot.entries.is_empty() && report.snapshot.current_leader.is_none() {
                println!("No winners yet");
            } else {
                print!("{}", render_winners_text(&report, &config));
            }
        }

        Commands::Leader { board, live } => {
            let board = load_board(&board)?;
            let live = load_live(&live)?;
            if let Some(leader) = squares_core::compute_current_leader(Some(&live), &board) {
                println!("{}", render_leader(&leader, squares_core::current_label(&live), &config));
            }
        }

        Commands::Axis { board, side, quarter } => {
            let board = load_board(&board)?;
            let axis = squares_core::resolve_axis(&board, side.into(), quarter.map(Into::into));
            println!("{}", render_axis(axis, &config));
        }

        Commands::Grid { board, live } => {
            let board = load_board(&board)?;
            let live = live.as_deref().map(load_live).transpose()?;
            print!("{}", render_grid(&board, live.as_ref(), &config));
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("squares CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
