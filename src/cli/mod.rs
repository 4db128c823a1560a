//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::OutputFormat;

use crate::{analysis::EntityKind, view::ViewKind};

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Analysis API base URL (or set `INJURY_DASH_API_URL`).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Output format.
    #[clap(long, short, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered output to this file instead of stdout.
    #[clap(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Log requests and state changes to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum CompareCmd {
    /// Compare the injury statistics of two teams
    Teams {
        /// First team
        team1: String,
        /// Second team
        team2: String,
    },

    /// Compare the injury statistics of two players
    Players {
        /// First player
        player1: String,
        /// Second player
        player2: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the teams available for selection
    Teams,

    /// List the players available for selection
    Players,

    /// All injuries with summary statistics
    Overview,

    /// Injuries and statistics for one team
    Team {
        /// Team name as offered by `teams`
        #[clap(default_value = "")]
        name: String,
    },

    /// Injuries and statistics for one player
    Player {
        /// Player name as offered by `players`
        #[clap(default_value = "")]
        name: String,
    },

    /// Side-by-side statistics for two teams or two players
    Compare {
        #[clap(subcommand)]
        cmd: CompareCmd,
    },

    /// Render the whole dashboard page with the overview loaded
    Dashboard {
        /// Tab shown as active.
        #[clap(long, default_value = "overview")]
        tab: ViewKind,

        /// Which comparison form is visible (teams | players).
        #[clap(long, default_value = "teams")]
        compare_type: EntityKind,

        /// Also load this team into the team tab.
        #[clap(long)]
        team: Option<String>,

        /// Also load this player into the player tab.
        #[clap(long)]
        player: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "injury-dash", about = "Bundesliga injury statistics dashboard client")]
pub struct Cli {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}
