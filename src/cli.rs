use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shift-roster")]
#[command(about = "Turn a volunteer shift signup grid into a per-person roster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a fresh roster from a signup grid
    Generate {
        /// Signup grid (.csv / .xlsx / .xlsm / .xls / .ods)
        grid: PathBuf,

        /// Output roster (.csv / .xlsx)
        output: PathBuf,

        /// Layout config JSON (default: config setting, then ./config.json)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Worksheet of the grid to read (default: first)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Re-scan the grid and merge it into an existing roster
    Update {
        /// Signup grid (.csv / .xlsx / .xlsm / .xls / .ods)
        grid: PathBuf,

        /// Output roster (.csv / .xlsx); may be the same file as --existing
        output: PathBuf,

        /// Previously exported roster
        #[arg(short, long)]
        existing: PathBuf,

        /// Worksheet of the existing roster (default: rightmost)
        #[arg(long)]
        existing_sheet: Option<String>,

        /// Layout config JSON (default: config setting, then ./config.json)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Worksheet of the grid to read (default: first)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Drop people without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Extract one day's shifts from a roster
    Daily {
        /// Roster to filter (.csv / .xlsx)
        roster: PathBuf,

        /// Output roster (.csv / .xlsx)
        output: PathBuf,

        /// Date text to match, e.g. "11/08"
        #[arg(short, long)]
        date: String,

        /// Worksheet of the roster (default: rightmost)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Show or change settings
    Config {
        /// Print the current settings
        #[arg(long)]
        show: bool,

        /// Set the default layout config file
        #[arg(long)]
        set_layout: Option<PathBuf>,
    },
}
