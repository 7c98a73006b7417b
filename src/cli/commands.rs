//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tinybeans")]
#[command(about = "Command-line client for Tinybeans family journals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file with credentials (default: ./tinybeans.toml)
    #[arg(short, long, env = "TINYBEANS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List followed journals
    Followings,

    /// List children across all followed journals
    Children,

    /// List every entry of a child's journal
    Entries {
        /// Child id (see 'tinybeans children')
        child_id: i64,

        /// Only entries at or before this epoch-millisecond timestamp
        #[arg(long)]
        last: Option<i64>,
    },

    /// Request an export of a journal's entries
    Export {
        /// Journal id (see 'tinybeans followings')
        journal_id: i64,

        /// First day of the range (YYYY-MM-DD)
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: NaiveDate,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(long, value_name = "YYYY-MM-DD")]
        to: NaiveDate,
    },
}
