use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "my_logger")]
#[command(about = "Manage captured exception logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file. Persists as the default for all
    /// future invocations.
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show log counts per project
    Status,

    /// Export logs for a project or an explicit set of log IDs
    Export {
        /// Folder to export logs to. Defaults to the current directory.
        #[arg(long)]
        folder_path: Option<PathBuf>,

        /// Project name
        #[arg(long = "project_name")]
        project_name: Option<String>,

        /// Specific log entry IDs to export
        #[arg(long, num_args = 1..)]
        ids: Option<Vec<i64>>,
    },

    /// Link a remediation commit or note to a log ID
    Resolve {
        /// Log entry ID
        #[arg(long)]
        id: i64,

        /// Commit hash/message
        #[arg(long)]
        commit: Option<String>,

        /// How the bug was solved; useful when no commit is available
        #[arg(long)]
        info: Option<String>,
    },
}
