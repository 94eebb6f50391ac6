use std::path::PathBuf;

use clap::Parser;

/// Interactive employee record manager
///
/// Roster opens a menu for creating, listing, updating, deleting and
/// searching employee records stored in a local SQLite database. Every
/// setting can also be given through an environment variable or a JSON
/// config file; flags take precedence over both.
#[derive(Parser)]
#[command(version, about, name = "roster")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roster/roster.db
    #[arg(long, env = "ROSTER_DATABASE")]
    pub database_file: Option<PathBuf>,

    /// Path to the append-only event log. Defaults to
    /// $XDG_DATA_HOME/roster/roster.log
    #[arg(long, env = "ROSTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Number of employees shown per page when reading (default 5)
    #[arg(long, env = "ROSTER_PAGE_SIZE")]
    pub page_size: Option<usize>,

    /// JSON config file. Defaults to $XDG_CONFIG_HOME/roster/config.json when
    /// it exists
    #[arg(long, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
