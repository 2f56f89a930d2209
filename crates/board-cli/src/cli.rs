use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "board")]
#[command(about = "Task board client: show a project board or move a task")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Bearer token (overrides api.token from config)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
