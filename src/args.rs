use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
pub struct Args {
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    pub key: String,
    #[arg(long)]
    pub proxy: Option<String>,
    #[arg(long, default_value_t = 3)]
    pub max_retries: usize,
    #[arg(long, default_value_t = 500)]
    pub retry_delay_ms: u64,
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    #[arg(long, default_value_t = 5)]
    pub max_games: usize,
    #[arg(long = "lobby-type")]
    pub lobby_types: Vec<i32>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Recent matches of a player
    Recent { player: String },
    /// Most played heroes of a player
    Heroes {
        player: String,
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
    /// Stats of everyone in the last lobby found in the client log
    Lobby {
        log_file: PathBuf,
        #[arg(short, default_value_t = 3)]
        n: usize,
    },
}
