mod args;
mod classify;
mod client;
mod config;
mod dota2;
mod error;
mod fetcher;
mod hero_stats;
mod lobby;

use args::{Args, Command};
use clap::Parser;
use client::{HttpTransport, Transport};
use config::Config;
use dota2::{Player, UserGameInfo, UserHeroPerformance};
use error::ApiError;
use fetcher::Fetcher;
use itertools::Itertools;

fn print_games(player: &Player, games: Result<Vec<UserGameInfo>, ApiError>) {
    match games {
        Ok(games) if games.is_empty() => println!("  no recent games"),
        Ok(games) => games.iter().for_each(|game| println!("  {}", game)),
        Err(err) => {
            log::warn!("recent games of {} unavailable: {}", player, err);
            println!("  recent games unavailable: {}", err);
        }
    }
}

fn print_heroes(player: &Player, heroes: Result<Vec<UserHeroPerformance>, ApiError>) {
    match heroes {
        Ok(heroes) => heroes.iter().for_each(|hero| println!("  {}", hero)),
        Err(err) => {
            log::warn!("hero statistics of {} unavailable: {}", player, err);
            println!("  hero statistics unavailable: {}", err);
        }
    }
}

async fn show_player<T: Transport + 'static>(fetcher: &Fetcher<T>, player: &Player, n: usize) {
    // the statistics page is independent from the web API, ask both at once
    let (games, heroes) = tokio::join!(
        fetcher.fetch_recent_games(player),
        fetcher.fetch_most_played_heroes(player, n)
    );
    println!("{}", player);
    print_games(player, games);
    print_heroes(player, heroes);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from(&args);
    let transport = HttpTransport::new(config.timeout, args.proxy.as_deref())?;
    let fetcher = Fetcher::new(transport, config);

    match args.command {
        Command::Recent { player } => {
            let games = fetcher.fetch_recent_games(&Player::new(player)).await?;
            games.iter().for_each(|game| println!("{}", game));
        }
        Command::Heroes { player, n } => {
            let heroes = fetcher
                .fetch_most_played_heroes(&Player::new(player), n)
                .await?;
            heroes.iter().for_each(|hero| println!("{}", hero));
        }
        Command::Lobby { log_file, n } => {
            let players = lobby::extract_lobby_players(&log_file)
                .ok_or_else(|| anyhow::anyhow!("no lobby found in {}", log_file.display()))?;
            log::info!("lobby players: {}", players.iter().join(", "));
            // a private profile only hides that one player
            for player in players.into_iter().map(Player::new) {
                show_player(&fetcher, &player, n).await;
            }
        }
    }

    Ok(())
}
