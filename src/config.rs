use std::time::Duration;

use crate::args::Args;

#[derive(Debug, Clone)]
pub struct Config {
    pub key: String,
    pub match_history_url: String,
    pub match_details_url: String,
    /// `{}` is replaced with the player id.
    pub hero_stats_url: String,
    /// Retries after the first attempt when throttled.
    pub max_retries: usize,
    pub retry_delay: Duration,
    pub timeout: Duration,
    pub lobby_types: Vec<i32>,
    pub max_games: usize,
}

impl Config {
    pub const URL_GET_MATCH_HISTORY: &str =
        "https://api.steampowered.com/IDOTA2Match_570/GetMatchHistory/v1";

    pub const URL_GET_MATCH_DETAILS: &str =
        "https://api.steampowered.com/IDOTA2Match_570/GetMatchDetails/v1";

    pub const URL_HERO_STATS: &str = "https://www.dotabuff.com/players/{}/heroes";

    // public matchmaking and ranked
    pub const DEFAULT_LOBBY_TYPES: [i32; 2] = [0, 7];

    pub fn hero_stats_url(&self, player: &str) -> String {
        self.hero_stats_url.replace("{}", player)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: String::new(),
            match_history_url: Self::URL_GET_MATCH_HISTORY.to_string(),
            match_details_url: Self::URL_GET_MATCH_DETAILS.to_string(),
            hero_stats_url: Self::URL_HERO_STATS.to_string(),
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            lobby_types: Self::DEFAULT_LOBBY_TYPES.to_vec(),
            max_games: 5,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let lobby_types = if args.lobby_types.is_empty() {
            Self::DEFAULT_LOBBY_TYPES.to_vec()
        } else {
            args.lobby_types.clone()
        };
        Self {
            key: args.key.clone(),
            max_retries: args.max_retries,
            retry_delay: Duration::from_millis(args.retry_delay_ms),
            timeout: Duration::from_secs(args.timeout_secs),
            lobby_types,
            max_games: args.max_games,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Config;
    use crate::args::Args;

    #[test]
    fn test_hero_stats_url() {
        let config = Config::default();
        assert_eq!(
            config.hero_stats_url("86745912"),
            "https://www.dotabuff.com/players/86745912/heroes"
        );
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from([
            "dota2-lobby-stats",
            "--key",
            "secret",
            "--max-retries",
            "5",
            "--lobby-type",
            "7",
            "recent",
            "86745912",
        ])
        .expect("Failed to parse args");
        let config = Config::from(&args);
        assert_eq!(config.key, "secret");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.lobby_types, vec![7]);
        assert_eq!(config.max_games, 5);
    }

    #[test]
    fn test_default_lobby_types() {
        let args = Args::try_parse_from(["dota2-lobby-stats", "--key", "k", "heroes", "1"])
            .expect("Failed to parse args");
        assert_eq!(Config::from(&args).lobby_types, vec![0, 7]);
    }
}
