use std::sync::Arc;

use backon::{ExponentialBuilder, Retryable};
use futures::future::try_join_all;

use crate::{
    classify::{classify_details, classify_history},
    client::Transport,
    config::Config,
    dota2::{
        details::MatchDetails, heroes::hero_name_or_unknown, history::MatchSummary, Outcome,
        Player, Side, UserGameInfo, UserHeroPerformance,
    },
    error::ApiError,
    hero_stats::parse_hero_table,
};

pub struct Fetcher<T> {
    transport: Arc<T>,
    config: Arc<Config>,
}

// derive would require T: Clone
impl<T> Clone for Fetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: Transport + 'static> Fetcher<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }

    fn backoff(&self) -> ExponentialBuilder {
        let delay = self.config.retry_delay;
        ExponentialBuilder::default()
            .with_min_delay(delay)
            .with_max_delay(delay * 8)
            .with_max_times(self.config.max_retries)
            .with_jitter()
    }

    /// Outcome, hero and KDA of `player` in one match.
    ///
    /// A throttled request is sent again, up to `max_retries` more times,
    /// any other error is returned right away.
    pub async fn fetch_match_detail(
        &self,
        player: &Player,
        match_id: i64,
    ) -> Result<UserGameInfo, ApiError> {
        let attempt = move || self.request_match_detail(player, match_id);
        attempt
            .retry(self.backoff())
            .sleep(tokio::time::sleep)
            .when(ApiError::is_retryable)
            .notify(|err, delay| {
                log::warn!(
                    "match {}: {}, retrying in {}ms",
                    match_id,
                    err,
                    delay.as_millis()
                )
            })
            .await
    }

    async fn request_match_detail(
        &self,
        player: &Player,
        match_id: i64,
    ) -> Result<UserGameInfo, ApiError> {
        log::debug!("requesting details of match {}", match_id);
        let match_id_param = match_id.to_string();
        let body = self
            .transport
            .get(
                &self.config.match_details_url,
                &[
                    ("key", self.config.key.as_str()),
                    ("match_id", match_id_param.as_str()),
                ],
            )
            .await?;
        let result = classify_details(&body)?;
        let details: MatchDetails =
            serde_json::from_value(result).map_err(|err| ApiError::Parsing(err.to_string()))?;
        let (index, participant) = details.find_participant(player).ok_or_else(|| {
            ApiError::Parsing(format!(
                "player not found: {} in match {}",
                player, match_id
            ))
        })?;

        let side = Side::from_index(index);
        log::debug!("{} played {} in match {}", player, side, match_id);
        Ok(UserGameInfo {
            player: player.clone(),
            hero_name: hero_name_or_unknown(participant.hero_id),
            outcome: Outcome::new(details.radiant_win, side),
            kda: participant.kda(),
        })
    }

    /// Details of the latest relevant matches of `player`, newest first.
    ///
    /// Fails as a whole as soon as one match fails.
    pub async fn fetch_recent_games(
        &self,
        player: &Player,
    ) -> Result<Vec<UserGameInfo>, ApiError> {
        log::debug!("requesting match history of {}", player);
        let body = self
            .transport
            .get(
                &self.config.match_history_url,
                &[
                    ("key", self.config.key.as_str()),
                    ("account_id", player.id()),
                ],
            )
            .await?;
        let history = classify_history(&body)?;
        let summaries = history.into_summaries();
        let count = summaries.len();
        let selected = self.select_matches(summaries);
        log::debug!(
            "{} of {} matches selected for {}",
            selected.len(),
            count,
            player
        );

        try_join_all(
            selected
                .iter()
                .map(|summary| self.fetch_match_detail(player, summary.match_id)),
        )
        .await
    }

    // filter and cap before anything else is requested
    fn select_matches(&self, summaries: Vec<MatchSummary>) -> Vec<MatchSummary> {
        summaries
            .into_iter()
            .filter(|summary| self.config.lobby_types.contains(&summary.lobby_type))
            .take(self.config.max_games)
            .collect()
    }

    /// The `n` most played heroes of `player` as ranked by the statistics page.
    ///
    /// Runs in its own task, whatever goes wrong comes back as
    /// [`ApiError::Generic`].
    pub async fn fetch_most_played_heroes(
        &self,
        player: &Player,
        n: usize,
    ) -> Result<Vec<UserHeroPerformance>, ApiError> {
        let fetcher = self.clone();
        let player = player.clone();
        tokio::spawn(async move { fetcher.request_hero_table(&player, n).await })
            .await
            .map_err(|err| ApiError::Generic(format!("hero statistics task failed: {}", err)))?
    }

    async fn request_hero_table(
        &self,
        player: &Player,
        n: usize,
    ) -> Result<Vec<UserHeroPerformance>, ApiError> {
        let url = self.config.hero_stats_url(player.id());
        log::debug!("requesting hero statistics of {} from {}", player, url);
        let body = self
            .transport
            .get(&url, &[])
            .await
            .map_err(|err| ApiError::Generic(err.to_string()))?;
        parse_hero_table(&body, player, n).map_err(|err| match err {
            ApiError::Generic(_) => err,
            other => ApiError::Generic(other.to_string()),
        })
    }
}
