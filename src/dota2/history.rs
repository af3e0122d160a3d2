// response definition of GetMatchHistory, only the fields we need

use serde::Deserialize;

pub const STATUS_OK: i64 = 1;
pub const STATUS_PRIVATE_PROFILE: i64 = 15;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    pub match_id: i64,
    pub lobby_type: i32,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct MatchHistory {
    pub status: i64,
    // kept raw so a broken list degrades to nothing instead of failing the whole response
    #[serde(default)]
    pub matches: serde_json::Value,
}

impl MatchHistory {
    pub fn into_summaries(self) -> Vec<MatchSummary> {
        if self.matches.is_null() {
            log::warn!("match history without matches, nothing to fetch");
            return Vec::new();
        }
        Vec::<MatchSummary>::deserialize(self.matches).unwrap_or_else(|err| {
            log::warn!("undecodable matches in match history: {}", err);
            Vec::new()
        })
    }
}
