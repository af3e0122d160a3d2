// response definition of GetMatchDetails, only the fields we need

use serde::Deserialize;

use super::Player;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Participant {
    // bots and some anonymous players come without an account id
    #[serde(default)]
    pub account_id: i64,
    pub hero_id: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
}

impl Participant {
    pub fn kda(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct MatchDetails {
    pub radiant_win: bool,
    pub players: Vec<Participant>,
}

impl MatchDetails {
    /// Position and row of `player` in the participant list.
    pub fn find_participant(&self, player: &Player) -> Option<(usize, &Participant)> {
        self.players
            .iter()
            .enumerate()
            .find(|(_, participant)| player.is_account(participant.account_id))
    }
}
