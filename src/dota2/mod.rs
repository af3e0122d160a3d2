use std::fmt::Display;

pub mod details;
pub mod heroes;
pub mod history;

/// Player identifier as it appears in the client log and the web API,
/// the 32 bit steam account id kept in its textual form.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Player(String);

impl Player {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn is_account(&self, account_id: i64) -> bool {
        self.0.parse::<i64>().is_ok_and(|id| id == account_id)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Side {
    Radiant,
    Dire,
}

impl Side {
    /// The participant list holds the five radiant players first.
    pub fn from_index(index: usize) -> Self {
        if index < 5 {
            Self::Radiant
        } else {
            Self::Dire
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Radiant => "radiant",
            Side::Dire => "dire",
        };
        f.pad(name)
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Loss,
}

impl Outcome {
    pub fn new(radiant_win: bool, side: Side) -> Self {
        if radiant_win == (side == Side::Radiant) {
            Self::Victory
        } else {
            Self::Loss
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Victory => "Victory",
            Outcome::Loss => "Loss",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGameInfo {
    pub player: Player,
    pub hero_name: String,
    pub outcome: Outcome,
    pub kda: String,
}

impl Display for UserGameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<10} {:<8} {:<24} {}",
            self.player, self.outcome, self.hero_name, self.kda
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserHeroPerformance {
    pub player: Player,
    pub hero_name: String,
    pub matches_played: u32,
    pub win_rate: f64,
}

impl Display for UserHeroPerformance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<10} {:<24} {:>5} matches {:>6.2}%",
            self.player, self.hero_name, self.matches_played, self.win_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, Player, Side, UserGameInfo};

    #[test]
    fn test_side_from_index() {
        assert_eq!(Side::from_index(0), Side::Radiant);
        assert_eq!(Side::from_index(4), Side::Radiant);
        assert_eq!(Side::from_index(5), Side::Dire);
        assert_eq!(Side::from_index(9), Side::Dire);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(Outcome::new(true, Side::Radiant), Outcome::Victory);
        assert_eq!(Outcome::new(true, Side::Dire), Outcome::Loss);
        assert_eq!(Outcome::new(false, Side::Radiant), Outcome::Loss);
        assert_eq!(Outcome::new(false, Side::Dire), Outcome::Victory);
    }

    #[test]
    fn test_player_account() {
        let player = Player::new("86745912");
        assert!(player.is_account(86745912));
        assert!(!player.is_account(86745913));
        assert!(!Player::new("not a number").is_account(0));
    }

    #[test]
    fn test_display_game() {
        let game = UserGameInfo {
            player: Player::new("86745912"),
            hero_name: "Pudge".to_string(),
            outcome: Outcome::Loss,
            kda: "3/9/12".to_string(),
        };
        assert_eq!(
            game.to_string(),
            "86745912   Loss     Pudge                    3/9/12"
        );
    }

    #[test]
    fn test_display_side() {
        assert_eq!(Side::from_index(3).to_string(), "radiant");
        assert_eq!(format!("{:<6}|", Side::from_index(8)), "dire  |");
    }
}
