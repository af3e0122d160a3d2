// participants of the latest lobby in the game client log

use std::path::Path;

const LOBBY_MARKER: &str = "Lobby";
const ACCOUNT_MARKER: &str = "[U:1:";
const MAX_PLAYERS: usize = 10;

/// Account ids of the other players of the most recent lobby.
///
/// The first id on a lobby line is the local user and is skipped.
/// `None` if the log can't be read or has no lobby line.
pub fn extract_lobby_players(log: &Path) -> Option<Vec<String>> {
    // a stray non-utf8 byte in some older line shouldn't hide the lobby
    let content = match std::fs::read(log) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            log::warn!("failed to read {}: {}", log.display(), err);
            return None;
        }
    };
    lobby_players(content.lines())
}

pub fn lobby_players<'a>(lines: impl DoubleEndedIterator<Item = &'a str>) -> Option<Vec<String>> {
    let line = lines.rev().find(|line| line.contains(LOBBY_MARKER))?;
    let players = line
        .split(ACCOUNT_MARKER)
        .skip(1)
        .filter_map(|rest| rest.split_once(']').map(|(id, _)| id.to_string()))
        .skip(1)
        .take(MAX_PLAYERS)
        .collect();
    Some(players)
}
