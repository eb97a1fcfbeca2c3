use std::sync::LazyLock;

use regex::Regex;

use crate::player::Player;
use crate::steam_id::steam_id64_to_steam_id;

pub const PROFILE_URL_PREFIX: &str = "http://steamcommunity.com/profiles/";

/// Maximum accepted length of the search box, in characters.
pub const MAX_QUERY_LEN: usize = 50;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"steamcommunity\.com/profiles/([0-9]{17})").expect("profile url pattern compiles")
});

static STEAM_ID64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{17}$").expect("steam id64 pattern compiles"));

/// Truncate raw input to [`MAX_QUERY_LEN`] characters.
pub fn clamp_query(raw: &str) -> String {
    raw.chars().take(MAX_QUERY_LEN).collect()
}

/// Reduce a raw query to the lowercase needle used for matching.
///
/// A pasted profile URL collapses to its SteamID64, and a bare SteamID64 is rewritten
/// to the `steam_0:y:z` form stored in the data set.
pub fn normalize_query(raw: &str) -> String {
    let mut query = raw.trim().to_string();

    if let Some(caps) = PROFILE_URL.captures(&query.to_lowercase()) {
        query = caps[1].to_string();
    }

    if STEAM_ID64.is_match(&query) {
        let steam_id = steam_id64_to_steam_id(&query);
        if !steam_id.is_empty() {
            return steam_id.to_lowercase();
        }
        return query;
    }

    query.to_lowercase()
}

/// `needle` must already be normalized.
pub fn player_matches(player: &Player, needle: &str, exact_steam_id: bool) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);

    let steam_id = player.steam_id().to_lowercase();
    let steam_id_match = if exact_steam_id {
        steam_id == needle
    } else {
        steam_id.contains(needle)
    };

    contains(player.nickname())
        || contains(player.hacks())
        || contains(player.description())
        || steam_id_match
}

/// Indices of matching players, in their original order.
pub fn search(players: &[Player], query: &str, exact_steam_id: bool) -> Vec<usize> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return (0..players.len()).collect();
    }
    players
        .iter()
        .enumerate()
        .filter(|(_, player)| player_matches(player, &needle, exact_steam_id))
        .map(|(idx, _)| idx)
        .collect()
}
