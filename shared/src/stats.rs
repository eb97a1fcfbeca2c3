use std::collections::HashMap;

use crate::player::{DASH, Player};

/// One-decimal percentage string, `"0.0"` when `whole` is zero.
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", part as f64 * 100.0 / whole as f64)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorEntry {
    pub tag: String,
    pub count: usize,
    pub countries: Vec<CountEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub total: usize,
    pub cheaters: usize,
    pub clean: usize,
    pub countries: Vec<CountEntry>,
    pub cheater_countries: Vec<CountEntry>,
    pub behaviors: Vec<BehaviorEntry>,
}

fn country_key(player: &Player) -> String {
    let country = player.country().trim();
    if country.is_empty() {
        DASH.to_string()
    } else {
        country.to_string()
    }
}

fn into_sorted(counts: HashMap<String, usize>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(key, count)| CountEntry { key, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    entries
}

impl PlayerStats {
    pub fn compute(players: &[Player]) -> Self {
        let mut countries: HashMap<String, usize> = HashMap::new();
        let mut cheater_countries: HashMap<String, usize> = HashMap::new();
        let mut behaviors: HashMap<String, (usize, HashMap<String, usize>)> = HashMap::new();
        let mut cheaters = 0;

        for player in players {
            let country = country_key(player);
            *countries.entry(country.clone()).or_default() += 1;

            if player.is_clean() {
                continue;
            }
            cheaters += 1;
            *cheater_countries.entry(country.clone()).or_default() += 1;

            let mut seen: Vec<String> = Vec::new();
            for tag in player.behavior_tags() {
                let tag = tag.to_uppercase();
                if seen.contains(&tag) {
                    continue;
                }
                let (count, by_country) = behaviors.entry(tag.clone()).or_default();
                *count += 1;
                *by_country.entry(country.clone()).or_default() += 1;
                seen.push(tag);
            }
        }

        let mut behaviors: Vec<BehaviorEntry> = behaviors
            .into_iter()
            .map(|(tag, (count, by_country))| BehaviorEntry {
                tag,
                count,
                countries: into_sorted(by_country),
            })
            .collect();
        behaviors.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

        Self {
            total: players.len(),
            cheaters,
            clean: players.len() - cheaters,
            countries: into_sorted(countries),
            cheater_countries: into_sorted(cheater_countries),
            behaviors,
        }
    }

    pub fn cheater_percent(&self) -> String {
        percent(self.cheaters, self.total)
    }

    pub fn clean_percent(&self) -> String {
        percent(self.clean, self.total)
    }

    /// Behavior tags in descending frequency, used to populate the behavior filter.
    pub fn behavior_tags(&self) -> impl Iterator<Item = &str> {
        self.behaviors.iter().map(|entry| entry.tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{PlayerStats, percent};
    use crate::player::{DASH, Player};

    fn player(hacks: &str, country: &str) -> Player {
        let opt = |v: &str| (!v.is_empty()).then(|| v.to_string());
        Player {
            nickname: Some("p".to_string()),
            hacks: opt(hacks),
            country: opt(country),
            ..Player::default()
        }
    }

    #[test]
    fn three_of_ten_is_thirty_percent() {
        let mut players: Vec<Player> = (0..7).map(|_| player("", "🇷🇺")).collect();
        players.extend((0..3).map(|_| player("AIM", "🇷🇺")));
        let stats = PlayerStats::compute(&players);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.cheaters, 3);
        assert_eq!(stats.clean, 7);
        assert_eq!(stats.cheater_percent(), "30.0");
        assert_eq!(stats.clean_percent(), "70.0");
    }

    #[test]
    fn empty_roster_has_zero_percentages() {
        let stats = PlayerStats::compute(&[]);
        assert_eq!(stats.cheater_percent(), "0.0");
        assert!(stats.countries.is_empty());
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(percent(1, 3), "33.3");
        assert_eq!(percent(2, 3), "66.7");
    }

    #[test]
    fn country_breakdowns_overall_and_cheater_only() {
        let players = vec![
            player("", "🇷🇺"),
            player("AIM", "🇷🇺"),
            player("WH", "🇩🇪"),
            player(DASH, ""),
            player("", "🇩🇪"),
            player("", "🇩🇪"),
        ];
        let stats = PlayerStats::compute(&players);
        let overall: Vec<(&str, usize)> = stats
            .countries
            .iter()
            .map(|e| (e.key.as_str(), e.count))
            .collect();
        assert_eq!(overall, vec![("🇩🇪", 3), ("🇷🇺", 2), (DASH, 1)]);
        let cheaters: Vec<(&str, usize)> = stats
            .cheater_countries
            .iter()
            .map(|e| (e.key.as_str(), e.count))
            .collect();
        assert_eq!(cheaters, vec![("🇩🇪", 1), ("🇷🇺", 1)]);
    }

    #[test]
    fn behaviors_are_tallied_with_nested_countries() {
        let players = vec![
            player("AIM, WH", "🇷🇺"),
            player("aim", "🇩🇪"),
            player("AIM, aim", "🇷🇺"),
            player("BHOP", ""),
        ];
        let stats = PlayerStats::compute(&players);
        let tags: Vec<&str> = stats.behavior_tags().collect();
        assert_eq!(tags, vec!["AIM", "BHOP", "WH"]);

        let aim = &stats.behaviors[0];
        assert_eq!(aim.count, 3);
        let by_country: Vec<(&str, usize)> = aim
            .countries
            .iter()
            .map(|e| (e.key.as_str(), e.count))
            .collect();
        assert_eq!(by_country, vec![("🇷🇺", 2), ("🇩🇪", 1)]);
        assert_eq!(stats.behaviors[1].countries[0].key, DASH);
    }
}
