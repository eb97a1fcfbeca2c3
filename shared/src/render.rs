use std::fmt::Write;

use crate::countries::country_name;
use crate::player::{DASH, Player};
use crate::search::PROFILE_URL_PREFIX;
use crate::steam_id::steam_id_to_steam_id64;

/// Number of table columns: nickname, identifier, behaviors, description, country.
pub const COLUMN_COUNT: usize = 5;

pub const NO_RESULTS_TEXT: &str = "Ничего не найдено 😔";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn or_dash(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        DASH.to_string()
    } else {
        trimmed.to_string()
    }
}

fn link_target(url: &str) -> Option<String> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")).then(|| url.to_string())
}

/// Display projection of one player, with placeholders already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub nickname: String,
    /// `None` when the record carries no identifier.
    pub steam_id: Option<String>,
    pub profile_url: Option<String>,
    pub hacks: String,
    pub proof_url: Option<String>,
    pub description: String,
    pub country: String,
    pub country_title: Option<&'static str>,
}

impl PlayerRow {
    pub fn from_player(player: &Player) -> Self {
        let raw_steam_id = player.steam_id().trim();
        let steam_id = (!raw_steam_id.is_empty()).then(|| raw_steam_id.to_string());
        let profile_url = steam_id.as_deref().and_then(|id| {
            let id64 = steam_id_to_steam_id64(id);
            (!id64.is_empty()).then(|| format!("{PROFILE_URL_PREFIX}{id64}"))
        });

        Self {
            nickname: or_dash(player.nickname()),
            steam_id,
            profile_url,
            hacks: or_dash(player.hacks()),
            proof_url: player
                .has_proofs()
                .then(|| link_target(player.proofs()))
                .flatten(),
            description: or_dash(player.description()),
            country: or_dash(player.country()),
            country_title: country_name(player.country()),
        }
    }

    pub fn write_html(&self, out: &mut String) {
        out.push_str("<tr>");
        let _ = write!(
            out,
            r#"<td class="nickname">{}</td>"#,
            escape_html(&self.nickname)
        );

        match &self.steam_id {
            Some(steam_id) => {
                let _ = write!(
                    out,
                    r#"<td class="steamid steamid-filled"><span class="steamid-text">{}</span>"#,
                    escape_html(steam_id)
                );
                if let Some(url) = &self.profile_url {
                    let _ = write!(
                        out,
                        r#"<div class="steam-profile-btn-container"><a href="{}" target="_blank" rel="noopener noreferrer" class="steam-profile-btn" title="Открыть профиль Steam"><i class="fab fa-steam"></i><span>Профиль</span></a></div>"#,
                        escape_html(url)
                    );
                }
                out.push_str("</td>");
            }
            None => {
                let _ = write!(
                    out,
                    r#"<td class="steamid steamid-empty"><span class="steamid-value">{DASH}</span></td>"#
                );
            }
        }

        let _ = write!(
            out,
            r#"<td class="hacks-text"><div class="hacks-content"><span class="hacks-value">{}</span>"#,
            escape_html(&self.hacks)
        );
        if let Some(url) = &self.proof_url {
            let _ = write!(
                out,
                r#"<div class="proof-btn-container"><a href="{}" target="_blank" rel="noopener noreferrer" class="proof-btn" title="Открыть доказательство"><i class="fas fa-file-alt"></i><span>Доказательство</span></a></div>"#,
                escape_html(url)
            );
        }
        out.push_str("</div></td>");

        let _ = write!(
            out,
            r#"<td class="description">{}</td>"#,
            escape_html(&self.description)
        );

        match self.country_title {
            Some(title) => {
                let _ = write!(
                    out,
                    r#"<td class="country" title="{}">{}</td>"#,
                    escape_html(title),
                    escape_html(&self.country)
                );
            }
            None => {
                let _ = write!(
                    out,
                    r#"<td class="country">{}</td>"#,
                    escape_html(&self.country)
                );
            }
        }

        out.push_str("</tr>");
    }
}

/// A single row spanning every column.
pub fn message_row_html(class: &str, message: &str) -> String {
    format!(
        r#"<tr><td colspan="{COLUMN_COUNT}" class="{class}">{}</td></tr>"#,
        escape_html(message)
    )
}

/// Markup for the table body showing `view` (indices into `players`).
pub fn table_body_html(players: &[Player], view: &[usize]) -> String {
    if view.is_empty() {
        return message_row_html("no-results", NO_RESULTS_TEXT);
    }
    let mut out = String::with_capacity(view.len() * 512);
    for player in view.iter().filter_map(|&idx| players.get(idx)) {
        PlayerRow::from_player(player).write_html(&mut out);
    }
    out
}

/// Single row replacing the table body when the player data never arrived.
pub fn error_row_html(message: &str) -> String {
    message_row_html("load-error", message)
}

#[cfg(test)]
mod tests {
    use super::{PlayerRow, error_row_html, escape_html, table_body_html};
    use crate::player::{DASH, Player};

    fn ghost() -> Player {
        Player {
            nickname: Some("Ghost".to_string()),
            steam_id: Some("STEAM_0:1:0".to_string()),
            hacks: Some("AIM".to_string()),
            description: None,
            country: Some("🇩🇪".to_string()),
            proofs: Some("https://example.com/clip".to_string()),
        }
    }

    #[test]
    fn absent_fields_become_dashes() {
        let row = PlayerRow::from_player(&Player::default());
        assert_eq!(row.nickname, DASH);
        assert_eq!(row.steam_id, None);
        assert_eq!(row.profile_url, None);
        assert_eq!(row.hacks, DASH);
        assert_eq!(row.description, DASH);
        assert_eq!(row.country, DASH);
        assert_eq!(row.country_title, None);
    }

    #[test]
    fn identifier_gets_profile_link() {
        let row = PlayerRow::from_player(&ghost());
        assert_eq!(
            row.profile_url.as_deref(),
            Some("http://steamcommunity.com/profiles/76561197960265729")
        );
        assert_eq!(row.country_title, Some("Германия (Germany)"));
        assert_eq!(row.proof_url.as_deref(), Some("https://example.com/clip"));
    }

    #[test]
    fn unparsable_identifier_is_shown_without_link() {
        let player = Player {
            steam_id: Some("not-an-id".to_string()),
            ..Player::default()
        };
        let row = PlayerRow::from_player(&player);
        assert_eq!(row.steam_id.as_deref(), Some("not-an-id"));
        assert_eq!(row.profile_url, None);
    }

    #[test]
    fn non_http_proofs_are_not_linked() {
        let player = Player {
            proofs: Some("javascript:alert(1)".to_string()),
            ..Player::default()
        };
        assert_eq!(PlayerRow::from_player(&player).proof_url, None);
    }

    #[test]
    fn user_text_is_escaped() {
        let player = Player {
            nickname: Some("<script>alert('x')</script>".to_string()),
            description: Some("a & b \"quoted\"".to_string()),
            ..Player::default()
        };
        let html = table_body_html(&[player], &[0]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b &quot;quoted&quot;"));
    }

    #[test]
    fn rows_follow_view_order() {
        let players = vec![
            ghost(),
            Player {
                nickname: Some("Alice".to_string()),
                ..Player::default()
            },
        ];
        let html = table_body_html(&players, &[1, 0]);
        let alice = html.find("Alice").expect("alice rendered");
        let ghost = html.find("Ghost").expect("ghost rendered");
        assert!(alice < ghost);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains(r#"title="Германия (Germany)""#));
    }

    #[test]
    fn empty_view_renders_placeholder_row() {
        let html = table_body_html(&[ghost()], &[]);
        assert!(html.contains("no-results"));
        assert!(html.contains(r#"colspan="5""#));
    }

    #[test]
    fn error_row_escapes_message() {
        assert!(error_row_html("<oops>").contains("&lt;oops&gt;"));
        assert_eq!(escape_html("plain"), "plain");
    }
}
