use std::fmt;
use std::str::FromStr;

/// SteamID64 of account 0 in the public universe.
pub const STEAM_ID64_BASE: u64 = 76_561_197_960_265_728;

/// Textual `STEAM_X:Y:Z` account handle.
///
/// `parity` is the low bit of the account number and `account_half` the remaining
/// bits, so the 64-bit form is `STEAM_ID64_BASE + 2 * account_half + parity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteamId {
    pub universe: u64,
    pub parity: u64,
    pub account_half: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSteamIdError;

impl fmt::Display for ParseSteamIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected STEAM_X:Y:Z")
    }
}

impl std::error::Error for ParseSteamIdError {}

impl SteamId {
    /// Split a SteamID64 into its textual parts. Values below the base have no textual form.
    pub fn from_steam_id64(id: u64) -> Option<Self> {
        let account = id.checked_sub(STEAM_ID64_BASE)?;
        Some(Self {
            universe: 0,
            parity: account % 2,
            account_half: account / 2,
        })
    }

    pub fn to_steam_id64(self) -> Option<u64> {
        self.account_half
            .checked_mul(2)?
            .checked_add(self.parity)?
            .checked_add(STEAM_ID64_BASE)
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "STEAM_{}:{}:{}",
            self.universe, self.parity, self.account_half
        )
    }
}

impl FromStr for SteamId {
    type Err = ParseSteamIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let prefix = s.get(..6).ok_or(ParseSteamIdError)?;
        if !prefix.eq_ignore_ascii_case("STEAM_") {
            return Err(ParseSteamIdError);
        }

        let mut parts = s[6..].split(':');
        let mut next_part = || -> Result<u64, ParseSteamIdError> {
            let part = parts.next().ok_or(ParseSteamIdError)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseSteamIdError);
            }
            part.parse().map_err(|_| ParseSteamIdError)
        };

        let universe = next_part()?;
        let parity = next_part()?;
        let account_half = next_part()?;
        if parts.next().is_some() {
            return Err(ParseSteamIdError);
        }

        Ok(Self {
            universe,
            parity,
            account_half,
        })
    }
}

/// Convert a decimal SteamID64 to `STEAM_0:Y:Z`. Anything invalid yields an empty string.
pub fn steam_id64_to_steam_id(steam_id64: &str) -> String {
    steam_id64
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(SteamId::from_steam_id64)
        .map(|id| id.to_string())
        .unwrap_or_default()
}

/// Convert `STEAM_X:Y:Z` back to a decimal SteamID64. Anything invalid yields an empty string.
pub fn steam_id_to_steam_id64(steam_id: &str) -> String {
    if steam_id.is_empty() || steam_id == "—" {
        return String::new();
    }
    steam_id
        .parse::<SteamId>()
        .ok()
        .and_then(SteamId::to_steam_id64)
        .map(|id| id.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{STEAM_ID64_BASE, SteamId, steam_id_to_steam_id64, steam_id64_to_steam_id};

    #[test]
    fn base_plus_one_is_odd_account_zero() {
        assert_eq!(steam_id64_to_steam_id("76561197960265729"), "STEAM_0:1:0");
    }

    #[test]
    fn base_itself_is_first_account() {
        assert_eq!(steam_id64_to_steam_id("76561197960265728"), "STEAM_0:0:0");
    }

    #[test]
    fn below_base_is_empty() {
        assert_eq!(steam_id64_to_steam_id("76561197960265727"), "");
        assert_eq!(steam_id64_to_steam_id("1"), "");
        assert_eq!(steam_id64_to_steam_id("0"), "");
    }

    #[test]
    fn garbage_numeric_input_is_empty() {
        assert_eq!(steam_id64_to_steam_id(""), "");
        assert_eq!(steam_id64_to_steam_id("7656119796026572x"), "");
        assert_eq!(steam_id64_to_steam_id("999999999999999999999999"), "");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(steam_id64_to_steam_id(" 76561197960265729 "), "STEAM_0:1:0");
    }

    #[test]
    fn textual_to_numeric_uses_parity_and_half() {
        assert_eq!(steam_id_to_steam_id64("STEAM_0:1:0"), "76561197960265729");
        assert_eq!(
            steam_id_to_steam_id64("STEAM_1:0:12345"),
            (STEAM_ID64_BASE + 24_690).to_string()
        );
    }

    #[test]
    fn textual_prefix_is_case_insensitive() {
        assert_eq!(steam_id_to_steam_id64("steam_0:1:0"), "76561197960265729");
    }

    #[test]
    fn malformed_textual_input_is_empty() {
        for input in [
            "",
            "—",
            "STEAM_0:1",
            "STEAM_0:1:2:3",
            "STEAM_a:1:2",
            "STEAM_0:-1:2",
            "STEAM_0:1: 2",
            "STEAMX0:1:2",
            "STEAM_0:1:99999999999999999999",
        ] {
            assert_eq!(steam_id_to_steam_id64(input), "", "input {input:?}");
        }
    }

    #[test]
    fn overflowing_account_half_is_empty() {
        assert_eq!(
            steam_id_to_steam_id64(&format!("STEAM_0:1:{}", u64::MAX / 2)),
            ""
        );
    }

    #[test]
    fn numeric_round_trips_through_text() {
        let samples = [
            STEAM_ID64_BASE,
            STEAM_ID64_BASE + 1,
            76_561_198_000_000_001,
            76_561_198_123_456_789,
            76_561_199_999_999_998,
        ];
        for id in samples {
            let text = steam_id64_to_steam_id(&id.to_string());
            assert_eq!(steam_id_to_steam_id64(&text), id.to_string());
        }
    }

    #[test]
    fn typed_form_parses_and_displays() {
        let id: SteamId = "STEAM_0:1:4242".parse().expect("valid id");
        assert_eq!(id.universe, 0);
        assert_eq!(id.parity, 1);
        assert_eq!(id.account_half, 4242);
        assert_eq!(id.to_string(), "STEAM_0:1:4242");
        assert_eq!(SteamId::from_steam_id64(STEAM_ID64_BASE - 1), None);
    }
}
