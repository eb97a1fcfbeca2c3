use std::cmp::Ordering;

use crate::collate::locale_cmp;
use crate::player::Player;
use crate::search::search;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BehaviorFilter {
    #[default]
    Any,
    NoneOnly,
    NoneFirst,
    /// Keep players whose behavior list contains this tag (case-insensitive).
    Contains(String),
}

impl BehaviorFilter {
    pub fn key(&self) -> &str {
        match self {
            Self::Any => "",
            Self::NoneOnly => "none-only",
            Self::NoneFirst => "none-first",
            Self::Contains(tag) => tag,
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "" => Self::Any,
            "none-only" => Self::NoneOnly,
            "none-first" => Self::NoneFirst,
            other if other.starts_with("none") => Self::Any,
            other => Self::Contains(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionFilter {
    #[default]
    Any,
    NoneOnly,
    NoneFirst,
    PresentOnly,
    PresentFirst,
}

impl DescriptionFilter {
    pub const ALL: [Self; 5] = [
        Self::Any,
        Self::NoneOnly,
        Self::NoneFirst,
        Self::PresentOnly,
        Self::PresentFirst,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::NoneOnly => "none-only",
            Self::NoneFirst => "none-first",
            Self::PresentOnly => "present-only",
            Self::PresentFirst => "present-first",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|filter| filter.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaSort {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl AlphaSort {
    pub fn key(self) -> &'static str {
        match self {
            Self::Unsorted => "",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "asc" => Self::Ascending,
            "desc" => Self::Descending,
            _ => Self::Unsorted,
        }
    }
}

/// Everything the visitor can change about which players are shown and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub behavior: BehaviorFilter,
    pub description: DescriptionFilter,
    pub country: Option<String>,
    pub alpha: AlphaSort,
    pub exact_steam_id: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            behavior: BehaviorFilter::Any,
            description: DescriptionFilter::Any,
            country: None,
            alpha: AlphaSort::Unsorted,
            exact_steam_id: true,
        }
    }
}

impl ViewState {
    /// Drop every sort/filter selection but keep the query.
    ///
    /// Resetting also switches the identifier match to substring mode.
    pub fn reset_sorting(&mut self) {
        self.behavior = BehaviorFilter::Any;
        self.description = DescriptionFilter::Any;
        self.country = None;
        self.alpha = AlphaSort::Unsorted;
        self.exact_steam_id = false;
    }

    pub fn has_sorting(&self) -> bool {
        self.behavior != BehaviorFilter::Any
            || self.description != DescriptionFilter::Any
            || self.country.is_some()
            || self.alpha != AlphaSort::Unsorted
    }
}

/// Stable partition: matching indices first, relative order kept on both sides.
fn matching_first(view: Vec<usize>, pred: impl Fn(usize) -> bool) -> Vec<usize> {
    let (mut first, rest): (Vec<usize>, Vec<usize>) = view.into_iter().partition(|&i| pred(i));
    first.extend(rest);
    first
}

/// Compute the displayed player indices from scratch.
///
/// The result is always a subset of `0..players.len()` with no duplicates, and
/// players without a nickname always come last.
pub fn derive_view(players: &[Player], state: &ViewState) -> Vec<usize> {
    let mut view = search(players, &state.query, state.exact_steam_id);
    let clean = |i: usize| players[i].is_clean();
    let described = |i: usize| players[i].has_description();

    view = match &state.behavior {
        BehaviorFilter::Any => view,
        BehaviorFilter::NoneOnly => view.into_iter().filter(|&i| clean(i)).collect(),
        BehaviorFilter::NoneFirst => matching_first(view, clean),
        BehaviorFilter::Contains(tag) => {
            let target = tag.to_uppercase();
            view.into_iter()
                .filter(|&i| players[i].hacks().to_uppercase().contains(&target))
                .collect()
        }
    };

    view = match state.description {
        DescriptionFilter::Any => view,
        DescriptionFilter::NoneOnly => view.into_iter().filter(|&i| !described(i)).collect(),
        DescriptionFilter::NoneFirst => matching_first(view, |i| !described(i)),
        DescriptionFilter::PresentOnly => view.into_iter().filter(|&i| described(i)).collect(),
        DescriptionFilter::PresentFirst => matching_first(view, described),
    };

    if let Some(country) = &state.country {
        view.retain(|&i| players[i].country().trim() == country);
    }

    match state.alpha {
        AlphaSort::Unsorted => {}
        AlphaSort::Ascending => {
            view.sort_by(|&a, &b| locale_cmp(players[a].nickname(), players[b].nickname()));
        }
        AlphaSort::Descending => {
            view.sort_by(|&a, &b| locale_cmp(players[b].nickname(), players[a].nickname()));
        }
    }

    view.sort_by(|&a, &b| {
        match (players[a].nickname_is_empty(), players[b].nickname_is_empty()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        }
    });

    view
}
