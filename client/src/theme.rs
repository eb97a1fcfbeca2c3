use gloo_storage::Storage;
use leptos::prelude::*;

use crate::dom;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-moon",
            Self::Light => "fas fa-sun",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored preference: the bare word, or the JSON string older builds wrote.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            other => serde_json::from_str(other).ok(),
        }
    }

    pub fn load() -> Self {
        gloo_storage::LocalStorage::raw()
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| Self::from_stored(&raw))
            .unwrap_or_default()
    }

    fn save(self) {
        let _ = gloo_storage::LocalStorage::raw().set_item(STORAGE_KEY, self.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct CurrentTheme(pub RwSignal<Theme>);

/// Keep the `<body>` classes and localStorage in sync with the theme signal.
pub fn sync_theme(theme: RwSignal<Theme>) {
    Effect::new(move || {
        let current = theme.get();
        dom::swap_body_class(current.body_class(), current.toggled().body_class());
        current.save();
    });
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let CurrentTheme(theme) = expect_context();

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            title=move || match theme.get() {
                Theme::Dark => "Светлая тема",
                Theme::Light => "Тёмная тема",
            }
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            <i class=move || theme.get().icon_class()></i>
        </button>
    }
}
