use leptos::prelude::*;
use wasm_bindgen::JsCast;

use watchlist_shared::ViewState;
use watchlist_shared::search::{MAX_QUERY_LEN, clamp_query};

use crate::dom;

#[component]
pub fn SearchBar() -> impl IntoView {
    let view_state: RwSignal<ViewState> = expect_context();

    let query = move || view_state.with(|s| s.query.clone());
    let has_text = move || view_state.with(|s| !s.query.trim().is_empty());
    let counter = move || {
        let len = view_state.with(|s| s.query.chars().count());
        format!("{len}/{MAX_QUERY_LEN}")
    };

    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let raw = input.value();
        let clamped = clamp_query(&raw);
        if clamped != raw {
            input.set_value(&clamped);
        }
        view_state.update(|s| s.query = clamped);
    };

    let on_clear = move |_| {
        if !has_text() {
            return;
        }
        view_state.update(|s| s.query.clear());
        dom::blur_active_element();
    };

    view! {
        <div class="search-container">
            <i class="fas fa-search search-icon"></i>
            <input
                id="searchInput"
                type="text"
                autocomplete="off"
                placeholder="Ник, SteamID, SteamID64 или ссылка на профиль"
                maxlength=MAX_QUERY_LEN
                class:searching=has_text
                prop:value=query
                on:input=on_input
            />
            <span id="searchCounter" class="search-counter">{counter}</span>
            <button
                id="clearSearch"
                class="clear-search"
                title="Очистить"
                style=move || {
                    if has_text() {
                        "opacity: 1; pointer-events: auto;"
                    } else {
                        "opacity: 0.3; pointer-events: none;"
                    }
                }
                on:click=on_clear
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
