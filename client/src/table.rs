use leptos::prelude::*;

use watchlist_shared::render::{error_row_html, message_row_html, table_body_html};
use watchlist_shared::{Player, ViewState, derive_view};

use crate::database::{LOAD_ERROR_TEXT, LoadStatus};

/// Indices of the players currently shown, recomputed from scratch on every change.
#[derive(Clone, Copy)]
pub struct DerivedView(pub Memo<Vec<usize>>);

pub fn derived_view(players: RwSignal<Vec<Player>>, view_state: RwSignal<ViewState>) -> Memo<Vec<usize>> {
    Memo::new(move |_| players.with(|players| view_state.with(|state| derive_view(players, state))))
}

#[component]
pub fn PlayersTable() -> impl IntoView {
    let players: RwSignal<Vec<Player>> = expect_context();
    let status: RwSignal<LoadStatus> = expect_context();
    let DerivedView(view) = expect_context();

    let body_html = move || match status.get() {
        LoadStatus::Loading => message_row_html("loading", "Загрузка…"),
        LoadStatus::Failed(_) => error_row_html(LOAD_ERROR_TEXT),
        LoadStatus::Ready => players.with(|players| view.with(|view| table_body_html(players, view))),
    };

    view! {
        <div class="table-container">
            <table class="players-table">
                <thead>
                    <tr>
                        <th>"Никнейм"</th>
                        <th>"SteamID"</th>
                        <th>"Читы"</th>
                        <th>"Описание"</th>
                        <th>"Страна"</th>
                    </tr>
                </thead>
                <tbody id="playersTableBody" inner_html=body_html></tbody>
            </table>
        </div>
    }
}

#[component]
pub fn PlayersCount() -> impl IntoView {
    let DerivedView(view) = expect_context();
    view! {
        <span class="players-count">
            "Найдено: " <strong id="playersCount">{move || view.with(Vec::len)}</strong>
        </span>
    }
}
