use leptos::prelude::*;

use watchlist_shared::{Player, ViewState};

use crate::database::{self, LoadStatus};
use crate::dom;
use crate::modal::{ActiveModal, FaqModal, ModalKind, bind_modal_behavior};
use crate::search_bar::SearchBar;
use crate::sort_modal::SortModal;
use crate::stats_modal::StatsModal;
use crate::table::{DerivedView, PlayersCount, PlayersTable, derived_view};
use crate::theme::{CurrentTheme, Theme, ThemeToggle, sync_theme};

/// Root component: owns the roster and every piece of view state, and provides them via context.
#[component]
pub fn App() -> impl IntoView {
    let players: RwSignal<Vec<Player>> = RwSignal::new(Vec::new());
    let status: RwSignal<LoadStatus> = RwSignal::new(LoadStatus::Loading);
    let view_state: RwSignal<ViewState> = RwSignal::new(ViewState::default());
    let active_modal: RwSignal<Option<ModalKind>> = RwSignal::new(None);
    let theme: RwSignal<Theme> = RwSignal::new(Theme::load());
    let view = derived_view(players, view_state);

    provide_context(players);
    provide_context(status);
    provide_context(view_state);
    provide_context(ActiveModal(active_modal));
    provide_context(CurrentTheme(theme));
    provide_context(DerivedView(view));

    sync_theme(theme);
    bind_modal_behavior(active_modal);
    dom::scroll_to_top();

    Effect::new(move || {
        database::load_players(players, status);
    });

    let has_sorting = move || view_state.with(ViewState::has_sorting);
    let open = move |kind: ModalKind| move |_: web_sys::MouseEvent| active_modal.set(Some(kind));

    view! {
        <header class="header">
            <div class="header-title">
                <h1>"Список нарушителей"</h1>
                <PlayersCount />
            </div>
            <div class="header-actions">
                <button id="statsToggle" class="icon-button" title="Статистика" on:click=open(ModalKind::Stats)>
                    <i class="fas fa-chart-pie"></i>
                </button>
                <button id="faqToggle" class="icon-button" title="Вопросы и ответы" on:click=open(ModalKind::Faq)>
                    <i class="fas fa-question"></i>
                </button>
                <ThemeToggle />
            </div>
        </header>
        <main class="content">
            <div class="controls">
                <SearchBar />
                <button id="sortToggle" class="icon-button" class:active=has_sorting title="Сортировка и фильтры" on:click=open(ModalKind::Sort)>
                    <i class="fas fa-sort-amount-down"></i>
                </button>
                <button
                    id="resetSortTable"
                    class="icon-button"
                    title="Сбросить сортировку"
                    on:click=move |_| {
                        view_state.update(|s| s.reset_sorting());
                        dom::blur_active_element();
                    }
                >
                    <i class="fas fa-undo"></i>
                </button>
            </div>
            <PlayersTable />
        </main>
        <SortModal />
        <StatsModal />
        <FaqModal />
    }
}
