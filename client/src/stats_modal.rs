use leptos::prelude::*;

use watchlist_shared::countries::country_label;
use watchlist_shared::stats::{CountEntry, percent};
use watchlist_shared::{Player, PlayerStats};

use crate::modal::{Modal, ModalKind};

#[component]
pub fn StatsModal() -> impl IntoView {
    view! {
        <Modal kind=ModalKind::Stats id="statsModal" title="Статистика">
            <StatsBody />
        </Modal>
    }
}

#[component]
fn CountList(entries: Vec<CountEntry>, whole: usize) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| {
            let share = percent(entry.count, whole);
            view! {
                <li class="stats-row">
                    <span class="stats-label">{country_label(&entry.key)}</span>
                    <span class="stats-value">{entry.count} " (" {share} "%)"</span>
                </li>
            }
        })
        .collect_view()
}

/// Built each time the modal opens, so the numbers always reflect the full roster.
#[component]
fn StatsBody() -> impl IntoView {
    let players: RwSignal<Vec<Player>> = expect_context();
    let stats = players.with_untracked(|players| PlayerStats::compute(players));

    let cheater_percent = stats.cheater_percent();
    let clean_percent = stats.clean_percent();
    let behaviors = stats
        .behaviors
        .iter()
        .map(|entry| {
            let share = percent(entry.count, stats.cheaters);
            view! {
                <details class="stats-behavior">
                    <summary>
                        <span class="stats-label">{entry.tag.clone()}</span>
                        <span class="stats-value">{entry.count} " (" {share} "%)"</span>
                    </summary>
                    <ul class="stats-list">
                        <CountList entries=entry.countries.clone() whole=entry.count />
                    </ul>
                </details>
            }
        })
        .collect_view();

    view! {
        <div class="stats-summary">
            <div class="stats-card">
                <span class="stats-card-value">{stats.total}</span>
                <span class="stats-card-label">"Всего игроков"</span>
            </div>
            <div class="stats-card stats-card-danger">
                <span class="stats-card-value">{stats.cheaters} " (" {cheater_percent} "%)"</span>
                <span class="stats-card-label">"С читами"</span>
            </div>
            <div class="stats-card stats-card-ok">
                <span class="stats-card-value">{stats.clean} " (" {clean_percent} "%)"</span>
                <span class="stats-card-label">"Без читов"</span>
            </div>
        </div>
        <h3>"По странам"</h3>
        <ul class="stats-list">
            <CountList entries=stats.countries.clone() whole=stats.total />
        </ul>
        <h3>"Читеры по странам"</h3>
        <ul class="stats-list">
            <CountList entries=stats.cheater_countries.clone() whole=stats.cheaters />
        </ul>
        <h3>"По читам"</h3>
        {behaviors}
    }
}
