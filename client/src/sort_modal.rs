use leptos::prelude::*;

use watchlist_shared::countries::country_label;
use watchlist_shared::{
    AlphaSort, BehaviorFilter, DASH, DescriptionFilter, Player, PlayerStats, ViewState,
};

use crate::modal::{ActiveModal, Modal, ModalKind};

#[component]
fn SelectOption(
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    current: RwSignal<String>,
) -> impl IntoView {
    let selected_value = value.clone();
    view! {
        <option value=value prop:selected=move || current.with(|c| *c == selected_value)>
            {label}
        </option>
    }
}

#[component]
pub fn SortModal() -> impl IntoView {
    view! {
        <Modal kind=ModalKind::Sort id="sortModal" title="Сортировка и фильтры">
            <SortForm />
        </Modal>
    }
}

/// Edits a draft copy of the selections; nothing reaches the table until "Apply".
#[component]
fn SortForm() -> impl IntoView {
    let view_state: RwSignal<ViewState> = expect_context();
    let players: RwSignal<Vec<Player>> = expect_context();
    let ActiveModal(active) = expect_context();

    let current = view_state.get_untracked();
    let behavior = RwSignal::new(current.behavior.key().to_string());
    let description = RwSignal::new(current.description.key().to_string());
    let country = RwSignal::new(current.country.clone().unwrap_or_default());
    let alpha = RwSignal::new(current.alpha.key().to_string());
    let exact = RwSignal::new(current.exact_steam_id);

    let stats = players.with_untracked(|players| PlayerStats::compute(players));
    let behavior_options = stats
        .behavior_tags()
        .map(|tag| view! { <SelectOption value=tag.to_string() label=tag.to_string() current=behavior /> })
        .collect_view();
    let country_options = stats
        .countries
        .iter()
        .filter(|entry| entry.key != DASH)
        .map(|entry| {
            view! {
                <SelectOption value=entry.key.clone() label=country_label(&entry.key) current=country />
            }
        })
        .collect_view();

    let on_apply = move |_| {
        view_state.update(|s| {
            s.behavior = BehaviorFilter::from_key(&behavior.get_untracked());
            s.description = DescriptionFilter::from_key(&description.get_untracked());
            let selected_country = country.get_untracked();
            s.country = (!selected_country.is_empty()).then_some(selected_country);
            s.alpha = AlphaSort::from_key(&alpha.get_untracked());
            s.exact_steam_id = exact.get_untracked();
        });
        active.set(None);
    };

    let on_reset = move |_| {
        behavior.set(String::new());
        description.set(String::new());
        country.set(String::new());
        alpha.set(String::new());
        exact.set(false);
        view_state.update(|s| s.reset_sorting());
    };

    view! {
        <div class="sort-form">
            <label class="sort-field">
                <span>"Читы"</span>
                <select id="hackFilter" on:change=move |ev| behavior.set(event_target_value(&ev))>
                    <SelectOption value="" label="Все" current=behavior />
                    <SelectOption value="none-only" label="Только без читов" current=behavior />
                    <SelectOption value="none-first" label="Сначала без читов" current=behavior />
                    {behavior_options}
                </select>
            </label>
            <label class="sort-field">
                <span>"Описание"</span>
                <select id="descFilter" on:change=move |ev| description.set(event_target_value(&ev))>
                    <SelectOption value="" label="Все" current=description />
                    <SelectOption value="none-only" label="Только без описания" current=description />
                    <SelectOption value="none-first" label="Сначала без описания" current=description />
                    <SelectOption value="present-only" label="Только с описанием" current=description />
                    <SelectOption value="present-first" label="Сначала с описанием" current=description />
                </select>
            </label>
            <label class="sort-field">
                <span>"Страна"</span>
                <select id="countryFilter" on:change=move |ev| country.set(event_target_value(&ev))>
                    <SelectOption value="" label="Все" current=country />
                    {country_options}
                </select>
            </label>
            <label class="sort-field">
                <span>"По алфавиту"</span>
                <select id="alphaSort" on:change=move |ev| alpha.set(event_target_value(&ev))>
                    <SelectOption value="" label="Без сортировки" current=alpha />
                    <SelectOption value="asc" label="А → Я" current=alpha />
                    <SelectOption value="desc" label="Я → А" current=alpha />
                </select>
            </label>
            <label class="sort-checkbox">
                <input
                    type="checkbox"
                    id="exactSteamId"
                    prop:checked=move || exact.get()
                    on:change=move |ev| exact.set(event_target_checked(&ev))
                />
                <span>"Точное совпадение SteamID"</span>
            </label>
            <div class="sort-actions">
                <button id="resetSortBtn" class="btn-secondary" on:click=on_reset>"Сбросить"</button>
                <button id="applySortBtn" class="btn-primary" on:click=on_apply>"Применить"</button>
            </div>
        </div>
    }
}
