use leptos::prelude::*;

use crate::models::Item;
use crate::stats::PackingStats;

/// Footer summary of the whole list (ignores the list filter)
#[component]
pub fn StatsFooter(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    let summary = move || items.with(|all| PackingStats::from_items(all).summary());

    view! {
        <footer class="stats">
            <em>{summary}</em>
        </footer>
    }
}
