//! Category Filter Selector
//!
//! "All" plus one option per category.

use leptos::prelude::*;

use crate::models::CategoryFilter;

#[component]
pub fn CategoryFilterSelect(
    filter: ReadSignal<CategoryFilter>,
    set_filter: WriteSignal<CategoryFilter>,
) -> impl IntoView {
    view! {
        <select
            class="category-filter"
            prop:value=move || filter.get().as_str()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<CategoryFilter>() {
                    Ok(selected) => set_filter.set(selected),
                    Err(e) => log::warn!("[LIST] {}", e),
                }
            }
        >
            {CategoryFilter::options().map(|option| view! {
                <option value=option.as_str() selected=move || filter.get() == option>
                    {option.as_str()}
                </option>
            }).collect_view()}
        </select>
    }
}
