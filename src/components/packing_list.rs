//! Packing List Component
//!
//! Shows the items matching the local category filter. The filter is view
//! state only and never reaches the store.

use leptos::prelude::*;

use crate::components::{CategoryFilterSelect, PackingRow};
use crate::item_list::{filter_items, toggle_packed};
use crate::models::{CategoryFilter, Item};

/// Packing list with category filter
///
/// # Arguments
/// * `on_remove` - Receives the id to remove
/// * `on_check` - Receives the full sequence with one item's packed flag flipped
#[component]
pub fn PackingList(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] on_remove: Callback<u64>,
    #[prop(into)] on_check: Callback<Vec<Item>>,
) -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::All);

    let visible = move || items.with(|all| filter_items(all, filter.get()));
    // packed is part of the key so a toggle re-renders the row
    let row_key = |item: &Item| (item.id, item.packed);

    let on_toggle = Callback::new(move |id: u64| {
        let next = items.with_untracked(|all| toggle_packed(all, id));
        on_check.run(next);
    });

    view! {
        <div class="list">
            <CategoryFilterSelect filter=filter set_filter=set_filter />
            <ul>
                <For
                    each=visible
                    key=row_key
                    children=move |item| view! {
                        <PackingRow item=item on_toggle=on_toggle on_remove=on_remove />
                    }
                />
            </ul>
        </div>
    }
}
