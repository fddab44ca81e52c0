//! Add Item Form Component
//!
//! Collects quantity, category and description and hands a new item to the root.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::draft::ItemDraft;
use crate::error::DraftError;
use crate::models::{Category, Item, Quantity};

/// Form for creating new items
///
/// # Arguments
/// * `next_id` - Draws a fresh item id; only called for a valid draft
/// * `on_add` - Receives the new item
#[component]
pub fn AddItemForm(
    #[prop(into)] next_id: Callback<(), u64>,
    #[prop(into)] on_add: Callback<Item>,
) -> impl IntoView {
    let defaults = ItemDraft::default();
    let (quantity, set_quantity) = signal(defaults.quantity);
    let (category, set_category) = signal(defaults.category);
    let (description, set_description) = signal(defaults.description);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            quantity: quantity.get_untracked(),
            category: category.get_untracked(),
            description: description.get_untracked(),
        };

        let reset = draft.after_submit();

        match draft.build(|| next_id.run(())) {
            Ok(item) => {
                on_add.run(item);
                set_quantity.set(reset.quantity);
                set_category.set(reset.category);
                set_description.set(reset.description);
                set_error.set(None);
            }
            Err(DraftError::EmptyDescription) => {}
            Err(e) => {
                log::warn!("[FORM] Rejected submission: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="add-form" on:submit=submit>
            <label for="quantity">"Quantity:"</label>
            <select
                name="quantity"
                id="quantity"
                prop:value=move || quantity.get()
                on:change=move |ev| set_quantity.set(event_target_value(&ev))
            >
                {Quantity::all().map(|q| {
                    let value = q.to_string();
                    let is_selected = {
                        let value = value.clone();
                        move || quantity.get() == value
                    };
                    view! {
                        <option value=value.clone() selected=is_selected>{value.clone()}</option>
                    }
                }).collect_view()}
            </select>

            <label for="category">"Category:"</label>
            <select
                name="category"
                id="category"
                prop:value=move || category.get().as_str()
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<Category>() {
                        Ok(selected) => set_category.set(selected),
                        Err(e) => log::warn!("[FORM] {}", e),
                    }
                }
            >
                {Category::ALL.iter().map(|&c| view! {
                    <option value=c.as_str() selected=move || category.get() == c>{c.as_str()}</option>
                }).collect_view()}
            </select>

            <input
                type="text"
                placeholder="Item Name"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"ADD TO LIST"</button>

            {move || error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
        </form>
    }
}
