//! Packing Row Component
//!
//! Individual item in the packing list.

use leptos::prelude::*;

use crate::models::Item;

/// A single item row with packed checkbox and remove button
#[component]
pub fn PackingRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_remove: Callback<u64>,
) -> impl IntoView {
    let id = item.id;
    let packed = item.packed;
    let row_class = if packed { "packing-item packed" } else { "packing-item" };
    let row_style = if packed { "text-decoration: line-through;" } else { "" };

    view! {
        <li
            class=row_class
            style=row_style
        >
            <h2 class="description">{item.description}</h2>
            <h5>"Category: " {item.category.as_str()}</h5>
            <p>"Quantity: " {item.quantity.to_string()}</p>
            <div class="packed-toggle">
                <h6>"Completed?"</h6>
                <input
                    type="checkbox"
                    id=format!("item-{}", id)
                    prop:checked=packed
                    on:change=move |_| on_toggle.run(id)
                />
            </div>
            <button class="remove-btn" type="button" on:click=move |_| on_remove.run(id)>
                "Remove X"
            </button>
        </li>
    }
}
