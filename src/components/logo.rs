use leptos::prelude::*;

#[component]
pub fn Logo() -> impl IntoView {
    view! { <h1>"My Travel List"</h1> }
}
