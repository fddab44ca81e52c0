//! Packing List App
//!
//! Root component: owns the item store and is the only place it is written.

use leptos::prelude::*;

use crate::components::{AddItemForm, Logo, PackingList, StatsFooter};
use crate::config::AppConfig;
use crate::item_list::IdGenerator;
use crate::models::Item;
use crate::repository::ItemRepository;
use crate::storage::BrowserStorage;
use crate::store::{store_add_item, store_remove_item, store_set_items, PackingState, PackingStateStoreFields, PackingStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let repo = ItemRepository::new(BrowserStorage, config.storage_key);
    let initial = repo.load_or(&config.default_items);
    log::info!("[APP] Starting with {} items", initial.len());

    let ids = StoredValue::new(IdGenerator::seeded(&initial));
    let repo = StoredValue::new(repo);
    let store: PackingStore = PackingStore::new(PackingState { items: initial });
    let items = Signal::derive(move || store.items().get());

    let next_id = Callback::new(move |_: ()| {
        let now = js_sys::Date::now() as u64;
        ids.try_update_value(|generator| generator.next(now)).unwrap_or(now)
    });
    let add_item = Callback::new(move |item: Item| {
        repo.with_value(|repo| store_add_item(&store, repo, item));
    });
    let remove_item = Callback::new(move |id: u64| {
        repo.with_value(|repo| store_remove_item(&store, repo, id));
    });
    let set_items = Callback::new(move |next: Vec<Item>| {
        repo.with_value(|repo| store_set_items(&store, repo, next));
    });

    view! {
        <div class="app">
            <Logo />
            <AddItemForm next_id=next_id on_add=add_item />
            <StatsFooter items=items />
            <PackingList items=items on_remove=remove_item on_check=set_items />
        </div>
    }
}
