//! Inventaire Frontend App
//!
//! Main application component: header with total, search bar, list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ConsumableList, SearchBar};
use crate::inventory::{format_eur, total_value};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide state to all children
    provide_context(store);

    let abort = api::scope_abort_signal();

    // Load the collection exactly once, on mount. The input stays live
    // while the request is in flight, filtering an empty collection.
    Effect::new(move |_| {
        let abort = abort.clone();
        spawn_local(async move {
            match api::list_consumables(abort).await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} consumables", items.len()).into(),
                    );
                    store.items().set(items);
                }
                // A teardown abort is not a failure, nothing to log.
                Err(e) if e.is_abort() => {}
                Err(e) => {
                    // Degrade to an empty inventory, no user-visible error.
                    web_sys::console::error_1(
                        &format!("[APP] Failed to load consumables: {}", e).into(),
                    );
                }
            }
        });
    });

    // Always computed over the unfiltered collection.
    let total = move || format_eur(total_value(&store.items().get()));

    view! {
        <div class="app">
            <header class="app-header">
                <h2>"Inventaire — Consommables"</h2>
                <div class="total">"Valeur totale: "<strong>{total}</strong></div>
            </header>

            <SearchBar />

            <ConsumableList />
        </div>
    }
}
