//! Search Bar Component
//!
//! Single text input bound to the store's search text. Typing only
//! narrows the rendered list, it never triggers a refetch.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="controls">
            <input
                type="text"
                placeholder="Recherche"
                prop:value=move || store.query().get()
                on:input=move |ev| store.query().set(event_target_value(&ev))
            />
        </div>
    }
}
