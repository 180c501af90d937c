//! Consumable List Component
//!
//! Renders the items matching the current search text.

use leptos::prelude::*;

use crate::inventory::{filter_items, format_eur};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ConsumableList() -> impl IntoView {
    let store = use_app_store();

    let filtered = move || filter_items(&store.items().get(), &store.query().get());

    view! {
        <ul class="list">
            <For
                each=filtered
                key=|item| item.id
                children=move |item| {
                    let name = item.name.clone().unwrap_or_default();
                    let reference = item.reference.clone().unwrap_or_default();
                    let line = format!("{} × {}", item.quantity, format_eur(item.price_eur));
                    view! {
                        <li class="item">
                            <div class="left">
                                <div class="name">{name}</div>
                                <div class="ref">{reference}</div>
                            </div>
                            <div class="right">{line}</div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
