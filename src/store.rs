//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Consumable;

/// The whole view state: one immutable snapshot of the inventory plus
/// the live search text. The snapshot is written once by the mount
/// fetch and never mutated item-by-item.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Consumables as returned by the backend, unfiltered
    pub items: Vec<Consumable>,
    /// Current search text, updated on every keystroke
    pub query: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
