//! UI Components
//!
//! Reusable Leptos components.

mod consumable_list;
mod search_bar;

pub use consumable_list::ConsumableList;
pub use search_bar::SearchBar;
