//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ToastEntry, ToastKind};

/// Showcase page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShowcaseState {
    /// Toasts currently on screen, oldest first
    pub toasts: Vec<ToastEntry>,
    /// Next toast id; ids are never reused
    pub next_toast_id: u64,
    /// Sidebar mini mode
    pub menu_collapsed: bool,
}

/// Type alias for the store
pub type ShowcaseStore = Store<ShowcaseState>;

/// Get the showcase store from context
pub fn use_showcase_store() -> ShowcaseStore {
    expect_context::<ShowcaseStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Queue a toast and return its id
pub fn store_push_toast(store: &ShowcaseStore, kind: ToastKind, message: String) -> u64 {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(ToastEntry { id, kind, message });
    id
}

/// Remove a toast by ID; unknown ids are ignored
pub fn store_remove_toast(store: &ShowcaseStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Flip sidebar mini mode
pub fn store_toggle_menu(store: &ShowcaseStore) {
    store.menu_collapsed().update(|collapsed| *collapsed = !*collapsed);
}
