//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::ToastKind;
use crate::store::{store_push_toast, store_remove_toast, ShowcaseStore};

/// App-wide notification handle
#[derive(Clone, Copy)]
pub struct AppContext {
    store: ShowcaseStore,
    /// Auto-close for every toast; `None` keeps them until closed
    pub auto_close_ms: Option<u32>,
}

impl AppContext {
    pub fn new(store: ShowcaseStore, auto_close_ms: Option<u32>) -> Self {
        Self { store, auto_close_ms }
    }

    /// Show a toast. The queue drops it on its own timer as well, in case the
    /// toast never reports closing.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = store_push_toast(&self.store, kind, message.into());
        if let Some(ms) = self.auto_close_ms {
            let store = self.store;
            spawn_local(async move {
                TimeoutFuture::new(ms).await;
                store_remove_toast(&store, id);
            });
        }
    }

    pub fn dismiss(&self, id: u64) {
        store_remove_toast(&self.store, id);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
