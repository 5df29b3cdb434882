//! Toast Component
//!
//! Timed notification with a draining progress bar. The timing rules live in
//! `ToastLifecycle` so they can be tested without a browser.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

use crate::config::DEFAULT_AUTO_CLOSE_MS;
use crate::models::{ToastKind, ToastPosition};

/// Progress update period
pub const TICK_MS: u32 = 50;
/// Delay between hiding and reporting close, for the exit animation
pub const EXIT_DELAY_MS: u32 = 300;

const CLOSE_PATH: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";

/// Auto-dismiss state of one toast
#[derive(Debug, Clone, PartialEq)]
pub struct ToastLifecycle {
    progress: f64,
    /// Percent drained per tick; `None` when auto-close is off
    step: Option<f64>,
    closing: bool,
}

impl ToastLifecycle {
    pub fn new(auto_close_ms: Option<u32>) -> Self {
        Self {
            progress: 100.0,
            step: auto_close_ms.map(|ms| 100.0 / (ms as f64 / TICK_MS as f64)),
            closing: false,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress.max(0.0)
    }

    pub fn is_visible(&self) -> bool {
        !self.closing
    }

    pub fn auto_closes(&self) -> bool {
        self.step.is_some()
    }

    /// Whether the progress timer still has work to do
    pub fn is_ticking(&self) -> bool {
        self.auto_closes() && !self.closing
    }

    /// Advance one tick. Returns true when this tick starts closing.
    pub fn tick(&mut self) -> bool {
        let Some(step) = self.step else {
            return false;
        };
        if self.closing {
            return false;
        }
        if self.progress <= 0.0 {
            self.progress = 0.0;
            return self.close();
        }
        self.progress -= step;
        false
    }

    /// Hide the toast. Returns false if it was already closing.
    pub fn close(&mut self) -> bool {
        if self.closing {
            return false;
        }
        self.closing = true;
        true
    }
}

#[component]
pub fn Toast(
    #[prop(optional)] kind: ToastKind,
    #[prop(optional, into)] title: Option<String>,
    #[prop(into)] message: String,
    #[prop(optional)] position: ToastPosition,
    #[prop(default = Some(DEFAULT_AUTO_CLOSE_MS))] auto_close: Option<u32>,
    #[prop(default = true)] close_button: bool,
    #[prop(default = true)] show_progress: bool,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let lifecycle = RwSignal::new(ToastLifecycle::new(auto_close));
    let exit_timer = StoredValue::new_local(None::<Timeout>);
    let ticker = StoredValue::new_local(None::<Interval>);

    let begin_close = move || {
        if lifecycle.try_update(|l| l.close()).unwrap_or(false) {
            // Stop ticking now; the callback may be running, so its closure
            // is released from the exit timer instead
            let stopped = ticker.try_update_value(Option::take).flatten().map(Interval::cancel);
            let timeout = Timeout::new(EXIT_DELAY_MS, move || {
                drop(stopped);
                if let Some(on_close) = on_close {
                    on_close.run(());
                }
            });
            exit_timer.set_value(Some(timeout));
        }
    };

    if lifecycle.with_untracked(|l| l.is_ticking()) {
        let interval = Interval::new(TICK_MS, move || {
            if lifecycle.try_update(|l| l.tick()).unwrap_or(false) {
                log::debug!("[Toast] Auto-close elapsed");
                begin_close();
            }
        });
        ticker.set_value(Some(interval));
        // Dropping the interval cancels it
        on_cleanup(move || ticker.set_value(None));
    }

    let toast_class = format!(
        "toast {} toast--{} {}",
        kind.class(),
        position.as_str(),
        class
    );

    let body = view! {
        <div class="toast-content">
            <div class="toast-icon-wrapper">
                <svg class="toast-icon" viewBox="0 0 24 24">
                    <path d=kind.icon_path() />
                </svg>
            </div>

            <div class="toast-body">
                {title.map(|title| view! { <div class="toast-title">{title}</div> })}
                <div class="toast-message">{message}</div>
            </div>

            {close_button.then(|| view! {
                <button
                    type="button"
                    class="toast-close"
                    aria-label="Close notification"
                    on:click=move |_| begin_close()
                >
                    <svg class="toast-close-icon" viewBox="0 0 24 24">
                        <path d=CLOSE_PATH />
                    </svg>
                </button>
            })}
        </div>

        {(show_progress && auto_close.is_some()).then(|| view! {
            <div class="toast-progress">
                <div
                    class="toast-progress-bar"
                    style=move || format!("width: {}%", lifecycle.with(|l| l.progress()))
                />
            </div>
        })}
    };

    view! {
        <div
            class=toast_class
            id=id
            role="alert"
            aria-live="assertive"
            aria-atomic="true"
            style:display=move || if lifecycle.with(|l| l.is_visible()) { "" } else { "none" }
        >
            {body}
        </div>
    }
}

/// Stacks toasts at one screen position
#[component]
pub fn ToastContainer(#[prop(optional)] position: ToastPosition, children: Children) -> impl IntoView {
    view! {
        <div class=format!("toast-container toast-container--{}", position.as_str())>
            {children()}
        </div>
    }
}
