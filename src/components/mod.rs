//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod input;
mod toast;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use input::{Input, InputType};
pub use toast::{Toast, ToastContainer};
