//! Leptos Navigation Tree
//!
//! Nested, collapsible sidebar menu. The tree logic (validation, click
//! transitions, row layout) is plain Rust and renders without a browser;
//! `SidebarMenu` is the Leptos view on top of it.

mod component;
mod error;
mod item;
mod state;
mod tree;

pub use component::SidebarMenu;
pub use error::NavTreeError;
pub use item::{Badge, MenuItem};
pub use state::{ClickOutcome, NavState};
pub use tree::{ItemRow, NavRow, NavTree, RenderOptions, RowKey, MAX_DEPTH};
