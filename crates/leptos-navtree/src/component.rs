//! Sidebar Menu Component
//!
//! Renders a `NavTree` as a keyed list of rows. Expansion and active state
//! live in a signal owned by the component instance.

use leptos::prelude::*;

use crate::item::MenuItem;
use crate::state::{ClickOutcome, NavState};
use crate::tree::{ItemRow, NavRow, NavTree, RenderOptions};

const ARROW_PATH: &str = "M7.41 8.59L12 13.17l4.59-4.58L18 10l-6 6-6-6 1.41-1.41z";

/// Nested, collapsible navigation menu
///
/// # Arguments
/// * `items` - Top-level menu items; ids must be unique across the tree
/// * `collapsed` - Mini mode: icons only, no labels, badges or child lists
/// * `default_active_id` - Initial active item
/// * `on_item_click` - Called with the clicked item for every accepted click
#[component]
pub fn SidebarMenu(
    items: Vec<MenuItem>,
    #[prop(into, default = Signal::stored(false))] collapsed: Signal<bool>,
    #[prop(default = None)] default_active_id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = true)] show_dividers: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_item_click: Option<Callback<MenuItem>>,
) -> impl IntoView {
    let tree = match NavTree::new(items) {
        Ok(tree) => tree,
        Err(err) => {
            log::error!("[SidebarMenu] Rejected menu: {}", err);
            return view! {
                <nav class="sidebar-menu sidebar-menu--invalid" aria-label="Main navigation">
                    <ul class="sidebar-menu-list"></ul>
                </nav>
            }
            .into_any();
        }
    };

    let state = RwSignal::new(tree.initial_state(default_active_id.as_deref()));
    let tree = StoredValue::new(tree);

    let rows = move || {
        let options = RenderOptions {
            collapsed: collapsed.get(),
            show_dividers,
        };
        state.with(|state| tree.with_value(|tree| tree.rows(state, &options)))
    };

    let nav_class = move || {
        let mut c = String::from("sidebar-menu");
        if collapsed.get() {
            c.push_str(" sidebar-menu--collapsed");
        }
        if !class.is_empty() {
            c.push(' ');
            c.push_str(&class);
        }
        c
    };

    view! {
        <nav class=nav_class aria-label="Main navigation">
            {move || {
                title.clone().filter(|_| !collapsed.get()).map(|title| view! {
                    <div class="sidebar-menu-header">
                        <h2 class="sidebar-menu-title">{title}</h2>
                    </div>
                })
            }}

            <ul class="sidebar-menu-list">
                <For
                    each=rows
                    key=|row| row.render_key()
                    children=move |row| match row {
                        NavRow::Divider { .. } => view! {
                            <li class="sidebar-menu-divider" role="separator"></li>
                        }.into_any(),
                        NavRow::Item(row) => view! {
                            <MenuRow
                                row=row
                                state=state
                                collapsed=collapsed
                                on_item_click=on_item_click
                            />
                        }.into_any(),
                    }
                />
            </ul>
        </nav>
    }
    .into_any()
}

/// A single menu row
#[component]
fn MenuRow(
    row: ItemRow,
    state: RwSignal<NavState>,
    collapsed: Signal<bool>,
    on_item_click: Option<Callback<MenuItem>>,
) -> impl IntoView {
    let item = row.item.clone();
    let indent = row.depth * 16;

    let on_click = move |ev: web_sys::MouseEvent| {
        let is_collapsed = collapsed.get_untracked();
        let outcome = state
            .try_update(|state| state.click(&item, is_collapsed))
            .unwrap_or(ClickOutcome::Suppressed);

        match outcome {
            ClickOutcome::Suppressed => ev.prevent_default(),
            // Leave href leaves to the browser
            ClickOutcome::Navigated => {}
            _ => {
                ev.prevent_default();
                if let Some(href) = item.href.as_deref() {
                    log::info!("[SidebarMenu] Navigating to: {}", href);
                }
            }
        }

        log::debug!("[SidebarMenu] Click on '{}': {:?}", item.id, outcome);
        if outcome.notifies() {
            if let Some(callback) = on_item_click {
                callback.run(item.clone());
            }
        }
    };

    let label = row.show_label().then(|| {
        view! { <span class="sidebar-menu-label">{row.item.label.clone()}</span> }
    });
    let badge = row.show_badge().then(|| {
        let text = row.item.badge.as_ref().map(|b| b.to_string()).unwrap_or_default();
        view! { <span class="sidebar-menu-badge">{text}</span> }
    });
    let arrow = row.show_arrow().then(|| {
        let arrow_class = if row.expanded {
            "sidebar-menu-arrow-icon sidebar-menu-arrow-icon--expanded"
        } else {
            "sidebar-menu-arrow-icon"
        };
        view! {
            <span class="sidebar-menu-arrow">
                <svg class=arrow_class viewBox="0 0 24 24">
                    <path d=ARROW_PATH />
                </svg>
            </span>
        }
    });
    let icon = row.item.icon.clone().map(|icon| {
        view! { <span class="sidebar-menu-icon">{icon}</span> }
    });

    view! {
        <li class="sidebar-menu-item">
            <a
                href=row.href().to_string()
                class=row.link_class()
                style=format!("padding-left: {}px;", 12 + indent)
                title=row.tooltip().map(str::to_string)
                aria-current=row.active.then_some("page")
                aria-expanded=row.has_children.then(|| row.expanded.to_string())
                on:click=on_click
            >
                {icon}
                {label}
                {badge}
                {arrow}
            </a>
        </li>
    }
}
