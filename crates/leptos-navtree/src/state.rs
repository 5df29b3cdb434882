//! Navigation State
//!
//! Transient UI state of one menu instance: the active pointer and the
//! expansion set, both keyed by raw item id.

use std::collections::HashSet;

use crate::item::MenuItem;

/// Result of a click, in decision order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Disabled item: nothing changed, caller is not notified
    Suppressed,
    /// Href leaf: state untouched, browser handles navigation
    Navigated,
    /// Expandable item toggled; `expanded` is the new membership
    Toggled { expanded: bool },
    /// Plain leaf became active
    Activated,
}

impl ClickOutcome {
    /// Whether the click callback fires for this outcome
    pub fn notifies(&self) -> bool {
        !matches!(self, ClickOutcome::Suppressed)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    active_id: Option<String>,
    expanded: HashSet<String>,
}

impl NavState {
    pub fn new(active_id: Option<String>) -> Self {
        Self {
            active_id,
            expanded: HashSet::new(),
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// Apply a click on `item`.
    ///
    /// Branches are checked in order: disabled, href leaf, expandable,
    /// plain leaf. Expandable items only take the active pointer while the
    /// menu is not collapsed.
    pub fn click(&mut self, item: &MenuItem, collapsed: bool) -> ClickOutcome {
        if item.disabled {
            return ClickOutcome::Suppressed;
        }

        if item.is_link_leaf() {
            return ClickOutcome::Navigated;
        }

        if item.has_children() {
            let expanded = if self.expanded.remove(&item.id) {
                false
            } else {
                self.expanded.insert(item.id.clone());
                true
            };
            if !collapsed {
                self.active_id = Some(item.id.clone());
            }
            return ClickOutcome::Toggled { expanded };
        }

        self.active_id = Some(item.id.clone());
        ClickOutcome::Activated
    }
}
