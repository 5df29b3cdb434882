//! Navigation Tree
//!
//! Validated, immutable menu tree and its flattened row layout.

use std::collections::HashSet;

use crate::error::NavTreeError;
use crate::item::{Badge, MenuItem};
use crate::state::NavState;

/// Deepest nesting accepted at construction (root items sit at depth 0)
pub const MAX_DEPTH: usize = 32;

/// Rendering switches that do not touch state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Mini mode: icons only, child lists suppressed
    pub collapsed: bool,
    /// Separator between top-level entries
    pub show_dividers: bool,
}

/// One selectable row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item: MenuItem,
    pub depth: usize,
    pub active: bool,
    pub expanded: bool,
    pub has_children: bool,
    pub collapsed: bool,
}

impl ItemRow {
    pub fn show_label(&self) -> bool {
        !self.collapsed
    }

    /// Zero counts and empty text are not shown
    pub fn show_badge(&self) -> bool {
        !self.collapsed && self.item.badge.as_ref().is_some_and(Badge::is_shown)
    }

    pub fn show_arrow(&self) -> bool {
        !self.collapsed && self.has_children
    }

    /// Label as hover text, only while collapsed
    pub fn tooltip(&self) -> Option<&str> {
        self.collapsed.then_some(self.item.label.as_str())
    }

    pub fn href(&self) -> &str {
        self.item.href.as_deref().unwrap_or("#")
    }

    pub fn link_class(&self) -> String {
        let mut class = String::from("sidebar-menu-link");
        if self.active {
            class.push_str(" sidebar-menu-link--active");
        }
        if self.item.disabled {
            class.push_str(" sidebar-menu-link--disabled");
        }
        class.push_str(&format!(" sidebar-menu-link--depth-{}", self.depth));
        class
    }
}

/// Flattened render model, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum NavRow {
    Item(ItemRow),
    /// Separator following the top-level item at `after`
    Divider { after: usize },
}

/// Identity of a row in the keyed list
///
/// Item ids are unique across a validated tree, so an item row is keyed by
/// its id alone. The state flags are part of the key so a row is rebuilt
/// whenever its look changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Item {
        id: String,
        active: bool,
        expanded: bool,
        collapsed: bool,
    },
    Divider(usize),
}

impl NavRow {
    pub fn render_key(&self) -> RowKey {
        match self {
            NavRow::Item(row) => RowKey::Item {
                id: row.item.id.clone(),
                active: row.active,
                expanded: row.expanded,
                collapsed: row.collapsed,
            },
            NavRow::Divider { after } => RowKey::Divider(*after),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavTree {
    items: Vec<MenuItem>,
}

impl NavTree {
    /// Validate and take ownership of the top-level items.
    ///
    /// Rejects duplicate ids anywhere in the tree and nesting at or beyond
    /// `MAX_DEPTH`.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, NavTreeError> {
        let mut seen = HashSet::new();
        validate(&items, 0, &mut seen)?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fresh state: `default_active_id` wins, else the first item flagged
    /// `active` in depth-first order
    pub fn initial_state(&self, default_active_id: Option<&str>) -> NavState {
        let active = default_active_id
            .map(str::to_string)
            .or_else(|| first_active(&self.items).map(|item| item.id.clone()));
        NavState::new(active)
    }

    pub fn rows(&self, state: &NavState, options: &RenderOptions) -> Vec<NavRow> {
        let mut rows = Vec::new();
        let last = self.items.len().saturating_sub(1);

        for (index, item) in self.items.iter().enumerate() {
            collect(item, 0, state, options, &mut rows);
            if options.show_dividers && index < last {
                rows.push(NavRow::Divider { after: index });
            }
        }
        rows
    }
}

fn validate(
    items: &[MenuItem],
    depth: usize,
    seen: &mut HashSet<String>,
) -> Result<(), NavTreeError> {
    for item in items {
        if depth >= MAX_DEPTH {
            return Err(NavTreeError::TooDeep {
                id: item.id.clone(),
                depth,
                max: MAX_DEPTH,
            });
        }
        if !seen.insert(item.id.clone()) {
            return Err(NavTreeError::DuplicateId { id: item.id.clone() });
        }
        validate(&item.children, depth + 1, seen)?;
    }
    Ok(())
}

fn first_active(items: &[MenuItem]) -> Option<&MenuItem> {
    items.iter().find_map(|item| {
        if item.active {
            Some(item)
        } else {
            first_active(&item.children)
        }
    })
}

fn collect(
    item: &MenuItem,
    depth: usize,
    state: &NavState,
    options: &RenderOptions,
    rows: &mut Vec<NavRow>,
) {
    let has_children = item.has_children();
    let expanded = state.is_expanded(&item.id);

    rows.push(NavRow::Item(ItemRow {
        item: item.clone(),
        depth,
        active: state.is_active(&item.id),
        expanded,
        has_children,
        collapsed: options.collapsed,
    }));

    if has_children && expanded && !options.collapsed {
        for child in &item.children {
            collect(child, depth + 1, state, options, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MenuItem> {
        vec![
            MenuItem::new("dashboard", "Dashboard").with_icon("▦"),
            MenuItem::new("users", "Users")
                .with_badge(Badge::Count(3))
                .with_children(vec![
                    MenuItem::new("all-users", "All Users"),
                    MenuItem::new("customers", "Customers").with_badge(Badge::Text("New".into())),
                ]),
            MenuItem::new("settings", "Settings").with_children(vec![
                MenuItem::new("general", "General Settings"),
                MenuItem::new("security", "Security"),
            ]),
            MenuItem::new("analytics", "Analytics").disabled(),
        ]
    }

    fn item_rows(rows: &[NavRow]) -> Vec<&ItemRow> {
        rows.iter()
            .filter_map(|row| match row {
                NavRow::Item(item) => Some(item),
                NavRow::Divider { .. } => None,
            })
            .collect()
    }

    fn nested(depth: usize) -> MenuItem {
        let mut item = MenuItem::new(format!("n{}", depth), "leaf");
        for level in (0..depth).rev() {
            item = MenuItem::new(format!("n{}", level), "node").with_children(vec![item]);
        }
        item
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![MenuItem::new("x", "First"), MenuItem::new("x", "Second")];
        assert_eq!(
            NavTree::new(items).unwrap_err(),
            NavTreeError::DuplicateId { id: "x".into() }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected_across_levels() {
        let items = vec![
            MenuItem::new("a", "A").with_children(vec![MenuItem::new("shared", "Child")]),
            MenuItem::new("shared", "Top"),
        ];
        assert_eq!(
            NavTree::new(items).unwrap_err(),
            NavTreeError::DuplicateId { id: "shared".into() }
        );
    }

    #[test]
    fn test_depth_limit() {
        assert!(NavTree::new(vec![nested(MAX_DEPTH - 1)]).is_ok());

        let err = NavTree::new(vec![nested(MAX_DEPTH)]).unwrap_err();
        assert_eq!(
            err,
            NavTreeError::TooDeep {
                id: format!("n{}", MAX_DEPTH),
                depth: MAX_DEPTH,
                max: MAX_DEPTH,
            }
        );
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        let tree = NavTree::new(vec![]).unwrap();
        assert!(tree.is_empty());
        let options = RenderOptions { collapsed: false, show_dividers: true };
        assert!(tree.rows(&NavState::default(), &options).is_empty());
    }

    #[test]
    fn test_initial_state() {
        let items = vec![
            MenuItem::new("a", "A").with_children(vec![MenuItem::new("a1", "A1").active()]),
            MenuItem::new("b", "B").active(),
        ];
        let tree = NavTree::new(items).unwrap();

        assert_eq!(tree.initial_state(None).active_id(), Some("a1"));
        assert_eq!(tree.initial_state(Some("b")).active_id(), Some("b"));

        let plain = NavTree::new(vec![MenuItem::new("a", "A")]).unwrap();
        assert_eq!(plain.initial_state(None).active_id(), None);
    }

    #[test]
    fn test_rows_follow_expansion() {
        let tree = NavTree::new(sample()).unwrap();
        let mut state = NavState::default();
        let options = RenderOptions::default();

        let rows = tree.rows(&state, &options);
        assert_eq!(item_rows(&rows).len(), 4);

        state.click(&tree.items()[1], false);
        let rows = tree.rows(&state, &options);
        let items = item_rows(&rows);
        let order: Vec<(&str, usize)> = items.iter().map(|r| (r.item.id.as_str(), r.depth)).collect();
        assert_eq!(
            order,
            vec![
                ("dashboard", 0),
                ("users", 0),
                ("all-users", 1),
                ("customers", 1),
                ("settings", 0),
                ("analytics", 0),
            ]
        );
        assert!(items[1].active && items[1].expanded && items[1].show_arrow());
        assert!(items[3].show_badge());
        assert!(items[5].link_class().contains("sidebar-menu-link--disabled"));
        assert_eq!(items[2].link_class(), "sidebar-menu-link sidebar-menu-link--depth-1");
    }

    #[test]
    fn test_collapsed_suppresses_children() {
        let tree = NavTree::new(sample()).unwrap();
        let mut state = NavState::default();
        state.click(&tree.items()[1], false);
        assert!(state.is_expanded("users"));

        let collapsed = RenderOptions { collapsed: true, show_dividers: false };
        let rows = tree.rows(&state, &collapsed);
        let items = item_rows(&rows);

        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|r| r.depth == 0));
        // membership survives collapsing
        assert!(state.is_expanded("users"));

        let users = items[1];
        assert!(!users.show_label());
        assert!(!users.show_badge());
        assert!(!users.show_arrow());
        assert_eq!(users.tooltip(), Some("Users"));
    }

    #[test]
    fn test_dividers_between_top_level_only() {
        let tree = NavTree::new(sample()).unwrap();
        let mut state = NavState::default();
        state.click(&tree.items()[1], false);
        state.click(&tree.items()[2], false);

        let options = RenderOptions { collapsed: false, show_dividers: true };
        let rows = tree.rows(&state, &options);

        let dividers: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, NavRow::Divider { .. }))
            .map(|(index, _)| index)
            .collect();
        assert_eq!(dividers.len(), tree.items().len() - 1);

        for index in dividers {
            assert!(index > 0);
            match &rows[index + 1] {
                NavRow::Item(next) => assert_eq!(next.depth, 0),
                NavRow::Divider { .. } => panic!("two dividers in a row"),
            }
        }
        assert!(matches!(rows.last(), Some(NavRow::Item(_))));
    }

    #[test]
    fn test_dividers_disabled() {
        let tree = NavTree::new(sample()).unwrap();
        let options = RenderOptions { collapsed: false, show_dividers: false };
        let rows = tree.rows(&NavState::default(), &options);
        assert!(rows.iter().all(|row| matches!(row, NavRow::Item(_))));
    }

    #[test]
    fn test_render_key_tracks_state() {
        let tree = NavTree::new(sample()).unwrap();
        let mut state = NavState::default();
        let options = RenderOptions::default();

        let before = tree.rows(&state, &options)[0].render_key();
        state.click(&tree.items()[0], false);
        let after = tree.rows(&state, &options)[0].render_key();
        assert_ne!(before, after);
    }

    #[test]
    fn test_render_keys_distinct_with_dashed_ids() {
        let items = vec![
            MenuItem::new("x", "X").with_children(vec![MenuItem::new("y-z", "YZ")]),
            MenuItem::new("x-y", "XY").with_children(vec![MenuItem::new("z", "Z")]),
        ];
        let tree = NavTree::new(items).unwrap();
        let mut state = NavState::default();
        state.click(&tree.items()[0], false);
        state.click(&tree.items()[1], false);

        let options = RenderOptions { collapsed: false, show_dividers: true };
        let rows = tree.rows(&state, &options);
        assert_eq!(item_rows(&rows).len(), 4);

        let keys: HashSet<RowKey> = rows.iter().map(NavRow::render_key).collect();
        assert_eq!(keys.len(), rows.len());
    }

    #[test]
    fn test_empty_badges_hidden() {
        let items = vec![
            MenuItem::new("zero", "Zero").with_badge(Badge::Count(0)),
            MenuItem::new("blank", "Blank").with_badge(Badge::Text(String::new())),
            MenuItem::new("one", "One").with_badge(Badge::Count(1)),
        ];
        let tree = NavTree::new(items).unwrap();
        let rows = tree.rows(&NavState::default(), &RenderOptions::default());
        let shown: Vec<bool> = item_rows(&rows).iter().map(|r| r.show_badge()).collect();
        assert_eq!(shown, vec![false, false, true]);
    }
}
