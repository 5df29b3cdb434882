//! Menu Item Model
//!
//! Caller-supplied tree nodes. Deserializable so menus can live in config.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counter or short text shown next to a label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    Count(u32),
    Text(String),
}

impl Badge {
    /// False for a zero count or empty text
    pub fn is_shown(&self) -> bool {
        match self {
            Badge::Count(n) => *n != 0,
            Badge::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Count(n) => write!(f, "{}", n),
            Badge::Text(text) => f.write_str(text),
        }
    }
}

/// A node of the navigation tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    /// Must be unique across the whole tree
    pub id: String,
    pub label: String,
    /// Opaque icon handle (glyph or icon name), rendered as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Absent and empty both mean "leaf"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Initial-active hint, only consulted when no default id is given
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Expandable nodes have at least one child
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Href without children: navigation is left to the browser
    pub fn is_link_leaf(&self) -> bool {
        self.href.is_some() && !self.has_children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_children_is_leaf() {
        let item = MenuItem::new("a", "A").with_children(vec![]);
        assert!(!item.has_children());

        let linked = MenuItem::new("b", "B").with_href("/b").with_children(vec![]);
        assert!(linked.is_link_leaf());
    }

    #[test]
    fn test_href_with_children_is_not_link_leaf() {
        let item = MenuItem::new("a", "A")
            .with_href("/a")
            .with_children(vec![MenuItem::new("a1", "A1")]);
        assert!(item.has_children());
        assert!(!item.is_link_leaf());
    }

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Count(3).to_string(), "3");
        assert_eq!(Badge::Text("New".into()).to_string(), "New");
    }

    #[test]
    fn test_badge_shown_only_when_non_empty() {
        assert!(Badge::Count(3).is_shown());
        assert!(Badge::Text("New".into()).is_shown());
        assert!(!Badge::Count(0).is_shown());
        assert!(!Badge::Text(String::new()).is_shown());
    }
}
