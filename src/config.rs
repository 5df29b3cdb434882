//! Showcase Configuration
//!
//! Page settings and the demo menu, embedded at build time from
//! `assets/showcase.json`.

use leptos_navtree::{MenuItem, NavTree, NavTreeError};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::models::ToastPosition;

const EMBEDDED_CONFIG: &str = include_str!("../assets/showcase.json");

/// Default auto-close for toasts, in milliseconds
pub const DEFAULT_AUTO_CLOSE_MS: u32 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid menu: {0}")]
    Menu(#[from] NavTreeError),

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarConfig {
    pub collapsed: bool,
    pub show_dividers: bool,
    pub default_active_id: Option<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            collapsed: false,
            show_dividers: true,
            default_active_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastConfig {
    /// `null` keeps toasts until closed by hand
    pub auto_close_ms: Option<u32>,
    pub position: ToastPosition,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: Some(DEFAULT_AUTO_CLOSE_MS),
            position: ToastPosition::default(),
        }
    }
}

/// External link shown in the page footer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseConfig {
    pub title: String,
    pub log_level: String,
    pub sidebar: SidebarConfig,
    pub toast: ToastConfig,
    pub menu: Vec<MenuItem>,
    pub footer_links: Vec<FooterLink>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: "Component Library".to_string(),
            log_level: "info".to_string(),
            sidebar: SidebarConfig::default(),
            toast: ToastConfig::default(),
            menu: Vec::new(),
            footer_links: Vec::new(),
        }
    }
}

impl ShowcaseConfig {
    /// Parse and validate a config document
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: ShowcaseConfig = serde_json::from_str(text)?;
        NavTree::new(config.menu.clone())?;
        config.log_level()?;
        Ok(config)
    }

    /// Load the embedded config, falling back to defaults on error
    pub fn load() -> Self {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("[Config] {}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = ShowcaseConfig::parse(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.menu.len(), 4);
        assert!(config.sidebar.show_dividers);
        assert_eq!(config.toast.auto_close_ms, Some(DEFAULT_AUTO_CLOSE_MS));
        assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);
        assert!(config.footer_links.iter().all(|link| link.url.starts_with("https://")));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ShowcaseConfig::parse(r#"{ "title": "Demo" }"#).unwrap();
        assert_eq!(config.title, "Demo");
        assert_eq!(config.sidebar, SidebarConfig::default());
        assert_eq!(config.toast.position, ToastPosition::TopRight);
        assert!(config.menu.is_empty());
    }

    #[test]
    fn test_disabled_auto_close() {
        let config = ShowcaseConfig::parse(r#"{ "toast": { "autoCloseMs": null } }"#).unwrap();
        assert_eq!(config.toast.auto_close_ms, None);
    }

    #[test]
    fn test_duplicate_menu_ids_rejected() {
        let text = r#"{ "menu": [
            { "id": "home", "label": "Home" },
            { "id": "more", "label": "More", "children": [{ "id": "home", "label": "Again" }] }
        ] }"#;
        let err = ShowcaseConfig::parse(text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Menu(NavTreeError::DuplicateId { ref id }) if id == "home"
        ));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = ShowcaseConfig::parse(r#"{ "logLevel": "chatty" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(_)));
    }
}
