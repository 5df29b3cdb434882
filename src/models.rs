//! Frontend Models
//!
//! Data structures shared by the toast components, the store and config.

use serde::{Deserialize, Serialize};

/// Toast flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }

    /// SVG path for the leading icon
    pub fn icon_path(&self) -> &'static str {
        match self {
            ToastKind::Success => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
            ToastKind::Error => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z",
            ToastKind::Warning => "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z",
            ToastKind::Info => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z",
        }
    }
}

/// Screen corner or edge a toast stack is pinned to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

impl ToastPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::BottomCenter => "bottom-center",
        }
    }
}

/// A queued notification
#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}
