use thiserror::Error;

/// Reasons a menu tree is rejected at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavTreeError {
    /// Two items share an id; active and expanded state are keyed by id alone
    #[error("duplicate menu item id '{id}'")]
    DuplicateId { id: String },

    /// Nesting exceeds the supported depth
    #[error("menu item '{id}' sits at depth {depth}, deeper than the limit of {max}")]
    TooDeep { id: String, depth: usize, max: usize },
}
