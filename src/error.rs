//! Error types for editor profile operations.
//!
//! The validator never produces these: it reports problems through
//! [`ValidationResult`](crate::validate::ValidationResult). `ProfileError`
//! covers everything around it (file loading, save rules, builder edits,
//! site data, CLI plumbing).

use thiserror::Error;

/// Primary error type for editor profile operations.
#[derive(Error, Debug)]
pub enum ProfileError {
    // Profile document errors
    #[error("Profile file not found: {path}")]
    ProfileNotFound { path: String },

    #[error("Profile parse error: {0}")]
    ProfileParse(String),

    #[error("Profile configuration is invalid: {}", errors.join("; "))]
    InvalidProfile { errors: Vec<String> },

    // Save rules
    #[error("Profile name is required")]
    NameRequired,

    #[error("Toolbar has no items configured")]
    EmptyToolbar,

    // Lookup errors
    #[error("Unknown profile template: {id}")]
    UnknownTemplate { id: String },

    #[error("Unknown item category: {0}")]
    UnknownCategory(String),

    // Site association errors
    #[error("Profile '{id}' is still assigned to {} site(s): {}", sites.len(), sites.join(", "))]
    ProfileInUse { id: String, sites: Vec<String> },

    #[error("Site data error: {0}")]
    SiteData(String),

    // Builder errors
    #[error("Builder item not found: {id}")]
    BuilderItemNotFound { id: String },

    #[error("Incomplete group: {0}")]
    IncompleteGroup(String),

    #[error("Incomplete style: {0}")]
    IncompleteStyle(String),

    // General errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl ProfileError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound { .. }
                | Self::ProfileParse(_)
                | Self::InvalidProfile { .. }
                | Self::NameRequired
                | Self::EmptyToolbar
                | Self::UnknownTemplate { .. }
                | Self::UnknownCategory(_)
                | Self::ProfileInUse { .. }
                | Self::IncompleteGroup(_)
                | Self::IncompleteStyle(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ProfileNotFound { .. } => Some("Check the path, or pass '-' to read from stdin"),
            Self::InvalidProfile { .. } => Some("Run: edprof validate <FILE> for the full report"),
            Self::NameRequired => Some("Give the profile a non-blank name"),
            Self::EmptyToolbar => Some("Add at least one toolbar item before saving"),
            Self::UnknownTemplate { .. } => Some("Run: edprof template to list templates"),
            Self::UnknownCategory(_) => Some(
                "Use one of: text-formatting, color-controls, structure, \
                 lists-indentation, links, media-tables, advanced",
            ),
            Self::ProfileInUse { .. } => Some("Unassign the profile from these sites first"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using ProfileError.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| ProfileError::Other(format!("{}: {e}", f().into())))
    }
}
