//! # Notices
//!
//! User-facing success/error messages for storefront actions. Every failure
//! surfaced to the user goes through [`Notice::from`] so wording stays
//! consistent between screens and the headless binary.

use std::fmt;

use crate::core::error::AppError;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A titled message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Show a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    /// Show an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    pub fn item_added() -> Self {
        Self::success("Item added to cart!")
    }

    pub fn category_created() -> Self {
        Self::success("Category created successfully!")
    }

    pub fn category_deleted() -> Self {
        Self::success("Category deleted successfully!")
    }

    pub fn menu_created() -> Self {
        Self::success("Menu created successfully")
    }

    /// Error notice for a failed action, keeping validation messages verbatim
    /// and replacing transport/server detail with the action's own wording.
    pub fn failed(fallback: &str, error: &AppError) -> Self {
        match error {
            AppError::Validation(message) => Self::error(message.clone()),
            AppError::Cancelled => Self::from(error),
            _ => Self::error(fallback),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::Validation(message) | AppError::OperationFailed(message) => {
                Self::error(message.clone())
            }
            AppError::Network(_) => Self::error("Something went wrong. Please try again."),
            AppError::Decode(_) => Self::error("Unexpected response from server."),
            AppError::Cancelled => Self::error("Operation cancelled"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
