//! Menu Item Error Types
//!
//! Menu-item-specific error variants that render through the unified
//! `kernel::error::AppError` problem-details response. Form validation
//! failures keep the `{"errors": {...}}` body the front end reads.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind, validation::ValidationErrors};
use kernel::id::MenuItemId;
use thiserror::Error;

/// Menu-item-specific result type alias
pub type MenuItemResult<T> = Result<T, MenuItemError>;

#[derive(Debug, Error)]
pub enum MenuItemError {
    /// No record with this id
    #[error("Menu item couldn't be found")]
    NotFound(MenuItemId),

    /// Submitted form failed validation
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Record still readable after a committed delete
    #[error("Menu item {0} still exists after delete")]
    DeleteNotConfirmed(MenuItemId),

    /// Path, query or body could not be extracted
    #[error("{0}")]
    InvalidRequest(String),

    /// Stored row does not map onto the domain model
    #[error("Corrupt menu item record: {0}")]
    CorruptRecord(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MenuItemError {
    /// Get the ErrorKind for this error
    ///
    /// Database errors are refined by the kernel mapping when rendered
    /// (pool exhaustion becomes 503).
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuItemError::NotFound(_) => ErrorKind::NotFound,
            MenuItemError::Validation(_) | MenuItemError::InvalidRequest(_) => {
                ErrorKind::BadRequest
            }
            MenuItemError::DeleteNotConfirmed(_)
            | MenuItemError::CorruptRecord(_)
            | MenuItemError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MenuItemError::Database(e) => {
                tracing::error!(error = %e, "Menu item database error");
            }
            MenuItemError::DeleteNotConfirmed(id) => {
                tracing::error!(menu_item_id = %id, "Menu item survived delete");
            }
            MenuItemError::CorruptRecord(msg) => {
                tracing::error!(message = %msg, "Corrupt menu item record");
            }
            MenuItemError::Validation(errors) => {
                tracing::debug!(fields = %errors, "Menu item form rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Menu item error");
            }
        }
    }
}

impl From<MenuItemError> for AppError {
    fn from(err: MenuItemError) -> Self {
        match err {
            MenuItemError::Database(e) => AppError::from(e),
            MenuItemError::DeleteNotConfirmed(_) => {
                AppError::internal("Failed to delete menu item")
            }
            MenuItemError::CorruptRecord(_) => AppError::internal("Failed to load menu item"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for MenuItemError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            MenuItemError::Validation(errors) => errors.into_response(),
            other => AppError::from(other).into_response(),
        }
    }
}

impl From<ValidationErrors> for MenuItemError {
    fn from(errors: ValidationErrors) -> Self {
        MenuItemError::Validation(errors)
    }
}

impl From<PathRejection> for MenuItemError {
    fn from(rejection: PathRejection) -> Self {
        MenuItemError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for MenuItemError {
    fn from(rejection: QueryRejection) -> Self {
        MenuItemError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for MenuItemError {
    fn from(rejection: JsonRejection) -> Self {
        MenuItemError::InvalidRequest(rejection.body_text())
    }
}
