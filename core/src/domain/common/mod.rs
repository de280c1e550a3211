use serde::Deserialize;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

use crate::domain::folder::entities::FolderId;
use crate::domain::message::entities::MessageId;
use crate::domain::user::entities::UserId;

pub mod services;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Service is currently unavailable")]
    ServiceUnavailable(String),

    #[error("User with id {id} not found")]
    UserNotFound { id: UserId },

    #[error("Tree with id {id} not found")]
    TreeNotFound { id: FolderId },

    #[error("Default tree for user {user_id} not found")]
    DefaultTreeNotFound { user_id: UserId },

    #[error("Message with id {id} not found for user {user_id}")]
    MessageNotFound { id: MessageId, user_id: UserId },

    #[error("Invalid input: {msg}")]
    InvalidInput { msg: String },

    #[error("Health check failed")]
    Unhealthy,

    #[error("Database error: {msg}")]
    DatabaseError { msg: String },
}

impl CoreError {
    /// Stable error-kind code surfaced to API clients alongside the message.
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::UserNotFound { .. } => "USER_NOT_FOUND",
            CoreError::TreeNotFound { .. } | CoreError::DefaultTreeNotFound { .. } => {
                "TREE_NOT_FOUND"
            }
            CoreError::MessageNotFound { .. } => "MESSAGE_NOT_FOUND",
            CoreError::InvalidInput { .. } => "INVALID_INPUT_VALUE",
            CoreError::ServiceUnavailable(_) | CoreError::Unhealthy => "SERVICE_UNAVAILABLE",
            CoreError::DatabaseError { .. } => "DATABASE_ERROR",
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPaginated {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for GetPaginated {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// Whether another page exists after the one returned.
pub type HasNextPage = bool;
