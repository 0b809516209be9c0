// Command exports
pub mod handlers;

use std::sync::Arc;
use thiserror::Error;

use crate::config::Settings;
use crate::core::{split::SplitError, Matcher};
use crate::models::ErrorResponse;
use crate::services::{ListingStore, MemoryStore, ProfileStore, StoreError};

pub use handlers::{check_compatibility, find_roommates, search_listings, split_rent};

/// Errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP-style status code, kept so errors read the same as elsewhere in UniMate
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Store(StoreError::NotFound(_)) => 404,
            Self::Validation(_) | Self::Split(_) => 400,
            _ => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config_error",
            Self::Store(StoreError::NotFound(_)) => "not_found",
            Self::Store(_) => "store_error",
            Self::Split(_) | Self::Validation(_) => "invalid_request",
            Self::Serialization(_) => "serialization_error",
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
            status_code: err.status_code(),
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub listings: Arc<dyn ListingStore>,
    pub matcher: Matcher,
    pub settings: Settings,
}

impl AppState {
    /// Build state from settings, loading the configured seed data
    pub fn from_settings(settings: Settings) -> Result<Self, AppError> {
        let store = Arc::new(MemoryStore::load(settings.store.data_path.as_deref())?);

        Ok(Self::with_store(store, settings))
    }

    /// Build state around an existing store
    pub fn with_store(store: Arc<MemoryStore>, settings: Settings) -> Self {
        Self {
            profiles: store.clone(),
            listings: store,
            matcher: Matcher::new(settings.matching.min_score),
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_mapping() {
        let err = AppError::from(StoreError::NotFound("user 42".to_string()));
        let response = ErrorResponse::from(&err);

        assert_eq!(response.status_code, 404);
        assert_eq!(response.error, "not_found");
        assert_eq!(response.message, "Not found: user 42");
    }

    #[test]
    fn test_split_error_is_bad_request() {
        let err = AppError::from(SplitError::NoRoomSize);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.kind(), "invalid_request");
    }
}
