use crate::models::{Listing, UserProfile};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Built-in seed: four students and six listings across the UAE
const DEFAULT_SEED: &str = include_str!("../../data/seed.json");

/// Errors that can occur when loading or reading the stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read access to student profiles
pub trait ProfileStore: Send + Sync {
    fn get(&self, id: &str) -> Result<UserProfile, StoreError>;

    fn all(&self) -> Result<Vec<UserProfile>, StoreError>;
}

/// Read access to housing listings
pub trait ListingStore: Send + Sync {
    fn all_listings(&self) -> Result<Vec<Listing>, StoreError>;
}

/// Shape of a seed document
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

/// In-memory store loaded once from a JSON document
///
/// Immutable after construction, so it can be shared freely behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<UserProfile>,
    listings: Vec<Listing>,
}

impl MemoryStore {
    pub fn new(users: Vec<UserProfile>, listings: Vec<Listing>) -> Self {
        Self { users, listings }
    }

    /// Store holding the built-in seed data
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_json(DEFAULT_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let seed: SeedData = serde_json::from_str(json)?;
        Ok(Self::new(seed.users, seed.listings))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        tracing::info!("Loading seed data from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path` when given, otherwise fall back to the built-in seed
    pub fn load(path: Option<&str>) -> Result<Self, StoreError> {
        let store = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::seeded()?,
        };

        tracing::debug!(
            "Store ready with {} profiles and {} listings",
            store.users.len(),
            store.listings.len()
        );
        Ok(store)
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, id: &str) -> Result<UserProfile, StoreError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {}", id)))
    }

    fn all(&self) -> Result<Vec<UserProfile>, StoreError> {
        Ok(self.users.clone())
    }
}

impl ListingStore for MemoryStore {
    fn all_listings(&self) -> Result<Vec<Listing>, StoreError> {
        Ok(self.listings.clone())
    }
}
