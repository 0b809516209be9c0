//! UniMate - roommate compatibility and housing tools for students
//!
//! This library provides the roommate compatibility score used across the
//! UniMate app, plus the roommate browse, listing search and rent split
//! operations built around it.

pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compatibility::{breakdown, label, score}, Matcher, split_rent};
pub use models::{UserProfile, UserPreferences, CompatibilityLabel, ScoredRoommate, RoommateFilters, ListingFilters};
pub use services::{ProfileStore, ListingStore, MemoryStore};
