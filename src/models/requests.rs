use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ListingType, PriceBand};

/// Request to browse roommates for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoommateSearchRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub budget: Option<PriceBand>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub verified_only: bool,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to compare two users
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub other_user_id: String,
}

/// Request to search listings
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListingSearchRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "type")]
    pub listing_type: Option<ListingType>,
    #[serde(default)]
    pub price: Option<PriceBand>,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub radius_km: Option<f64>,
}

/// One person sharing the rent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoommateShareInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub room_size: f64,
    #[serde(default)]
    pub has_private_bathroom: bool,
}

/// Request to split monthly rent and utilities
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SplitRentRequest {
    #[validate(range(min = 0.0))]
    pub total_rent: f64,
    #[validate(range(min = 0.0))]
    pub utilities: f64,
    #[validate(length(min = 1), nested)]
    pub roommates: Vec<RoommateShareInput>,
}
