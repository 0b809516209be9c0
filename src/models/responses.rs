use serde::{Deserialize, Serialize};
use crate::models::domain::{CompatibilityBreakdown, CompatibilityLabel, ListingMatch, ScoredRoommate};

/// Response for the roommate browse command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoommateMatchesResponse {
    pub user_id: String,
    pub matches: Vec<ScoredRoommate>,
    pub total_results: usize,
}

/// Response for a one-to-one compatibility check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub user_id: String,
    pub other_user_id: String,
    pub score: u8,
    pub label: CompatibilityLabel,
    pub breakdown: Option<CompatibilityBreakdown>,
}

/// Response for listing search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSearchResponse {
    pub listings: Vec<ListingMatch>,
    pub total_results: usize,
}

/// One roommate's share of the monthly cost
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoommateShare {
    pub name: String,
    pub room_size: f64,
    pub has_private_bathroom: bool,
    pub rent_share: i64,
    pub utilities_share: i64,
    pub total: i64,
}

/// Response for the split-rent calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRentResponse {
    pub shares: Vec<RoommateShare>,
    pub total_cost: f64,
    pub total_calculated: i64,
    /// Set when rounded shares drift more than 5 from the entered total
    pub rounding_note: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
