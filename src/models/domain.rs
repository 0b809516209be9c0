use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social temperament a student reports on their profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialHabits {
    Introvert,
    Extrovert,
    Ambivert,
    #[serde(other)]
    Unknown,
}

impl SocialHabits {
    /// Equality that never holds for an unrecognised value
    pub fn matches(self, other: Self) -> bool {
        self != Self::Unknown && self == other
    }
}

/// Daily study rhythm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyHabits {
    EarlyBird,
    NightOwl,
    Flexible,
    #[serde(other)]
    Unknown,
}

impl StudyHabits {
    pub fn matches(self, other: Self) -> bool {
        self != Self::Unknown && self == other
    }
}

/// Household cleanliness expectation, ordered from `Relaxed` to `VeryClean`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cleanliness {
    VeryClean,
    Moderate,
    Relaxed,
    #[serde(other)]
    Unknown,
}

impl Cleanliness {
    pub fn matches(self, other: Self) -> bool {
        self != Self::Unknown && self == other
    }

    /// Position on the `[relaxed, moderate, very-clean]` scale
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::Relaxed => Some(0),
            Self::Moderate => Some(1),
            Self::VeryClean => Some(2),
            Self::Unknown => None,
        }
    }

    /// Ordinal distance between two known levels
    pub fn distance(self, other: Self) -> Option<u8> {
        Some(self.rank()?.abs_diff(other.rank()?))
    }
}

/// Lifestyle preferences used for roommate compatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub smoking: bool,
    pub pets: bool,
    pub social_habits: SocialHabits,
    pub study_habits: StudyHabits,
    pub cleanliness: Cleanliness,
}

/// Student profile as kept in the profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub budget: Option<u32>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

impl UserProfile {
    /// Monthly budget, treating zero as not provided
    pub fn budget(&self) -> Option<u32> {
        self.budget.filter(|b| *b > 0)
    }

    /// Helper to get verified as a bool, defaulting to false
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }

    /// A profile needs age, university and preferences before it is scored
    pub fn has_completed_profile(&self) -> bool {
        self.age.is_some() && self.university.is_some() && self.preferences.is_some()
    }
}

/// Kind of housing on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Apartment,
    Room,
    Studio,
}

impl FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "room" => Ok(Self::Room),
            "studio" => Ok(Self::Studio),
            other => Err(format!(
                "unknown listing type '{}', expected one of: apartment, room, studio",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingLocation {
    pub city: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Housing listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub bedrooms: u8,
    pub bathrooms: u8,
    #[serde(default)]
    pub images: Vec<String>,
    pub location: ListingLocation,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub owner_id: String,
    pub owner_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Monthly price bracket used by both the roommate budget filter and the listing price filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Low,
    Medium,
    High,
}

impl PriceBand {
    pub fn contains(self, amount: u32) -> bool {
        match self {
            Self::Low => amount < 2000,
            Self::Medium => (2000..3500).contains(&amount),
            Self::High => amount >= 3500,
        }
    }
}

impl FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unknown price band '{}', expected one of: low, medium, high",
                other
            )),
        }
    }
}

/// Presentation hint paired with a compatibility label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    Green,
    Blue,
    Yellow,
    Red,
}

/// Human-readable tier for a compatibility score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityLabel {
    pub label: String,
    pub color: ColorHint,
}

impl fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Points earned per factor; the maximum for each is fixed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityBreakdown {
    pub smoking: u32,
    pub pets: u32,
    pub social_habits: u32,
    pub study_habits: u32,
    pub cleanliness: u32,
    pub budget: u32,
}

/// Roommate candidate with its compatibility against the viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRoommate {
    pub user_id: String,
    pub name: String,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub university: Option<String>,
    pub budget: Option<u32>,
    pub is_verified: bool,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub compatibility: u8,
    pub label: CompatibilityLabel,
    /// False when the score is 0 only because preferences were missing
    pub scored: bool,
}

/// Listing that passed the search filters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMatch {
    #[serde(flatten)]
    pub listing: Listing,
    pub distance_km: Option<f64>,
}

/// Search centre for radius queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRadius {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

/// Optional filters for the roommate browse screen
#[derive(Debug, Clone, Default)]
pub struct RoommateFilters {
    pub search: Option<String>,
    pub university: Option<String>,
    pub budget: Option<PriceBand>,
    pub gender: Option<String>,
    pub verified_only: bool,
}

/// Optional filters for the listing browse screen
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    pub search: Option<String>,
    pub city: Option<String>,
    pub listing_type: Option<ListingType>,
    pub price: Option<PriceBand>,
    pub near: Option<GeoRadius>,
}
