// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    UserProfile, UserPreferences, SocialHabits, StudyHabits, Cleanliness, Listing, ListingLocation,
    ListingType, PriceBand, ColorHint, CompatibilityLabel, CompatibilityBreakdown, ScoredRoommate,
    ListingMatch, GeoRadius, RoommateFilters, ListingFilters,
};
pub use requests::{RoommateSearchRequest, CompatibilityRequest, ListingSearchRequest, RoommateShareInput, SplitRentRequest};
pub use responses::{
    RoommateMatchesResponse, CompatibilityResponse, ListingSearchResponse, RoommateShare, SplitRentResponse,
    ErrorResponse,
};
