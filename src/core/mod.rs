// Core algorithm exports
pub mod compatibility;
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod split;

pub use compatibility::{breakdown, label, score};
pub use distance::{distance_km, within_radius};
pub use filters::{matches_listing_filters, matches_roommate_filters, search_listings};
pub use matcher::{Matcher, MatchResult};
pub use split::{split_rent, SplitError, SplitPolicy};
