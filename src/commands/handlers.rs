use validator::Validate;

use crate::commands::{AppError, AppState};
use crate::core::{compatibility, filters, split::{self, SplitPolicy}};
use crate::models::{
    CompatibilityRequest, CompatibilityResponse, GeoRadius, ListingFilters, ListingSearchRequest,
    ListingSearchResponse, RoommateFilters, RoommateMatchesResponse, RoommateSearchRequest,
    SplitRentRequest, SplitRentResponse,
};

/// Compare two students
pub fn check_compatibility(
    state: &AppState,
    req: &CompatibilityRequest,
) -> Result<CompatibilityResponse, AppError> {
    req.validate()?;

    let user = state.profiles.get(&req.user_id)?;
    let other = state.profiles.get(&req.other_user_id)?;

    let breakdown = compatibility::breakdown(&user, &other);
    let score = breakdown.map(|b| b.percentage()).unwrap_or(0);

    tracing::info!("Compatibility {} <-> {}: {}%", user.id, other.id, score);

    Ok(CompatibilityResponse {
        user_id: user.id,
        other_user_id: other.id,
        score,
        label: compatibility::label(i32::from(score)),
        breakdown,
    })
}

/// Browse roommates for a student, best matches first
pub fn find_roommates(
    state: &AppState,
    req: &RoommateSearchRequest,
) -> Result<RoommateMatchesResponse, AppError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for roommate search: {:?}", errors);
        return Err(errors.into());
    }

    let limit = state.settings.matching.effective_limit(req.limit);
    tracing::info!("Finding roommates for user: {}, limit: {}", req.user_id, limit);

    let viewer = state.profiles.get(&req.user_id)?;
    let candidates = state.profiles.all()?;

    let filters = RoommateFilters {
        search: req.search.clone(),
        university: req.university.clone(),
        budget: req.budget,
        gender: req.gender.clone(),
        verified_only: req.verified_only,
    };

    let result = state.matcher.find_roommates(&viewer, candidates, &filters, limit);

    tracing::info!(
        "Returning {} roommates for user {} (from {} candidates)",
        result.matches.len(),
        req.user_id,
        result.total_candidates
    );

    Ok(RoommateMatchesResponse {
        user_id: viewer.id,
        matches: result.matches,
        total_results: result.total_candidates,
    })
}

/// Search listings; a radius needs latitude, longitude and radius together
pub fn search_listings(
    state: &AppState,
    req: &ListingSearchRequest,
) -> Result<ListingSearchResponse, AppError> {
    req.validate()?;

    let near = match (req.latitude, req.longitude, req.radius_km) {
        (Some(latitude), Some(longitude), Some(radius_km)) => Some(GeoRadius {
            latitude,
            longitude,
            radius_km,
        }),
        (None, None, None) => None,
        _ => {
            let mut error = validator::ValidationError::new("incomplete_radius");
            error.message = Some("latitude, longitude and radius_km must be given together".into());

            let mut errors = validator::ValidationErrors::new();
            errors.add("radius_km", error);
            return Err(errors.into());
        }
    };

    let filters = ListingFilters {
        search: req.search.clone(),
        city: req.city.clone(),
        listing_type: req.listing_type,
        price: req.price,
        near,
    };

    let listings = state.listings.all_listings()?;
    let total = listings.len();
    let matches = filters::search_listings(listings, &filters);

    tracing::info!("Returning {} of {} listings", matches.len(), total);

    Ok(ListingSearchResponse {
        total_results: matches.len(),
        listings: matches,
    })
}

/// Split rent with the configured policy
pub fn split_rent(state: &AppState, req: &SplitRentRequest) -> Result<SplitRentResponse, AppError> {
    let policy = SplitPolicy::from(&state.settings.split);
    let response = split::split_rent(req, &policy)?;

    if response.rounding_note {
        tracing::info!(
            "Split total {} differs from entered cost {}",
            response.total_calculated,
            response.total_cost
        );
    }

    Ok(response)
}
