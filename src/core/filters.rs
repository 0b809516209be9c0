use crate::models::{Listing, ListingFilters, ListingMatch, RoommateFilters, UserProfile};
use crate::core::distance::within_radius;

#[inline]
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Check if a roommate profile passes the browse filters
///
/// Filters are ANDed; unset filters pass everything. A budget band
/// excludes profiles without a budget.
pub fn matches_roommate_filters(profile: &UserProfile, filters: &RoommateFilters) -> bool {
    if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        let in_name = contains_ignore_case(&profile.name, &needle);
        let in_university = profile
            .university
            .as_deref()
            .map_or(false, |u| contains_ignore_case(u, &needle));

        if !in_name && !in_university {
            return false;
        }
    }

    if let Some(university) = &filters.university {
        if profile.university.as_ref() != Some(university) {
            return false;
        }
    }

    if let Some(band) = filters.budget {
        match profile.budget() {
            Some(budget) if band.contains(budget) => {}
            _ => return false,
        }
    }

    if let Some(gender) = &filters.gender {
        if profile.gender.as_ref() != Some(gender) {
            return false;
        }
    }

    if filters.verified_only && !profile.is_verified() {
        return false;
    }

    true
}

/// Check a listing against everything except the radius filter
pub fn matches_listing_filters(listing: &Listing, filters: &ListingFilters) -> bool {
    if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        if !contains_ignore_case(&listing.title, &needle)
            && !contains_ignore_case(&listing.location.city, &needle)
            && !contains_ignore_case(&listing.location.neighborhood, &needle)
        {
            return false;
        }
    }

    if let Some(city) = &filters.city {
        if &listing.location.city != city {
            return false;
        }
    }

    if let Some(listing_type) = filters.listing_type {
        if listing.listing_type != listing_type {
            return false;
        }
    }

    if let Some(band) = filters.price {
        if !band.contains(listing.price) {
            return false;
        }
    }

    true
}

/// Filter listings and, for radius searches, order them nearest first
pub fn search_listings(listings: Vec<Listing>, filters: &ListingFilters) -> Vec<ListingMatch> {
    let mut results: Vec<ListingMatch> = listings
        .into_iter()
        .filter(|listing| matches_listing_filters(listing, filters))
        .filter_map(|listing| {
            let distance_km = match &filters.near {
                Some(radius) => Some(within_radius(
                    radius,
                    listing.location.latitude,
                    listing.location.longitude,
                )?),
                None => None,
            };

            Some(ListingMatch { listing, distance_km })
        })
        .collect();

    if filters.near.is_some() {
        results.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    tracing::debug!("{} listings passed filters", results.len());
    results
}
