// Integration tests for UniMate, run against the built-in seed data

use std::sync::Arc;

use unimate::commands::{self, AppError, AppState};
use unimate::config::Settings;
use unimate::models::{
    CompatibilityRequest, ListingSearchRequest, ListingType, PriceBand, RoommateSearchRequest,
    RoommateShareInput, SplitRentRequest,
};
use unimate::services::{MemoryStore, ProfileStore};

fn seeded_state() -> AppState {
    let store = MemoryStore::seeded().expect("built-in seed should load");
    AppState::with_store(Arc::new(store), Settings::default())
}

fn roommate_search(user_id: &str) -> RoommateSearchRequest {
    RoommateSearchRequest {
        user_id: user_id.to_string(),
        search: None,
        university: None,
        budget: None,
        gender: None,
        verified_only: false,
        limit: None,
    }
}

#[test]
fn test_integration_roommates_ranked_for_ahmed() {
    let state = seeded_state();

    let response = commands::find_roommates(&state, &roommate_search("1")).unwrap();

    let ranked: Vec<(&str, u8)> = response
        .matches
        .iter()
        .map(|m| (m.name.as_str(), m.compatibility))
        .collect();

    assert_eq!(
        ranked,
        vec![("Omar Abdullah", 74), ("Sara Mohammed", 67), ("Fatima Hassan", 43)]
    );
    assert_eq!(response.total_results, 3);
    assert_eq!(response.matches[0].label.label, "Good Match");
    assert_eq!(response.matches[2].label.label, "Fair Match");
    assert!(response.matches.iter().all(|m| m.scored));
}

#[test]
fn test_integration_roommate_filters() {
    let state = seeded_state();

    let mut req = roommate_search("1");
    req.gender = Some("female".to_string());
    req.budget = Some(PriceBand::Medium);

    let response = commands::find_roommates(&state, &req).unwrap();

    // Fatima (2500) and Sara (2000) are both in the medium band
    let ids: Vec<&str> = response.matches.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["4", "2"]);
}

#[test]
fn test_integration_roommate_search_text() {
    let state = seeded_state();

    let mut req = roommate_search("2");
    req.search = Some("uae university".to_string());

    let response = commands::find_roommates(&state, &req).unwrap();

    let names: Vec<&str> = response.matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Sara Mohammed", "Ahmed Al Mansouri"]);
}

#[test]
fn test_integration_compatibility_is_symmetric() {
    let state = seeded_state();
    let store = MemoryStore::seeded().unwrap();
    let ids: Vec<String> = store.all().unwrap().into_iter().map(|u| u.id).collect();

    for a in &ids {
        for b in &ids {
            let ab = commands::check_compatibility(
                &state,
                &CompatibilityRequest { user_id: a.clone(), other_user_id: b.clone() },
            )
            .unwrap();
            let ba = commands::check_compatibility(
                &state,
                &CompatibilityRequest { user_id: b.clone(), other_user_id: a.clone() },
            )
            .unwrap();

            assert_eq!(ab.score, ba.score, "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_integration_compatibility_breakdown() {
    let state = seeded_state();

    let response = commands::check_compatibility(
        &state,
        &CompatibilityRequest { user_id: "1".to_string(), other_user_id: "3".to_string() },
    )
    .unwrap();

    let breakdown = response.breakdown.expect("both users have preferences");
    assert_eq!(breakdown.social_habits, 10);
    assert_eq!(breakdown.study_habits, 10);
    assert_eq!(breakdown.cleanliness, 8);
    assert_eq!(breakdown.budget, 10);
    assert_eq!(response.score, 74);
}

#[test]
fn test_integration_unknown_user() {
    let state = seeded_state();

    let err = commands::find_roommates(&state, &roommate_search("999")).unwrap_err();
    assert!(matches!(err, AppError::Store(_)));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_integration_listing_search() {
    let state = seeded_state();

    let req = ListingSearchRequest {
        city: Some("Dubai".to_string()),
        ..Default::default()
    };
    let response = commands::search_listings(&state, &req).unwrap();
    assert_eq!(response.total_results, 2);

    let req = ListingSearchRequest {
        listing_type: Some(ListingType::Room),
        price: Some(PriceBand::Low),
        ..Default::default()
    };
    let response = commands::search_listings(&state, &req).unwrap();
    assert_eq!(response.listings.len(), 1);
    assert_eq!(response.listings[0].listing.location.city, "Ajman");
}

#[test]
fn test_integration_listings_near_dubai_marina() {
    let state = seeded_state();

    let req = ListingSearchRequest {
        latitude: Some(25.0805),
        longitude: Some(55.1403),
        radius_km: Some(10.0),
        ..Default::default()
    };
    let response = commands::search_listings(&state, &req).unwrap();

    let ids: Vec<&str> = response.listings.iter().map(|m| m.listing.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "6"]);
    assert!(response.listings[0].distance_km.unwrap() < 0.1);
}

#[test]
fn test_integration_split_rent() {
    let state = seeded_state();

    let req = SplitRentRequest {
        total_rent: 4500.0,
        utilities: 600.0,
        roommates: vec![
            RoommateShareInput { name: "Ahmed".to_string(), room_size: 120.0, has_private_bathroom: true },
            RoommateShareInput { name: "Omar".to_string(), room_size: 100.0, has_private_bathroom: false },
            RoommateShareInput { name: "Sam".to_string(), room_size: 80.0, has_private_bathroom: false },
        ],
    };

    let response = commands::split_rent(&state, &req).unwrap();

    // rent_by_size 3150, equal 450 each, premium 450, utilities 200 each
    assert_eq!(response.shares[0].rent_share, 2160);
    assert_eq!(response.shares[1].rent_share, 1500);
    assert_eq!(response.shares[2].rent_share, 1290);
    assert!(response.shares.iter().all(|s| s.utilities_share == 200));
    assert_eq!(response.total_calculated, 5550);
    assert_eq!(response.total_cost, 5100.0);
    assert!(response.rounding_note);
}
