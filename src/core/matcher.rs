use crate::models::{RoommateFilters, ScoredRoommate, UserProfile};
use crate::core::{
    compatibility::{label, score},
    filters::matches_roommate_filters,
};

/// Result of the roommate browse
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredRoommate>,
    /// Everyone other than the viewer, before filtering
    pub total_candidates: usize,
}

/// Roommate browse orchestrator
///
/// # Pipeline Stages
/// 1. Exclude the viewer
/// 2. Browse filters (search, university, budget band, gender, verified)
/// 3. Compatibility scoring and labelling
/// 4. Minimum score cut, ranking, limit
#[derive(Debug, Clone)]
pub struct Matcher {
    min_score: u8,
}

impl Matcher {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Rank candidate roommates for `viewer`
    ///
    /// Scores are only computed when the viewer has completed their
    /// profile (age, university and preferences); otherwise every
    /// candidate scores 0 and is marked unscored.
    ///
    /// # Arguments
    /// * `viewer` - The student browsing
    /// * `candidates` - All profiles from the store
    /// * `filters` - Browse filters
    /// * `limit` - Maximum number of matches to return
    pub fn find_roommates(
        &self,
        viewer: &UserProfile,
        candidates: Vec<UserProfile>,
        filters: &RoommateFilters,
        limit: usize,
    ) -> MatchResult {
        let viewer_complete = viewer.has_completed_profile();
        if !viewer_complete {
            tracing::warn!(
                "Profile {} is incomplete, roommates will be listed without compatibility scores",
                viewer.id
            );
        }

        let others: Vec<UserProfile> = candidates
            .into_iter()
            .filter(|profile| profile.id != viewer.id)
            .collect();
        let total_candidates = others.len();

        let mut scored: Vec<ScoredRoommate> = others
            .into_iter()
            .filter(|profile| matches_roommate_filters(profile, filters))
            .filter_map(|profile| {
                let compatibility = if viewer_complete { score(viewer, &profile) } else { 0 };

                if compatibility < self.min_score {
                    return None;
                }

                Some(ScoredRoommate {
                    scored: viewer_complete && profile.preferences.is_some(),
                    label: label(i32::from(compatibility)),
                    is_verified: profile.is_verified(),
                    budget: profile.budget(),
                    user_id: profile.id,
                    name: profile.name,
                    age: profile.age,
                    gender: profile.gender,
                    university: profile.university,
                    photo_url: profile.photo_url,
                    compatibility,
                })
            })
            .collect();

        // Stable, so equal scores keep store order
        scored.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));
        scored.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates for {}",
            scored.len(),
            total_candidates,
            viewer.id
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(0)
    }
}
