use thiserror::Error;
use validator::Validate;

use crate::models::{RoommateShare, SplitRentRequest, SplitRentResponse};

/// Rounded totals may drift from the entered cost by this much before the
/// result carries a rounding note
const ROUNDING_TOLERANCE: f64 = 5.0;

/// Errors from the split-rent calculator
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Invalid split request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Total room size must be greater than zero")]
    NoRoomSize,

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("Amounts are too large to split")]
    TooLarge,
}

/// Split policy
#[derive(Debug, Clone, Copy)]
pub struct SplitPolicy {
    /// Fraction of rent divided by room size; the rest is divided equally
    pub size_share: f64,
    /// Fraction of rent charged on top, shared by roommates with a private bathroom
    pub bathroom_premium: f64,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self {
            size_share: 0.7,
            bathroom_premium: 0.1,
        }
    }
}

/// Divide rent and utilities between roommates
///
/// rent_share = size / total_size * rent * size_share
///            + rent * (1 - size_share) / n
///            + private bathroom premium (if any)
/// total      = rent_share + utilities / n
///
/// The bathroom premium is charged on top of the rent, so the shares can
/// add up to more than rent + utilities.
pub fn split_rent(request: &SplitRentRequest, policy: &SplitPolicy) -> Result<SplitRentResponse, SplitError> {
    request.validate()?;

    if !request.total_rent.is_finite() {
        return Err(SplitError::NotFinite("Total rent"));
    }
    if !request.utilities.is_finite() {
        return Err(SplitError::NotFinite("Utilities"));
    }
    if request.roommates.iter().any(|r| !r.room_size.is_finite()) {
        return Err(SplitError::NotFinite("Room size"));
    }

    let total_room_size: f64 = request.roommates.iter().map(|r| r.room_size).sum();
    if total_room_size <= 0.0 {
        return Err(SplitError::NoRoomSize);
    }

    let count = request.roommates.len() as f64;
    let private_count = request.roommates.iter().filter(|r| r.has_private_bathroom).count();

    let rent_by_size = request.total_rent * policy.size_share;
    let equal_share = request.total_rent * (1.0 - policy.size_share) / count;
    let premium_each = if private_count > 0 {
        request.total_rent * policy.bathroom_premium / private_count as f64
    } else {
        0.0
    };
    let utilities_each = request.utilities / count;

    let shares: Vec<RoommateShare> = request
        .roommates
        .iter()
        .map(|roommate| {
            let bathroom = if roommate.has_private_bathroom { premium_each } else { 0.0 };
            let rent_share = roommate.room_size / total_room_size * rent_by_size + equal_share + bathroom;

            Ok(RoommateShare {
                name: roommate.name.clone(),
                room_size: roommate.room_size,
                has_private_bathroom: roommate.has_private_bathroom,
                rent_share: to_whole(rent_share)?,
                utilities_share: to_whole(utilities_each)?,
                total: to_whole(rent_share + utilities_each)?,
            })
        })
        .collect::<Result<_, SplitError>>()?;

    let total_cost = request.total_rent + request.utilities;
    let total_calculated = shares
        .iter()
        .try_fold(0i64, |sum, s| sum.checked_add(s.total))
        .ok_or(SplitError::TooLarge)?;

    tracing::debug!(
        "Split {} between {} roommates ({} with private bathroom)",
        total_cost,
        shares.len(),
        private_count
    );

    Ok(SplitRentResponse {
        rounding_note: (total_calculated as f64 - total_cost).abs() > ROUNDING_TOLERANCE,
        shares,
        total_cost,
        total_calculated,
    })
}

/// Round to a whole amount, refusing values an i64 cannot hold
fn to_whole(amount: f64) -> Result<i64, SplitError> {
    let rounded = amount.round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Ok(rounded as i64)
    } else {
        Err(SplitError::TooLarge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoommateShareInput;

    fn roommate(name: &str, room_size: f64, has_private_bathroom: bool) -> RoommateShareInput {
        RoommateShareInput {
            name: name.to_string(),
            room_size,
            has_private_bathroom,
        }
    }

    #[test]
    fn test_equal_rooms_split_evenly() {
        let request = SplitRentRequest {
            total_rent: 3000.0,
            utilities: 500.0,
            roommates: vec![roommate("Roommate 1", 100.0, false), roommate("Roommate 2", 100.0, false)],
        };

        let result = split_rent(&request, &SplitPolicy::default()).unwrap();

        for share in &result.shares {
            assert_eq!(share.rent_share, 1500);
            assert_eq!(share.utilities_share, 250);
            assert_eq!(share.total, 1750);
        }
        assert_eq!(result.total_calculated, 3500);
        assert!(!result.rounding_note);
    }

    #[test]
    fn test_larger_room_pays_more() {
        let request = SplitRentRequest {
            total_rent: 3000.0,
            utilities: 0.0,
            roommates: vec![roommate("Big", 150.0, false), roommate("Small", 50.0, false)],
        };

        let result = split_rent(&request, &SplitPolicy::default()).unwrap();

        // 150/200 * 2100 + 450 and 50/200 * 2100 + 450
        assert_eq!(result.shares[0].rent_share, 2025);
        assert_eq!(result.shares[1].rent_share, 975);
    }

    #[test]
    fn test_private_bathroom_premium_on_top() {
        let request = SplitRentRequest {
            total_rent: 3000.0,
            utilities: 500.0,
            roommates: vec![roommate("Ensuite", 100.0, true), roommate("Shared", 100.0, false)],
        };

        let result = split_rent(&request, &SplitPolicy::default()).unwrap();

        assert_eq!(result.shares[0].rent_share, 1800);
        assert_eq!(result.shares[1].rent_share, 1500);
        assert_eq!(result.total_calculated, 3800);
        assert!(result.rounding_note);
    }

    #[test]
    fn test_rejects_empty_roommates() {
        let request = SplitRentRequest {
            total_rent: 3000.0,
            utilities: 500.0,
            roommates: vec![],
        };

        assert!(matches!(split_rent(&request, &SplitPolicy::default()), Err(SplitError::Validation(_))));
    }

    #[test]
    fn test_rejects_zero_room_size() {
        let request = SplitRentRequest {
            total_rent: 3000.0,
            utilities: 500.0,
            roommates: vec![roommate("A", 0.0, false)],
        };

        assert!(matches!(split_rent(&request, &SplitPolicy::default()), Err(SplitError::NoRoomSize)));
    }

    #[test]
    fn test_rejects_negative_rent() {
        let request = SplitRentRequest {
            total_rent: -1.0,
            utilities: 0.0,
            roommates: vec![roommate("A", 100.0, false)],
        };

        assert!(split_rent(&request, &SplitPolicy::default()).is_err());
    }

    #[test]
    fn test_rejects_non_finite_amounts() {
        let request = SplitRentRequest {
            total_rent: 3000.0,
            utilities: 0.0,
            roommates: vec![roommate("A", f64::NAN, false), roommate("B", 100.0, false)],
        };
        assert!(matches!(
            split_rent(&request, &SplitPolicy::default()),
            Err(SplitError::NotFinite("Room size"))
        ));

        let request = SplitRentRequest {
            total_rent: f64::INFINITY,
            utilities: 0.0,
            roommates: vec![roommate("A", 100.0, false)],
        };
        assert!(matches!(
            split_rent(&request, &SplitPolicy::default()),
            Err(SplitError::NotFinite("Total rent"))
        ));
    }

    #[test]
    fn test_rejects_amounts_too_large_to_round() {
        let request = SplitRentRequest {
            total_rent: 1e300,
            utilities: 0.0,
            roommates: vec![roommate("A", 1.0, false), roommate("B", 1.0, false)],
        };

        assert!(matches!(split_rent(&request, &SplitPolicy::default()), Err(SplitError::TooLarge)));
    }

    #[test]
    fn test_rejects_shares_whose_sum_overflows() {
        // each share fits in an i64 on its own, their sum does not
        let request = SplitRentRequest {
            total_rent: 1.5e19,
            utilities: 0.0,
            roommates: vec![roommate("A", 1.0, false), roommate("B", 1.0, false)],
        };

        assert!(matches!(split_rent(&request, &SplitPolicy::default()), Err(SplitError::TooLarge)));
    }
}
