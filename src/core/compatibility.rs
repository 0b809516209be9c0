use crate::models::{
    Cleanliness, ColorHint, CompatibilityBreakdown, CompatibilityLabel, SocialHabits, StudyHabits,
    UserProfile,
};

pub const SMOKING_POINTS: u32 = 20;
pub const PETS_POINTS: u32 = 20;
pub const SOCIAL_POINTS: u32 = 15;
pub const STUDY_POINTS: u32 = 15;
pub const CLEANLINESS_POINTS: u32 = 15;
pub const BUDGET_POINTS: u32 = 15;

/// Denominator of every score. The budget factor is always counted,
/// even when a budget is missing.
pub const TOTAL_POINTS: u32 =
    SMOKING_POINTS + PETS_POINTS + SOCIAL_POINTS + STUDY_POINTS + CLEANLINESS_POINTS + BUDGET_POINTS;

/// Calculate the compatibility percentage (0-100) between two students
///
/// Returns 0 when either profile has no preferences. A 0 therefore means
/// "incompatible" or "unknown"; check `preferences` first if the two must
/// be told apart.
///
/// Scoring formula:
/// score = round((
///     smoking (20) + pets (20) + social (15) +
///     study (15) + cleanliness (15) + budget (15)
/// ) / 105 * 100)
pub fn score(a: &UserProfile, b: &UserProfile) -> u8 {
    breakdown(a, b).map(|b| b.percentage()).unwrap_or(0)
}

/// Per-factor points behind a score, or None if either side lacks preferences
pub fn breakdown(a: &UserProfile, b: &UserProfile) -> Option<CompatibilityBreakdown> {
    let pa = a.preferences.as_ref()?;
    let pb = b.preferences.as_ref()?;

    Some(CompatibilityBreakdown {
        smoking: if pa.smoking == pb.smoking { SMOKING_POINTS } else { 0 },
        pets: if pa.pets == pb.pets { PETS_POINTS } else { 0 },
        social_habits: social_points(pa.social_habits, pb.social_habits),
        study_habits: study_points(pa.study_habits, pb.study_habits),
        cleanliness: cleanliness_points(pa.cleanliness, pb.cleanliness),
        budget: budget_points(a.budget(), b.budget()),
    })
}

impl CompatibilityBreakdown {
    /// Sum of earned points
    pub fn points(&self) -> u32 {
        self.smoking + self.pets + self.social_habits + self.study_habits + self.cleanliness + self.budget
    }

    /// Earned points as a rounded percentage of `TOTAL_POINTS`
    pub fn percentage(&self) -> u8 {
        let ratio = self.points() as f64 / TOTAL_POINTS as f64;
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Map a score to its display tier. Defined for every integer.
pub fn label(score: i32) -> CompatibilityLabel {
    let (label, color) = if score >= 80 {
        ("Excellent Match", ColorHint::Green)
    } else if score >= 60 {
        ("Good Match", ColorHint::Blue)
    } else if score >= 40 {
        ("Fair Match", ColorHint::Yellow)
    } else {
        ("Low Match", ColorHint::Red)
    };

    CompatibilityLabel {
        label: label.to_string(),
        color,
    }
}

// Ambiverts get partial credit with anyone
#[inline]
fn social_points(a: SocialHabits, b: SocialHabits) -> u32 {
    if a.matches(b) {
        SOCIAL_POINTS
    } else if a == SocialHabits::Ambivert || b == SocialHabits::Ambivert {
        10
    } else {
        0
    }
}

#[inline]
fn study_points(a: StudyHabits, b: StudyHabits) -> u32 {
    if a.matches(b) {
        STUDY_POINTS
    } else if a == StudyHabits::Flexible || b == StudyHabits::Flexible {
        10
    } else {
        0
    }
}

#[inline]
fn cleanliness_points(a: Cleanliness, b: Cleanliness) -> u32 {
    if a.matches(b) {
        return CLEANLINESS_POINTS;
    }

    match a.distance(b) {
        Some(1) => 8,
        _ => 0,
    }
}

/// Budget closeness; nothing is awarded unless both sides have a budget
#[inline]
fn budget_points(a: Option<u32>, b: Option<u32>) -> u32 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0;
    };

    match a.abs_diff(b) {
        d if d < 500 => BUDGET_POINTS,
        d if d < 1000 => 10,
        d if d < 1500 => 5,
        _ => 0,
    }
}
