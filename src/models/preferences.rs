use serde::{Deserialize, Serialize};

/// Price ceiling of the `low` tier (inclusive)
pub const LOW_BUDGET_MAX: f64 = 20.0;
/// Price ceiling of the `medium` tier (inclusive)
pub const MEDIUM_BUDGET_MAX: f64 = 50.0;

/// Budget tier chosen in the questionnaire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// price <= 20
    Low,
    /// 20 < price <= 50
    #[default]
    Medium,
    /// price > 50
    High,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Low, BudgetTier::Medium, BudgetTier::High];

    /// Returns true if the price falls inside this tier
    pub fn contains(&self, price: f64) -> bool {
        match self {
            BudgetTier::Low => price <= LOW_BUDGET_MAX,
            BudgetTier::Medium => price > LOW_BUDGET_MAX && price <= MEDIUM_BUDGET_MAX,
            BudgetTier::High => price > MEDIUM_BUDGET_MAX,
        }
    }

    /// The tier a price belongs to
    pub fn for_price(price: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| tier.contains(price))
            .unwrap_or(BudgetTier::High)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilitySlot {
    Weekend,
    Weekday,
    Evening,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupSize {
    #[default]
    Solo,
    Couple,
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventTypePreference {
    Indoor,
    Outdoor,
    Both,
}

fn default_travel_distance() -> f64 {
    50.0
}

/// Answers to the onboarding questionnaire
///
/// The serialized form is the document kept in device storage, so field
/// names follow the stored camelCase layout. Missing optional answers fall
/// back to the questionnaire's initial state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    pub interests: Vec<String>,
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
    #[serde(default)]
    pub group_size: GroupSize,
    /// Radius in kilometres, not used for matching yet
    #[serde(default = "default_travel_distance")]
    pub travel_distance: f64,
    /// Not used for matching yet
    #[serde(default)]
    pub event_types: Vec<EventTypePreference>,
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            interests: Vec::new(),
            preferred_locations: Vec::new(),
            budget: BudgetTier::default(),
            availability: Vec::new(),
            group_size: GroupSize::default(),
            travel_distance: default_travel_distance(),
            event_types: Vec::new(),
        }
    }
}

impl PreferenceProfile {
    /// Creates a profile with the three answers used for matching
    pub fn new<I, L>(interests: I, preferred_locations: L, budget: BudgetTier) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            interests: interests.into_iter().map(Into::into).collect(),
            preferred_locations: preferred_locations.into_iter().map(Into::into).collect(),
            budget,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_tier_boundaries() {
        assert!(BudgetTier::Low.contains(0.0));
        assert!(BudgetTier::Low.contains(20.0));
        assert!(!BudgetTier::Low.contains(20.01));

        assert!(!BudgetTier::Medium.contains(20.0));
        assert!(BudgetTier::Medium.contains(20.5));
        assert!(BudgetTier::Medium.contains(50.0));
        assert!(!BudgetTier::Medium.contains(50.5));

        assert!(!BudgetTier::High.contains(50.0));
        assert!(BudgetTier::High.contains(51.0));
    }

    #[test]
    fn test_budget_tier_for_price() {
        assert_eq!(BudgetTier::for_price(0.0), BudgetTier::Low);
        assert_eq!(BudgetTier::for_price(35.0), BudgetTier::Medium);
        assert_eq!(BudgetTier::for_price(299.0), BudgetTier::High);
    }

    #[test]
    fn test_deserialize_stored_document() {
        let json = r#"{
            "interests": ["Musique", "Art"],
            "preferredLocations": ["Paris"],
            "budget": "low",
            "availability": ["weekend", "evening"],
            "groupSize": "couple",
            "travelDistance": 30,
            "eventTypes": ["indoor"]
        }"#;

        let profile: PreferenceProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.interests, vec!["Musique", "Art"]);
        assert_eq!(profile.budget, BudgetTier::Low);
        assert_eq!(
            profile.availability,
            vec![AvailabilitySlot::Weekend, AvailabilitySlot::Evening]
        );
        assert_eq!(profile.group_size, GroupSize::Couple);
        assert_eq!(profile.travel_distance, 30.0);
        assert_eq!(profile.event_types, vec![EventTypePreference::Indoor]);
    }

    #[test]
    fn test_deserialize_fills_questionnaire_defaults() {
        let json = r#"{"interests": ["Sport"], "preferredLocations": ["Lyon"]}"#;
        let profile: PreferenceProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.budget, BudgetTier::Medium);
        assert_eq!(profile.group_size, GroupSize::Solo);
        assert_eq!(profile.travel_distance, 50.0);
        assert!(profile.availability.is_empty());
    }

    #[test]
    fn test_unknown_budget_is_rejected() {
        let json = r#"{"interests": [], "preferredLocations": [], "budget": "luxury"}"#;
        assert!(serde_json::from_str::<PreferenceProfile>(json).is_err());
    }
}
