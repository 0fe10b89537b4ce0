use serde::{Deserialize, Serialize};

pub mod event;
pub mod preferences;
pub mod questionnaire;
pub mod reservation;
pub mod search;

pub use event::{Coordinates, Event};
pub use preferences::{
    AvailabilitySlot, BudgetTier, EventTypePreference, GroupSize, PreferenceProfile,
};
pub use questionnaire::{OnboardingStatus, Question, QuestionKind, QuestionOption};
pub use reservation::{Reservation, ReservationStatus};
pub use search::{FacetCount, SearchFacets, SearchParams, SearchResults, SortBy};

/// An event paired with its match score against a preference profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredEvent {
    pub score: u32,
    pub event: Event,
}
