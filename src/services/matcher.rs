use crate::models::{
    event::{contains_ignore_case, eq_ignore_case},
    Event, PreferenceProfile, ScoredEvent,
};

const CATEGORY_POINTS: u32 = 3;
const TAG_POINTS: u32 = 2;
const LOCATION_POINTS: u32 = 2;
const BUDGET_POINTS: u32 = 2;

/// Ranks a catalog against a questionnaire profile
///
/// Keeps only the events that pass every predicate (interest, location,
/// budget and travel distance), then orders them by [`score`], highest
/// first. Ties keep their catalog order. Neither input is modified.
pub fn match_events(events: &[Event], profile: &PreferenceProfile) -> Vec<Event> {
    rank(events, profile)
        .into_iter()
        .map(|scored| scored.event)
        .collect()
}

/// Same as [`match_events`] but keeps the score of each event
pub fn rank(events: &[Event], profile: &PreferenceProfile) -> Vec<ScoredEvent> {
    let mut ranked: Vec<ScoredEvent> = events
        .iter()
        .filter(|event| is_match(event, profile))
        .map(|event| ScoredEvent {
            score: score(event, profile),
            event: event.clone(),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        catalog_size = events.len(),
        matched = ranked.len(),
        "Ranked catalog against preferences"
    );

    ranked
}

/// True when the event passes all four filter predicates
pub fn is_match(event: &Event, profile: &PreferenceProfile) -> bool {
    matches_interests(event, profile)
        && matches_location(event, profile)
        && matches_budget(event, profile)
        && within_travel_distance(event, profile)
}

/// Category or any tag equals one of the interests
pub fn matches_interests(event: &Event, profile: &PreferenceProfile) -> bool {
    profile
        .interests
        .iter()
        .any(|interest| event.has_label(interest))
}

/// One of the preferred locations appears in the event location
pub fn matches_location(event: &Event, profile: &PreferenceProfile) -> bool {
    profile
        .preferred_locations
        .iter()
        .any(|location| contains_ignore_case(&event.location, location))
}

pub fn matches_budget(event: &Event, profile: &PreferenceProfile) -> bool {
    profile.budget.contains(event.price)
}

/// Always passes, coordinates and travel distance are not compared yet.
pub fn within_travel_distance(_event: &Event, _profile: &PreferenceProfile) -> bool {
    true
}

/// Match score of an event, higher is better
///
/// * +3 for every interest equal to the category
/// * +2 for every interest equal to one of the tags
/// * +2 once if a preferred location matches
/// * +2 if the price is inside the budget tier
pub fn score(event: &Event, profile: &PreferenceProfile) -> u32 {
    let mut total = 0;

    for interest in &profile.interests {
        if eq_ignore_case(&event.category, interest) {
            total += CATEGORY_POINTS;
        }
        if event.has_tag(interest) {
            total += TAG_POINTS;
        }
    }

    if matches_location(event, profile) {
        total += LOCATION_POINTS;
    }

    if matches_budget(event, profile) {
        total += BUDGET_POINTS;
    }

    total
}
