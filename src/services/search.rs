use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::{
        event::{contains_ignore_case, eq_ignore_case},
        search::MAX_PAGE_SIZE,
        BudgetTier, Event, FacetCount, SearchFacets, SearchParams, SearchResults, SortBy,
    },
};

/// Filters, sorts and paginates a catalog
pub fn search(events: &[Event], params: &SearchParams) -> AppResult<SearchResults> {
    validate(params)?;

    let mut matched: Vec<&Event> = events
        .iter()
        .filter(|event| matches_params(event, params))
        .collect();

    sort_events(&mut matched, params.sort_by);

    let facets = facets(&matched);
    let total = matched.len();
    let total_pages = total.div_ceil(params.per_page);

    let events = matched
        .into_iter()
        .skip((params.page - 1).saturating_mul(params.per_page))
        .take(params.per_page)
        .cloned()
        .collect();

    Ok(SearchResults {
        events,
        total,
        page: params.page,
        total_pages,
        facets,
    })
}

fn validate(params: &SearchParams) -> AppResult<()> {
    if params.page == 0 {
        return Err(AppError::InvalidInput("page starts at 1".to_string()));
    }

    if params.per_page == 0 || params.per_page > MAX_PAGE_SIZE {
        return Err(AppError::InvalidInput(format!(
            "perPage must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }

    if let (Some(min), Some(max)) = (params.min_price, params.max_price) {
        if min > max {
            return Err(AppError::InvalidInput(
                "minPrice must not exceed maxPrice".to_string(),
            ));
        }
    }

    Ok(())
}

fn matches_params(event: &Event, params: &SearchParams) -> bool {
    let query = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    if let Some(query) = query {
        let hit = contains_ignore_case(&event.title, query)
            || contains_ignore_case(&event.location, query)
            || contains_ignore_case(&event.description, query);
        if !hit {
            return false;
        }
    }

    if let Some(category) = &params.category {
        if !eq_ignore_case(&event.category, category) {
            return false;
        }
    }

    if let Some(tag) = &params.tag {
        if !event.has_tag(tag) {
            return false;
        }
    }

    if params.min_price.is_some_and(|min| event.price < min) {
        return false;
    }

    if params.max_price.is_some_and(|max| event.price > max) {
        return false;
    }

    true
}

/// Descending order on an optional metric, events without it last
fn descending<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_events(events: &mut [&Event], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => {}
        SortBy::Price => events.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::Popularity => events.sort_by(|a, b| descending(a.attendees, b.attendees)),
        SortBy::Rating => events.sort_by(|a, b| descending(a.rating, b.rating)),
    }
}

fn count_by<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<FacetCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut facets: Vec<FacetCount> = counts
        .into_iter()
        .map(|(name, count)| FacetCount {
            name: name.to_string(),
            count,
        })
        .collect();
    // Most frequent first, alphabetical among equals
    facets.sort_by(|a, b| b.count.cmp(&a.count));
    facets
}

fn facets(events: &[&Event]) -> SearchFacets {
    let mut tier_counts = [0usize; BudgetTier::ALL.len()];
    for event in events {
        tier_counts[BudgetTier::for_price(event.price) as usize] += 1;
    }

    let price_ranges = BudgetTier::ALL
        .iter()
        .zip(tier_counts)
        .map(|(tier, count)| FacetCount {
            name: tier.as_str().to_string(),
            count,
        })
        .collect();

    SearchFacets {
        categories: count_by(events.iter().map(|e| e.category.as_str())),
        price_ranges,
        locations: count_by(events.iter().map(|e| e.location.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Event> {
        let mut jazz = Event::new("1", "Festival de Jazz", "Paris", 45.0, "Musique")
            .with_tags(["Festival", "Jazz"]);
        jazz.attendees = Some(10_000);
        jazz.rating = Some(4.2);

        let mut expo = Event::new("2", "Exposition Art Moderne", "Lyon", 15.0, "Art")
            .with_tags(["Exposition"]);
        expo.description = "Art contemporain à Lyon".to_string();
        expo.rating = Some(4.8);

        let mut rock = Event::new("3", "Concert Rock", "Marseille", 35.0, "Musique")
            .with_tags(["Rock", "Concert"]);
        rock.attendees = Some(50_000);

        let lights = Event::new("4", "Fête des Lumières", "Lyon", 0.0, "Art");

        vec![jazz, expo, rock, lights]
    }

    fn ids(results: &SearchResults) -> Vec<&str> {
        results.events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_default_params_return_everything_in_catalog_order() {
        let results = search(&catalog(), &SearchParams::default()).unwrap();
        assert_eq!(ids(&results), vec!["1", "2", "3", "4"]);
        assert_eq!(results.total, 4);
        assert_eq!(results.total_pages, 1);
    }

    #[test]
    fn test_query_matches_title_location_or_description() {
        let params = SearchParams {
            q: Some("lyon".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(ids(&search(&catalog(), &params).unwrap()), vec!["2", "4"]);

        let params = SearchParams {
            q: Some("CONTEMPORAIN".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(ids(&search(&catalog(), &params).unwrap()), vec!["2"]);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let params = SearchParams {
            q: Some("   ".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(search(&catalog(), &params).unwrap().total, 4);
    }

    #[test]
    fn test_category_tag_and_price_filters() {
        let params = SearchParams {
            category: Some("musique".to_string()),
            max_price: Some(40.0),
            ..SearchParams::default()
        };
        assert_eq!(ids(&search(&catalog(), &params).unwrap()), vec!["3"]);

        let params = SearchParams {
            tag: Some("jazz".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(ids(&search(&catalog(), &params).unwrap()), vec!["1"]);

        let params = SearchParams {
            min_price: Some(15.0),
            max_price: Some(35.0),
            ..SearchParams::default()
        };
        assert_eq!(ids(&search(&catalog(), &params).unwrap()), vec!["2", "3"]);
    }

    #[test]
    fn test_sorting() {
        let by = |sort_by| {
            let params = SearchParams {
                sort_by,
                ..SearchParams::default()
            };
            search(&catalog(), &params)
                .unwrap()
                .events
                .into_iter()
                .map(|e| e.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(by(SortBy::Price), vec!["4", "2", "3", "1"]);
        assert_eq!(by(SortBy::Popularity), vec!["3", "1", "2", "4"]);
        assert_eq!(by(SortBy::Rating), vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn test_pagination() {
        let params = SearchParams {
            page: 2,
            per_page: 3,
            ..SearchParams::default()
        };
        let results = search(&catalog(), &params).unwrap();
        assert_eq!(ids(&results), vec!["4"]);
        assert_eq!(results.total, 4);
        assert_eq!(results.total_pages, 2);

        let params = SearchParams {
            page: 5,
            per_page: 3,
            ..SearchParams::default()
        };
        assert!(search(&catalog(), &params).unwrap().events.is_empty());
    }

    #[test]
    fn test_facets_cover_filtered_set() {
        let params = SearchParams {
            per_page: 1,
            ..SearchParams::default()
        };
        let facets = search(&catalog(), &params).unwrap().facets;

        assert_eq!(
            facets.categories,
            vec![
                FacetCount { name: "Art".to_string(), count: 2 },
                FacetCount { name: "Musique".to_string(), count: 2 },
            ]
        );
        assert_eq!(facets.price_ranges[0], FacetCount { name: "low".to_string(), count: 2 });
        assert_eq!(facets.price_ranges[1], FacetCount { name: "medium".to_string(), count: 2 });
        assert_eq!(facets.price_ranges[2], FacetCount { name: "high".to_string(), count: 0 });
        assert_eq!(facets.locations[0], FacetCount { name: "Lyon".to_string(), count: 2 });
    }

    #[test]
    fn test_invalid_params_rejected() {
        let inverted = SearchParams {
            min_price: Some(50.0),
            max_price: Some(10.0),
            ..SearchParams::default()
        };
        assert!(matches!(
            search(&catalog(), &inverted),
            Err(AppError::InvalidInput(_))
        ));

        let zero_page = SearchParams {
            page: 0,
            ..SearchParams::default()
        };
        assert!(search(&catalog(), &zero_page).is_err());

        let zero_per_page = SearchParams {
            per_page: 0,
            ..SearchParams::default()
        };
        assert!(matches!(
            search(&catalog(), &zero_per_page),
            Err(AppError::InvalidInput(_))
        ));

        let huge_page = SearchParams {
            per_page: MAX_PAGE_SIZE + 1,
            ..SearchParams::default()
        };
        assert!(search(&catalog(), &huge_page).is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let results = search(&[], &SearchParams::default()).unwrap();
        assert_eq!(results.total, 0);
        assert_eq!(results.total_pages, 0);
    }
}
