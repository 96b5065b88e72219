//! Trip search and upcoming/past filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trip::Trip;

/// Which trips to show relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripFilter {
    /// Every trip.
    #[default]
    All,
    /// Trips starting today or later.
    Upcoming,
    /// Trips that started before today.
    Past,
}

impl TripFilter {
    /// Whether `trip` passes this filter on `today`.
    ///
    /// A trip with an unparseable start date is neither upcoming nor past.
    #[must_use]
    pub fn matches(self, trip: &Trip, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => trip.start().is_some_and(|start| start >= today),
            Self::Past => trip.start().is_some_and(|start| start < today),
        }
    }
}

/// Whether `trip`'s name or any destination contains `term`, ignoring case.
#[must_use]
pub fn matches_search(trip: &Trip, term: &str) -> bool {
    let term = term.to_lowercase();
    trip.name.to_lowercase().contains(&term)
        || trip
            .destinations
            .iter()
            .any(|d| d.to_lowercase().contains(&term))
}

/// Trips matching both the search term and the filter, in input order.
#[must_use]
pub fn filter_trips<'a>(
    trips: &'a [Trip],
    term: &str,
    filter: TripFilter,
    today: NaiveDate,
) -> Vec<&'a Trip> {
    trips
        .iter()
        .filter(|t| matches_search(t, term) && filter.matches(t, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn names<'a>(trips: &[&'a Trip]) -> Vec<&'a str> {
        trips.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_empty_search_matches_all() {
        let trips = catalog::seed_trips();
        let hits = filter_trips(&trips, "", TripFilter::All, date("2025-01-01"));
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_search_by_name() {
        let trips = catalog::seed_trips();
        let hits = filter_trips(&trips, "royal", TripFilter::All, date("2025-01-01"));
        assert_eq!(names(&hits), vec!["Royal Rajasthan Heritage"]);
    }

    #[test]
    fn test_search_by_destination() {
        let trips = catalog::seed_trips();
        let hits = filter_trips(&trips, "PONDI", TripFilter::All, date("2025-01-01"));
        assert_eq!(names(&hits), vec!["Chennai Cultural Trail"]);
    }

    #[test]
    fn test_upcoming_and_past() {
        let trips = catalog::seed_trips();
        let today = date("2025-03-10");

        let upcoming = filter_trips(&trips, "", TripFilter::Upcoming, today);
        assert_eq!(
            names(&upcoming),
            vec!["Royal Rajasthan Heritage", "Chennai Cultural Trail"]
        );

        let past = filter_trips(&trips, "", TripFilter::Past, today);
        assert_eq!(names(&past), vec!["Kerala Backwaters Bliss"]);
    }

    #[test]
    fn test_unparseable_start_date() {
        let mut trip = catalog::seed_trips().remove(0);
        trip.start_date = "soon".to_string();
        let today = date("2025-01-01");
        assert!(TripFilter::All.matches(&trip, today));
        assert!(!TripFilter::Upcoming.matches(&trip, today));
        assert!(!TripFilter::Past.matches(&trip, today));
    }

    #[test]
    fn test_filter_default() {
        assert_eq!(TripFilter::default(), TripFilter::All);
    }
}
