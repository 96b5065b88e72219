//! Static reference data: seed trips, the city catalog, cover images, and the
//! curated packages shown to new users.

use serde::Serialize;

use crate::trip::{Trip, TripId};

/// Budget pre-filled for a new trip.
pub const DEFAULT_BUDGET: f64 = 30_000.0;

/// Cities offered as trip destinations, in display order.
pub const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Jaipur",
    "Udaipur",
    "Goa",
    "Kochi",
    "Alleppey",
    "Munnar",
    "Agra",
    "Varanasi",
    "Rishikesh",
    "Shimla",
    "Manali",
    "Leh",
    "Darjeeling",
    "Gangtok",
    "Jodhpur",
    "Jaisalmer",
    "Amritsar",
    "Pondicherry",
    "Ooty",
    "Coorg",
    "Hampi",
    "Mysore",
    "Ajanta",
    "Ellora",
];

/// Cover images offered by the trip form. The first is the default.
pub const DEFAULT_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1512343879784-a960bf40e7f2?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=600&h=400&fit=crop",
];

/// Cover image used when none is chosen.
#[must_use]
pub fn default_image() -> &'static str {
    DEFAULT_IMAGES[0]
}

/// A ready-made itinerary offered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Package {
    /// Short slug.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Length in days.
    pub days: u32,
    /// Starting price.
    pub price: f64,
    /// Cover image URL.
    pub image: &'static str,
    /// Places covered, in order.
    pub destinations: &'static [&'static str],
}

/// A destination highlighted with its trip count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopularCity {
    /// City or region name.
    pub name: &'static str,
    /// Cover image URL.
    pub image: &'static str,
    /// Number of trips planned there.
    pub trips: u32,
}

/// Curated packages, in display order.
pub const PACKAGES: &[Package] = &[
    Package {
        id: "kerala",
        name: "Kerala Bliss",
        days: 7,
        price: 45_000.0,
        image: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=400",
        destinations: &["Kochi", "Alleppey", "Munnar"],
    },
    Package {
        id: "rajasthan",
        name: "Royal Rajasthan",
        days: 8,
        price: 55_000.0,
        image: "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?w=400",
        destinations: &["Jaipur", "Udaipur", "Jodhpur"],
    },
    Package {
        id: "goa",
        name: "Goa Beach Escape",
        days: 5,
        price: 25_000.0,
        image: "https://images.unsplash.com/photo-1512343879784-a960bf40e7f2?w=400",
        destinations: &["North Goa", "South Goa"],
    },
    Package {
        id: "himachal",
        name: "Himalayan Heights",
        days: 6,
        price: 35_000.0,
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400",
        destinations: &["Shimla", "Manali", "Kullu"],
    },
];

/// Popular destinations, in display order.
pub const POPULAR_CITIES: &[PopularCity] = &[
    PopularCity {
        name: "Jaipur",
        image: "https://images.unsplash.com/photo-1599661046289-e31897846e41?w=300",
        trips: 234,
    },
    PopularCity {
        name: "Goa",
        image: "https://images.unsplash.com/photo-1512343879784-a960bf40e7f2?w=300",
        trips: 456,
    },
    PopularCity {
        name: "Kerala",
        image: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=300",
        trips: 321,
    },
    PopularCity {
        name: "Ladakh",
        image: "https://images.unsplash.com/photo-1537572263231-9c14e7803a4b?w=300",
        trips: 189,
    },
    PopularCity {
        name: "Varanasi",
        image: "https://images.unsplash.com/photo-1561361513-2d000a50f0dc?w=300",
        trips: 278,
    },
    PopularCity {
        name: "Udaipur",
        image: "https://images.unsplash.com/photo-1586612438666-ffd0ae97ad36?w=300",
        trips: 198,
    },
];

/// Look up a package by its slug, ignoring case.
#[must_use]
pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// The three demo trips installed into empty storage.
#[must_use]
pub fn seed_trips() -> Vec<Trip> {
    vec![
        seed(
            "1",
            "Kerala Backwaters Bliss",
            ("2025-02-15", "2025-02-22"),
            "Explore the serene backwaters of Kerala with houseboat stays and Ayurvedic spa experiences.",
            &["Kochi", "Alleppey", "Munnar"],
            45_000.0,
            "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=600&h=400&fit=crop",
        ),
        seed(
            "2",
            "Royal Rajasthan Heritage",
            ("2025-03-10", "2025-03-18"),
            "Experience the royal heritage of Rajasthan with palace stays and desert safaris.",
            &["Jaipur", "Udaipur", "Jodhpur", "Jaisalmer"],
            65_000.0,
            "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?w=600&h=400&fit=crop",
        ),
        seed(
            "3",
            "Chennai Cultural Trail",
            ("2025-04-05", "2025-04-10"),
            "Discover the rich culture and temples of Tamil Nadu starting from Chennai.",
            &["Chennai", "Mahabalipuram", "Pondicherry"],
            28_000.0,
            "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=600&h=400&fit=crop",
        ),
    ]
}

fn seed(
    id: &str,
    name: &str,
    (start_date, end_date): (&str, &str),
    description: &str,
    destinations: &[&str],
    budget: f64,
    image: &str,
) -> Trip {
    Trip {
        id: TripId::new(id),
        name: name.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        description: description.to_string(),
        destinations: destinations.iter().map(ToString::to_string).collect(),
        budget,
        image: image.to_string(),
    }
}

/// Catalog cities matching `query` that haven't been picked yet.
///
/// Matching is a case-insensitive substring test; an empty query matches
/// every city. Results keep catalog order.
#[must_use]
pub fn suggest_cities<S: AsRef<str>>(query: &str, already_chosen: &[S]) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .filter(|city| !already_chosen.iter().any(|c| c.as_ref() == *city))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_trips_order_and_ids() {
        let trips = seed_trips();
        let ids: Vec<&str> = trips.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(trips[0].name, "Kerala Backwaters Bliss");
        assert_eq!(trips[1].destinations.len(), 4);
        assert!((trips[2].budget - 28_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seed_dates_parse() {
        for trip in seed_trips() {
            assert!(trip.start().is_some(), "{}", trip.name);
            assert!(trip.end().is_some(), "{}", trip.name);
        }
    }

    #[test]
    fn test_city_catalog_size() {
        assert_eq!(CITIES.len(), 30);
        assert_eq!(CITIES[0], "Mumbai");
    }

    #[test]
    fn test_default_image() {
        assert_eq!(default_image(), DEFAULT_IMAGES[0]);
        assert_eq!(DEFAULT_IMAGES.len(), 5);
    }

    #[test]
    fn test_suggest_cities_case_insensitive() {
        let none: [&str; 0] = [];
        let hits = suggest_cities("PUR", &none);
        assert_eq!(hits, vec!["Jaipur", "Udaipur", "Jodhpur"]);
    }

    #[test]
    fn test_suggest_cities_excludes_chosen() {
        let hits = suggest_cities("pur", &["Jaipur".to_string()]);
        assert_eq!(hits, vec!["Udaipur", "Jodhpur"]);
    }

    #[test]
    fn test_packages() {
        let ids: Vec<&str> = PACKAGES.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["kerala", "rajasthan", "goa", "himachal"]);
        assert!(PACKAGES.iter().all(|p| p.days > 0 && p.price > 0.0));
    }

    #[test]
    fn test_find_package() {
        assert_eq!(find_package("GOA").map(|p| p.name), Some("Goa Beach Escape"));
        assert!(find_package("ladakh").is_none());
    }

    #[test]
    fn test_package_serializes() {
        let json = serde_json::to_value(PACKAGES[1]).unwrap();
        assert_eq!(json["days"], 8);
        assert_eq!(json["destinations"][2], "Jodhpur");
    }

    #[test]
    fn test_popular_cities() {
        assert_eq!(POPULAR_CITIES.len(), 6);
        let busiest = POPULAR_CITIES.iter().max_by_key(|c| c.trips).unwrap();
        assert_eq!(busiest.name, "Goa");
    }

    #[test]
    fn test_suggest_cities_empty_query() {
        let none: [&str; 0] = [];
        assert_eq!(suggest_cities("", &none).len(), CITIES.len());
    }
}
