//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands, plus the
//! conversions from trip arguments into [`Trip`] records.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::catalog;
use crate::query::TripFilter;
use crate::trip::{Trip, TripId};

/// Login command arguments.
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Account email
    pub email: String,

    /// Account password
    pub password: String,
}

/// Trip management commands.
#[derive(Debug, Subcommand)]
pub enum TripsCommand {
    /// List trips
    List {
        /// Only trips whose name or a destination contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to upcoming or past trips
        #[arg(short, long, value_enum, default_value = "all")]
        filter: FilterArg,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show one trip
    Show {
        /// Trip id
        id: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Create a new trip
    Create(CreateTrip),

    /// Edit an existing trip
    Edit(EditTrip),

    /// Delete a trip
    Delete {
        /// Trip id
        id: String,
    },
}

/// Fields for a new trip.
#[derive(Debug, Args)]
pub struct CreateTrip {
    /// Trip name
    #[arg(short, long)]
    pub name: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Destination city (repeatable, kept in order)
    #[arg(long = "destination", value_name = "CITY")]
    pub destinations: Vec<String>,

    /// Budget in rupees
    #[arg(short, long, default_value_t = catalog::DEFAULT_BUDGET)]
    pub budget: f64,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl CreateTrip {
    /// Build the trip record under the given id.
    #[must_use]
    pub fn into_trip(self, id: TripId) -> Trip {
        Trip {
            id,
            name: self.name,
            start_date: self.start,
            end_date: self.end,
            description: self.description,
            destinations: self.destinations,
            budget: self.budget,
            image: self
                .image
                .unwrap_or_else(|| catalog::default_image().to_string()),
        }
    }
}

/// Changes to an existing trip. Omitted fields keep their current value.
#[derive(Debug, Args)]
pub struct EditTrip {
    /// Trip id
    pub id: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New start date
    #[arg(long)]
    pub start: Option<String>,

    /// New end date
    #[arg(long)]
    pub end: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Replace destinations with these (repeatable)
    #[arg(long = "destination", value_name = "CITY")]
    pub destinations: Vec<String>,

    /// Remove all destinations
    #[arg(long, conflicts_with = "destinations")]
    pub clear_destinations: bool,

    /// New budget
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// New cover image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl EditTrip {
    /// Apply the changes to `trip`, producing the full replacement record.
    #[must_use]
    pub fn apply(self, mut trip: Trip) -> Trip {
        if let Some(name) = self.name {
            trip.name = name;
        }
        if let Some(start) = self.start {
            trip.start_date = start;
        }
        if let Some(end) = self.end {
            trip.end_date = end;
        }
        if let Some(description) = self.description {
            trip.description = description;
        }
        if self.clear_destinations {
            trip.destinations.clear();
        } else if !self.destinations.is_empty() {
            trip.destinations = self.destinations;
        }
        if let Some(budget) = self.budget {
            trip.budget = budget;
        }
        if let Some(image) = self.image {
            trip.image = image;
        }
        trip
    }
}

/// Arguments for commands that act on one trip.
#[derive(Debug, Args)]
pub struct TripViewCommand {
    /// Trip id
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// City suggestion arguments.
#[derive(Debug, Args)]
pub struct CitiesCommand {
    /// Text to look for in city names
    #[arg(default_value = "")]
    pub query: String,

    /// Leave out a city already chosen (repeatable)
    #[arg(short, long, value_name = "CITY")]
    pub exclude: Vec<String>,

    /// List popular destinations instead
    #[arg(long, conflicts_with_all = ["query", "exclude"])]
    pub popular: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Trip filter argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterArg {
    /// All trips
    #[default]
    All,
    /// Trips starting today or later
    Upcoming,
    /// Trips that already started
    Past,
}

impl From<FilterArg> for TripFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Upcoming => Self::Upcoming,
            FilterArg::Past => Self::Past,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args() -> CreateTrip {
        CreateTrip {
            name: "Hill Stations".to_string(),
            start: "2025-10-01".to_string(),
            end: "2025-10-07".to_string(),
            description: String::new(),
            destinations: vec!["Shimla".to_string(), "Manali".to_string()],
            budget: catalog::DEFAULT_BUDGET,
            image: None,
        }
    }

    fn edit_args(id: &str) -> EditTrip {
        EditTrip {
            id: id.to_string(),
            name: None,
            start: None,
            end: None,
            description: None,
            destinations: Vec::new(),
            clear_destinations: false,
            budget: None,
            image: None,
        }
    }

    #[test]
    fn test_filter_arg_conversion() {
        assert_eq!(TripFilter::from(FilterArg::All), TripFilter::All);
        assert_eq!(TripFilter::from(FilterArg::Upcoming), TripFilter::Upcoming);
        assert_eq!(TripFilter::from(FilterArg::Past), TripFilter::Past);
    }

    #[test]
    fn test_create_into_trip_defaults() {
        let trip = create_args().into_trip(TripId::new("new"));
        assert_eq!(trip.id.as_str(), "new");
        assert_eq!(trip.image, catalog::default_image());
        assert!((trip.budget - 30_000.0).abs() < f64::EPSILON);
        assert_eq!(trip.destinations, vec!["Shimla", "Manali"]);
    }

    #[test]
    fn test_edit_keeps_omitted_fields() {
        let original = create_args().into_trip(TripId::new("t"));
        let mut edit = edit_args("t");
        edit.name = Some("Renamed".to_string());

        let edited = edit.apply(original.clone());
        assert_eq!(edited.name, "Renamed");
        assert_eq!(edited.start_date, original.start_date);
        assert_eq!(edited.destinations, original.destinations);
    }

    #[test]
    fn test_edit_replaces_destinations() {
        let original = create_args().into_trip(TripId::new("t"));
        let mut edit = edit_args("t");
        edit.destinations = vec!["Leh".to_string()];
        assert_eq!(edit.apply(original).destinations, vec!["Leh"]);
    }

    #[test]
    fn test_edit_clears_destinations() {
        let original = create_args().into_trip(TripId::new("t"));
        let mut edit = edit_args("t");
        edit.clear_destinations = true;
        assert!(edit.apply(original).destinations.is_empty());
    }

    #[test]
    fn test_edit_never_changes_id() {
        let original = create_args().into_trip(TripId::new("keep"));
        let edited = edit_args("other").apply(original);
        assert_eq!(edited.id.as_str(), "keep");
    }
}
