//! Core record types for globetrotter.
//!
//! Field names serialize in camelCase so the persisted blobs keep the layout
//! of the original browser store (`startDate`, `endDate`, ...).

use std::fmt;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of a generated trip id.
const ID_LEN: usize = 9;

/// Alphabet for generated trip ids (base 36, lowercase).
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque trip identifier.
///
/// Ids are generated client-side and never change once a trip exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id.
    ///
    /// Collisions are possible in theory and are not detected.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..ID_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TripId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TripId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A trip planning record.
///
/// The store accepts any field contents: empty names, malformed dates,
/// negative budgets and repeated destinations are all stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier.
    pub id: TripId,
    /// Free-text label.
    pub name: String,
    /// First day of the trip, as entered (`YYYY-MM-DD` expected).
    pub start_date: String,
    /// Last day of the trip, as entered.
    pub end_date: String,
    /// Free-text description.
    pub description: String,
    /// Places visited, in order.
    pub destinations: Vec<String>,
    /// Budget in the implicit currency.
    pub budget: f64,
    /// Cover image URL.
    pub image: String,
}

impl Trip {
    /// Parse the start date, if it is a valid ISO date.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    /// Parse the end date, if it is a valid ISO date.
    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    /// Number of calendar days covered, counting both ends.
    ///
    /// `None` when either date doesn't parse. An end before the start gives
    /// zero or a negative count; the dates are not validated against each other.
    #[must_use]
    pub fn duration_days(&self) -> Option<i64> {
        let start = self.start()?;
        let end = self.end()?;
        Some((end - start).num_days() + 1)
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// The logged-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
}
