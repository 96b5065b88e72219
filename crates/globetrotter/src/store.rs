//! The trip store.
//!
//! Every operation is a whole-record read-modify-write against the backing
//! [`KeyValueStore`]: the trips collection lives as one JSON array under
//! [`TRIPS_KEY`], the session user as one JSON object under [`USER_KEY`].
//! Two stores sharing a medium are not coordinated; the last write wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::error::{Error, Result};
use crate::session::{self, Session};
use crate::storage::KeyValueStore;
use crate::trip::{Trip, TripId, User};

/// Storage key for the trips collection.
pub const TRIPS_KEY: &str = "globetrotter_trips";

/// Storage key for the session user.
pub const USER_KEY: &str = "globetrotter_user";

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the user is now persisted as the session.
    Authenticated(User),
    /// Credentials rejected; any previous session is left as it was.
    Rejected,
}

impl LoginOutcome {
    /// The authenticated user, if the login succeeded.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Rejected => None,
        }
    }

    /// Whether the login succeeded.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Trip and session repository over a key-value backend.
#[derive(Debug)]
pub struct TripStore<S> {
    backend: S,
}

impl<S: KeyValueStore> TripStore<S> {
    /// Wrap a backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Unwrap into the backend.
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// All trips in storage order.
    ///
    /// When no trips have ever been stored, the demo trips are written first
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn list_trips(&mut self) -> Result<Vec<Trip>> {
        if let Some(trips) = self.load::<Vec<Trip>>(TRIPS_KEY)? {
            debug!("Loaded {} trips", trips.len());
            return Ok(trips);
        }

        let seed = catalog::seed_trips();
        self.store(TRIPS_KEY, &seed)?;
        info!("Seeded storage with {} demo trips", seed.len());
        Ok(seed)
    }

    /// Look up one trip by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn get_trip(&mut self, id: &TripId) -> Result<Option<Trip>> {
        Ok(self.list_trips()?.into_iter().find(|t| &t.id == id))
    }

    /// Insert or fully replace a trip, matched by id.
    ///
    /// Field contents are stored as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn save_trip(&mut self, trip: Trip) -> Result<()> {
        let mut trips = self.list_trips()?;
        if let Some(existing) = trips.iter_mut().find(|t| t.id == trip.id) {
            debug!("Replacing trip {}", trip.id);
            *existing = trip;
        } else {
            debug!("Appending trip {}", trip.id);
            trips.push(trip);
        }
        self.store(TRIPS_KEY, &trips)
    }

    /// Remove the trip with the given id. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn delete_trip(&mut self, id: &TripId) -> Result<()> {
        let mut trips = self.list_trips()?;
        let before = trips.len();
        trips.retain(|t| &t.id != id);
        if trips.len() == before {
            debug!("No trip {} to delete", id);
        } else {
            debug!("Deleted trip {}", id);
        }
        self.store(TRIPS_KEY, &trips)
    }

    /// The persisted session user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn get_user(&self) -> Result<Option<User>> {
        self.load(USER_KEY)
    }

    /// Current session context.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn session(&self) -> Result<Session> {
        Ok(Session::from(self.get_user()?))
    }

    /// Attempt the demo login.
    ///
    /// Only the fixed demo pair is accepted. A rejected attempt writes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting an accepted session fails.
    pub fn login(&mut self, email: &str, password: &str) -> Result<LoginOutcome> {
        if !session::credentials_match(email, password) {
            warn!("Rejected login for {}", email);
            return Ok(LoginOutcome::Rejected);
        }

        let user = User {
            email: email.to_string(),
            name: session::DEMO_USER_NAME.to_string(),
        };
        self.store(USER_KEY, &user)?;
        info!("Logged in as {}", user.email);
        Ok(LoginOutcome::Authenticated(user))
    }

    /// Clear the session user. Safe to call when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn logout(&mut self) -> Result<()> {
        self.backend.remove(USER_KEY)?;
        info!("Logged out");
        Ok(())
    }

    /// A fresh trip id.
    #[must_use]
    pub fn generate_id(&self) -> TripId {
        TripId::generate()
    }

    /// Decode the record under `key`. Missing and empty blobs are `None`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.read(key)? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| Error::corrupt_record(key, source)),
            _ => Ok(None),
        }
    }

    fn store<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.write(key, &bytes)
    }
}
