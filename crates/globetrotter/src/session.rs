//! Explicit session context.
//!
//! Code that needs to know who is logged in takes a [`Session`] argument
//! instead of reaching into global state.

use crate::error::{Error, Result};
use crate::trip::User;

/// Email accepted by the demo login.
pub const DEMO_EMAIL: &str = "test@test.com";

/// Password accepted by the demo login.
pub const DEMO_PASSWORD: &str = "123";

/// Display name given to every logged-in user.
pub const DEMO_USER_NAME: &str = "Traveler";

/// Whether the pair matches the demo credentials exactly.
#[must_use]
pub fn credentials_match(email: &str, password: &str) -> bool {
    email == DEMO_EMAIL && password == DEMO_PASSWORD
}

/// Snapshot of the current login state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// A session with nobody logged in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for the given user.
    #[must_use]
    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether somebody is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user, or [`Error::NotAuthenticated`].
    ///
    /// This is the guard in front of every trip screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] when nobody is logged in.
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(Error::NotAuthenticated)
    }
}

impl From<Option<User>> for Session {
    fn from(user: Option<User>) -> Self {
        Self { user }
    }
}
