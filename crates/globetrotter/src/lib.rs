//! `globetrotter` - a local trip planning store.
//!
//! Trips and the demo login session live in a pluggable key-value backend
//! ([`storage`]). [`TripStore`] implements the record operations on top of
//! it; [`budget`], [`share`] and [`query`] derive views from stored trips.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod budget;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod session;
pub mod share;
pub mod storage;
pub mod store;
pub mod trip;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::Session;
pub use store::{LoginOutcome, TripStore};
pub use trip::{Trip, TripId, User};
