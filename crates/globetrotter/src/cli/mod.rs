//! Command-line interface for globetrotter.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    CitiesCommand, ConfigCommand, CreateTrip, EditTrip, FilterArg, LoginCommand, TripViewCommand,
    TripsCommand,
};

use crate::logging::Verbosity;

/// globetrotter - plan trips from the terminal
///
/// Log in with the demo account, then create, edit and share trips. Data is
/// kept locally in the configured backend.
#[derive(Debug, Parser)]
#[command(name = "globetrotter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with the demo account
    Login(LoginCommand),

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Manage trips
    #[command(subcommand)]
    Trips(TripsCommand),

    /// Show a trip's budget breakdown
    Budget(TripViewCommand),

    /// Show share links for a trip
    Share(TripViewCommand),

    /// Suggest destination cities
    Cities(CitiesCommand),

    /// List curated trip packages
    Packages {
        /// Show only the package with this id
        id: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Whether the command sits behind the login guard.
    #[must_use]
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Trips(_) | Self::Budget(_) | Self::Share(_))
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
