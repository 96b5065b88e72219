//! `globetrotter` - command-line front end for the trip store.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Local;
use clap::Parser;

use globetrotter::budget;
use globetrotter::catalog;
use globetrotter::cli::{CitiesCommand, Cli, Command, ConfigCommand, TripViewCommand, TripsCommand};
use globetrotter::query::{self, TripFilter};
use globetrotter::share;
use globetrotter::storage::KeyValueStore;
use globetrotter::{init_logging, Config, Error, LoginOutcome, Trip, TripId, TripStore};

type Store = TripStore<Box<dyn KeyValueStore>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    match cli.command {
        Command::Config(cmd) => handle_config(cli.config, cmd),
        Command::Cities(cmd) => {
            handle_cities(&cmd);
            Ok(())
        }
        Command::Packages { id, json } => handle_packages(id.as_deref(), json),
        command => run_with_store(&load_config(cli.config)?, command),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(path).context("loading configuration")
}

fn run_with_store(config: &Config, command: Command) -> anyhow::Result<()> {
    let mut store = TripStore::new(config.open_backend()?);

    if command.requires_session() {
        store.session()?.require_user()?;
    }

    match command {
        Command::Login(login) => handle_login(&mut store, &login.email, &login.password),
        Command::Logout => {
            store.logout()?;
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => handle_whoami(&store),
        Command::Trips(cmd) => handle_trips(&mut store, cmd),
        Command::Budget(cmd) => handle_budget(&mut store, &cmd),
        Command::Share(cmd) => handle_share(&mut store, config, &cmd),
        Command::Config(_) | Command::Cities(_) | Command::Packages { .. } => Ok(()),
    }
}

fn handle_login(store: &mut Store, email: &str, password: &str) -> anyhow::Result<()> {
    match store.login(email, password)? {
        LoginOutcome::Authenticated(user) => {
            println!("Welcome, {}! Logged in as {}.", user.name, user.email);
            Ok(())
        }
        LoginOutcome::Rejected => bail!("invalid email or password"),
    }
}

fn handle_whoami(store: &Store) -> anyhow::Result<()> {
    match store.session()?.user() {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("Not logged in."),
    }
    Ok(())
}

fn handle_trips(store: &mut Store, cmd: TripsCommand) -> anyhow::Result<()> {
    match cmd {
        TripsCommand::List {
            search,
            filter,
            json,
        } => {
            let trips = store.list_trips()?;
            let term = search.unwrap_or_default();
            let today = Local::now().date_naive();
            let shown = query::filter_trips(&trips, &term, TripFilter::from(filter), today);

            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else if shown.is_empty() {
                if term.is_empty() {
                    println!("No trips yet. Start planning with `globetrotter trips create`.");
                } else {
                    println!("No trips match \"{term}\".");
                }
            } else {
                for trip in shown {
                    print_trip_summary(trip);
                }
            }
        }
        TripsCommand::Show { id, json } => {
            let trip = find_trip(store, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&trip)?);
            } else {
                print_trip_detail(&trip);
            }
        }
        TripsCommand::Create(create) => {
            let trip = create.into_trip(store.generate_id());
            let id = trip.id.clone();
            store.save_trip(trip)?;
            println!("Created trip {id}.");
        }
        TripsCommand::Edit(edit) => {
            let trip = find_trip(store, &edit.id)?;
            let updated = edit.apply(trip);
            let id = updated.id.clone();
            store.save_trip(updated)?;
            println!("Updated trip {id}.");
        }
        TripsCommand::Delete { id } => {
            store.delete_trip(&TripId::new(id.as_str()))?;
            println!("Deleted trip {id}.");
        }
    }
    Ok(())
}

fn handle_budget(store: &mut Store, cmd: &TripViewCommand) -> anyhow::Result<()> {
    let trip = find_trip(store, &cmd.id)?;
    let lines = budget::breakdown(trip.budget);

    if cmd.json {
        let out = serde_json::json!({
            "trip": trip.id,
            "total": trip.budget,
            "categories": lines,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Budget breakdown: {}", trip.name);
    println!("Total: {}", format_inr(trip.budget));
    println!();
    for line in &lines {
        println!(
            "  {:<16} {:>12}  {:>3}%",
            line.category.label(),
            format_inr(line.amount),
            line.percentage
        );
    }
    Ok(())
}

fn handle_share(store: &mut Store, config: &Config, cmd: &TripViewCommand) -> anyhow::Result<()> {
    let trip = find_trip(store, &cmd.id)?;
    let links = share::share_links(&config.share.base_url, &trip);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    println!("Share \"{}\"", trip.name);
    println!("  Link:      {}", links.url);
    for link in &links.social {
        println!("  {:<10} {}", format!("{}:", link.network.name()), link.url);
    }
    Ok(())
}

fn handle_cities(cmd: &CitiesCommand) {
    if cmd.popular {
        for city in catalog::POPULAR_CITIES {
            println!("{:<10} {:>4} trips", city.name, city.trips);
        }
        return;
    }
    for city in catalog::suggest_cities(&cmd.query, &cmd.exclude) {
        println!("{city}");
    }
}

fn handle_packages(id: Option<&str>, json: bool) -> anyhow::Result<()> {
    let packages: Vec<&catalog::Package> = match id {
        Some(id) => match catalog::find_package(id) {
            Some(package) => vec![package],
            None => bail!("no package with id {id}"),
        },
        None => catalog::PACKAGES.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    for package in packages {
        println!(
            "{:<10} {}  {} days  from {}",
            package.id,
            package.name,
            package.days,
            format_inr(package.price)
        );
        println!("{:<10} {}", "", package.destinations.join(" -> "));
    }
    Ok(())
}

/// Config subcommands load only the file they act on, so a broken default
/// file never blocks `path` or `validate --file`.
fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Backend:            {:?}", config.storage.backend);
                println!("  Data directory:     {}", config.data_dir().display());
                println!("  Database path:      {}", config.database_path().display());
                println!();
                println!("[Share]");
                println!("  Base URL:           {}", config.share.base_url);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration is invalid")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

fn find_trip(store: &mut Store, id: &str) -> Result<Trip, Error> {
    store
        .get_trip(&TripId::new(id))?
        .ok_or_else(|| Error::trip_not_found(id))
}

fn print_trip_summary(trip: &Trip) {
    let days = trip
        .duration_days()
        .map_or_else(String::new, |d| format!(" ({d} days)"));
    println!(
        "{:<10} {}  {} - {}{}",
        trip.id, trip.name, trip.start_date, trip.end_date, days
    );
    if !trip.destinations.is_empty() {
        println!("{:<10} {}", "", trip.destinations.join(" -> "));
    }
}

fn print_trip_detail(trip: &Trip) {
    println!("{}", trip.name);
    println!("  Id:           {}", trip.id);
    println!("  Dates:        {} to {}", trip.start_date, trip.end_date);
    if let Some(days) = trip.duration_days() {
        println!("  Duration:     {days} days");
    }
    println!("  Destinations: {}", trip.destinations.join(", "));
    println!("  Budget:       {}", format_inr(trip.budget));
    println!("  Image:        {}", trip.image);
    if !trip.description.is_empty() {
        println!();
        println!("{}", trip.description);
    }
}

/// Rupee amount with Indian digit grouping, e.g. `₹12,34,567`.
fn format_inr(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let sign = if whole < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
    }

    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{sign}₹{},{last3}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ignores_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[share]\nbase_url = \"\"\n").unwrap();

        assert!(handle_config(Some(broken.clone()), ConfigCommand::Path).is_ok());
        assert!(handle_config(Some(broken), ConfigCommand::Show { json: true }).is_err());
    }

    #[test]
    fn test_validate_checks_named_file_only() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[share]\nbase_url = \"\"\n").unwrap();
        std::fs::write(&good, "[storage]\nbackend = \"memory\"\n").unwrap();

        let validate = |file: &std::path::Path| ConfigCommand::Validate {
            file: Some(file.to_path_buf()),
        };
        assert!(handle_config(Some(broken.clone()), validate(&good)).is_ok());
        assert!(handle_config(None, validate(&broken)).is_err());
    }

    #[test]
    fn test_packages_lookup() {
        assert!(handle_packages(Some("kerala"), true).is_ok());
        assert!(handle_packages(None, false).is_ok());
        assert!(handle_packages(Some("atlantis"), false).is_err());
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(45_000.0), "₹45,000");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
        assert_eq!(format_inr(-15_750.0), "-₹15,750");
    }
}
