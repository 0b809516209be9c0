use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use unimate::commands::{self, AppError, AppState};
use unimate::config::{LoggingSettings, Settings};
use unimate::models::{
    CompatibilityRequest, ErrorResponse, ListingSearchRequest, ListingType, PriceBand,
    RoommateSearchRequest, RoommateShareInput, SplitRentRequest,
};

#[derive(Parser, Debug)]
#[command(name = "unimate", author, version, about = "Roommate matching and housing tools for UniMate")]
struct Args {
    /// Config file to use instead of config/default.toml and config/local.toml
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compatibility between two students
    Score {
        user_id: String,
        other_user_id: String,
    },
    /// Browse roommates for a student, best matches first
    Roommates {
        user_id: String,
        /// Case-insensitive match on name or university
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        university: Option<String>,
        /// low, medium or high
        #[arg(long)]
        budget: Option<PriceBand>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        verified_only: bool,
        #[arg(long)]
        limit: Option<u16>,
    },
    /// Search housing listings
    Listings {
        /// Case-insensitive match on title, city or neighborhood
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        city: Option<String>,
        /// apartment, room or studio
        #[arg(long = "type")]
        listing_type: Option<ListingType>,
        /// low, medium or high
        #[arg(long)]
        price: Option<PriceBand>,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long)]
        radius_km: Option<f64>,
    },
    /// Split monthly rent and utilities between roommates
    Split {
        #[arg(long)]
        rent: f64,
        #[arg(long, default_value_t = 0.0)]
        utilities: f64,
        /// NAME:ROOM_SIZE[:private], repeat once per roommate
        #[arg(long = "roommate", required = true, value_parser = parse_roommate)]
        roommates: Vec<RoommateShareInput>,
    },
}

fn parse_roommate(value: &str) -> Result<RoommateShareInput, String> {
    let mut parts = value.split(':');
    let name = parts.next().filter(|n| !n.is_empty()).ok_or("missing roommate name")?;
    let room_size = parts
        .next()
        .ok_or("missing room size, expected NAME:ROOM_SIZE[:private]")?
        .parse::<f64>()
        .map_err(|e| format!("invalid room size: {}", e))?;
    let has_private_bathroom = match parts.next() {
        None => false,
        Some("private") => true,
        Some(other) => return Err(format!("unexpected '{}', expected 'private'", other)),
    };

    Ok(RoommateShareInput {
        name: name.to_string(),
        room_size,
        has_private_bathroom,
    })
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(state: &AppState, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Score { user_id, other_user_id } => {
            let req = CompatibilityRequest { user_id, other_user_id };
            print_json(&commands::check_compatibility(state, &req)?)
        }
        Commands::Roommates { user_id, search, university, budget, gender, verified_only, limit } => {
            let req = RoommateSearchRequest {
                user_id,
                search,
                university,
                budget,
                gender,
                verified_only,
                limit,
            };
            print_json(&commands::find_roommates(state, &req)?)
        }
        Commands::Listings { search, city, listing_type, price, lat, lon, radius_km } => {
            let req = ListingSearchRequest {
                search,
                city,
                listing_type,
                price,
                latitude: lat,
                longitude: lon,
                radius_km,
            };
            print_json(&commands::search_listings(state, &req)?)
        }
        Commands::Split { rent, utilities, roommates } => {
            let req = SplitRentRequest {
                total_rent: rent,
                utilities,
                roommates,
            };
            print_json(&commands::split_rent(state, &req)?)
        }
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            let err = AppError::from(e);
            eprintln!("{}", serde_json::to_string(&ErrorResponse::from(&err)).unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Configuration loaded successfully");

    let result = AppState::from_settings(settings).and_then(|state| run(&state, args.command));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", serde_json::to_string(&ErrorResponse::from(&err)).unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roommate() {
        let shared = parse_roommate("Ali:120").unwrap();
        assert_eq!(shared.name, "Ali");
        assert_eq!(shared.room_size, 120.0);
        assert!(!shared.has_private_bathroom);

        assert!(parse_roommate("Mona:90:private").unwrap().has_private_bathroom);
        assert!(parse_roommate("Mona").is_err());
        assert!(parse_roommate(":90").is_err());
        assert!(parse_roommate("Mona:big").is_err());
        assert!(parse_roommate("Mona:90:ensuite").is_err());
    }

    #[test]
    fn test_cli_parses_split() {
        let args = Args::try_parse_from([
            "unimate", "split", "--rent", "3000", "--roommate", "A:100", "--roommate", "B:100:private",
        ])
        .unwrap();

        match args.command {
            Commands::Split { rent, utilities, roommates } => {
                assert_eq!(rent, 3000.0);
                assert_eq!(utilities, 0.0);
                assert_eq!(roommates.len(), 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_roommate_filters() {
        let args = Args::try_parse_from([
            "unimate", "roommates", "1", "--budget", "medium", "--verified-only",
        ])
        .unwrap();

        match args.command {
            Commands::Roommates { user_id, budget, verified_only, .. } => {
                assert_eq!(user_id, "1");
                assert_eq!(budget, Some(PriceBand::Medium));
                assert!(verified_only);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
