use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{info, warn};

const EVENTS_PATH_VAR: &str = "LISTINGS_EVENTS_PATH";
const TODAY_VAR: &str = "LISTINGS_TODAY";
const DEFAULT_EVENTS_PATH: &str = "events.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the legacy events export to import on startup
    pub events_path: PathBuf,
    /// Overrides the date the listings are computed for.
    /// This is used to reproduce a listing as it looked on a given day.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn new() -> Self {
        let events_path = match std::env::var(EVENTS_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => {
                info!(
                    "Did not find {} environment variable. Going to use the default path: {}",
                    EVENTS_PATH_VAR, DEFAULT_EVENTS_PATH
                );
                PathBuf::from(DEFAULT_EVENTS_PATH)
            }
        };

        let today = match std::env::var(TODAY_VAR) {
            Ok(today) => match NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d") {
                Ok(today) => {
                    info!("Listings will be computed for the fixed date: {}", today);
                    Some(today)
                }
                Err(_) => {
                    warn!(
                        "The given {}: {} is not a valid yyyy-mm-dd date, falling back to the system date.",
                        TODAY_VAR, today
                    );
                    None
                }
            },
            Err(_) => None,
        };

        Self { events_path, today }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
