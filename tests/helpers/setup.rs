use chrono::NaiveDate;
use std::path::PathBuf;
use swingout_api::import_legacy_records;
use swingout_infra::{legacy::parse_legacy_events, Config, ListingsContext};

/// 11th October 2012, a Thursday
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 10, 11).unwrap()
}

// Imports the legacy export into a context where it is always `today()`
pub fn setup_app(events_json: &str) -> ListingsContext {
    let ctx = ListingsContext::create_inmemory(Config {
        events_path: PathBuf::from("events.json"),
        today: Some(today()),
    });
    let records = parse_legacy_events(events_json).expect("Expected a valid legacy export");
    import_legacy_records(&records, &ctx);
    ctx
}
