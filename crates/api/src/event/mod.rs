pub mod add_event_date;
pub mod import_legacy_event;
pub mod set_event_dates;
mod subscribers;
