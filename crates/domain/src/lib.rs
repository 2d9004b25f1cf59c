mod agenda;
pub mod constants;
mod date;
mod event;
mod expectation;
mod organiser;
mod shared;
mod swing_date;

pub use agenda::{listing_dates, socials_dates, AgendaDate, ListingWindow};
pub use constants::{weekday_name, DateMarker};
pub use date::{parse_date, parse_date_list, DateListInput, ParseDateError};
pub use event::{Event, EventValidationError, InvariantViolation, ScheduleStatus};
pub use expectation::{expected_date, DateExpectation, ExpectedDate};
pub use organiser::Organiser;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use swing_date::SwingDate;
