mod error;
mod event;
mod listing;
mod shared;

pub use error::ListingsError;
pub use event::add_event_date::{AddEventDateUseCase, DateKind};
pub use event::import_legacy_event::ImportLegacyEventUseCase;
pub use event::set_event_dates::SetEventDatesUseCase;
pub use listing::get_active_classes::GetActiveClassesUseCase;
pub use listing::get_schedule_expectations::{GetScheduleExpectationsUseCase, ScheduleExpectation};
pub use listing::get_socials_agenda::GetSocialsAgendaUseCase;
pub use shared::usecase::{execute, Subscriber, UseCase};

use swingout_infra::{legacy::LegacyEventRecord, ListingsContext};
use tracing::{info, warn};

/// Imports every legacy record into the listings.
///
/// A record which can not be imported is logged and skipped, the other
/// records are still imported. Returns the number of imported events.
pub fn import_legacy_records(records: &[LegacyEventRecord], ctx: &ListingsContext) -> usize {
    let mut imported = 0;
    for record in records {
        let usecase = ImportLegacyEventUseCase {
            event: record.to_event(),
            dates: record.date_list(),
            cancellations: record.cancellation_list(),
        };
        match execute(usecase, ctx) {
            Ok(_) => imported += 1,
            Err(e) => warn!(
                "Skipped legacy event {}: {}",
                record.title,
                ListingsError::from(e)
            ),
        }
    }
    info!("Imported {} of {} legacy events", imported, records.len());
    imported
}
