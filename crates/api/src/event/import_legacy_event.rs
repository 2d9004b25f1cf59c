use super::subscribers::WarnAboutStaleScheduleOnEventImported;
use crate::error::ListingsError;
use crate::shared::usecase::{Subscriber, UseCase};
use swingout_domain::{
    parse_date_list, DateListInput, Event, EventValidationError, ParseDateError,
};
use swingout_infra::ListingsContext;

/// Brings an event from the legacy export into the listings.
///
/// The occurrences and cancellations of the event are replaced as a whole,
/// so importing an event again with fewer dates removes the dates that are
/// no longer listed. Nothing is stored unless both date lists are valid.
#[derive(Debug)]
pub struct ImportLegacyEventUseCase {
    pub event: Event,
    pub dates: DateListInput,
    pub cancellations: DateListInput,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDates(ParseDateError),
    InvalidEvent(EventValidationError),
    StorageError,
}

impl From<UseCaseError> for ListingsError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDates(e) => Self::BadClientData(e.to_string()),
            UseCaseError::InvalidEvent(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl UseCase for ImportLegacyEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "ImportLegacyEvent";

    fn execute(&mut self, ctx: &ListingsContext) -> Result<Self::Response, Self::Error> {
        let dates = parse_date_list(&self.dates).map_err(UseCaseError::InvalidDates)?;
        let cancellations =
            parse_date_list(&self.cancellations).map_err(UseCaseError::InvalidDates)?;
        self.event.validate().map_err(UseCaseError::InvalidEvent)?;

        let mut event = self.event.clone();
        event.set_dates(ctx.repos.swing_dates.find_or_create_many(&dates));
        event.set_cancellations(ctx.repos.swing_dates.find_or_create_many(&cancellations));

        let res = if ctx.repos.events.find(&event.id).is_some() {
            ctx.repos.events.save(&event)
        } else {
            ctx.repos.events.insert(&event)
        };
        res.map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WarnAboutStaleScheduleOnEventImported)]
    }
}
