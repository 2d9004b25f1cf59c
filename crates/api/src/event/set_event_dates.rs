use crate::error::ListingsError;
use crate::shared::usecase::UseCase;
use swingout_domain::{parse_date_list, DateListInput, Event, ParseDateError, ID};
use swingout_infra::ListingsContext;

/// Replaces the occurrences and/or the cancellations of a stored event.
///
/// A list which is `None` is left untouched. Both lists are parsed before
/// anything is written, so a malformed token leaves the event as it was.
#[derive(Debug)]
pub struct SetEventDatesUseCase {
    pub event_id: ID,
    pub dates: Option<DateListInput>,
    pub cancellations: Option<DateListInput>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidDates(ParseDateError),
    StorageError,
}

impl From<UseCaseError> for ListingsError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::InvalidDates(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl UseCase for SetEventDatesUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "SetEventDates";

    fn execute(&mut self, ctx: &ListingsContext) -> Result<Self::Response, Self::Error> {
        let mut event = ctx
            .repos
            .events
            .find(&self.event_id)
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        let dates = self
            .dates
            .as_ref()
            .map(parse_date_list)
            .transpose()
            .map_err(UseCaseError::InvalidDates)?;
        let cancellations = self
            .cancellations
            .as_ref()
            .map(parse_date_list)
            .transpose()
            .map_err(UseCaseError::InvalidDates)?;

        if let Some(dates) = dates {
            event.set_dates(ctx.repos.swing_dates.find_or_create_many(&dates));
        }
        if let Some(cancellations) = cancellations {
            event.set_cancellations(ctx.repos.swing_dates.find_or_create_many(&cancellations));
        }

        ctx.repos
            .events
            .save(&event)
            .map(|_| event)
            .map_err(|_| UseCaseError::StorageError)
    }
}
