use crate::error::ListingsError;
use crate::shared::usecase::UseCase;
use chrono::NaiveDate;
use swingout_domain::{Event, ID};
use swingout_infra::ListingsContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateKind {
    Occurrence,
    Cancellation,
}

/// Adds one date to an event, keeping the dates it already has
#[derive(Debug)]
pub struct AddEventDateUseCase {
    pub event_id: ID,
    pub date: NaiveDate,
    pub kind: DateKind,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for ListingsError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl UseCase for AddEventDateUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "AddEventDate";

    fn execute(&mut self, ctx: &ListingsContext) -> Result<Self::Response, Self::Error> {
        let mut event = ctx
            .repos
            .events
            .find(&self.event_id)
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        let date = ctx.repos.swing_dates.find_or_create(self.date);
        match self.kind {
            DateKind::Occurrence => event.add_date(date),
            DateKind::Cancellation => event.add_cancellation(date),
        }

        ctx.repos
            .events
            .save(&event)
            .map(|_| event)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, ymd};

    fn insert_event(ctx: &ListingsContext) -> Event {
        let mut event = Event::new("Swing Night");
        event.has_social = true;
        event.venue_id = Some(ID::new());
        ctx.repos.events.insert(&event).unwrap();
        event
    }

    fn add(event: &Event, date: NaiveDate, kind: DateKind, ctx: &ListingsContext) -> Event {
        let mut usecase = AddEventDateUseCase {
            event_id: event.id.clone(),
            date,
            kind,
        };
        usecase.execute(ctx).unwrap()
    }

    #[test]
    fn adds_occurrences_in_date_order() {
        let ctx = setup_context();
        let event = insert_event(&ctx);
        add(&event, ymd(2012, 2, 1), DateKind::Occurrence, &ctx);
        add(&event, ymd(2011, 11, 30), DateKind::Occurrence, &ctx);
        let event = add(&event, ymd(2012, 2, 1), DateKind::Occurrence, &ctx);

        assert_eq!(event.dates(), vec![ymd(2011, 11, 30), ymd(2012, 2, 1)]);
        assert_eq!(ctx.repos.swing_dates.count(), 2);
    }

    #[test]
    fn adds_cancellations_in_the_order_given() {
        let ctx = setup_context();
        let event = insert_event(&ctx);
        add(&event, ymd(2012, 2, 1), DateKind::Cancellation, &ctx);
        let event = add(&event, ymd(2011, 11, 30), DateKind::Cancellation, &ctx);

        let stored = ctx.repos.events.find(&event.id).expect("To find event");
        assert_eq!(
            stored.cancellations(),
            vec![ymd(2012, 2, 1), ymd(2011, 11, 30)]
        );
        assert!(stored.dates().is_empty());
    }

    #[test]
    fn rejects_unknown_events() {
        let ctx = setup_context();
        let event_id = ID::new();
        let mut usecase = AddEventDateUseCase {
            event_id: event_id.clone(),
            date: ymd(2012, 2, 1),
            kind: DateKind::Occurrence,
        };
        assert_eq!(
            usecase.execute(&ctx).unwrap_err(),
            UseCaseError::NotFound(event_id)
        );
        assert_eq!(ctx.repos.swing_dates.count(), 0);
    }
}
