use crate::error::ListingsError;
use crate::shared::usecase::UseCase;
use chrono::NaiveDate;
use serde::Serialize;
use swingout_domain::{Event, ExpectedDate, ScheduleStatus, ID};
use swingout_infra::ListingsContext;

/// Whether an event has dates listed as far ahead as its frequency implies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleExpectation {
    pub event_id: ID,
    pub title: String,
    pub expected_date: ExpectedDate,
    pub date_expected_soon: bool,
    pub has_upcoming_date: bool,
    pub status: ScheduleStatus,
}

impl ScheduleExpectation {
    pub fn for_event(event: &Event, today: NaiveDate) -> Self {
        Self {
            event_id: event.id.clone(),
            title: event.title.clone(),
            expected_date: event.expected_date(),
            date_expected_soon: event.is_date_expected_soon(today),
            has_upcoming_date: event.has_date_on_or_after(today),
            status: event.schedule_status(today),
        }
    }

    /// The organisers should be asked for new dates
    pub fn is_stale(&self) -> bool {
        matches!(
            self.status,
            ScheduleStatus::OutOfDate | ScheduleStatus::NearOutOfDate
        )
    }
}

/// Schedule expectations of every listed event, in the order the events were stored
#[derive(Debug, Default)]
pub struct GetScheduleExpectationsUseCase {
    pub date: Option<NaiveDate>,
    /// Only report the events which are stale
    pub only_stale: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {}

impl From<UseCaseError> for ListingsError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

impl UseCase for GetScheduleExpectationsUseCase {
    type Response = Vec<ScheduleExpectation>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetScheduleExpectations";

    fn execute(&mut self, ctx: &ListingsContext) -> Result<Self::Response, Self::Error> {
        let today = self.date.unwrap_or_else(|| ctx.sys.today());
        let only_stale = self.only_stale;

        Ok(ctx
            .repos
            .events
            .find_all()
            .iter()
            .map(|event| ScheduleExpectation::for_event(event, today))
            .filter(|expectation| !only_stale || expectation.is_stale())
            .collect())
    }
}
