use crate::error::ListingsError;
use crate::shared::usecase::UseCase;
use chrono::{NaiveDate, Weekday};
use swingout_domain::Event;
use swingout_infra::ListingsContext;

/// Classes which have not ended yet, optionally only those held on `day`
#[derive(Debug, Default)]
pub struct GetActiveClassesUseCase {
    pub day: Option<Weekday>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {}

impl From<UseCaseError> for ListingsError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

impl UseCase for GetActiveClassesUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetActiveClasses";

    fn execute(&mut self, ctx: &ListingsContext) -> Result<Self::Response, Self::Error> {
        let today = self.date.unwrap_or_else(|| ctx.sys.today());
        let day = self.day;

        Ok(ctx
            .repos
            .events
            .find_classes()
            .into_iter()
            .filter(|event| event.is_active_class(today))
            .filter(|event| day.is_none() || event.day == day)
            .collect())
    }
}
