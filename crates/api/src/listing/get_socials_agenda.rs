use crate::error::ListingsError;
use crate::shared::usecase::UseCase;
use chrono::NaiveDate;
use swingout_domain::{socials_dates, AgendaDate};
use swingout_infra::ListingsContext;

/// The socials listed for the fortnight starting at `date`,
/// or starting today when no date is given
#[derive(Debug, Default)]
pub struct GetSocialsAgendaUseCase {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {}

impl From<UseCaseError> for ListingsError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

impl UseCase for GetSocialsAgendaUseCase {
    type Response = Vec<AgendaDate>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSocialsAgenda";

    fn execute(&mut self, ctx: &ListingsContext) -> Result<Self::Response, Self::Error> {
        let today = self.date.unwrap_or_else(|| ctx.sys.today());
        let socials = ctx.repos.events.find_socials();
        Ok(socials_dates(&socials, today))
    }
}
