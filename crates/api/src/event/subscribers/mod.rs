use super::import_legacy_event::ImportLegacyEventUseCase;
use crate::listing::get_schedule_expectations::ScheduleExpectation;
use crate::shared::usecase::Subscriber;
use swingout_domain::Event;
use swingout_infra::ListingsContext;
use tracing::warn;

pub struct WarnAboutStaleScheduleOnEventImported;

impl Subscriber<ImportLegacyEventUseCase> for WarnAboutStaleScheduleOnEventImported {
    fn notify(&self, e: &Event, ctx: &ListingsContext) {
        let expectation = ScheduleExpectation::for_event(e, ctx.sys.today());
        if expectation.is_stale() {
            warn!(
                "Event {} ({}) is {:?}, its next date was expected on {:?}",
                e.title, e.id, expectation.status, expectation.expected_date
            );
        }
    }
}
