mod telemetry;

use serde::Serialize;
use swingout_api::{
    execute, import_legacy_records, GetScheduleExpectationsUseCase, GetSocialsAgendaUseCase,
    ListingsError, ScheduleExpectation,
};
use swingout_domain::AgendaDate;
use swingout_infra::{legacy::load_legacy_events, setup_context};
use telemetry::{get_subscriber, init_subscriber};

#[derive(Serialize)]
struct Listings {
    socials: Vec<AgendaDate>,
    stale_schedules: Vec<ScheduleExpectation>,
}

fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("swingout".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context();
    let records = load_legacy_events(&context.config.events_path)?;
    import_legacy_records(&records, &context);

    let socials = execute(GetSocialsAgendaUseCase::default(), &context)
        .map_err(ListingsError::from)?;
    let stale_schedules = execute(
        GetScheduleExpectationsUseCase {
            date: None,
            only_stale: true,
        },
        &context,
    )
    .map_err(ListingsError::from)?;

    let listings = Listings {
        socials,
        stale_schedules,
    };
    println!("{}", serde_json::to_string_pretty(&listings)?);
    Ok(())
}
