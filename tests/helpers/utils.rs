use chrono::{Duration, NaiveDate};
use swingout_domain::{AgendaDate, Event};

use super::setup::today;

pub fn format_date(date: &NaiveDate) -> String {
    // dd/mm/yyyy, the way organisers write their dates
    date.format("%d/%m/%Y").to_string()
}

pub fn days_from_today(days: i64) -> String {
    format_date(&(today() + Duration::days(days)))
}

pub fn titles(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.title.as_str()).collect()
}

pub fn agenda_titles(agenda: &[AgendaDate]) -> Vec<(NaiveDate, Vec<&str>)> {
    agenda
        .iter()
        .map(|a| (a.date, titles(&a.socials)))
        .collect()
}
