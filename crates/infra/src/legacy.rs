//! Reading of the legacy events export.
//!
//! The export is a JSON array of event records. Their `date_array` and
//! `cancellation_array` come either as the free text organisers typed in
//! (`"09/04/2011, 14/05/2011"`, `"Weekly"`, ...) or as a list of ISO dates.

use anyhow::Context;
use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use std::path::Path;
use swingout_domain::{DateListInput, Event, Organiser, ID};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyDateList {
    Text(String),
    Dates(Vec<NaiveDate>),
}

impl From<LegacyDateList> for DateListInput {
    fn from(list: LegacyDateList) -> Self {
        match list {
            LegacyDateList::Text(raw) => DateListInput::Text(raw),
            LegacyDateList::Dates(dates) => DateListInput::Dates(dates),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyOrganiser {
    pub name: String,
    #[serde(default)]
    pub shortname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyEventRecord {
    #[serde(default)]
    pub id: Option<ID>,
    pub title: String,
    #[serde(default)]
    pub frequency: u32,
    #[serde(default)]
    pub infrequent: bool,
    #[serde(default)]
    pub has_class: bool,
    #[serde(default)]
    pub has_social: bool,
    #[serde(default)]
    pub has_taster: bool,
    #[serde(default)]
    pub day: Option<Weekday>,
    #[serde(default)]
    pub venue_id: Option<ID>,
    #[serde(default)]
    pub class_organiser: Option<LegacyOrganiser>,
    #[serde(default)]
    pub last_date: Option<NaiveDate>,
    #[serde(default)]
    pub date_array: Option<LegacyDateList>,
    #[serde(default)]
    pub cancellation_array: Option<LegacyDateList>,
}

impl LegacyEventRecord {
    pub fn date_list(&self) -> DateListInput {
        self.date_array.clone().into()
    }

    pub fn cancellation_list(&self) -> DateListInput {
        self.cancellation_array.clone().into()
    }

    /// The event described by this record, without any dates
    pub fn to_event(&self) -> Event {
        let mut event = Event::new(self.title.clone());
        if let Some(id) = &self.id {
            event.id = id.clone();
        }
        event.frequency = self.frequency;
        event.infrequent = self.infrequent;
        event.has_class = self.has_class;
        event.has_social = self.has_social;
        event.has_taster = self.has_taster;
        event.day = self.day;
        event.venue_id = self.venue_id.clone();
        event.class_organiser = self.class_organiser.as_ref().map(|o| {
            let mut organiser = Organiser::new(o.name.clone());
            organiser.shortname = o.shortname.clone();
            organiser
        });
        event.last_date = self.last_date;
        event
    }
}

pub fn parse_legacy_events(json: &str) -> anyhow::Result<Vec<LegacyEventRecord>> {
    serde_json::from_str(json).context("Legacy events export is not valid")
}

pub fn load_legacy_events(path: &Path) -> anyhow::Result<Vec<LegacyEventRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read legacy events from {}", path.display()))?;
    let records = parse_legacy_events(&json)?;
    info!(
        "Read {} legacy event records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
