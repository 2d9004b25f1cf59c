use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar date on which events occur or are cancelled.
///
/// `SwingDate`s are interned: there is exactly one stored `SwingDate` per
/// calendar date and every event referring to that date shares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwingDate {
    pub id: ID,
    pub date: NaiveDate,
}

impl SwingDate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Default::default(),
            date,
        }
    }
}

impl Entity for SwingDate {
    fn id(&self) -> &ID {
        &self.id
    }
}
