use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organiser {
    pub id: ID,
    pub name: String,
    pub shortname: Option<String>,
}

impl Organiser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            shortname: None,
        }
    }

    pub fn has_blank_name(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// The short name when there is one, otherwise the full name
    pub fn display_name(&self) -> &str {
        match &self.shortname {
            Some(shortname) if !shortname.trim().is_empty() => shortname,
            _ => &self.name,
        }
    }
}

impl Entity for Organiser {
    fn id(&self) -> &ID {
        &self.id
    }
}
