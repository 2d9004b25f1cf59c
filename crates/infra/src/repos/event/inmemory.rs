use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use swingout_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl IEventRepo for InMemoryEventRepo {
    fn insert(&self, e: &Event) -> anyhow::Result<()> {
        let mut events = lock(&self.events);
        if events.iter().any(|event| event.id == e.id) {
            return Err(anyhow::anyhow!("Event with id: {} already exists", e.id));
        }
        events.push(e.clone());
        Ok(())
    }

    fn save(&self, e: &Event) -> anyhow::Result<()> {
        if save(e, &self.events) {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Event with id: {} was not found", e.id))
        }
    }

    fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    fn find_all(&self) -> Vec<Event> {
        find_by(&self.events, |_| true)
    }

    fn find_socials(&self) -> Vec<Event> {
        find_by(&self.events, |event| event.has_social)
    }

    fn find_classes(&self) -> Vec<Event> {
        find_by(&self.events, |event| event.has_class)
    }

    fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }
}
