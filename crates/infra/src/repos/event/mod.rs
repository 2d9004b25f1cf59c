mod inmemory;

pub use inmemory::InMemoryEventRepo;
use swingout_domain::{Event, ID};

pub trait IEventRepo: Send + Sync {
    fn insert(&self, e: &Event) -> anyhow::Result<()>;
    fn save(&self, e: &Event) -> anyhow::Result<()>;
    fn find(&self, event_id: &ID) -> Option<Event>;
    /// All events in the order they were inserted
    fn find_all(&self) -> Vec<Event>;
    fn find_socials(&self) -> Vec<Event>;
    fn find_classes(&self) -> Vec<Event>;
    fn delete(&self, event_id: &ID) -> Option<Event>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use swingout_domain::{Entity, SwingDate};

    fn social(title: &str) -> Event {
        let mut event = Event::new(title);
        event.has_social = true;
        event
    }

    #[test]
    fn create_and_delete() {
        let repo = InMemoryEventRepo::new();
        let event = social("Swing Night");

        // Insert
        assert!(repo.insert(&event).is_ok());

        // Find
        let found = repo.find(&event.id).expect("To find event");
        assert!(found.eq(&event));

        // Delete
        let deleted = repo.delete(&event.id).expect("To delete event by id");
        assert!(deleted.eq(&event));
        assert!(repo.find(&event.id).is_none());
        assert!(repo.delete(&event.id).is_none());
    }

    #[test]
    fn update() {
        let repo = InMemoryEventRepo::new();
        let mut event = social("Swing Night");
        assert!(repo.insert(&event).is_ok());

        let date = NaiveDate::from_ymd_opt(2012, 2, 1).unwrap();
        event.add_date(SwingDate::new(date));
        assert!(repo.save(&event).is_ok());

        let found = repo.find(&event.id).expect("To find event");
        assert_eq!(found.dates(), vec![date]);
    }

    #[test]
    fn rejects_saving_an_unknown_event() {
        let repo = InMemoryEventRepo::new();
        assert!(repo.save(&social("Never inserted")).is_err());
    }

    #[test]
    fn rejects_inserting_the_same_event_twice() {
        let repo = InMemoryEventRepo::new();
        let event = social("Swing Night");
        assert!(repo.insert(&event).is_ok());
        assert!(repo.insert(&event).is_err());
    }

    #[test]
    fn finds_events_in_insertion_order() {
        let repo = InMemoryEventRepo::new();
        let first = social("First");
        let mut class = Event::new("Class");
        class.has_class = true;
        let last = social("Last");
        for event in &[&first, &class, &last] {
            repo.insert(event).expect("To insert event");
        }

        let ids = |events: Vec<Event>| events.iter().map(|e| e.id().clone()).collect::<Vec<_>>();
        assert_eq!(
            ids(repo.find_all()),
            vec![first.id.clone(), class.id.clone(), last.id.clone()]
        );
        assert_eq!(ids(repo.find_socials()), vec![first.id, last.id]);
        assert_eq!(ids(repo.find_classes()), vec![class.id]);
    }
}
