use chrono::Utc;
use tracing::{debug, info};

use crate::error::{BoardError, Result};
use crate::models::{Event, EventDraft, EventPatch, EventStatus};
use crate::store::RecordStore;

pub struct EventRepository {
    store: RecordStore,
    events: Vec<Event>,
}

impl EventRepository {
    pub fn open(store: RecordStore) -> Self {
        let events = store.load();
        info!("Loaded {} event(s) from '{}'", events.len(), store.key());
        Self { store, events }
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&Event>
    where
        P: Fn(&Event) -> bool,
    {
        self.events.iter().filter(|event| predicate(event)).collect()
    }

    pub fn create(&mut self, draft: EventDraft, image_url: Option<String>) -> Result<Event> {
        let event = Event::new(self.next_id(), draft, image_url);
        self.events.push(event.clone());
        self.persist()?;

        info!("Created event {} '{}'", event.id, event.title);
        Ok(event)
    }

    pub fn update(&mut self, id: i64, patch: EventPatch) -> Result<Option<Event>> {
        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            debug!("Update skipped, event {} not found", id);
            return Ok(None);
        };

        event.apply(patch);
        let updated = event.clone();
        self.persist()?;

        info!("Updated event {} '{}'", updated.id, updated.title);
        Ok(Some(updated))
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);

        if self.events.len() == before {
            debug!("Delete skipped, event {} not found", id);
            return Ok(false);
        }

        self.persist()?;
        info!("Deleted event {}", id);
        Ok(true)
    }

    pub fn set_status(&mut self, id: i64, status: EventStatus) -> Result<bool> {
        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            debug!("Status change skipped, event {} not found", id);
            return Ok(false);
        };

        if !event.status.can_transition_to(status) {
            return Err(BoardError::InvalidTransition {
                from: event.status,
                to: status,
            });
        }

        if event.status == status {
            return Ok(true);
        }

        let from = event.status;
        event.status = status;
        self.persist()?;

        info!("Event {} moved from {} to {}", id, from, status);
        Ok(true)
    }

    pub fn refresh(&mut self) -> bool {
        let latest = self.store.load();
        if latest == self.events {
            return false;
        }

        debug!(
            "Store changed externally ({} -> {} event(s))",
            self.events.len(),
            latest.len()
        );
        self.events = latest;
        true
    }

    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.events.iter().map(|event| event.id).max() {
            Some(last) if last >= now => last + 1,
            _ => now,
        }
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.events)
    }
}
