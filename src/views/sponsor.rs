use std::convert::Infallible;
use tokio::sync::watch;
use tracing::debug;

use super::{BoardView, Dispatcher};
use crate::error::Result;
use crate::models::{Event, EventStatus};
use crate::repositories::EventRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Sponsor,
    Sponsored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub audience: String,
    pub image_url: String,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub audience: String,
    pub audience_size: String,
    pub sponsorship: String,
}

impl EventDetails {
    pub fn audience_line(&self) -> String {
        format!("{} ({} people)", self.audience, self.audience_size)
    }
}

impl From<&Event> for EventDetails {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            image_url: event.image_url.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            date: event.date.clone(),
            audience: event.audience.clone(),
            audience_size: event.audience_size.clone(),
            sponsorship: event.sponsorship.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorSnapshot {
    pub revision: u64,
    pub cards: Vec<EventCard>,
    pub details: Option<EventDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SponsorCommand {
    ViewDetails(i64),
    CloseDetails,
    Sponsor(i64),
}

pub fn event_cards(events: &[Event]) -> Vec<EventCard> {
    events
        .iter()
        .map(|event| EventCard {
            id: event.id,
            title: event.title.clone(),
            date: event.date.clone(),
            audience: event.audience.clone(),
            image_url: event.image_url.clone(),
            action: if event.is_matched() {
                CardAction::Sponsored
            } else {
                CardAction::Sponsor
            },
        })
        .collect()
}

pub struct SponsorView {
    repo: EventRepository,
    details: Option<EventDetails>,
    revision: u64,
    snapshot: watch::Sender<SponsorSnapshot>,
}

impl SponsorView {
    pub fn new(repo: EventRepository) -> Self {
        let (snapshot, _) = watch::channel(SponsorSnapshot {
            revision: 1,
            cards: event_cards(repo.all()),
            details: None,
        });

        Self {
            repo,
            details: None,
            revision: 1,
            snapshot,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SponsorSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> SponsorSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn repository(&self) -> &EventRepository {
        &self.repo
    }

    pub fn cards(&self) -> Vec<EventCard> {
        event_cards(self.repo.all())
    }

    pub fn details(&self) -> Option<&EventDetails> {
        self.details.as_ref()
    }

    pub fn view_details(&mut self, id: i64) -> bool {
        let Some(event) = self.repo.find(id) else {
            debug!("Details ignored, event {} not found", id);
            return false;
        };

        self.details = Some(EventDetails::from(event));
        self.render();
        true
    }

    pub fn close_details(&mut self) {
        self.details = None;
        self.render();
    }

    pub fn sponsor(&mut self, id: i64) -> Result<bool> {
        let found = self.repo.set_status(id, EventStatus::Matched)?;
        if found {
            self.render();
        }
        Ok(found)
    }

    fn render(&mut self) {
        self.revision += 1;
        self.snapshot.send_replace(SponsorSnapshot {
            revision: self.revision,
            cards: self.cards(),
            details: self.details.clone(),
        });
    }
}

impl BoardView for SponsorView {
    type Command = SponsorCommand;
    type Completion = Infallible;

    fn name(&self) -> &'static str {
        "sponsor"
    }

    fn handle(&mut self, command: SponsorCommand, _dispatcher: &Dispatcher<Infallible>) -> Result<()> {
        match command {
            SponsorCommand::ViewDetails(id) => {
                self.view_details(id);
            }
            SponsorCommand::CloseDetails => self.close_details(),
            SponsorCommand::Sponsor(id) => {
                self.sponsor(id)?;
            }
        }

        Ok(())
    }

    fn complete(&mut self, completion: Infallible) -> Result<()> {
        match completion {}
    }

    fn reconcile(&mut self) -> bool {
        if !self.repo.refresh() {
            return false;
        }

        self.render();
        true
    }
}
