use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use super::{BoardView, Dispatcher};
use crate::engine::EventFilter;
use crate::error::Result;
use crate::models::{BadgeColor, Event, EventDraft, EventForm, EventPatch, EventStatus};
use crate::repositories::EventRepository;
use crate::services::{Confirm, DataUrlEncoder, ImageEncoder, ImageFile};

pub const CREATE_TITLE: &str = "Create New Event";
pub const EDIT_TITLE: &str = "Edit Event";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this event?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub audience_size: String,
    pub status: EventStatus,
    pub badge: BadgeColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerSnapshot {
    pub revision: u64,
    pub rows: Vec<TableRow>,
    pub modal_open: bool,
    pub modal_title: &'static str,
    pub editing_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub target: SubmitTarget,
    pub draft: EventDraft,
    pub image: ImageFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(Event),
    Missing(i64),
    AwaitingImage(PendingSubmit),
}

#[derive(Debug, Clone)]
pub enum OrganizerCommand {
    OpenCreate,
    Edit(i64),
    CloseModal,
    FillForm(EventForm),
    Submit,
    Delete(i64),
    SetKeyword(String),
    SetStatusFilter(String),
}

#[derive(Debug)]
pub struct ImageConverted {
    pub pending: PendingSubmit,
    pub image_url: Option<String>,
}

pub fn table_rows(events: &[Event], filter: &EventFilter) -> Vec<TableRow> {
    filter
        .apply(events)
        .into_iter()
        .map(|event| TableRow {
            id: event.id,
            title: event.title.clone(),
            date: event.date.clone(),
            audience_size: event.audience_size.clone(),
            status: event.status,
            badge: event.status.badge(),
        })
        .collect()
}

pub struct OrganizerView {
    repo: EventRepository,
    filter: EventFilter,
    editing_id: Option<i64>,
    modal_open: bool,
    form: EventForm,
    confirm: Box<dyn Confirm>,
    encoder: Arc<dyn ImageEncoder>,
    revision: u64,
    snapshot: watch::Sender<OrganizerSnapshot>,
}

impl OrganizerView {
    pub fn new(repo: EventRepository, confirm: impl Confirm + 'static) -> Self {
        let filter = EventFilter::default();
        let (snapshot, _) = watch::channel(OrganizerSnapshot {
            revision: 1,
            rows: table_rows(repo.all(), &filter),
            modal_open: false,
            modal_title: CREATE_TITLE,
            editing_id: None,
        });

        Self {
            repo,
            filter,
            editing_id: None,
            modal_open: false,
            form: EventForm::default(),
            confirm: Box::new(confirm),
            encoder: Arc::new(DataUrlEncoder),
            revision: 1,
            snapshot,
        }
    }

    pub fn with_encoder(mut self, encoder: Arc<dyn ImageEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<OrganizerSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> OrganizerSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn repository(&self) -> &EventRepository {
        &self.repo
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn modal_title(&self) -> &'static str {
        if self.editing_id.is_some() {
            EDIT_TITLE
        } else {
            CREATE_TITLE
        }
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    pub fn set_form(&mut self, form: EventForm) {
        self.form = form;
    }

    pub fn rows(&self) -> Vec<TableRow> {
        table_rows(self.repo.all(), &self.filter)
    }

    pub fn open_create(&mut self) {
        self.modal_open = true;
        self.render();
    }

    pub fn edit(&mut self, id: i64) -> bool {
        let Some(event) = self.repo.find(id) else {
            debug!("Edit ignored, event {} not found", id);
            return false;
        };

        self.form = EventForm::from_event(event);
        self.editing_id = Some(id);
        self.modal_open = true;
        self.render();
        true
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.editing_id = None;
        self.form = EventForm::default();
        self.render();
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.filter.set_keyword(keyword);
        self.render();
    }

    pub fn set_status_filter(&mut self, status: &str) {
        self.filter.set_status(status);
        self.render();
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!("Delete of event {} declined", id);
            return Ok(false);
        }

        let deleted = self.repo.delete(id)?;
        self.render();
        Ok(deleted)
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let draft = self.form.validate()?;
        let target = match self.editing_id {
            Some(id) => SubmitTarget::Update(id),
            None => SubmitTarget::Create,
        };

        if let Some(image) = self.form.selected_image() {
            return Ok(SubmitOutcome::AwaitingImage(PendingSubmit {
                target,
                draft,
                image: image.clone(),
            }));
        }

        self.write(target, draft, None)
    }

    pub async fn submit_and_wait(&mut self) -> Result<SubmitOutcome> {
        match self.submit()? {
            SubmitOutcome::AwaitingImage(pending) => {
                let image_url = self.encoder.encode(&pending.image).await;
                self.finish_submit(ImageConverted { pending, image_url })
            }
            outcome => Ok(outcome),
        }
    }

    pub fn finish_submit(&mut self, converted: ImageConverted) -> Result<SubmitOutcome> {
        let ImageConverted { pending, image_url } = converted;
        self.write(pending.target, pending.draft, image_url)
    }

    fn write(&mut self, target: SubmitTarget, draft: EventDraft, image_url: Option<String>) -> Result<SubmitOutcome> {
        let outcome = match target {
            SubmitTarget::Create => SubmitOutcome::Saved(self.repo.create(draft, image_url)?),
            SubmitTarget::Update(id) => {
                let patch = EventPatch::from(draft).with_image_url(image_url);
                match self.repo.update(id, patch)? {
                    Some(event) => SubmitOutcome::Saved(event),
                    None => SubmitOutcome::Missing(id),
                }
            }
        };

        self.close_modal();
        Ok(outcome)
    }

    fn render(&mut self) {
        self.revision += 1;
        self.snapshot.send_replace(OrganizerSnapshot {
            revision: self.revision,
            rows: self.rows(),
            modal_open: self.modal_open,
            modal_title: self.modal_title(),
            editing_id: self.editing_id,
        });
    }
}

impl BoardView for OrganizerView {
    type Command = OrganizerCommand;
    type Completion = ImageConverted;

    fn name(&self) -> &'static str {
        "organizer"
    }

    fn handle(&mut self, command: OrganizerCommand, dispatcher: &Dispatcher<ImageConverted>) -> Result<()> {
        match command {
            OrganizerCommand::OpenCreate => self.open_create(),
            OrganizerCommand::Edit(id) => {
                self.edit(id);
            }
            OrganizerCommand::CloseModal => self.close_modal(),
            OrganizerCommand::FillForm(form) => self.set_form(form),
            OrganizerCommand::Submit => {
                if let SubmitOutcome::AwaitingImage(pending) = self.submit()? {
                    info!("Encoding image '{}' before saving", pending.image.name);
                    let encoder = self.encoder.clone();
                    dispatcher.spawn(async move {
                        let image_url = encoder.encode(&pending.image).await;
                        ImageConverted { pending, image_url }
                    });
                }
            }
            OrganizerCommand::Delete(id) => {
                self.delete(id)?;
            }
            OrganizerCommand::SetKeyword(keyword) => self.set_keyword(&keyword),
            OrganizerCommand::SetStatusFilter(status) => self.set_status_filter(&status),
        }

        Ok(())
    }

    fn complete(&mut self, completion: ImageConverted) -> Result<()> {
        self.finish_submit(completion).map(|_| ())
    }

    fn reconcile(&mut self) -> bool {
        if !self.repo.refresh() {
            return false;
        }

        self.render();
        true
    }
}
