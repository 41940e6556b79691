pub mod event;
pub mod form;

pub use event::{BadgeColor, Event, EventDraft, EventPatch, EventStatus, PLACEHOLDER_IMAGE_URL};
pub use form::EventForm;
