use crate::error::{BoardError, Result};
use crate::models::event::{Event, EventDraft};
use crate::services::image::ImageFile;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub location: String,
    pub audience: String,
    pub audience_size: String,
    pub sponsorship: String,
    pub description: String,
    pub image: Option<ImageFile>,
}

impl EventForm {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.clone(),
            location: event.location.clone(),
            audience: event.audience.clone(),
            audience_size: event.audience_size.clone(),
            sponsorship: event.sponsorship.clone(),
            description: event.description.clone(),
            image: None,
        }
    }

    pub fn validate(&self) -> Result<EventDraft> {
        let required = [
            ("title", &self.title),
            ("date", &self.date),
            ("location", &self.location),
            ("audience", &self.audience),
            ("audienceSize", &self.audience_size),
            ("sponsorship", &self.sponsorship),
            ("description", &self.description),
        ];

        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BoardError::MissingField(*name));
        }

        Ok(EventDraft {
            title: self.title.clone(),
            date: self.date.clone(),
            location: self.location.clone(),
            audience: self.audience.clone(),
            audience_size: self.audience_size.clone(),
            sponsorship: self.sponsorship.clone(),
            description: self.description.clone(),
        })
    }

    pub fn selected_image(&self) -> Option<&ImageFile> {
        self.image.as_ref().filter(|file| !file.is_empty())
    }
}
