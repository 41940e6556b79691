use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200.png?text=No+Image";

fn placeholder_image_url() -> String {
    PLACEHOLDER_IMAGE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,

    pub title: String,

    pub date: String,

    pub location: String,

    pub audience: String,

    pub audience_size: String,

    #[serde(default)]
    pub sponsorship: String,

    #[serde(default)]
    pub description: String,

    pub status: EventStatus,

    #[serde(default = "placeholder_image_url")]
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EventStatus {
    Draft,
    Pending,
    Matched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Gray,
    Yellow,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub location: String,
    pub audience: String,
    pub audience_size: String,
    pub sponsorship: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub audience: Option<String>,
    pub audience_size: Option<String>,
    pub sponsorship: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Event {
    pub fn new(id: i64, draft: EventDraft, image_url: Option<String>) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            location: draft.location,
            audience: draft.audience,
            audience_size: draft.audience_size,
            sponsorship: draft.sponsorship,
            description: draft.description,
            status: EventStatus::Draft,
            image_url: image_url.unwrap_or_else(placeholder_image_url),
        }
    }

    pub fn apply(&mut self, patch: EventPatch) {
        let EventPatch {
            title,
            date,
            location,
            audience,
            audience_size,
            sponsorship,
            description,
            image_url,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(audience) = audience {
            self.audience = audience;
        }
        if let Some(audience_size) = audience_size {
            self.audience_size = audience_size;
        }
        if let Some(sponsorship) = sponsorship {
            self.sponsorship = sponsorship;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
    }

    pub fn is_matched(&self) -> bool {
        self.status == EventStatus::Matched
    }
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Pending => "Pending",
            EventStatus::Matched => "Matched",
        }
    }

    pub fn badge(&self) -> BadgeColor {
        match self {
            EventStatus::Draft => BadgeColor::Gray,
            EventStatus::Pending => BadgeColor::Yellow,
            EventStatus::Matched => BadgeColor::Green,
        }
    }

    pub fn can_transition_to(&self, next: EventStatus) -> bool {
        next == EventStatus::Matched
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(EventStatus::Draft),
            "pending" => Ok(EventStatus::Pending),
            "matched" => Ok(EventStatus::Matched),
            other => Err(format!("unknown event status '{}'", other)),
        }
    }
}

impl TryFrom<String> for EventStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventDraft> for EventPatch {
    fn from(draft: EventDraft) -> Self {
        Self {
            title: Some(draft.title),
            date: Some(draft.date),
            location: Some(draft.location),
            audience: Some(draft.audience),
            audience_size: Some(draft.audience_size),
            sponsorship: Some(draft.sponsorship),
            description: Some(draft.description),
            image_url: None,
        }
    }
}

impl EventPatch {
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }
}
