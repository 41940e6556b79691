use crate::models::Event;

pub const STATUS_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    keyword: String,
    status: String,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            status: STATUS_ALL.to_string(),
        }
    }
}

impl EventFilter {
    pub fn new(keyword: &str, status: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            status: status.to_lowercase(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.to_lowercase();
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_lowercase();
    }

    pub fn matches(&self, event: &Event) -> bool {
        if !event.title.to_lowercase().contains(&self.keyword) {
            return false;
        }

        self.status == STATUS_ALL || event.status.as_str().to_lowercase() == self.status
    }

    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}
