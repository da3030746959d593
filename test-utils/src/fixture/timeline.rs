//! Timeline fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::timeline;

/// Default test timeline title.
pub const DEFAULT_TITLE: &str = "Test Entry";

/// Default test timeline description.
pub const DEFAULT_DESCRIPTION: &str = "A timeline entry used in tests";

/// Default start date, 2024-01-15 00:00:00 UTC.
pub fn default_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a timeline entity model with default values.
pub fn entity() -> timeline::Model {
    entity_builder().build()
}

/// Creates a timeline entity builder for customization.
pub fn entity_builder() -> TimelineEntityBuilder {
    TimelineEntityBuilder::default()
}

/// Builder for creating customized timeline entity models.
pub struct TimelineEntityBuilder {
    id: i32,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    title: String,
    description: String,
    link: Option<String>,
}

impl Default for TimelineEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            start: default_start(),
            end: None,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            link: None,
        }
    }
}

impl TimelineEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.end = end;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    /// Builds and returns the timeline entity model.
    pub fn build(self) -> timeline::Model {
        timeline::Model {
            id: self.id,
            start: self.start,
            end: self.end,
            title: self.title,
            description: self.description,
            link: self.link,
        }
    }
}
