use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category of natural events (e.g. "Wildfires", "Severe Storms").
///
/// Two categories are equal when their ids match; the other fields are
/// display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Events already recorded against this category by the caller.
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Category {
    /// Creates a new category with an empty description and no events.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            events: Vec::new(),
        }
    }

    /// Sets the description for this category.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if an event with the given id is already recorded.
    pub fn has_event(&self, event_id: &str) -> bool {
        self.events.iter().any(|event| event.id == event_id)
    }

    /// Appends events to the recorded list.
    ///
    /// Callers feed this with the output of
    /// [`filtered_events`](super::filtered_events), which already excludes
    /// events recorded earlier.
    pub fn record_events(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

/// A single natural event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Set once the event is over.
    pub close_date: Option<DateTime<Utc>>,
    /// Ids of the categories this event belongs to.
    pub category_ids: BTreeSet<String>,
    pub date: DateTime<Utc>,
}

impl Event {
    /// Creates a new open event with no categories.
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            close_date: None,
            category_ids: BTreeSet::new(),
            date,
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this event as closed at the given time.
    pub fn with_close_date(mut self, close_date: DateTime<Utc>) -> Self {
        self.close_date = Some(close_date);
        self
    }

    /// Adds a category id to this event.
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_ids.insert(category_id.into());
        self
    }

    /// Returns true if this event belongs to the given category.
    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category_ids.contains(category_id)
    }

    /// Returns true if the event has a close date.
    pub fn is_closed(&self) -> bool {
        self.close_date.is_some()
    }

    /// Returns the status this event would be listed under.
    pub fn status(&self) -> EventStatus {
        if self.is_closed() {
            EventStatus::Closed
        } else {
            EventStatus::Open
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

/// Event status filter understood by the events endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Open,
    Closed,
}

impl EventStatus {
    /// Returns the value sent as the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Open => "open",
            EventStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
