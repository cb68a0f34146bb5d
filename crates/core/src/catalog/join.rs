//! Association of fetched events to a category.
//!
//! This is part of the Functional Core - all functions are pure with no side effects.

use super::sorting::sort_events_by_date;
use super::types::{Category, Event};

/// Returns the events that belong to `category` and are not yet recorded
/// against it, sorted by date (stable for equal dates).
///
/// Neither input is modified. Callers that accumulate across fetches append
/// the result with [`Category::record_events`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use eonet_core::catalog::{filtered_events, Category, Event};
///
/// let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
/// let events = vec![
///     Event::new("1", "Fire", date).with_category("A"),
///     Event::new("2", "Storm", date).with_category("B"),
/// ];
/// let mut category = Category::new("A", "Wildfires");
///
/// let fresh = filtered_events(&events, &category);
/// assert_eq!(fresh.len(), 1);
/// assert_eq!(fresh[0].id, "1");
///
/// category.record_events(fresh);
/// assert!(filtered_events(&events, &category).is_empty());
/// ```
pub fn filtered_events(events: &[Event], category: &Category) -> Vec<Event> {
    let mut matching: Vec<Event> = events
        .iter()
        .filter(|event| event.belongs_to(&category.id) && !category.has_event(&event.id))
        .cloned()
        .collect();

    sort_events_by_date(&mut matching);
    matching
}
