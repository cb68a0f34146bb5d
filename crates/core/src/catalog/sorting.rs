use super::types::{Category, Event};

/// Sorts categories ascending by name.
///
/// Comparison is case-sensitive byte order and the sort is stable, so
/// categories with the same name keep their input order.
pub fn sort_categories_by_name(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Sorts events ascending by date, keeping input order for equal dates.
pub fn sort_events_by_date(events: &mut [Event]) {
    events.sort_by_key(|event| event.date);
}
