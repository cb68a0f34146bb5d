//! Pretty output formatting.

use eonet_core::catalog::{format_timestamp, Category, Event};

/// Format a category for display.
pub fn format_category(category: &Category) -> String {
    let mut output = format!("{}\n  ID: {}", category.name, category.id);
    if !category.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", category.description));
    }
    output
}

/// Format categories for display.
pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }
    let mut output = format!("CATEGORIES ({})\n", categories.len());
    output.push_str(&"-".repeat(40));
    for category in categories {
        output.push_str(&format!("\n{}", format_category(category)));
        output.push('\n');
    }
    output
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Date: {}",
        event.title,
        event.status(),
        event.id,
        format_timestamp(&event.date)
    );
    if let Some(closed) = &event.close_date {
        output.push_str(&format!("\n  Closed: {}", format_timestamp(closed)));
    }
    if !event.category_ids.is_empty() {
        let ids: Vec<&str> = event.category_ids.iter().map(String::as_str).collect();
        output.push_str(&format!("\n  Categories: {}", ids.join(", ")));
    }
    if let Some(desc) = &event.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}
