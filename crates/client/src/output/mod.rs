//! Output formatting functions.

pub mod pretty;

use eonet_core::catalog::{Category, Event};

use crate::cli::OutputFormat;

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Render categories in the requested format.
pub fn render_categories(categories: &[Category], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&categories),
        OutputFormat::Pretty => pretty::format_categories(categories),
    }
}

/// Render events in the requested format.
pub fn render_events(events: &[Event], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&events),
        OutputFormat::Pretty => pretty::format_events(events),
    }
}
