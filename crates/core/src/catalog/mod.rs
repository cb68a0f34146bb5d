mod dates;
mod decode;
mod join;
mod sorting;
mod types;

pub use dates::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
pub use decode::{decode_categories, decode_category, decode_event, decode_events};
pub use join::filtered_events;
pub use sorting::{sort_categories_by_name, sort_events_by_date};
pub use types::{Category, Event, EventStatus};
