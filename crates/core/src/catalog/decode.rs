//! Lossy decoding of raw JSON records into catalog types.
//!
//! A record with a missing or mistyped required field decodes to `None`.
//! The batch decoders drop such records and keep the rest, so one corrupt
//! record never sinks a whole response.

use std::collections::BTreeSet;

use serde_json::Value;

use super::dates::parse_timestamp;
use super::types::{Category, Event};

/// Decodes a single category object.
///
/// Requires `id` (string or integer) and `name`; `title` is accepted in
/// place of `name`. `description` defaults to an empty string.
pub fn decode_category(json: &Value) -> Option<Category> {
    let object = json.as_object()?;

    let id = decode_id(object.get("id")?)?;
    let name = object
        .get("name")
        .or_else(|| object.get("title"))?
        .as_str()?
        .to_string();
    let description = optional_string(object.get("description"))?.unwrap_or_default();

    Some(Category {
        id,
        name,
        description,
        events: Vec::new(),
    })
}

/// Decodes a single event object.
///
/// Requires `id`, `title`, and a parseable `date`. When `date` is absent the
/// first `geometries[].date` is used instead. A `closed` value that is
/// present but unparseable rejects the record, as does a `categories` value
/// that is not an array.
pub fn decode_event(json: &Value) -> Option<Event> {
    let object = json.as_object()?;

    let id = decode_id(object.get("id")?)?;
    let title = object.get("title")?.as_str()?.to_string();
    let description = optional_string(object.get("description"))?;

    let raw_date = match object.get("date") {
        Some(date) => date,
        None => object
            .get("geometries")?
            .as_array()?
            .first()?
            .get("date")?,
    };
    let date = parse_timestamp(raw_date.as_str()?)?;

    let close_date = match object.get("closed") {
        None | Some(Value::Null) => None,
        Some(closed) => Some(parse_timestamp(closed.as_str()?)?),
    };

    let category_ids = match object.get("categories") {
        None | Some(Value::Null) => BTreeSet::new(),
        Some(categories) => decode_category_ids(categories.as_array()?),
    };

    Some(Event {
        id,
        title,
        description,
        close_date,
        category_ids,
        date,
    })
}

/// Decodes a batch of categories, dropping malformed records.
pub fn decode_categories(batch: &[Value]) -> Vec<Category> {
    batch.iter().filter_map(decode_category).collect()
}

/// Decodes a batch of events, dropping malformed records.
pub fn decode_events(batch: &[Value]) -> Vec<Event> {
    batch.iter().filter_map(decode_event).collect()
}

/// Ids arrive as strings from some endpoints and as integers from others.
fn decode_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) if id.is_i64() || id.is_u64() => Some(id.to_string()),
        _ => None,
    }
}

/// Outer `None` means mistyped, inner `None` means absent or null.
fn optional_string(value: Option<&Value>) -> Option<Option<String>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => None,
    }
}

/// Category references are bare ids or `{ "id": ... }` objects.
fn decode_category_ids(items: &[Value]) -> BTreeSet<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(reference) => reference.get("id").and_then(decode_id),
            other => decode_id(other),
        })
        .collect()
}
