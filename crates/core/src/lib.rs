//! Pure catalog logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Domain types for categories and events
//! - Lossy decoding of raw JSON records
//! - Sorting and the event/category join
//!
//! # Example
//!
//! ```
//! use eonet_core::catalog::{decode_categories, sort_categories_by_name};
//! use serde_json::json;
//!
//! let batch = vec![
//!     json!({ "id": "ce", "name": "Z" }),
//!     json!({ "id": "aa", "name": "A" }),
//!     json!({ "name": "no id, dropped" }),
//! ];
//!
//! let mut categories = decode_categories(&batch);
//! sort_categories_by_name(&mut categories);
//!
//! assert_eq!(categories.len(), 2);
//! assert_eq!(categories[0].id, "aa");
//! ```

pub mod catalog;
