//! Process-lifetime caching of the category list.
//!
//! The category list is fetched at most once per [`CategoryCache`] and then
//! replayed to every caller and subscriber. There is no invalidation and no
//! refresh.

mod categories;
mod result;
mod traits;

pub use categories::{Categories, CategoryCache};
pub use result::CachedResult;
pub use traits::CategorySource;
