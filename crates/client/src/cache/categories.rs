//! Shared, replay-forever category pipeline.

use std::sync::Arc;

use eonet_core::catalog::{sort_categories_by_name, Category};
use futures_util::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::{watch, Mutex};

use super::{CachedResult, CategorySource};

/// The value every caller receives.
pub type Categories = Arc<Vec<Category>>;

type SharedFetch = Shared<BoxFuture<'static, Categories>>;

/// Fetches the category list once and replays it for the cache's lifetime.
///
/// The first call to [`categories`](Self::categories) (or the first
/// [`subscribe`](Self::subscribe)) starts the fetch on a background task, so
/// it runs to completion whether or not anyone is still waiting. Callers
/// arriving while it is in flight await the same future, and callers arriving
/// later get the stored value, so the source is asked exactly once. Clones
/// share the same state.
///
/// A successful fetch is sorted ascending by name. A failed fetch resolves
/// to an empty list which is cached like any other value: consumers cannot
/// tell an outage from an empty catalog, and nothing retries.
pub struct CategoryCache<S> {
    inner: Arc<CacheInner<S>>,
}

struct CacheInner<S> {
    source: Arc<S>,
    /// Installed by the first caller; holds the single in-flight or finished fetch.
    fetch: Mutex<Option<SharedFetch>>,
    updates: Arc<watch::Sender<CachedResult<Categories>>>,
}

impl<S: CategorySource + 'static> CategoryCache<S> {
    /// Creates a cache in front of the given source. Nothing is fetched yet.
    pub fn new(source: S) -> Self {
        let (updates, _) = watch::channel(CachedResult::pending(Categories::default()));
        Self {
            inner: Arc::new(CacheInner {
                source: Arc::new(source),
                fetch: Mutex::new(None),
                updates: Arc::new(updates),
            }),
        }
    }

    /// Returns the sorted category list, fetching it on first use.
    ///
    /// Dropping this future does not cancel or restart the underlying fetch.
    /// Must be called from within a Tokio runtime.
    pub async fn categories(&self) -> Categories {
        let fetch = {
            let mut slot = self.inner.fetch.lock().await;
            slot.get_or_insert_with(|| {
                let fetch = load(
                    Arc::clone(&self.inner.source),
                    Arc::clone(&self.inner.updates),
                )
                .boxed()
                .shared();
                // Detached driver: subscribers see the result even if every caller is gone.
                tokio::spawn(fetch.clone());
                fetch
            })
            .clone()
        };

        fetch.await
    }

    /// Subscribes to the cached list.
    ///
    /// The receiver first holds a pending empty list and is updated exactly
    /// once, when the fetch resolves. Until then a task is spawned on the
    /// current Tokio runtime that starts the fetch or joins the one in
    /// flight, so this must be called from within a runtime.
    pub fn subscribe(&self) -> watch::Receiver<CachedResult<Categories>> {
        let receiver = self.inner.updates.subscribe();

        if !receiver.borrow().is_resolved() {
            let cache = self.clone();
            tokio::spawn(async move {
                cache.categories().await;
            });
        }

        receiver
    }

    /// Returns the list if the fetch has already resolved, without waiting
    /// or triggering anything.
    pub fn cached(&self) -> Option<Categories> {
        let current = self.inner.updates.borrow();
        current.is_resolved().then(|| Arc::clone(current.value()))
    }
}

impl<S> Clone for CategoryCache<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

async fn load<S: CategorySource>(
    source: Arc<S>,
    updates: Arc<watch::Sender<CachedResult<Categories>>>,
) -> Categories {
    let categories = match source.fetch_categories().await {
        Ok(mut categories) => {
            sort_categories_by_name(&mut categories);
            tracing::info!(count = categories.len(), "Category list cached");
            categories
        }
        Err(error) => {
            tracing::warn!(%error, "Category fetch failed, caching empty list");
            Vec::new()
        }
    };

    let categories = Arc::new(categories);
    updates.send_replace(CachedResult::resolved(Arc::clone(&categories)));
    categories
}
