//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use portfolio_core::{User, UserId};

use crate::config::SiteConfig;
use crate::services::{ApiError, HttpProfileApi, ProfileBackend};

/// How long a cached user snapshot stays fresh.
const USER_CACHE_TTL: Duration = Duration::from_secs(60);

/// Upper bound on cached snapshots. This is a personal site; anything
/// beyond a handful of sessions is unexpected.
const USER_CACHE_CAPACITY: u64 = 100;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration, the profile
/// backend (injected, so tests can swap in an in-memory one), and the
/// read-through cache of user snapshots that stands in for the original's
/// query-cache-backed session hook.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    backend: Arc<dyn ProfileBackend>,
    users: Cache<UserId, User>,
}

impl AppState {
    /// Create application state with the production HTTP backend.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let backend = Arc::new(HttpProfileApi::new(&config.api));
        Self::with_backend(config, backend)
    }

    /// Create application state with an explicit backend implementation.
    #[must_use]
    pub fn with_backend(config: SiteConfig, backend: Arc<dyn ProfileBackend>) -> Self {
        let users = Cache::builder()
            .max_capacity(USER_CACHE_CAPACITY)
            .time_to_live(USER_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                users,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the profile backend.
    #[must_use]
    pub fn backend(&self) -> &dyn ProfileBackend {
        self.inner.backend.as_ref()
    }

    /// Load a user snapshot through the cache.
    ///
    /// Misses fall through to the backend; a hit serves the cached
    /// snapshot until it expires or the mutation layer refreshes it.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the upstream fetch fails.
    pub async fn load_user(&self, id: UserId) -> Result<Option<User>, ApiError> {
        if let Some(user) = self.inner.users.get(&id).await {
            return Ok(Some(user));
        }

        match self.inner.backend.fetch_user(id).await? {
            Some(user) => {
                self.inner.users.insert(id, user.clone()).await;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Replace the cached snapshot with a refreshed user.
    ///
    /// Called by the mutation layer after a successful update (and on
    /// login), so the next render reflects committed values without an
    /// independent re-fetch.
    pub async fn refresh_user(&self, user: User) {
        self.inner.users.insert(user.id, user).await;
    }
}
