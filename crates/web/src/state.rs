//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::db::{OrderStore, UserStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Stores are injected here rather
/// than living in globals, so every test gets its own isolated instance.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    orders: OrderStore,
    users: UserStore,
}

impl AppState {
    /// Create application state with the given stores.
    #[must_use]
    pub fn new(config: WebConfig, orders: OrderStore, users: UserStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                orders,
                users,
            }),
        }
    }

    /// Create application state with a freshly seeded order store and an
    /// empty user store.
    #[must_use]
    pub fn seeded(config: WebConfig) -> Self {
        Self::new(config, OrderStore::seeded(), UserStore::new())
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the user store.
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }
}
