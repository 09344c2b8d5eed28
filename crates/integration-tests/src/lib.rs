//! Integration tests for FreshWash.
//!
//! Each test spawns its own server on an ephemeral port with a freshly seeded
//! store, so tests never share state and need no external services.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p freshwash-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `orders_api` - REST API lifecycle, validation and not-found handling
//! - `order_pages` - Server-rendered pages and form submissions

use std::net::SocketAddr;

use freshwash_web::config::WebConfig;
use freshwash_web::state::AppState;
use reqwest::{Client, redirect};
use tokio::net::TcpListener;

/// A running server plus a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub addr: SocketAddr,
}

impl TestContext {
    /// Spawn a seeded server on `127.0.0.1:0`.
    ///
    /// The client does not follow redirects, so form posts expose their
    /// `303 See Other` responses.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the client cannot be built.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = freshwash_web::app(AppState::seeded(WebConfig::default()));
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server error");
        });

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
            addr,
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
