//! Shared fixtures: an in-process axum backend and a wired-up portal client.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderMap;
use axum::Router;
use parking_lot::Mutex;
use portal::app::navigation;
use portal::core::service::{Navigator, SessionStore};
use portal::session::events::{self, SessionEvents};
use portal::session::MemorySessionStore;
use portal::{ApiClient, App, PortalConfig};
use tokio::task::JoinHandle;

/// Serve `router` on an ephemeral port, returning its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Mock backend has no address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock backend crashed");
    });

    format!("http://{}", addr)
}

/// Base URL nothing listens on.
pub async fn dead_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Authorization headers seen by the mock backend, in arrival order.
#[derive(Clone, Default)]
pub struct SeenAuth(Arc<Mutex<Vec<Option<String>>>>);

impl SeenAuth {
    pub fn record(&self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        self.0.lock().push(value);
    }

    pub fn all(&self) -> Vec<Option<String>> {
        self.0.lock().clone()
    }
}

/// Portal client, credential store and app shell pointed at one backend.
pub struct Harness<S: SessionStore + 'static = MemorySessionStore> {
    pub store: Arc<S>,
    pub api: ApiClient,
    pub app: Arc<App>,
    events: SessionEvents,
    listener: JoinHandle<()>,
}

impl Harness {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self::with_timeout(base_url, token, PortalConfig::default().request_timeout)
    }

    pub fn with_timeout(base_url: &str, token: Option<&str>, timeout: Duration) -> Self {
        let store = Arc::new(match token {
            Some(token) => MemorySessionStore::with_token(token),
            None => MemorySessionStore::new(),
        });
        let config = PortalConfig {
            request_timeout: timeout,
            ..PortalConfig::with_base_url(base_url)
        };
        Harness::with_config(config, store)
    }
}

impl<S: SessionStore + 'static> Harness<S> {
    /// Wire everything around a caller-provided credential store.
    pub fn with_store(base_url: &str, store: Arc<S>) -> Self {
        Self::with_config(PortalConfig::with_base_url(base_url), store)
    }

    fn with_config(config: PortalConfig, store: Arc<S>) -> Self {
        let (events, receiver) = events::channel();
        let api = ApiClient::new(&config, store.clone(), events.clone());
        let app = Arc::new(App::new(store.clone()));
        let listener = navigation::spawn_listener(receiver, app.clone());

        Self {
            store,
            api,
            app,
            events,
            listener,
        }
    }

    /// Stop listening once every emitted event has been applied; returns
    /// the final location.
    pub async fn settle(self) -> String {
        self.events.close();
        self.listener.await.expect("Navigation listener panicked");
        self.app.location()
    }
}
