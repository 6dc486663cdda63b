#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::sync::oneshot;

const SERVICE: &str = "fake-registry";

/// Contents served by [`spawn_registry`].
#[derive(Clone, Debug, Default)]
pub struct FakeRegistry {
    pub repositories: Vec<String>,
    pub tags: HashMap<String, Vec<String>>,
    /// When set, every `/v2/` request needs `Authorization: Bearer <token>`
    /// and the token is handed out by `/token`.
    pub token: Option<String>,
}

impl FakeRegistry {
    pub fn new(repositories: &[&str]) -> Self {
        Self {
            repositories: repositories.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, repo: &str, tags: &[&str]) -> Self {
        self.tags
            .insert(repo.to_string(), tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

struct Shared {
    registry: FakeRegistry,
    realm: String,
    v2_requests: AtomicUsize,
    token_requests: AtomicUsize,
}

pub struct RegistryGuard {
    pub base_url: String,
    shared: Arc<Shared>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl RegistryGuard {
    pub fn v2_requests(&self) -> usize {
        self.shared.v2_requests.load(Ordering::SeqCst)
    }

    pub fn token_requests(&self) -> usize {
        self.shared.token_requests.load(Ordering::SeqCst)
    }
}

impl Drop for RegistryGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

pub fn spawn_registry(registry: FakeRegistry) -> Result<RegistryGuard> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind fake registry")?;
    listener
        .set_nonblocking(true)
        .context("set listener nonblocking")?;
    let addr = listener.local_addr().context("listener addr")?;
    let base_url = format!("http://{}", addr);

    let shared = Arc::new(Shared {
        registry,
        realm: format!("{}/token", base_url),
        v2_requests: AtomicUsize::new(0),
        token_requests: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/token", get(token))
        .route("/v2/*rest", get(v2))
        .with_state(shared.clone());

    let (tx, rx) = oneshot::channel::<()>();
    let thread = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("tokio runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("serve fake registry");
        });
    });

    Ok(RegistryGuard {
        base_url,
        shared,
        shutdown: Some(tx),
        thread: Some(thread),
    })
}

/// An address nothing listens on.
pub fn dead_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind")?;
    let addr = listener.local_addr().context("addr")?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

async fn token(
    State(s): State<Arc<Shared>>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    s.token_requests.fetch_add(1, Ordering::SeqCst);
    if q.get("service").map(String::as_str) != Some(SERVICE) || !q.contains_key("scope") {
        return (StatusCode::BAD_REQUEST, "service and scope required").into_response();
    }
    match &s.registry.token {
        Some(token) => axum::Json(serde_json::json!({ "token": token })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn v2(
    State(s): State<Arc<Shared>>,
    Path(rest): Path<String>,
    Query(q): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    s.v2_requests.fetch_add(1, Ordering::SeqCst);
    let rest = rest.trim_start_matches('/');

    if let Some(token) = &s.registry.token {
        let expected = format!("Bearer {}", token);
        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if presented != Some(expected.as_str()) {
            let scope = match rest.strip_suffix("/tags/list") {
                Some(name) => format!("repository:{}:pull", name),
                None => "registry:catalog:*".to_string(),
            };
            let challenge = format!(
                r#"Bearer realm="{}",service="{}",scope="{}""#,
                s.realm, SERVICE, scope
            );
            return (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, challenge)],
                "",
            )
                .into_response();
        }
    }

    if rest == "_catalog" {
        return page(&s.registry.repositories, "/v2/_catalog", "repositories", &q);
    }
    if let Some(name) = rest.strip_suffix("/tags/list") {
        return match s.registry.tags.get(name) {
            Some(tags) => page(tags, &format!("/v2/{}/tags/list", name), "tags", &q),
            None => (StatusCode::NOT_FOUND, "repository name not known to registry")
                .into_response(),
        };
    }
    StatusCode::NOT_FOUND.into_response()
}

fn page(items: &[String], path: &str, field: &str, q: &HashMap<String, String>) -> Response {
    let n = q
        .get("n")
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(items.len())
        .max(1);
    let start = match q.get("last") {
        Some(last) => items
            .iter()
            .position(|i| i == last)
            .map(|p| p + 1)
            .unwrap_or(items.len()),
        None => 0,
    };
    let end = (start + n).min(items.len());

    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), serde_json::json!(items[start..end]));
    let mut resp = axum::Json(serde_json::Value::Object(body)).into_response();

    if end < items.len() {
        let link = format!(r#"<{}?last={}&n={}>; rel="next""#, path, items[end - 1], n);
        if let Ok(value) = HeaderValue::from_str(&link) {
            resp.headers_mut().insert(header::LINK, value);
        }
    }
    resp
}
