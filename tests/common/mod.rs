//! Common test utilities for watchtower integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use assert_cmd::Command;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

/// Environment variables the binary reads; cleared so the host cannot leak in
const WATCHTOWER_ENV: &[&str] = &[
    "DISCORD_WEBHOOK_URL",
    "LOCK_FILE_PATH",
    "WATCHTOWER_FEED_URL",
    "WATCHTOWER_USER_AGENT",
    "WATCHTOWER_INTERVAL",
    "WATCHTOWER_TIMEOUT",
    "WATCHTOWER_MENTION",
    "WATCHTOWER_DOWNLOAD_URL",
    "WATCHTOWER_NO_BOOTSTRAP_ANNOUNCE",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Build a command for the real watchtower binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn watchtower_cmd() -> Command {
    let mut cmd = Command::cargo_bin("watchtower").expect("watchtower binary should be built");
    for var in WATCHTOWER_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// A temporary directory holding a lock file
pub struct TestDir {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestDir {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Path of the lock file inside the directory
    pub fn lock_path(&self) -> PathBuf {
        self.path.join("version.lock")
    }

    pub fn write_lock(&self, content: &str) {
        std::fs::write(self.lock_path(), content).expect("Failed to write lock file");
    }

    pub fn read_lock(&self) -> String {
        std::fs::read_to_string(self.lock_path()).expect("Failed to read lock file")
    }

    pub fn lock_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_lock()).expect("Lock file should be JSON")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A request captured by [`StubServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

struct StubState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Local axum server answering every request with the same JSON response
///
/// Each request is recorded before the response is sent. The server lives on
/// its own runtime and stops when the stub is dropped.
pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
    _runtime: Runtime,
}

impl StubServer {
    pub fn start(status: u16, body: &str) -> Self {
        let runtime = Runtime::new().expect("Failed to start stub runtime");
        let state = Arc::new(StubState {
            status: StatusCode::from_u16(status).expect("Invalid status code"),
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        });

        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");

        let app = Router::new()
            .fallback(record_and_respond)
            .with_state(Arc::clone(&state));
        runtime.spawn(async move { axum::serve(listener, app).await });

        Self {
            base_url: format!("http://{addr}"),
            state,
            _runtime: runtime,
        }
    }

    /// Serve a `versions.json` document with the given entries
    pub fn feed(entries: &[(&str, u64)]) -> Self {
        let versions: Vec<serde_json::Value> = entries
            .iter()
            .map(|(version, size)| serde_json::json!({"version": version, "fileSize": size}))
            .collect();
        let body = serde_json::json!({ "versions": versions }).to_string();
        Self::start(200, &body)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("poisoned").clone()
    }
}

async fn record_and_respond(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state
        .requests
        .lock()
        .expect("poisoned")
        .push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
