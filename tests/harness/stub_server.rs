use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use parking_lot::Mutex;
use serde_json::Value;

/// One request seen by the stub.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct Shared {
    scoreboard: Arc<Mutex<String>>,
    status: Arc<Mutex<StatusCode>>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

/// Local stand-in for both the scoreboard provider and the chat webhook.
///
/// `GET` on any path answers with the current scoreboard document and
/// status; `POST` on any path is recorded and answered with `200 ok`.
pub struct StubServer {
    base: String,
    shared: Shared,
}

async fn handle(State(shared): State<Shared>, method: Method, uri: Uri, body: Bytes) -> (StatusCode, String) {
    let parsed = serde_json::from_slice(&body).ok();
    shared.seen.lock().push(Seen {
        method: method.clone(),
        path: uri.path().to_string(),
        body: parsed,
    });

    if method == Method::GET {
        (*shared.status.lock(), shared.scoreboard.lock().clone())
    } else {
        (StatusCode::OK, "ok".to_string())
    }
}

impl StubServer {
    pub async fn start(scoreboard: &str) -> Self {
        let shared = Shared {
            scoreboard: Arc::new(Mutex::new(scoreboard.to_string())),
            status: Arc::new(Mutex::new(StatusCode::OK)),
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let app = axum::Router::new()
            .fallback(handle)
            .with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base: format!("http://{addr}"),
            shared,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Replace the document served to subsequent `GET`s.
    pub fn set_scoreboard(&self, scoreboard: &str) {
        *self.shared.scoreboard.lock() = scoreboard.to_string();
    }

    /// Status returned with subsequent `GET`s.
    pub fn set_status(&self, status: StatusCode) {
        *self.shared.status.lock() = status;
    }

    pub fn posts(&self) -> Vec<Seen> {
        self.shared
            .seen
            .lock()
            .iter()
            .filter(|seen| seen.method == Method::POST)
            .cloned()
            .collect()
    }

    pub fn gets(&self) -> Vec<Seen> {
        self.shared
            .seen
            .lock()
            .iter()
            .filter(|seen| seen.method == Method::GET)
            .cloned()
            .collect()
    }
}
