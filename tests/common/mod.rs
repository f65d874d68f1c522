//! Shared helpers: a local stand-in for the generateContent endpoint.

#![allow(dead_code)]

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::StatusCode, web};
use analytics_ai::AppConfig;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-api-key";
pub const MODEL_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// A request the mock received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

pub struct MockState {
    status: u16,
    reply: String,
    delay: Duration,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockGemini {
    pub endpoint: String,
    state: web::Data<MockState>,
}

impl MockGemini {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// App configuration pointing at this mock with a fresh upload directory.
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::with_api_key(TEST_API_KEY);
        config.gemini_endpoint = self.endpoint.clone();
        config.upload_dir = temp_upload_dir();
        config
    }
}

pub fn temp_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("analytics-ai-test-{}", uuid::Uuid::new_v4()))
}

/// Wrap `text` the way generateContent returns a single candidate.
pub fn candidate_body(text: &str) -> String {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ], "role": "model" } }
        ]
    })
    .to_string()
}

async fn generate(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<MockState>,
) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: req.path().to_string(),
        api_key: header("x-goog-api-key"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    if !state.delay.is_zero() {
        actix_web::rt::time::sleep(state.delay).await;
    }

    HttpResponse::build(StatusCode::from_u16(state.status).unwrap())
        .content_type("application/json")
        .body(state.reply.clone())
}

/// Start a mock that answers every request with `status` and `reply`.
pub async fn start_mock_gemini(status: u16, reply: impl Into<String>) -> MockGemini {
    start_slow_mock_gemini(Duration::ZERO, status, reply).await
}

/// Like [`start_mock_gemini`], but each reply is held back for `delay`.
pub async fn start_slow_mock_gemini(
    delay: Duration,
    status: u16,
    reply: impl Into<String>,
) -> MockGemini {
    let state = web::Data::new(MockState {
        status,
        reply: reply.into(),
        delay,
        requests: Mutex::new(Vec::new()),
    });

    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .default_service(web::to(generate))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    MockGemini {
        endpoint: format!("http://{addr}{MODEL_PATH}"),
        state,
    }
}

pub fn sample_logs() -> Value {
    json!([
        {"timestamp": "2024-01-01T10:00:00Z", "level": "info", "message": "ok", "path": "/home", "method": "GET", "duration": 100, "status": 200},
        {"timestamp": "2024-01-01T10:00:01Z", "level": "info", "message": "ok", "path": "/home", "method": "GET", "duration": 300, "status": 200},
        {"timestamp": "2024-01-01T10:00:02Z", "level": "error", "message": "db timeout", "path": "/api/orders", "method": "POST", "duration": 2500, "status": 500},
        {"timestamp": "2024-01-01T10:00:03Z", "level": "info", "message": "ok", "path": "/api/orders", "method": "POST", "duration": 500, "status": 201}
    ])
}
