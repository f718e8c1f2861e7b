//! Helpers shared by the unit tests: settings and a local HTTP server that
//! records requests, standing in for the AoC and Discord APIs.

use crate::config::Settings;
use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    Router,
};
use bytes::Bytes;
use figment::{providers::Serialized, Figment};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub(crate) fn settings() -> Settings {
    Settings::from_figment(Figment::from(Serialized::defaults(json!({
        "advent_year": 2024,
        "advent_owner_id": 123456,
        "advent_session": "53616c7465645f5f",
        "discord_token": "bot.token.value",
        "discord_channel_id": 1010101010u64,
        "discord_application_id": 2020202020u64,
        "discord_public_key": crate::core::signature::tests::public_key_hex(),
    }))))
    .unwrap()
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub cookie: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub(crate) struct FakeServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header("authorization"),
        cookie: header("cookie"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    (state.status, state.body)
}

/// Server answering every request with `status` and `body`.
pub(crate) async fn fake_server(status: u16, body: &'static str) -> FakeServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(record).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeServer { url, requests }
}
