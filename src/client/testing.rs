//! In-memory transport used by the client tests.

use std::io;
use std::sync::{Arc, Mutex};

use super::*;

pub const BASE_URL: &str = "http://gateway.invalid";

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    response_status: u16,
    response_body: String,
    fail: bool,
    released: usize,
}

/// Replays one canned response and records every request it receives.
#[derive(Debug)]
struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

impl HttpTransport for FakeTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            if state.fail {
                return Err(Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )) as Box<dyn StdError + Send + Sync>);
            }
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        })
    }
}

impl Drop for FakeTransport {
    fn drop(&mut self) {
        self.state.lock().unwrap().released += 1;
    }
}

/// Test-side view of a [`FakeTransport`] owned by a client.
#[derive(Debug, Clone)]
pub struct FakeHandle {
    state: Arc<Mutex<FakeTransportState>>,
}

impl FakeHandle {
    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn released(&self) -> usize {
        self.state.lock().unwrap().released
    }

    pub fn last_request(&self) -> HttpRequest {
        self.state
            .lock()
            .unwrap()
            .requests
            .last()
            .cloned()
            .expect("no request was recorded")
    }

    pub fn last_method(&self) -> Method {
        self.last_request().method
    }

    /// Path of the last request, exactly as transmitted.
    pub fn last_path(&self) -> String {
        self.last_request().url.path().to_owned()
    }

    /// Decoded query pairs of the last request, in order.
    pub fn last_query(&self) -> Vec<(String, String)> {
        self.last_request()
            .url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.last_request()
            .body
            .map(|body| serde_json::from_str(&body).unwrap())
    }
}

fn client_with(base_url: &str, state: FakeTransportState) -> (SignalClient, FakeHandle) {
    let state = Arc::new(Mutex::new(state));
    let transport = FakeTransport {
        state: state.clone(),
    };
    let client = SignalClient::with_transport(base_url.to_owned(), Arc::new(transport));
    (client, FakeHandle { state })
}

/// Client whose transport answers every request with `status` and `body`.
pub fn fake_client(status: u16, body: impl Into<String>) -> (SignalClient, FakeHandle) {
    fake_client_at(BASE_URL, status, body)
}

/// Like [`fake_client`], but with `base_url` installed as is, skipping the
/// builder's validation.
pub fn fake_client_at(
    base_url: &str,
    status: u16,
    body: impl Into<String>,
) -> (SignalClient, FakeHandle) {
    client_with(base_url, FakeTransportState {
        requests: Vec::new(),
        response_status: status,
        response_body: body.into(),
        fail: false,
        released: 0,
    })
}

/// Client whose transport fails every request before a response arrives.
pub fn failing_client() -> (SignalClient, FakeHandle) {
    client_with(BASE_URL, FakeTransportState {
        requests: Vec::new(),
        response_status: 0,
        response_body: String::new(),
        fail: true,
        released: 0,
    })
}
