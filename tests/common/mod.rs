//! Shared helpers for integration tests
#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use tinybeans::error::{Result, TinybeansError};
use tinybeans::infrastructure::{ApiRequest, ApiResponse, Transport};
use tinybeans::TinybeansClient;

pub const CLIENT_ID: &str = "test-client";

pub fn tinybeans_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tinybeans").unwrap();
    cmd.env_remove("TINYBEANS_CONFIG");
    cmd.env_remove("TINYBEANS_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Transport that replays queued responses and records every request
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<ApiResponse>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with a JSON body
    pub fn push_json(&self, body: Value) {
        self.push(ApiResponse::ok(&body));
    }

    pub fn push(&self, response: ApiResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().unwrap()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.responses.borrow_mut().pop_front().ok_or_else(|| {
            TinybeansError::Config(format!("no scripted response for {}", request.path))
        })
    }
}

pub fn client() -> TinybeansClient<ScriptedTransport> {
    TinybeansClient::with_transport(ScriptedTransport::new(), CLIENT_ID)
}

/// A client that has already logged in as "ada" with token "token-1"
pub fn logged_in_client() -> TinybeansClient<ScriptedTransport> {
    let mut client = client();
    client.transport().push_json(auth_response("token-1"));
    client.login("ada", "secret").unwrap();
    client
}

pub fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "emailAddress": format!("{}@example.com", username),
        "firstName": "Ada",
        "lastName": "Lovelace",
        "username": username,
    })
}

pub fn auth_response(token: &str) -> Value {
    json!({
        "accessToken": token,
        "user": user_json(11, "ada"),
    })
}

pub fn child_json(id: i64, first_name: &str, dob: &str) -> Value {
    json!({
        "id": id,
        "firstName": first_name,
        "lastName": "Bean",
        "gender": "FEMALE",
        "dob": dob,
    })
}

pub fn following_json(id: i64, journal_id: i64, children: Vec<Value>) -> Value {
    json!({
        "id": id,
        "URL": format!("https://tinybeans.com/app/#/main/journals/{}", journal_id),
        "relationship": {"label": "Grandparent"},
        "journal": {
            "id": journal_id,
            "title": format!("Journal {}", journal_id),
            "children": children,
        },
    })
}

pub fn followings_response(followings: Vec<Value>) -> Value {
    json!({ "followings": followings })
}

pub fn entry_json(id: i64, timestamp: i64) -> Value {
    json!({
        "id": id,
        "uuid": format!("uuid-{}", id),
        "type": "PHOTO",
        "timestamp": timestamp,
        "caption": format!("entry {}", id),
        "blobs": {"o": format!("https://cdn.example.com/{}.jpg", id)},
    })
}

pub fn entries_response(entries: Vec<Value>, remaining: i64) -> Value {
    json!({
        "entries": entries,
        "numEntriesRemaining": remaining,
    })
}
