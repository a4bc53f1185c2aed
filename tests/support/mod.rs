#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use school_activities::database::{seed, ActivityStore};
use school_activities::models::{Activity, ActivityMap};
use school_activities::services::ActivityService;
use school_activities::web::{self, AppState};

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Router over the built-in activity list.
pub fn default_app() -> Router {
    let activities = seed::default_activities().expect("built-in seed must parse");
    app_with(activities)
}

pub fn app_with(activities: ActivityMap) -> Router {
    let state = AppState::new(ActivityService::new(ActivityStore::new(activities)));
    web::router(state, static_dir())
}

pub fn activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "Learn strategies and compete in chess tournaments".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// Sends one request through a clone of the router. The store is shared
/// between clones, so state carries across calls.
pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body")
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
