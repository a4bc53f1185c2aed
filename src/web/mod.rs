use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::ActivityService;

pub mod error;
pub mod params;
pub mod routes;

use routes::{activities, activity, health};

pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ActivityService>,
}

impl AppState {
    pub fn new(service: ActivityService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::activity_unregister_handler),
        )
        // Front end
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())).layer(
                SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ),
            ),
        )
        // Layers
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
