use axum::{extract::State, Json};

use crate::models::ActivityMap;
use crate::web::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(state.service.list_activities().await)
}
