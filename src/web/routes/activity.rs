use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::web::error::ApiError;
use crate::web::params::{ActivityName, Email, EmailQuery};
use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_input(
    activity_name: String,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<(ActivityName, Email), ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    Ok((ActivityName::parse(activity_name)?, Email::parse(query.email)?))
}

pub async fn activity_signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity, email) = parse_input(activity_name, query)?;
    let confirmation = state
        .service
        .signup(activity.as_str(), email.as_str())
        .await?;
    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}

pub async fn activity_unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity, email) = parse_input(activity_name, query)?;
    let confirmation = state
        .service
        .unregister(activity.as_str(), email.as_str())
        .await?;
    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}
