/// Activity handlers - HTTP endpoints for creating posts and the home feed
use crate::error::Result;
use crate::services::{CreateActivityService, HomeActivitiesService};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub message: String,
    pub user_handle: String,
    pub ttl: String,
}

/// Create a new activity
///
/// Validation outcomes come back as the outcome body with 422; store failures
/// propagate and the error type renders the 5xx.
pub async fn create_activity(
    pool: web::Data<PgPool>,
    req: web::Json<CreateActivityRequest>,
) -> Result<HttpResponse> {
    let service = CreateActivityService::new((**pool).clone());
    let outcome = service
        .run(&req.message, &req.user_handle, &req.ttl)
        .await?;

    if outcome.errors.is_some() {
        Ok(HttpResponse::UnprocessableEntity().json(outcome))
    } else {
        Ok(HttpResponse::Ok().json(outcome))
    }
}

/// Feed handler state shared across workers
pub struct FeedHandlerState {
    pub home_activities: Arc<HomeActivitiesService>,
}

#[derive(Debug, Deserialize)]
pub struct HomeFeedParams {
    pub cognito_user_id: Option<String>,
}

/// List the home feed
pub async fn home_activities(
    state: web::Data<FeedHandlerState>,
    query: web::Query<HomeFeedParams>,
) -> Result<HttpResponse> {
    let activities = state
        .home_activities
        .run(query.cognito_user_id.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(activities))
}
