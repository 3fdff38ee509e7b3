use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::{ActivityCatalog, MessageResponse};
use crate::services::roster_service;
use crate::web::error::ApiResult;
use crate::web::SharedRoster;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub async fn list_activities_handler(State(store): State<SharedRoster>) -> Json<ActivityCatalog> {
    Json(roster_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<SharedRoster>,
) -> ApiResult<Json<MessageResponse>> {
    let resp =
        roster_service::signup_for_activity(&store, &activity_name, query.email.as_deref())?;
    Ok(Json(resp))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<SharedRoster>,
) -> ApiResult<Json<MessageResponse>> {
    let resp =
        roster_service::unregister_participant(&store, &activity_name, query.email.as_deref())?;
    Ok(Json(resp))
}
