//! Groups API endpoints.

use api_types::{
    Message,
    group::{GroupNew, GroupUpdate, GroupView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{JsonBody, PathParams, ServerError, server::ServerState, views};

pub async fn list(State(state): State<ServerState>) -> Json<Vec<GroupView>> {
    let groups = state.engine.list_groups().await;
    Json(groups.iter().map(views::group_summary).collect())
}

pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
) -> Result<Json<GroupView>, ServerError> {
    let group = state.engine.group(group_id).await?;
    Ok(Json(views::group_detail(&group)?))
}

pub async fn group_new(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): JsonBody<GroupNew>,
) -> Result<(StatusCode, Json<GroupView>), ServerError> {
    let member_names: Vec<String> = payload.members.into_iter().map(|m| m.name).collect();
    let group = state
        .engine
        .new_group(&payload.name, payload.description.as_deref(), &member_names)
        .await?;

    Ok((StatusCode::CREATED, Json(views::group_detail(&group)?)))
}

pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
    WithRejection(Json(payload), _): JsonBody<GroupUpdate>,
) -> Result<Json<GroupView>, ServerError> {
    let group = state
        .engine
        .update_group(
            group_id,
            payload.name.as_deref(),
            payload.description.as_deref(),
        )
        .await?;
    Ok(Json(views::group_detail(&group)?))
}

pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_group(group_id).await?;
    Ok(Json(Message {
        message: "Group deleted successfully".to_string(),
    }))
}
