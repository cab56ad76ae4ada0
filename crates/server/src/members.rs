use api_types::{
    Message,
    member::{MemberNew, MemberView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{JsonBody, PathParams, ServerError, server::ServerState, views};

pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
) -> Result<Json<Vec<MemberView>>, ServerError> {
    let members = state.engine.list_members(group_id).await?;
    Ok(Json(members.iter().map(views::member).collect()))
}

pub async fn member_new(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
    WithRejection(Json(payload), _): JsonBody<MemberNew>,
) -> Result<(StatusCode, Json<MemberView>), ServerError> {
    let member = state.engine.add_member(group_id, &payload.name).await?;
    Ok((StatusCode::CREATED, Json(views::member(&member))))
}

pub async fn rename(
    State(state): State<ServerState>,
    WithRejection(Path((group_id, member_id)), _): PathParams<(Uuid, Uuid)>,
    WithRejection(Json(payload), _): JsonBody<MemberNew>,
) -> Result<Json<MemberView>, ServerError> {
    let member = state
        .engine
        .rename_member(group_id, member_id, &payload.name)
        .await?;
    Ok(Json(views::member(&member)))
}

pub async fn remove(
    State(state): State<ServerState>,
    WithRejection(Path((group_id, member_id)), _): PathParams<(Uuid, Uuid)>,
) -> Result<Json<Message>, ServerError> {
    state.engine.remove_member(group_id, member_id).await?;
    Ok(Json(Message {
        message: "Member removed successfully".to_string(),
    }))
}
