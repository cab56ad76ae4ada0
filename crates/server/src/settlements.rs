//! Settlements API endpoints.

use api_types::{
    Message,
    settlement::{SettlementNew, SettlementView, SuggestedSettlementView},
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
) -> Result<Json<Vec<SettlementView>>, ServerError> {
    let settlements = state.engine.list_settlements(group_id).await?;
    let body = settlements
        .iter()
        .map(|s| views::settlement(s, &settlements.members))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(body))
}

pub async fn settlement_new(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
    WithRejection(Json(payload), _): JsonBody<SettlementNew>,
) -> Result<(StatusCode, Json<SettlementView>), ServerError> {
    let settlement = state
        .engine
        .add_settlement(group_id, payload.from_id, payload.to_id, payload.amount)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(views::settlement(&settlement, &settlement.members)?),
    ))
}

/// Advisory only: nothing is recorded until the client posts a settlement.
pub async fn suggested(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
) -> Result<Json<Vec<SuggestedSettlementView>>, ServerError> {
    let plan = state.engine.suggested_settlements(group_id).await?;
    Ok(Json(plan.iter().map(views::transfer).collect()))
}

pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path((group_id, settlement_id)), _): PathParams<(Uuid, Uuid)>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_settlement(group_id, settlement_id).await?;
    Ok(Json(Message {
        message: "Settlement deleted successfully".to_string(),
    }))
}
