use api_types::balance::BalanceView;
use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{PathParams, ServerError, server::ServerState, views};

pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
) -> Result<Json<Vec<BalanceView>>, ServerError> {
    let balances = state.engine.balances(group_id).await?;
    Ok(Json(balances.iter().map(views::balance).collect()))
}
