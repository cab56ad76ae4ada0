//! Expenses API endpoints.

use api_types::{
    Message,
    expense::{ExpenseNew, ExpenseView, SplitType},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{ExpenseCmd, Split};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{JsonBody, PathParams, ServerError, server::ServerState, views};

fn expense_cmd(payload: ExpenseNew) -> ExpenseCmd {
    let split = match payload.split_type.unwrap_or_default() {
        SplitType::Equal => Split::Equal {
            participant_ids: payload.participant_ids.unwrap_or_default(),
        },
        SplitType::Custom => Split::Custom {
            shares: payload
                .shares
                .unwrap_or_default()
                .into_iter()
                .map(|s| (s.member_id, s.amount))
                .collect(),
        },
    };

    ExpenseCmd {
        description: payload.description,
        amount: payload.amount,
        paid_by_id: payload.paid_by_id,
        split,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state.engine.list_expenses(group_id).await?;
    let body = expenses
        .iter()
        .map(|e| views::expense(e, &expenses.members))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(body))
}

pub async fn expense_new(
    State(state): State<ServerState>,
    WithRejection(Path(group_id), _): PathParams<Uuid>,
    WithRejection(Json(payload), _): JsonBody<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let expense = state
        .engine
        .add_expense(group_id, expense_cmd(payload))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(views::expense(&expense, &expense.members)?),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path((group_id, expense_id)), _): PathParams<(Uuid, Uuid)>,
    WithRejection(Json(payload), _): JsonBody<ExpenseNew>,
) -> Result<Json<ExpenseView>, ServerError> {
    let expense = state
        .engine
        .update_expense(group_id, expense_id, expense_cmd(payload))
        .await?;
    Ok(Json(views::expense(&expense, &expense.members)?))
}

pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path((group_id, expense_id)), _): PathParams<(Uuid, Uuid)>,
) -> Result<Json<Message>, ServerError> {
    state.engine.delete_expense(group_id, expense_id).await?;
    Ok(Json(Message {
        message: "Expense deleted successfully".to_string(),
    }))
}
