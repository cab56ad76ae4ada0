use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod balances;
mod expenses;
mod groups;
mod members;
mod server;
mod settlements;
mod views;

/// JSON body whose rejection answers with the `{error}` body.
type JsonBody<T> = WithRejection<Json<T>, ServerError>;
/// Path parameters whose rejection answers with the `{error}` body.
type PathParams<T> = WithRejection<Path<T>, ServerError>;

pub enum ServerError {
    Engine(EngineError),
    /// Malformed request body or path parameter.
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::UnknownMemberReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::InvalidAmount(_)
        | EngineError::SelfSettlement(_)
        | EngineError::InvalidName(_)
        | EngineError::InvalidSplit(_)
        | EngineError::MemberInUse(_) => StatusCode::BAD_REQUEST,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::SelfSettlement(_) => "cannot settle with yourself".to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(value: PathRejection) -> Self {
        Self::Generic(value.body_text())
    }
}
