use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::data::team::BulkWriteError};

/// Validation failures raised by team registration, team updates and the leaderboard.
///
/// Every variant names the offending identifiers or names so a caller can correct
/// the request and resubmit. None of these errors are raised after a write has
/// started; a rejected request leaves stored teams untouched.
#[derive(Error, Debug, PartialEq)]
pub enum TeamError {
    /// Request body has the wrong shape or a field has the wrong type.
    #[error("{0}")]
    InvalidInput(String),

    /// One or more team IDs do not belong to the tournament.
    #[error("Invalid team IDs: {}", join(.0))]
    InvalidReference(Vec<i32>),

    /// Two or more entries of the same batch propose the same new team name.
    #[error("Duplicate team names within updates: {}", join(.0))]
    ConflictWithinBatch(Vec<String>),

    /// A proposed team name is already held by another team of the tournament.
    #[error("Team names already exist in this tournament: {}", join(.0))]
    ConflictWithExisting(Vec<String>),

    /// An update carries no field that would change the team.
    #[error("No valid fields to update for team {0}")]
    EmptyUpdate(i32),

    /// No teams (or no such team) exist for the tournament.
    #[error("{0}")]
    NotFound(String),

    /// The store rejected a validated batch; the whole batch was rolled back.
    #[error(
        "Failed to apply team updates{}: {message}",
        .team_id.map(|id| format!(" at team {}", id)).unwrap_or_default()
    )]
    StoreFailure {
        /// Team whose write failed, when the failure is tied to one entry
        team_id: Option<i32>,
        /// Message reported by the store
        message: String,
    },
}

impl TeamError {
    /// Machine-readable name of the violated rule, returned as `code` in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidReference(_) => "invalid_reference",
            Self::ConflictWithinBatch(_) => "conflict_within_batch",
            Self::ConflictWithExisting(_) => "conflict_with_existing",
            Self::EmptyUpdate(_) => "empty_update",
            Self::NotFound(_) => "not_found",
            Self::StoreFailure { .. } => "store_failure",
        }
    }
}

impl From<BulkWriteError> for TeamError {
    fn from(err: BulkWriteError) -> Self {
        Self::StoreFailure {
            team_id: err.team_id,
            message: err.source.to_string(),
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts team errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `StoreFailure`, with the store message kept
/// - 400 Bad Request - For every other variant
impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreFailure { .. } => {
                tracing::error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorDto::with_code(self.to_string(), self.code()))).into_response()
    }
}
