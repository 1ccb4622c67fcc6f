use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        team::{BulkTeamUpdateDto, RegisterTeamDto, TeamDto, UpdateTeamDto},
    },
    server::{
        error::{team::TeamError, AppError},
        model::team::{RegisterTeamParams, TeamChanges, TeamUpdateEntry},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Register the teams of a tournament.
///
/// The request must contain exactly the tournament's declared number of teams.
/// Team names are trimmed and must be unique within the request and the
/// tournament. All teams are created together or not at all.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `tournament_id` - Tournament to register the teams in
/// - `payload` - Array of teams to register
///
/// # Returns
/// - `201 Created` - All teams created
/// - `400 Bad Request` - Malformed body, wrong team count, or a name conflict
/// - `404 Not Found` - Tournament does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tournaments/{tournament_id}/teams",
    tag = TEAM_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    request_body = Vec<RegisterTeamDto>,
    responses(
        (status = 201, description = "Successfully registered teams", body = Vec<TeamDto>),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_teams(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let teams = RegisterTeamParams::parse_batch(payload)?;

    let created = TeamService::new(&state.db)
        .register(tournament_id, teams)
        .await?;

    let dtos: Vec<TeamDto> = created.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::CREATED, Json(dtos)))
}

/// Get the teams of a tournament.
///
/// # Returns
/// - `200 OK` - Teams in registration order, with total points
/// - `404 Not Found` - Tournament has no teams
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/teams",
    tag = TEAM_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<TeamDto>),
        (status = 404, description = "No teams found for this tournament", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).list(tournament_id).await?;

    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update several teams of a tournament at once.
///
/// Every entry is validated against the tournament's current teams before any
/// change is written: all team IDs must belong to the tournament, no two entries
/// may propose the same new name, no proposed name may be held by a team that
/// keeps its name, and every entry must change at least one field. The changes
/// are then applied in a single transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `tournament_id` - Tournament whose teams are updated
/// - `payload` - Array of `{teamId, changes}` entries
///
/// # Returns
/// - `200 OK` - Every team of the tournament after the update
/// - `400 Bad Request` - The batch violated a rule; `code` names the rule
/// - `500 Internal Server Error` - Database error; no change was applied
#[utoipa::path(
    put,
    path = "/api/tournaments/{tournament_id}/teams/bulk-update",
    tag = TEAM_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    request_body = Vec<BulkTeamUpdateDto>,
    responses(
        (status = 200, description = "Successfully updated teams", body = Vec<TeamDto>),
        (status = 400, description = "Invalid update batch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_update_teams(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let updates = TeamUpdateEntry::parse_batch(payload)?;

    let teams = TeamService::new(&state.db)
        .bulk_update(tournament_id, updates)
        .await?;

    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update one team of a tournament.
///
/// Only the fields present in the body are changed. `logo: null` removes the logo.
///
/// # Returns
/// - `200 OK` - Team after the update
/// - `400 Bad Request` - Invalid fields, nothing to change, or name already taken
/// - `404 Not Found` - Team does not belong to the tournament
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tournaments/{tournament_id}/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 404, description = "Team not found in this tournament", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path((tournament_id, team_id)): Path<(i32, i32)>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let Value::Object(fields) = payload else {
        return Err(TeamError::InvalidInput("Request body must be a JSON object".to_string()).into());
    };
    let changes = TeamChanges::parse(team_id, &fields)?;

    let team = TeamService::new(&state.db)
        .update(tournament_id, team_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete one team of a tournament.
///
/// # Returns
/// - `204 No Content` - Team deleted
/// - `404 Not Found` - Team does not belong to the tournament
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tournaments/{tournament_id}/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 404, description = "Team not found in this tournament", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path((tournament_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = TeamService::new(&state.db)
        .delete(tournament_id, team_id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(TeamError::NotFound("Team not found in this tournament".to_string()).into())
    }
}
