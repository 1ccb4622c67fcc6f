use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team::RankedTeamDto,
        tournament::{CreateTournamentDto, TournamentDto},
    },
    server::{
        error::AppError,
        model::tournament::CreateTournamentParams,
        service::{leaderboard::LeaderboardService, tournament::TournamentService},
        state::AppState,
    },
};

/// Tag for grouping tournament endpoints in OpenAPI documentation
pub static TOURNAMENT_TAG: &str = "tournament";

/// Create a new tournament.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Tournament name, start and end dates, and number of teams
///
/// # Returns
/// - `201 Created` - Successfully created tournament
/// - `400 Bad Request` - Missing field, invalid date, or invalid team count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    request_body = CreateTournamentDto,
    responses(
        (status = 201, description = "Successfully created tournament", body = TournamentDto),
        (status = 400, description = "Invalid tournament data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(payload): Json<CreateTournamentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTournamentParams::from_dto(payload)?;

    let tournament = TournamentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(tournament.into_dto())))
}

/// Get all tournaments.
#[utoipa::path(
    get,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tournaments", body = Vec<TournamentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournaments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tournaments = TournamentService::new(&state.db).get_all().await?;

    let dtos: Vec<TournamentDto> = tournaments.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a tournament by ID.
///
/// # Returns
/// - `200 OK` - Tournament details
/// - `404 Not Found` - Tournament does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}",
    tag = TOURNAMENT_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tournament", body = TournamentDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tournament = TournamentService::new(&state.db)
        .get_by_id(tournament_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tournament not found".to_string()))?;

    Ok((StatusCode::OK, Json(tournament.into_dto())))
}

/// Delete a tournament.
///
/// Deletes the tournament and every team registered to it.
///
/// # Returns
/// - `204 No Content` - Tournament and its teams deleted
/// - `404 Not Found` - Tournament does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tournaments/{tournament_id}",
    tag = TOURNAMENT_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tournament"),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = TournamentService::new(&state.db)
        .delete(tournament_id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Tournament not found".to_string()))
    }
}

/// Get the points table of a tournament.
///
/// Teams are ranked by total points (kills + points), then by kills. Teams that
/// share a name are counted once, using their best record.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `tournament_id` - Tournament to rank
///
/// # Returns
/// - `200 OK` - Ranked teams, position 1 first
/// - `404 Not Found` - Tournament has no teams
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/points",
    tag = TOURNAMENT_TAG,
    params(
        ("tournament_id" = i32, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Successfully computed points table", body = Vec<RankedTeamDto>),
        (status = 404, description = "No teams found for this tournament", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_points_table(
    State(state): State<AppState>,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let table = LeaderboardService::new(&state.db)
        .points_table(tournament_id)
        .await?;

    let dtos: Vec<RankedTeamDto> = table.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
