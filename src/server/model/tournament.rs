//! Domain models for tournament data operations.

use chrono::{DateTime, Utc};

use crate::{
    model::tournament::{CreateTournamentDto, TournamentDto},
    server::{error::AppError, util::parse::parse_date},
};

/// A competition that teams register into.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i32,
    pub tournament_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Exact number of teams a registration batch must contain.
    pub number_of_teams: i32,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Converts an entity model to a tournament domain model at the repository boundary.
    pub fn from_entity(entity: entity::tournament::Model) -> Self {
        Self {
            id: entity.id,
            tournament_name: entity.tournament_name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            number_of_teams: entity.number_of_teams,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TournamentDto {
        TournamentDto {
            id: self.id,
            tournament_name: self.tournament_name,
            start_date: self.start_date,
            end_date: self.end_date,
            number_of_teams: self.number_of_teams,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTournamentParams {
    pub tournament_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub number_of_teams: i32,
}

impl CreateTournamentParams {
    /// Validates a creation request and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(CreateTournamentParams)` - All fields present and valid
    /// - `Err(AppError::BadRequest)` - Missing field, unparseable date, end before start,
    ///   or a team count below one
    pub fn from_dto(dto: CreateTournamentDto) -> Result<Self, AppError> {
        let (Some(name), Some(start), Some(end), Some(number_of_teams)) = (
            dto.tournament_name,
            dto.start_date,
            dto.end_date,
            dto.number_of_teams,
        ) else {
            return Err(AppError::BadRequest(
                "All tournament fields are required".to_string(),
            ));
        };

        let tournament_name = name.trim().to_string();
        if tournament_name.is_empty() {
            return Err(AppError::BadRequest(
                "All tournament fields are required".to_string(),
            ));
        }

        let start_date = parse_date(&start).ok_or_else(|| invalid_date("startDate", &start))?;
        let end_date = parse_date(&end).ok_or_else(|| invalid_date("endDate", &end))?;
        if end_date < start_date {
            return Err(AppError::BadRequest(
                "endDate cannot be earlier than startDate".to_string(),
            ));
        }

        let number_of_teams = i32::try_from(number_of_teams)
            .ok()
            .filter(|count| *count >= 1)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "numberOfTeams must be a positive integer, got {}",
                    number_of_teams
                ))
            })?;

        Ok(Self {
            tournament_name,
            start_date,
            end_date,
            number_of_teams,
        })
    }
}

fn invalid_date(field: &str, value: &str) -> AppError {
    AppError::BadRequest(format!(
        "Invalid {} '{}'. Expected 'YYYY-MM-DD' or an RFC 3339 timestamp",
        field, value
    ))
}
