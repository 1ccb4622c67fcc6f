//! Domain models and parameter types for team operations.
//!
//! Request bodies that change teams are parsed here, once, into explicit partial
//! updates (`TeamChanges`) so the service layer never inspects raw JSON.

use serde_json::{Map, Value};

use crate::{
    model::team::{BulkTeamUpdateDto, RankedTeamDto, RegisterTeamDto, TeamDto},
    server::{error::team::TeamError, util::logo::normalize_logo_url},
};

/// A competing team within one tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    /// Unique identifier for the team.
    pub id: i32,
    /// Tournament the team is registered in. Never changes after creation.
    pub tournament_id: i32,
    /// Display name, unique within the tournament.
    pub team_name: String,
    pub kills: i32,
    pub points: i32,
    pub eliminated: bool,
    /// Direct-view logo URL.
    pub logo: Option<String>,
}

impl Team {
    /// Sum of kills and points, widened so it cannot overflow.
    pub fn total_points(&self) -> i64 {
        i64::from(self.kills) + i64::from(self.points)
    }

    /// Converts an entity model to a team domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            team_name: entity.team_name,
            kills: entity.kills,
            points: entity.points,
            eliminated: entity.eliminated,
            logo: entity.logo,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            total_points: self.total_points(),
            id: self.id,
            tournament_id: self.tournament_id,
            team_name: self.team_name,
            kills: self.kills,
            points: self.points,
            eliminated: self.eliminated,
            logo: self.logo,
        }
    }
}

/// A single field of a partial update: either left alone or set to a value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }
}

/// Validated partial update of a team.
///
/// `logo` is nullable, so `Patch::Set(None)` clears it while `Patch::Unset` keeps it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamChanges {
    pub team_name: Patch<String>,
    pub kills: Patch<i32>,
    pub points: Patch<i32>,
    pub eliminated: Patch<bool>,
    pub logo: Patch<Option<String>>,
}

impl TeamChanges {
    /// Parses a raw `changes` object.
    ///
    /// Unrecognized keys are rejected outright. A recognized key with a value of the
    /// wrong type (or out of range) is rejected when other fields are valid; when no
    /// field is valid the result is empty so the caller reports an empty update.
    ///
    /// # Arguments
    /// - `team_id` - Team the changes target, used in error messages
    /// - `changes` - Raw JSON object from the request body
    ///
    /// # Returns
    /// - `Ok(TeamChanges)` - Parsed changes, possibly empty
    /// - `Err(TeamError::InvalidInput)` - Unknown key, or a mistyped field next to valid ones
    pub fn parse(team_id: i32, changes: &Map<String, Value>) -> Result<Self, TeamError> {
        let mut parsed = Self::default();
        let mut rejected: Vec<&str> = Vec::new();

        for (key, value) in changes {
            match key.as_str() {
                "teamName" => match parse_name(value) {
                    Some(name) => parsed.team_name = Patch::Set(name),
                    None => rejected.push(key),
                },
                "kills" => match parse_counter(value) {
                    Some(kills) => parsed.kills = Patch::Set(kills),
                    None => rejected.push(key),
                },
                "points" => match parse_counter(value) {
                    Some(points) => parsed.points = Patch::Set(points),
                    None => rejected.push(key),
                },
                "eliminated" => match value.as_bool() {
                    Some(eliminated) => parsed.eliminated = Patch::Set(eliminated),
                    None => rejected.push(key),
                },
                "logo" => match value {
                    Value::Null => parsed.logo = Patch::Set(None),
                    Value::String(link) if !link.trim().is_empty() => {
                        parsed.logo = Patch::Set(Some(normalize_logo_url(link)))
                    }
                    _ => rejected.push(key),
                },
                other => {
                    return Err(TeamError::InvalidInput(format!(
                        "Unrecognized field '{}' in changes for team {}",
                        other, team_id
                    )))
                }
            }
        }

        if !rejected.is_empty() && !parsed.is_empty() {
            return Err(TeamError::InvalidInput(format!(
                "Invalid value for {} in changes for team {}",
                rejected.join(", "),
                team_id
            )));
        }

        Ok(parsed)
    }

    pub fn is_empty(&self) -> bool {
        !(self.team_name.is_set()
            || self.kills.is_set()
            || self.points.is_set()
            || self.eliminated.is_set()
            || self.logo.is_set())
    }

    /// Drops a rename to the team's current name, which is not a change.
    pub fn without_noop_rename(mut self, current_name: &str) -> Self {
        if self.team_name.as_set().is_some_and(|name| name == current_name) {
            self.team_name = Patch::Unset;
        }
        self
    }

    pub fn new_name(&self) -> Option<&str> {
        self.team_name.as_set().map(String::as_str)
    }
}

fn parse_name(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn parse_counter(value: &Value) -> Option<i32> {
    value
        .as_i64()
        .filter(|count| *count >= 0)
        .and_then(|count| i32::try_from(count).ok())
}

/// One entry of a bulk update batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamUpdateEntry {
    pub team_id: i32,
    pub changes: TeamChanges,
}

impl TeamUpdateEntry {
    /// Parses a bulk update request body.
    ///
    /// # Returns
    /// - `Ok(Vec<TeamUpdateEntry>)` - One entry per array element, in request order
    /// - `Err(TeamError::InvalidInput)` - Body is not a non-empty array, or an entry is malformed
    pub fn parse_batch(body: Value) -> Result<Vec<Self>, TeamError> {
        let items = match body {
            Value::Array(items) if !items.is_empty() => items,
            _ => {
                return Err(TeamError::InvalidInput(
                    "Request body must be a non-empty array of team updates".to_string(),
                ))
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let dto: BulkTeamUpdateDto = serde_json::from_value(item).map_err(|e| {
                    TeamError::InvalidInput(format!("Invalid update at index {}: {}", index, e))
                })?;

                Ok(Self {
                    team_id: dto.team_id,
                    changes: TeamChanges::parse(dto.team_id, &dto.changes)?,
                })
            })
            .collect()
    }
}

/// Parameters for registering one team.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterTeamParams {
    pub team_name: String,
    pub kills: i32,
    pub points: i32,
    pub eliminated: bool,
    pub logo: Option<String>,
}

impl RegisterTeamParams {
    /// Parses a team registration request body.
    ///
    /// Names are trimmed, counters default to zero and logos are normalized.
    ///
    /// # Returns
    /// - `Ok(Vec<RegisterTeamParams>)` - Teams in request order
    /// - `Err(TeamError::InvalidInput)` - Body is not a non-empty array or an entry is invalid
    pub fn parse_batch(body: Value) -> Result<Vec<Self>, TeamError> {
        let items = match body {
            Value::Array(items) if !items.is_empty() => items,
            _ => {
                return Err(TeamError::InvalidInput(
                    "Provide a non-empty array of teams".to_string(),
                ))
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let dto: RegisterTeamDto = serde_json::from_value(item).map_err(|e| {
                    TeamError::InvalidInput(format!("Invalid team at index {}: {}", index, e))
                })?;

                Self::from_dto(dto)
            })
            .collect()
    }

    fn from_dto(dto: RegisterTeamDto) -> Result<Self, TeamError> {
        let team_name = dto.team_name.trim().to_string();
        if team_name.is_empty() {
            return Err(TeamError::InvalidInput(
                "Each team must have a valid teamName".to_string(),
            ));
        }

        let kills = dto.kills.unwrap_or(0);
        let points = dto.points.unwrap_or(0);
        if kills < 0 || points < 0 {
            return Err(TeamError::InvalidInput(format!(
                "Kills and points of team '{}' cannot be negative",
                team_name
            )));
        }

        Ok(Self {
            team_name,
            kills,
            points,
            eliminated: dto.eliminated.unwrap_or(false),
            logo: dto
                .logo
                .filter(|link| !link.trim().is_empty())
                .map(|link| normalize_logo_url(&link)),
        })
    }
}

/// A team's row in the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeam {
    pub id: i32,
    pub team_name: String,
    pub kills: i32,
    pub points: i32,
    pub total_points: i64,
    pub eliminated: bool,
    pub logo: Option<String>,
    /// 1-based position; never shared between teams.
    pub position: u32,
}

impl RankedTeam {
    pub fn into_dto(self) -> RankedTeamDto {
        RankedTeamDto {
            id: self.id,
            team_name: self.team_name,
            kills: self.kills,
            points: self.points,
            total_points: self.total_points,
            eliminated: self.eliminated,
            logo: self.logo,
            position: self.position,
        }
    }
}
