use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentDto {
    pub tournament_name: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339
    pub start_date: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339
    pub end_date: Option<String>,
    pub number_of_teams: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDto {
    pub id: i32,
    pub tournament_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub number_of_teams: i32,
    pub created_at: DateTime<Utc>,
}
