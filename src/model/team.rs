use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub tournament_id: i32,
    pub team_name: String,
    pub kills: i32,
    pub points: i32,
    pub total_points: i64,
    pub eliminated: bool,
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterTeamDto {
    pub team_name: String,
    pub kills: Option<i32>,
    pub points: Option<i32>,
    pub eliminated: Option<bool>,
    pub logo: Option<String>,
}

/// Partial team update. Omitted fields are left untouched; `logo: null` clears the logo.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamDto {
    pub team_name: Option<String>,
    pub kills: Option<i32>,
    pub points: Option<i32>,
    pub eliminated: Option<bool>,
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkTeamUpdateDto {
    pub team_id: i32,
    /// Same shape as `UpdateTeamDto`
    #[schema(value_type = UpdateTeamDto)]
    pub changes: Map<String, Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeamDto {
    pub id: i32,
    pub team_name: String,
    pub kills: i32,
    pub points: i32,
    pub total_points: i64,
    pub eliminated: bool,
    pub logo: Option<String>,
    pub position: u32,
}
