//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db, tournament.id)
///     .team_name("Alpha")
///     .kills(3)
///     .points(2)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    tournament_id: i32,
    team_name: String,
    kills: i32,
    points: i32,
    eliminated: bool,
    logo: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - team_name: `"Team {id}"` where id is auto-incremented
    /// - kills, points: `0`
    /// - eliminated: `false`
    /// - logo: `None`
    pub fn new(db: &'a DatabaseConnection, tournament_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            tournament_id,
            team_name: format!("Team {}", id),
            kills: 0,
            points: 0,
            eliminated: false,
            logo: None,
        }
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }

    pub fn kills(mut self, kills: i32) -> Self {
        self.kills = kills;
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn eliminated(mut self, eliminated: bool) -> Self {
        self.eliminated = eliminated;
        self
    }

    pub fn logo(mut self, logo: Option<String>) -> Self {
        self.logo = logo;
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// No uniqueness checks are performed, which allows tests to seed duplicate
    /// team names the way legacy data may contain them.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            tournament_id: ActiveValue::Set(self.tournament_id),
            team_name: ActiveValue::Set(self.team_name),
            kills: ActiveValue::Set(self.kills),
            points: ActiveValue::Set(self.points),
            eliminated: ActiveValue::Set(self.eliminated),
            logo: ActiveValue::Set(self.logo),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values in the given tournament.
pub async fn create_team(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, tournament_id).build().await
}
