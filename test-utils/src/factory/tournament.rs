//! Tournament factory for creating test tournament entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tournaments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tournament = TournamentFactory::new(&db)
///     .tournament_name("Spring Cup")
///     .number_of_teams(4)
///     .build()
///     .await?;
/// ```
pub struct TournamentFactory<'a> {
    db: &'a DatabaseConnection,
    tournament_name: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    number_of_teams: i32,
}

impl<'a> TournamentFactory<'a> {
    /// Creates a new TournamentFactory with default values.
    ///
    /// Defaults:
    /// - tournament_name: `"Tournament {id}"`
    /// - start_date: now
    /// - end_date: 2 days from now
    /// - number_of_teams: `4`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            tournament_name: format!("Tournament {}", id),
            start_date: now,
            end_date: now + Duration::days(2),
            number_of_teams: 4,
        }
    }

    pub fn tournament_name(mut self, name: impl Into<String>) -> Self {
        self.tournament_name = name.into();
        self
    }

    pub fn dates(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn number_of_teams(mut self, number_of_teams: i32) -> Self {
        self.number_of_teams = number_of_teams;
        self
    }

    /// Builds and inserts the tournament entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tournament::Model)` - Created tournament entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tournament::Model, DbErr> {
        entity::tournament::ActiveModel {
            id: ActiveValue::NotSet,
            tournament_name: ActiveValue::Set(self.tournament_name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            number_of_teams: ActiveValue::Set(self.number_of_teams),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tournament with default values.
///
/// Shorthand for `TournamentFactory::new(db).build().await`.
pub async fn create_tournament(
    db: &DatabaseConnection,
) -> Result<entity::tournament::Model, DbErr> {
    TournamentFactory::new(db).build().await
}
