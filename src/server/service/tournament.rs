use sea_orm::DatabaseConnection;

use crate::server::{
    data::tournament::TournamentRepository,
    error::AppError,
    model::tournament::{CreateTournamentParams, Tournament},
};

pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tournament
    pub async fn create(&self, params: CreateTournamentParams) -> Result<Tournament, AppError> {
        let tournament = TournamentRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created tournament {} ({})",
            tournament.id,
            tournament.tournament_name
        );

        Ok(tournament)
    }

    pub async fn get_all(&self) -> Result<Vec<Tournament>, AppError> {
        Ok(TournamentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Tournament>, AppError> {
        Ok(TournamentRepository::new(self.db).get_by_id(id).await?)
    }

    /// Deletes a tournament and all of its teams
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = TournamentRepository::new(self.db)
            .delete_with_teams(id)
            .await?;

        if deleted {
            tracing::info!("Deleted tournament {} and its teams", id);
        }

        Ok(deleted)
    }
}
