use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::tournament::{CreateTournamentParams, Tournament};

pub struct TournamentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tournament
    pub async fn create(&self, params: CreateTournamentParams) -> Result<Tournament, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            tournament_name: ActiveValue::Set(params.tournament_name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            number_of_teams: ActiveValue::Set(params.number_of_teams),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tournament::from_entity(tournament))
    }

    /// Gets all tournaments, most recently created first
    pub async fn get_all(&self) -> Result<Vec<Tournament>, DbErr> {
        let tournaments = entity::prelude::Tournament::find()
            .order_by_desc(entity::tournament::Column::CreatedAt)
            .order_by_desc(entity::tournament::Column::Id)
            .all(self.db)
            .await?;

        Ok(tournaments.into_iter().map(Tournament::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Tournament>, DbErr> {
        let tournament = entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(tournament.map(Tournament::from_entity))
    }

    /// Deletes a tournament together with all of its teams.
    ///
    /// Both deletes run in one transaction so no team outlives its tournament, even
    /// on connections where foreign key enforcement is disabled.
    ///
    /// # Returns
    /// - `Ok(true)` - Tournament existed and was deleted
    /// - `Ok(false)` - No tournament with this ID
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete_with_teams(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Team::delete_many()
            .filter(entity::team::Column::TournamentId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Tournament::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
