use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::team::{
    Patch, RegisterTeamParams, Team, TeamChanges, TeamUpdateEntry,
};

/// A bulk write that was rolled back.
#[derive(Debug)]
pub struct BulkWriteError {
    /// Team whose write failed; `None` when the transaction itself failed.
    pub team_id: Option<i32>,
    pub source: DbErr,
}

impl From<DbErr> for BulkWriteError {
    fn from(source: DbErr) -> Self {
        Self {
            team_id: None,
            source,
        }
    }
}

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teams of a tournament in registration order
    pub async fn get_by_tournament(&self, tournament_id: i32) -> Result<Vec<Team>, DbErr> {
        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Gets a team by ID, only if it belongs to the given tournament
    pub async fn get_by_id_in_tournament(
        &self,
        tournament_id: i32,
        team_id: i32,
    ) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find_by_id(team_id)
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .one(self.db)
            .await?;

        Ok(team.map(Team::from_entity))
    }

    /// Inserts a batch of teams into a tournament in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Created teams in input order
    /// - `Err(DbErr)` - Database error; no team was inserted
    pub async fn create_many(
        &self,
        tournament_id: i32,
        teams: Vec<RegisterTeamParams>,
    ) -> Result<Vec<Team>, DbErr> {
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(teams.len());
        for params in teams {
            let team = entity::team::ActiveModel {
                tournament_id: ActiveValue::Set(tournament_id),
                team_name: ActiveValue::Set(params.team_name),
                kills: ActiveValue::Set(params.kills),
                points: ActiveValue::Set(params.points),
                eliminated: ActiveValue::Set(params.eliminated),
                logo: ActiveValue::Set(params.logo),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            created.push(Team::from_entity(team));
        }

        txn.commit().await?;

        Ok(created)
    }

    /// Applies changes to one team of a tournament.
    ///
    /// Only fields set in `changes` are written.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Updated team
    /// - `Ok(None)` - Team does not exist in this tournament
    /// - `Err(DbErr)` - Database error
    pub async fn update_fields(
        &self,
        tournament_id: i32,
        team_id: i32,
        changes: &TeamChanges,
    ) -> Result<Option<Team>, DbErr> {
        if !apply_changes(self.db, tournament_id, team_id, changes).await? {
            return Ok(None);
        }

        self.get_by_id_in_tournament(tournament_id, team_id).await
    }

    /// Applies a batch of team changes as one unit.
    ///
    /// Every entry is written inside a single transaction. If a write fails, or a
    /// team has disappeared from the tournament since it was validated, the whole
    /// batch is rolled back and the failing team is reported.
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Every team of the tournament after the write
    /// - `Err(BulkWriteError)` - Database error; no change was applied
    pub async fn bulk_update(
        &self,
        tournament_id: i32,
        updates: &[TeamUpdateEntry],
    ) -> Result<Vec<Team>, BulkWriteError> {
        let txn = self.db.begin().await?;

        for update in updates {
            let failed = |source| BulkWriteError {
                team_id: Some(update.team_id),
                source,
            };

            let written = apply_changes(&txn, tournament_id, update.team_id, &update.changes)
                .await
                .map_err(failed)?;
            if !written {
                return Err(failed(DbErr::RecordNotUpdated));
            }
        }

        txn.commit().await?;

        Ok(self.get_by_tournament(tournament_id).await?)
    }

    /// Deletes a team of a tournament
    ///
    /// # Returns
    /// - `Ok(true)` - Team was deleted
    /// - `Ok(false)` - Team does not exist in this tournament
    pub async fn delete(&self, tournament_id: i32, team_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_many()
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Writes the set fields of `changes` to one team.
///
/// Returns whether a matching row existed. Empty changes write nothing and only
/// check that the team exists.
async fn apply_changes<C: ConnectionTrait>(
    conn: &C,
    tournament_id: i32,
    team_id: i32,
    changes: &TeamChanges,
) -> Result<bool, DbErr> {
    if changes.is_empty() {
        let existing = entity::prelude::Team::find_by_id(team_id)
            .filter(entity::team::Column::TournamentId.eq(tournament_id))
            .one(conn)
            .await?;
        return Ok(existing.is_some());
    }

    let result = entity::prelude::Team::update_many()
        .set(changes_to_active_model(changes))
        .filter(entity::team::Column::Id.eq(team_id))
        .filter(entity::team::Column::TournamentId.eq(tournament_id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}

fn changes_to_active_model(changes: &TeamChanges) -> entity::team::ActiveModel {
    fn patch<T: Clone + Into<sea_orm::Value>>(value: &Patch<T>) -> ActiveValue<T> {
        match value {
            Patch::Set(v) => ActiveValue::Set(v.clone()),
            Patch::Unset => ActiveValue::NotSet,
        }
    }

    entity::team::ActiveModel {
        team_name: patch(&changes.team_name),
        kills: patch(&changes.kills),
        points: patch(&changes.points),
        eliminated: patch(&changes.eliminated),
        logo: patch(&changes.logo),
        ..Default::default()
    }
}
