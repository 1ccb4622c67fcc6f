//! Team registration, listing, updates and removal.
//!
//! Every mutating operation loads the tournament's current teams, validates the
//! request against them with the pure checks in [`validation`], and only then
//! writes. A rejected request performs no write.

pub mod validation;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, tournament::TournamentRepository},
    error::{team::TeamError, AppError},
    model::team::{RegisterTeamParams, Team, TeamChanges, TeamUpdateEntry},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a full roster of teams into a tournament.
    ///
    /// The batch must contain exactly the tournament's declared number of teams and
    /// every name must be unused. All teams are inserted in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Created teams in request order
    /// - `Err(AppError::NotFound)` - Tournament does not exist
    /// - `Err(AppError::TeamErr)` - Wrong team count or a name conflict
    pub async fn register(
        &self,
        tournament_id: i32,
        teams: Vec<RegisterTeamParams>,
    ) -> Result<Vec<Team>, AppError> {
        let tournament = TournamentRepository::new(self.db)
            .get_by_id(tournament_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tournament not found".to_string()))?;

        if teams.len() != tournament.number_of_teams as usize {
            return Err(TeamError::InvalidInput(format!(
                "Tournament requires exactly {} teams, but {} were provided",
                tournament.number_of_teams,
                teams.len()
            ))
            .into());
        }

        let repo = TeamRepository::new(self.db);
        let current = repo.get_by_tournament(tournament_id).await?;
        validation::check_registration(&current, &teams)?;

        let created = repo.create_many(tournament_id, teams).await?;

        tracing::info!(
            "Registered {} teams in tournament {}",
            created.len(),
            tournament_id
        );

        Ok(created)
    }

    /// Gets the teams of a tournament
    ///
    /// # Returns
    /// - `Err(AppError::TeamErr(NotFound))` - Tournament has no teams
    pub async fn list(&self, tournament_id: i32) -> Result<Vec<Team>, AppError> {
        let teams = TeamRepository::new(self.db)
            .get_by_tournament(tournament_id)
            .await?;

        if teams.is_empty() {
            return Err(TeamError::NotFound("No teams found for this tournament".to_string()).into());
        }

        Ok(teams)
    }

    /// Updates one team of a tournament.
    ///
    /// # Returns
    /// - `Ok(Team)` - Team after the update
    /// - `Err(AppError::TeamErr(NotFound))` - Team does not belong to the tournament
    /// - `Err(AppError::TeamErr(EmptyUpdate))` - No valid field was given
    /// - `Err(AppError::TeamErr(ConflictWithExisting))` - New name already taken
    pub async fn update(
        &self,
        tournament_id: i32,
        team_id: i32,
        changes: TeamChanges,
    ) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);
        let current = repo.get_by_tournament(tournament_id).await?;

        let target = current
            .iter()
            .find(|team| team.id == team_id)
            .ok_or_else(team_not_found)?;

        let changes = validation::check_single_update(&current, target, changes).map_err(|e| {
            tracing::warn!("Rejected update of team {}: {}", team_id, e);
            e
        })?;

        let team = repo
            .update_fields(tournament_id, team_id, &changes)
            .await?
            .ok_or_else(team_not_found)?;

        tracing::info!("Updated team {} in tournament {}", team_id, tournament_id);

        Ok(team)
    }

    /// Applies a batch of team updates as one unit.
    ///
    /// The whole batch is validated against the tournament's current teams before
    /// anything is written; the writes then happen in a single transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Every team of the tournament after the update
    /// - `Err(AppError::TeamErr)` - The batch violated a rule; nothing was written
    /// - `Err(AppError::TeamErr(StoreFailure))` - The write failed and was rolled back
    pub async fn bulk_update(
        &self,
        tournament_id: i32,
        updates: Vec<TeamUpdateEntry>,
    ) -> Result<Vec<Team>, AppError> {
        let repo = TeamRepository::new(self.db);
        let current = repo.get_by_tournament(tournament_id).await?;

        let plan = validation::plan_bulk_update(&current, updates).map_err(|e| {
            tracing::warn!(
                "Rejected bulk update for tournament {}: {}",
                tournament_id,
                e
            );
            e
        })?;

        let teams = repo
            .bulk_update(tournament_id, &plan)
            .await
            .map_err(TeamError::from)?;

        tracing::info!(
            "Bulk updated {} teams in tournament {}",
            plan.len(),
            tournament_id
        );

        Ok(teams)
    }

    /// Deletes a team of a tournament
    /// Returns true if deleted, false if the team doesn't belong to the tournament
    pub async fn delete(&self, tournament_id: i32, team_id: i32) -> Result<bool, AppError> {
        let deleted = TeamRepository::new(self.db)
            .delete(tournament_id, team_id)
            .await?;

        if deleted {
            tracing::info!("Deleted team {} from tournament {}", team_id, tournament_id);
        }

        Ok(deleted)
    }
}

fn team_not_found() -> TeamError {
    TeamError::NotFound("Team not found in this tournament".to_string())
}
