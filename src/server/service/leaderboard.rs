//! Tournament leaderboard ranking.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::team::TeamRepository,
    error::{team::TeamError, AppError},
    model::team::{RankedTeam, Team},
};

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the points table of a tournament.
    ///
    /// # Returns
    /// - `Ok(Vec<RankedTeam>)` - Ranked teams, position 1 first
    /// - `Err(AppError::TeamErr(NotFound))` - Tournament has no teams
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn points_table(&self, tournament_id: i32) -> Result<Vec<RankedTeam>, AppError> {
        let teams = TeamRepository::new(self.db)
            .get_by_tournament(tournament_id)
            .await?;

        Ok(rank(teams)?)
    }
}

/// Ranks the teams of one tournament.
///
/// Teams sharing a name are collapsed into the record with the highest
/// `kills + points`; on a tie the later record wins. The survivors are sorted by
/// total points, then kills, both descending. Teams still tied keep the order in
/// which their names first appeared, and every team gets its own position.
///
/// # Returns
/// - `Ok(Vec<RankedTeam>)` - One entry per distinct name, positions starting at 1
/// - `Err(TeamError::NotFound)` - `teams` is empty
pub fn rank(teams: Vec<Team>) -> Result<Vec<RankedTeam>, TeamError> {
    if teams.is_empty() {
        return Err(TeamError::NotFound(
            "No teams found for this tournament".to_string(),
        ));
    }

    let mut best: Vec<Team> = Vec::new();
    let mut slot_by_name: HashMap<String, usize> = HashMap::new();

    for team in teams {
        match slot_by_name.get(&team.team_name) {
            Some(&slot) => {
                if team.total_points() >= best[slot].total_points() {
                    best[slot] = team;
                }
            }
            None => {
                slot_by_name.insert(team.team_name.clone(), best.len());
                best.push(team);
            }
        }
    }

    // Stable, so exact ties keep first-appearance order
    best.sort_by(|a, b| {
        b.total_points()
            .cmp(&a.total_points())
            .then_with(|| b.kills.cmp(&a.kills))
    });

    Ok(best
        .into_iter()
        .zip(1u32..)
        .map(|(team, position)| RankedTeam {
            total_points: team.total_points(),
            id: team.id,
            team_name: team.team_name,
            kills: team.kills,
            points: team.points,
            eliminated: team.eliminated,
            logo: team.logo,
            position,
        })
        .collect())
}
