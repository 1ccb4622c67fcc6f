//! Pre-write checks for team registration and updates.
//!
//! Everything here is pure: callers load the current teams of the tournament,
//! run the checks, and only write once they pass.

use std::collections::{HashMap, HashSet};

use crate::server::{
    error::team::TeamError,
    model::team::{RegisterTeamParams, Team, TeamChanges, TeamUpdateEntry},
};

/// Validates a bulk update batch against the current teams of its tournament.
///
/// Checks run in this order, and the first failing check is reported:
/// 1. the batch is non-empty
/// 2. every team ID belongs to the tournament (all unknown IDs are listed)
/// 3. no two entries propose the same new name
/// 4. no proposed name is held by a team that keeps its name in this batch
/// 5. every entry carries at least one valid field
///
/// A rename to the team's current name counts as a valid field but takes no part
/// in the name checks and is not written, so re-applying a batch succeeds.
///
/// # Returns
/// - `Ok(Vec<TeamUpdateEntry>)` - Entries ready to write, renames to the current name removed
/// - `Err(TeamError)` - The first violated rule
pub fn plan_bulk_update(
    current: &[Team],
    updates: Vec<TeamUpdateEntry>,
) -> Result<Vec<TeamUpdateEntry>, TeamError> {
    if updates.is_empty() {
        return Err(TeamError::InvalidInput(
            "Request body must be a non-empty array of team updates".to_string(),
        ));
    }

    let names: HashMap<i32, &str> = current
        .iter()
        .map(|team| (team.id, team.team_name.as_str()))
        .collect();

    let mut unknown: Vec<i32> = Vec::new();
    for update in &updates {
        if !names.contains_key(&update.team_id) && !unknown.contains(&update.team_id) {
            unknown.push(update.team_id);
        }
    }
    if !unknown.is_empty() {
        return Err(TeamError::InvalidReference(unknown));
    }

    let first_empty = updates
        .iter()
        .find(|update| update.changes.is_empty())
        .map(|update| update.team_id);

    let updates: Vec<TeamUpdateEntry> = updates
        .into_iter()
        .map(|update| {
            let current_name = names.get(&update.team_id).copied().unwrap_or_default();
            TeamUpdateEntry {
                changes: update.changes.without_noop_rename(current_name),
                team_id: update.team_id,
            }
        })
        .collect();

    let renames: Vec<(i32, &str)> = updates
        .iter()
        .filter_map(|update| update.changes.new_name().map(|name| (update.team_id, name)))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut within_batch: Vec<String> = Vec::new();
    for (_, name) in &renames {
        if !seen.insert(*name) && !within_batch.iter().any(|n| n == name) {
            within_batch.push(name.to_string());
        }
    }
    if !within_batch.is_empty() {
        return Err(TeamError::ConflictWithinBatch(within_batch));
    }

    let renamed_away: HashSet<i32> = renames.iter().map(|(id, _)| *id).collect();
    let mut with_existing: Vec<String> = Vec::new();
    for (team_id, name) in &renames {
        let held = current.iter().any(|team| {
            team.id != *team_id && team.team_name == *name && !renamed_away.contains(&team.id)
        });
        if held && !with_existing.iter().any(|n| n == name) {
            with_existing.push(name.to_string());
        }
    }
    if !with_existing.is_empty() {
        return Err(TeamError::ConflictWithExisting(with_existing));
    }

    if let Some(team_id) = first_empty {
        return Err(TeamError::EmptyUpdate(team_id));
    }

    Ok(updates)
}

/// Validates changes to a single team against the other teams of its tournament.
///
/// # Returns
/// - `Ok(TeamChanges)` - Changes to write, a rename to the current name removed
/// - `Err(TeamError::EmptyUpdate)` - No valid field was given
/// - `Err(TeamError::ConflictWithExisting)` - Another team already has the new name
pub fn check_single_update(
    current: &[Team],
    target: &Team,
    changes: TeamChanges,
) -> Result<TeamChanges, TeamError> {
    if changes.is_empty() {
        return Err(TeamError::EmptyUpdate(target.id));
    }

    let changes = changes.without_noop_rename(&target.team_name);

    if let Some(name) = changes.new_name() {
        if current
            .iter()
            .any(|team| team.id != target.id && team.team_name == name)
        {
            return Err(TeamError::ConflictWithExisting(vec![name.to_string()]));
        }
    }

    Ok(changes)
}

/// Validates the names of a registration batch.
///
/// # Returns
/// - `Ok(())` - Every name is unique within the batch and unused in the tournament
/// - `Err(TeamError::ConflictWithinBatch)` - Names repeated in the batch
/// - `Err(TeamError::ConflictWithExisting)` - Names already registered
pub fn check_registration(
    current: &[Team],
    teams: &[RegisterTeamParams],
) -> Result<(), TeamError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut within_batch: Vec<String> = Vec::new();
    for team in teams {
        let name = team.team_name.as_str();
        if !seen.insert(name) && !within_batch.iter().any(|n| n == name) {
            within_batch.push(name.to_string());
        }
    }
    if !within_batch.is_empty() {
        return Err(TeamError::ConflictWithinBatch(within_batch));
    }

    let existing: Vec<String> = teams
        .iter()
        .filter(|team| current.iter().any(|t| t.team_name == team.team_name))
        .map(|team| team.team_name.clone())
        .collect();
    if !existing.is_empty() {
        return Err(TeamError::ConflictWithExisting(existing));
    }

    Ok(())
}
