//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a tournament with `count` teams registered to it.
///
/// The tournament's `number_of_teams` matches `count`. Teams are named
/// `"Team 1"` through `"Team {count}"` with zeroed counters.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of teams to create
///
/// # Returns
/// - `Ok((tournament, teams))` - Created tournament and its teams in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_tournament_with_teams(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::tournament::Model, Vec<entity::team::Model>), DbErr> {
    let tournament = crate::factory::tournament::TournamentFactory::new(db)
        .number_of_teams(count)
        .build()
        .await?;

    let mut teams = Vec::with_capacity(count.max(0) as usize);
    for n in 1..=count {
        let team = crate::factory::team::TeamFactory::new(db, tournament.id)
            .team_name(format!("Team {}", n))
            .build()
            .await?;
        teams.push(team);
    }

    Ok((tournament, teams))
}
