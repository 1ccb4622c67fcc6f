use super::*;
use crate::server::{
    model::team::{Patch, RegisterTeamParams, TeamChanges, TeamUpdateEntry},
    service::team::TeamService,
};

fn register(name: &str) -> RegisterTeamParams {
    RegisterTeamParams {
        team_name: name.to_string(),
        kills: 0,
        points: 0,
        eliminated: false,
        logo: None,
    }
}

fn rename(team_id: i32, name: &str) -> TeamUpdateEntry {
    TeamUpdateEntry {
        team_id,
        changes: TeamChanges {
            team_name: Patch::Set(name.to_string()),
            ..Default::default()
        },
    }
}

async fn stored_names(db: &sea_orm::DatabaseConnection) -> Result<Vec<String>, DbErr> {
    Ok(entity::prelude::Team::find()
        .all(db)
        .await?
        .into_iter()
        .map(|t| t.team_name)
        .collect())
}

/// Tests registering a full roster.
///
/// Expected: Ok with all teams created
#[tokio::test]
async fn registers_full_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::TournamentFactory::new(db)
        .number_of_teams(2)
        .build()
        .await?;

    let created = TeamService::new(db)
        .register(tournament.id, vec![register("Alpha"), register("Bravo")])
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(stored_names(db).await?, vec!["Alpha", "Bravo"]);

    Ok(())
}

/// Tests registering the wrong number of teams.
///
/// Expected: Err(TeamError::InvalidInput) naming both counts, nothing written
#[tokio::test]
async fn rejects_roster_of_wrong_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::TournamentFactory::new(db)
        .number_of_teams(3)
        .build()
        .await?;

    let result = TeamService::new(db)
        .register(tournament.id, vec![register("Alpha")])
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::InvalidInput(ref msg))) if msg.contains('3') && msg.contains('1')
    ));
    assert!(stored_names(db).await?.is_empty());

    Ok(())
}

/// Tests registering into a tournament that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_roster_for_missing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db)
        .register(77, vec![register("Alpha")])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing a tournament without teams.
///
/// Expected: Err(TeamError::NotFound)
#[tokio::test]
async fn list_without_teams_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;

    let result = TeamService::new(db).list(tournament.id).await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::NotFound(_)))
    ));

    Ok(())
}

/// Tests single updates that change nothing.
///
/// Verifies that `{}` is rejected while a rename to the current name is accepted,
/// and that neither alters the stored team.
///
/// Expected: Err(TeamError::EmptyUpdate), then Ok with the team unchanged
#[tokio::test]
async fn single_update_without_effect_leaves_team_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let team = factory::team::TeamFactory::new(db, tournament.id)
        .team_name("Alpha")
        .kills(2)
        .build()
        .await?;

    let service = TeamService::new(db);

    let empty = service
        .update(tournament.id, team.id, TeamChanges::default())
        .await;
    assert!(matches!(
        empty,
        Err(AppError::TeamErr(TeamError::EmptyUpdate(id))) if id == team.id
    ));

    let same_name = service
        .update(
            tournament.id,
            team.id,
            TeamChanges {
                team_name: Patch::Set("Alpha".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same_name.team_name, "Alpha");
    assert_eq!(same_name.kills, 2);

    let stored = entity::prelude::Team::find_by_id(team.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, team);

    Ok(())
}

/// Tests a single update of a team from another tournament.
///
/// Expected: Err(TeamError::NotFound)
#[tokio::test]
async fn single_update_of_foreign_team_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let other = factory::create_tournament(db).await?;
    let team = factory::create_team(db, other.id).await?;

    let result = TeamService::new(db)
        .update(
            tournament.id,
            team.id,
            TeamChanges {
                kills: Patch::Set(1),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::NotFound(_)))
    ));

    Ok(())
}

/// Tests that applying the same bulk batch twice yields the same state.
///
/// Expected: Ok with identical team sets after both runs
#[tokio::test]
async fn bulk_update_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 3).await?;

    let batch = vec![
        rename(teams[0].id, "Alpha"),
        TeamUpdateEntry {
            team_id: teams[1].id,
            changes: TeamChanges {
                kills: Patch::Set(7),
                points: Patch::Set(3),
                ..Default::default()
            },
        },
    ];

    let service = TeamService::new(db);
    let first = service
        .bulk_update(tournament.id, batch.clone())
        .await
        .unwrap();
    let second = service.bulk_update(tournament.id, batch).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].team_name, "Alpha");
    assert_eq!(first[1].total_points(), 10);

    Ok(())
}

/// Tests that a batch renaming two teams to the same name writes nothing.
///
/// Verifies that a valid entry earlier in the batch is not applied either.
///
/// Expected: Err(TeamError::ConflictWithinBatch) with zero writes
#[tokio::test]
async fn bulk_conflict_within_batch_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 3).await?;

    let result = TeamService::new(db)
        .bulk_update(
            tournament.id,
            vec![
                TeamUpdateEntry {
                    team_id: teams[2].id,
                    changes: TeamChanges {
                        kills: Patch::Set(9),
                        ..Default::default()
                    },
                },
                rename(teams[0].id, "Alpha"),
                rename(teams[1].id, "Alpha"),
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::ConflictWithinBatch(ref names))) if names == &vec!["Alpha".to_string()]
    ));

    let stored = entity::prelude::Team::find().all(db).await?;
    assert_eq!(stored, teams);

    Ok(())
}

/// Tests renaming a team to the name of a team that keeps its name.
///
/// Expected: Err(TeamError::ConflictWithExisting) with zero writes
#[tokio::test]
async fn bulk_conflict_with_existing_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 3).await?;

    let result = TeamService::new(db)
        .bulk_update(tournament.id, vec![rename(teams[0].id, "Team 3")])
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::ConflictWithExisting(_)))
    ));
    assert_eq!(entity::prelude::Team::find().all(db).await?, teams);

    Ok(())
}

/// Tests swapping the names of two teams in one batch.
///
/// Expected: Ok with the names exchanged
#[tokio::test]
async fn bulk_swap_is_allowed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 2).await?;

    let result = TeamService::new(db)
        .bulk_update(
            tournament.id,
            vec![rename(teams[0].id, "Team 2"), rename(teams[1].id, "Team 1")],
        )
        .await
        .unwrap();

    assert_eq!(result[0].team_name, "Team 2");
    assert_eq!(result[1].team_name, "Team 1");

    Ok(())
}

/// Tests a bulk batch referencing teams outside the tournament.
///
/// Expected: Err(TeamError::InvalidReference) listing every unknown ID
#[tokio::test]
async fn bulk_unknown_ids_are_listed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 1).await?;
    let (_other, other_teams) = factory::helpers::create_tournament_with_teams(db, 1).await?;

    let result = TeamService::new(db)
        .bulk_update(
            tournament.id,
            vec![
                rename(teams[0].id, "Alpha"),
                rename(other_teams[0].id, "Bravo"),
                rename(5000, "Charlie"),
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TeamErr(TeamError::InvalidReference(ref ids))) if ids == &vec![other_teams[0].id, 5000]
    ));

    Ok(())
}

/// Tests a batch that passes validation but is refused by the store.
///
/// A trigger rejects the write of the second team, so the first entry must be
/// rolled back and the failing team reported.
///
/// Expected: Err(TeamError::StoreFailure) naming the team and store message
#[tokio::test]
async fn bulk_store_failure_names_team_and_rolls_back() -> Result<(), DbErr> {
    use sea_orm::ConnectionTrait;

    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 2).await?;

    db.execute_unprepared(
        "CREATE TRIGGER reject_locked_points BEFORE UPDATE ON team \
         WHEN NEW.points = 666 BEGIN SELECT RAISE(ABORT, 'points locked'); END",
    )
    .await?;

    let result = TeamService::new(db)
        .bulk_update(
            tournament.id,
            vec![
                rename(teams[0].id, "Alpha"),
                TeamUpdateEntry {
                    team_id: teams[1].id,
                    changes: TeamChanges {
                        points: Patch::Set(666),
                        ..Default::default()
                    },
                },
            ],
        )
        .await;

    match result {
        Err(AppError::TeamErr(TeamError::StoreFailure { team_id, message })) => {
            assert_eq!(team_id, Some(teams[1].id));
            assert!(message.contains("points locked"));
        }
        other => panic!("expected a store failure, got {:?}", other),
    }

    assert_eq!(stored_names(db).await?, vec!["Team 1", "Team 2"]);

    Ok(())
}
