use super::*;

/// Tests applying a batch of changes.
///
/// Verifies that every entry is written and that the full team set of the
/// tournament is returned afterwards.
///
/// Expected: Ok with all teams, changes applied
#[tokio::test]
async fn applies_all_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 3).await?;

    let repo = TeamRepository::new(db);
    let result = repo
        .bulk_update(
            tournament.id,
            &[
                TeamUpdateEntry {
                    team_id: teams[0].id,
                    changes: TeamChanges {
                        kills: Patch::Set(4),
                        eliminated: Patch::Set(true),
                        ..Default::default()
                    },
                },
                TeamUpdateEntry {
                    team_id: teams[1].id,
                    changes: TeamChanges {
                        team_name: Patch::Set("Renamed".to_string()),
                        ..Default::default()
                    },
                },
            ],
        )
        .await
        .map_err(|e| e.source)?;

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].kills, 4);
    assert!(result[0].eliminated);
    assert_eq!(result[1].team_name, "Renamed");
    assert_eq!(result[2].team_name, teams[2].team_name);

    Ok(())
}

/// Tests that the batch is rolled back when one team no longer exists.
///
/// Verifies that an entry targeting a missing team aborts the transaction and
/// the earlier entries of the batch are not persisted.
///
/// Expected: Err(BulkWriteError) naming the missing team, with no team changed
#[tokio::test]
async fn rolls_back_when_team_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 2).await?;

    let repo = TeamRepository::new(db);
    let result = repo
        .bulk_update(
            tournament.id,
            &[
                TeamUpdateEntry {
                    team_id: teams[0].id,
                    changes: TeamChanges {
                        points: Patch::Set(50),
                        ..Default::default()
                    },
                },
                TeamUpdateEntry {
                    team_id: 9999,
                    changes: TeamChanges {
                        points: Patch::Set(1),
                        ..Default::default()
                    },
                },
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(BulkWriteError {
            team_id: Some(9999),
            source: DbErr::RecordNotUpdated
        })
    ));

    let stored = entity::prelude::Team::find_by_id(teams[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.points, 0);

    Ok(())
}
