use super::*;

/// Tests deleting a tournament with registered teams.
///
/// Verifies that deleting a tournament with 3 teams removes the tournament and
/// all 3 teams.
///
/// Expected: Ok(true) with no teams left for the tournament
#[tokio::test]
async fn deletes_tournament_and_its_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 3).await?;
    assert_eq!(teams.len(), 3);

    let repo = TournamentRepository::new(db);
    let deleted = repo.delete_with_teams(tournament.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Tournament::find_by_id(tournament.id)
        .one(db)
        .await?
        .is_none());

    let remaining = entity::prelude::Team::find()
        .filter(entity::team::Column::TournamentId.eq(tournament.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests that deleting one tournament leaves other tournaments' teams intact.
///
/// Expected: Ok with the other tournament's teams still present
#[tokio::test]
async fn keeps_teams_of_other_tournaments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) = factory::helpers::create_tournament_with_teams(db, 2).await?;
    let (other, _other_teams) = factory::helpers::create_tournament_with_teams(db, 2).await?;

    let repo = TournamentRepository::new(db);
    repo.delete_with_teams(tournament.id).await?;

    let remaining = entity::prelude::Team::find()
        .filter(entity::team::Column::TournamentId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 2);

    Ok(())
}

/// Tests deleting a tournament that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    let deleted = repo.delete_with_teams(42).await?;

    assert!(!deleted);

    Ok(())
}
