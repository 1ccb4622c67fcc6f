use super::*;

/// Tests retrieving a tournament by ID.
///
/// Expected: Ok(Some(tournament))
#[tokio::test]
async fn returns_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tournament::TournamentFactory::new(db)
        .tournament_name("Winter Open")
        .number_of_teams(12)
        .build()
        .await?;

    let repo = TournamentRepository::new(db);
    let tournament = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(tournament.tournament_name, "Winter Open");
    assert_eq!(tournament.number_of_teams, 12);

    Ok(())
}

/// Tests retrieving a tournament that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    let tournament = repo.get_by_id(999).await?;

    assert!(tournament.is_none());

    Ok(())
}
