use super::*;

/// Tests listing tournaments.
///
/// Verifies that every stored tournament is returned.
///
/// Expected: Ok with both tournaments
#[tokio::test]
async fn returns_all_tournaments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tournament(db).await?;
    let second = factory::create_tournament(db).await?;

    let repo = TournamentRepository::new(db);
    let tournaments = repo.get_all().await?;

    assert_eq!(tournaments.len(), 2);
    assert!(tournaments.iter().any(|t| t.id == first.id));
    assert!(tournaments.iter().any(|t| t.id == second.id));

    Ok(())
}

/// Tests listing tournaments on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_none_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    let tournaments = repo.get_all().await?;

    assert!(tournaments.is_empty());

    Ok(())
}
