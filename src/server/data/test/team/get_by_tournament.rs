use super::*;

/// Tests listing the teams of a tournament.
///
/// Verifies that only teams of the requested tournament are returned, in
/// registration order.
///
/// Expected: Ok with the tournament's teams ordered by ID
#[tokio::test]
async fn returns_teams_of_tournament_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 3).await?;
    let (_other, _other_teams) = factory::helpers::create_tournament_with_teams(db, 2).await?;

    let repo = TeamRepository::new(db);
    let result = repo.get_by_tournament(tournament.id).await?;

    assert_eq!(result.len(), 3);
    let ids: Vec<i32> = result.iter().map(|t| t.id).collect();
    let expected: Vec<i32> = teams.iter().map(|t| t.id).collect();
    assert_eq!(ids, expected);
    assert!(result.iter().all(|t| t.tournament_id == tournament.id));

    Ok(())
}

/// Tests finding a team that belongs to another tournament.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_find_team_of_other_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let (_other, other_teams) = factory::helpers::create_tournament_with_teams(db, 1).await?;

    let repo = TeamRepository::new(db);
    let result = repo
        .get_by_id_in_tournament(tournament.id, other_teams[0].id)
        .await?;

    assert!(result.is_none());

    Ok(())
}
