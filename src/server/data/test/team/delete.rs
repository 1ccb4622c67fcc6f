use super::*;

/// Tests deleting a team.
///
/// Expected: Ok(true) with the team removed
#[tokio::test]
async fn deletes_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) = factory::helpers::create_tournament_with_teams(db, 2).await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.delete(tournament.id, teams[0].id).await?;

    assert!(deleted);
    assert!(entity::prelude::Team::find_by_id(teams[0].id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Team::find_by_id(teams[1].id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a team through the wrong tournament.
///
/// Expected: Ok(false) with the team kept
#[tokio::test]
async fn keeps_team_of_other_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let other = factory::create_tournament(db).await?;
    let team = factory::create_team(db, other.id).await?;

    let repo = TeamRepository::new(db);
    let deleted = repo.delete(tournament.id, team.id).await?;

    assert!(!deleted);
    assert!(entity::prelude::Team::find_by_id(team.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
