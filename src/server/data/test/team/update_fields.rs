use super::*;

/// Tests that a partial update only writes the fields it sets.
///
/// Expected: Ok(Some(team)) with kills changed and everything else unchanged
#[tokio::test]
async fn writes_only_set_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let team = factory::team::TeamFactory::new(db, tournament.id)
        .team_name("Alpha")
        .kills(1)
        .points(9)
        .logo(Some("https://example.com/a.png".to_string()))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update_fields(
            tournament.id,
            team.id,
            &TeamChanges {
                kills: Patch::Set(5),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.kills, 5);
    assert_eq!(updated.points, 9);
    assert_eq!(updated.team_name, "Alpha");
    assert_eq!(updated.logo.as_deref(), Some("https://example.com/a.png"));

    Ok(())
}

/// Tests clearing a team's logo.
///
/// Expected: Ok(Some(team)) with logo set to None
#[tokio::test]
async fn clears_logo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let team = factory::team::TeamFactory::new(db, tournament.id)
        .logo(Some("https://example.com/a.png".to_string()))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update_fields(
            tournament.id,
            team.id,
            &TeamChanges {
                logo: Patch::Set(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.logo, None);

    Ok(())
}

/// Tests updating a team through the wrong tournament.
///
/// Expected: Ok(None) with the team unchanged
#[tokio::test]
async fn returns_none_for_team_of_other_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db).await?;
    let other = factory::create_tournament(db).await?;
    let team = factory::team::TeamFactory::new(db, other.id)
        .kills(2)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let result = repo
        .update_fields(
            tournament.id,
            team.id,
            &TeamChanges {
                kills: Patch::Set(8),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let stored = entity::prelude::Team::find_by_id(team.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.kills, 2);

    Ok(())
}
