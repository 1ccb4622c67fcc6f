use super::*;

/// Tests registering a batch of teams.
///
/// Verifies that every team is inserted with its counters and logo and that
/// the created teams are returned in input order.
///
/// Expected: Ok with all teams created
#[tokio::test]
async fn creates_all_teams() -> Result<(), DbErr> {
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

    let repo = TeamRepository::new(db);
    let created = repo
        .create_many(
            tournament.id,
            vec![
                RegisterTeamParams {
                    team_name: "Alpha".to_string(),
                    kills: 0,
                    points: 0,
                    eliminated: false,
                    logo: None,
                },
                RegisterTeamParams {
                    team_name: "Bravo".to_string(),
                    kills: 4,
                    points: 7,
                    eliminated: true,
                    logo: Some("https://example.com/bravo.png".to_string()),
                },
            ],
        )
        .await?;

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].team_name, "Alpha");
    assert_eq!(created[1].team_name, "Bravo");
    assert_eq!(created[1].total_points(), 11);
    assert!(created[1].eliminated);
    assert_eq!(
        created[1].logo.as_deref(),
        Some("https://example.com/bravo.png")
    );

    let stored = repo.get_by_tournament(tournament.id).await?;
    assert_eq!(stored, created);

    Ok(())
}
