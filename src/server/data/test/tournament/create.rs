use super::*;

/// Tests creating a new tournament.
///
/// Verifies that the repository stores the name, dates and team count and
/// assigns a creation timestamp.
///
/// Expected: Ok with tournament created
#[tokio::test]
async fn creates_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_date = Utc::now();
    let end_date = start_date + Duration::days(3);
    let before = Utc::now();

    let repo = TournamentRepository::new(db);
    let tournament = repo
        .create(CreateTournamentParams {
            tournament_name: "Spring Cup".to_string(),
            start_date,
            end_date,
            number_of_teams: 8,
        })
        .await?;

    assert_eq!(tournament.tournament_name, "Spring Cup");
    assert_eq!(tournament.start_date, start_date);
    assert_eq!(tournament.end_date, end_date);
    assert_eq!(tournament.number_of_teams, 8);
    assert!(tournament.created_at >= before);

    let stored = entity::prelude::Tournament::find_by_id(tournament.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
