use super::*;

/// Tests detecting a taken bill number.
///
/// Expected: Ok(true) for the stored number, Ok(false) otherwise
#[tokio::test]
async fn detects_existing_bill_no() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bill::BillFactory::new(db)
        .bill_no("INV-777")
        .build()
        .await?;

    let repo = BillRepository::new(db);

    assert!(repo.bill_no_exists("INV-777", None).await?);
    assert!(!repo.bill_no_exists("INV-778", None).await?);

    Ok(())
}

/// Tests that a bill's own number does not count as taken when excluded.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bill = factory::bill::BillFactory::new(db)
        .bill_no("INV-888")
        .build()
        .await?;

    let repo = BillRepository::new(db);

    assert!(!repo.bill_no_exists("INV-888", Some(bill.id)).await?);

    Ok(())
}
