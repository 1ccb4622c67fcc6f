use super::*;

/// Tests deleting a bill.
///
/// Verifies that the bill and its product lines are removed.
///
/// Expected: Ok(true) with no products left
#[tokio::test]
async fn deletes_bill_and_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bill = factory::create_bill(db).await?;

    let repo = BillRepository::new(db);
    let deleted = repo.delete(bill.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(bill.id).await?.is_none());
    let product_count = entity::prelude::BillProduct::find()
        .filter(entity::bill_product::Column::BillId.eq(bill.id))
        .count(db)
        .await?;
    assert_eq!(product_count, 0);

    Ok(())
}

/// Tests deleting a bill that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);

    assert!(!repo.delete(12).await?);

    Ok(())
}
