use super::*;

/// Tests replacing a bill.
///
/// Verifies that every field is overwritten, product lines are replaced and
/// the creation timestamp is kept.
///
/// Expected: Ok(Some(bill)) with new values
#[tokio::test]
async fn replaces_bill_and_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let original = repo.create(save_params("INV-200")).await?;

    let mut params = save_params("INV-201");
    params.products = vec![Product {
        product_name: "Router".to_string(),
        quantity: 3.0,
        rate: 900.0,
    }];
    params.gst = Gst::Integrated { igst: 486.0 };
    params.status = BillStatus::Paid;

    let updated = repo.update(original.id, params).await?.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.bill_no, "INV-201");
    assert_eq!(updated.gst, Gst::Integrated { igst: 486.0 });
    assert_eq!(updated.status, BillStatus::Paid);
    assert_eq!(updated.products.len(), 1);
    assert_eq!(updated.products[0].product_name, "Router");
    assert_eq!(updated.created_at, original.created_at);

    let product_count = entity::prelude::BillProduct::find()
        .filter(entity::bill_product::Column::BillId.eq(original.id))
        .count(db)
        .await?;
    assert_eq!(product_count, 1);

    Ok(())
}

/// Tests replacing a bill that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let result = repo.update(404, save_params("INV-404")).await?;

    assert!(result.is_none());

    Ok(())
}
