use super::*;

/// Tests creating a bill with product lines.
///
/// Verifies that the bill and its products are stored and returned with the
/// products in input order.
///
/// Expected: Ok with bill and 2 products created
#[tokio::test]
async fn creates_bill_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let bill = repo.create(save_params("INV-100")).await?;

    assert_eq!(bill.bill_no, "INV-100");
    assert_eq!(bill.products.len(), 2);
    assert_eq!(bill.products[0].product_name, "Cable");
    assert_eq!(bill.products[1].product_name, "Switch");
    assert_eq!(bill.gst, Gst::Split { sgst: 27.0, cgst: 27.0 });
    assert_eq!(bill.details.phones, vec!["9845012345".to_string()]);

    let product_count = entity::prelude::BillProduct::find()
        .filter(entity::bill_product::Column::BillId.eq(bill.id))
        .count(db)
        .await?;
    assert_eq!(product_count, 2);

    let fetched = repo.get_by_id(bill.id).await?.unwrap();
    assert_eq!(fetched, bill);

    Ok(())
}
