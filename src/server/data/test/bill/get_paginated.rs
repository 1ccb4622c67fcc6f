use super::*;

/// Tests paging through bills.
///
/// Verifies that a page holds at most `per_page` bills and that the total
/// counts every bill.
///
/// Expected: Ok((2 bills, 3))
#[tokio::test]
async fn returns_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_bill(db).await?;
    }

    let repo = BillRepository::new(db);
    let (first_page, total) = repo.get_paginated(&BillFilter::default(), 0, 2).await?;
    let (second_page, _) = repo.get_paginated(&BillFilter::default(), 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    assert!(first_page.iter().all(|b| b.products.len() == 1));

    Ok(())
}

/// Tests filtering bills by buyer name, date and amount range.
///
/// Expected: Ok with only the matching bill
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::bill::BillFactory::new(db)
        .buyer_name("Sharma Electricals")
        .bill_date("10-04-2025")
        .total_amount(500.0)
        .build()
        .await?;
    factory::bill::BillFactory::new(db)
        .buyer_name("Sharma Electricals")
        .bill_date("10-04-2025")
        .total_amount(5000.0)
        .build()
        .await?;
    factory::bill::BillFactory::new(db)
        .buyer_name("Gupta Stores")
        .bill_date("10-04-2025")
        .total_amount(500.0)
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let filter = BillFilter {
        bill_date: Some("10-04-2025".to_string()),
        buyer_name: Some("sharma".to_string()),
        min_amount: Some(100.0),
        max_amount: Some(1000.0),
    };
    let (bills, total) = repo.get_paginated(&filter, 0, 50).await?;

    assert_eq!(total, 1);
    assert_eq!(bills[0].id, target.id);

    let all = repo.get_all(&filter).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
