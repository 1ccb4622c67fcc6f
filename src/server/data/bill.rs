use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::bill::{Bill, BillFilter, SaveBillParams};

pub struct BillRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a bill and its product lines in one transaction
    pub async fn create(&self, params: SaveBillParams) -> Result<Bill, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let mut bill = to_active_model(&params);
        bill.created_at = ActiveValue::Set(now);
        bill.updated_at = ActiveValue::Set(now);
        let bill = bill.insert(&txn).await?;

        let products = insert_products(&txn, bill.id, &params).await?;

        txn.commit().await?;

        Ok(Bill::from_entity(bill, products))
    }

    /// Replaces every field of a bill, including its product lines.
    ///
    /// # Returns
    /// - `Ok(Some(Bill))` - Updated bill
    /// - `Ok(None)` - No bill with this ID
    /// - `Err(DbErr)` - Database error; the bill is unchanged
    pub async fn update(&self, id: i32, params: SaveBillParams) -> Result<Option<Bill>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Bill::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut bill = to_active_model(&params);
        bill.id = ActiveValue::Unchanged(existing.id);
        bill.created_at = ActiveValue::Unchanged(existing.created_at);
        bill.updated_at = ActiveValue::Set(Utc::now());
        let bill = bill.update(&txn).await?;

        entity::prelude::BillProduct::delete_many()
            .filter(entity::bill_product::Column::BillId.eq(id))
            .exec(&txn)
            .await?;
        let products = insert_products(&txn, id, &params).await?;

        txn.commit().await?;

        Ok(Some(Bill::from_entity(bill, products)))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Bill>, DbErr> {
        let Some(bill) = entity::prelude::Bill::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let products = entity::prelude::BillProduct::find()
            .filter(entity::bill_product::Column::BillId.eq(id))
            .order_by_asc(entity::bill_product::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(Bill::from_entity(bill, products)))
    }

    /// Gets a page of bills matching the filter, newest first
    ///
    /// # Arguments
    /// - `filter`: Conditions every returned bill satisfies
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((bills, total))` - Bills on the page and the number of matching bills
    pub async fn get_paginated(
        &self,
        filter: &BillFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Bill>, u64), DbErr> {
        let paginator = filtered(filter).paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let bills = paginator.fetch_page(page).await?;

        Ok((self.with_products(bills).await?, total))
    }

    /// Gets every bill matching the filter, newest first
    pub async fn get_all(&self, filter: &BillFilter) -> Result<Vec<Bill>, DbErr> {
        let bills = filtered(filter).all(self.db).await?;

        self.with_products(bills).await
    }

    /// Deletes a bill and its product lines
    ///
    /// # Returns
    /// - `Ok(true)` - Bill was deleted
    /// - `Ok(false)` - No bill with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::BillProduct::delete_many()
            .filter(entity::bill_product::Column::BillId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Bill::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a bill number is taken, ignoring the bill `except_id`
    pub async fn bill_no_exists(
        &self,
        bill_no: &str,
        except_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Bill::find()
            .filter(entity::bill::Column::BillNo.eq(bill_no));
        if let Some(id) = except_id {
            query = query.filter(entity::bill::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    async fn with_products(&self, bills: Vec<entity::bill::Model>) -> Result<Vec<Bill>, DbErr> {
        if bills.is_empty() {
            return Ok(Vec::new());
        }

        let bill_ids: Vec<i32> = bills.iter().map(|b| b.id).collect();
        let mut products_map: HashMap<i32, Vec<entity::bill_product::Model>> = HashMap::new();
        for product in entity::prelude::BillProduct::find()
            .filter(entity::bill_product::Column::BillId.is_in(bill_ids))
            .order_by_asc(entity::bill_product::Column::Position)
            .all(self.db)
            .await?
        {
            products_map.entry(product.bill_id).or_default().push(product);
        }

        Ok(bills
            .into_iter()
            .map(|bill| {
                let products = products_map.remove(&bill.id).unwrap_or_default();
                Bill::from_entity(bill, products)
            })
            .collect())
    }
}

/// Builds the bill query for a filter. Buyer name matching uses `LIKE`, which
/// SQLite evaluates case-insensitively for ASCII.
fn filtered(filter: &BillFilter) -> Select<entity::bill::Entity> {
    let mut query = entity::prelude::Bill::find();

    if let Some(bill_date) = &filter.bill_date {
        query = query.filter(entity::bill::Column::BillDate.eq(bill_date.as_str()));
    }
    if let Some(buyer_name) = &filter.buyer_name {
        query = query.filter(entity::bill::Column::BuyerName.contains(buyer_name));
    }
    if let Some(min_amount) = filter.min_amount {
        query = query.filter(entity::bill::Column::TotalAmount.gte(min_amount));
    }
    if let Some(max_amount) = filter.max_amount {
        query = query.filter(entity::bill::Column::TotalAmount.lte(max_amount));
    }

    query
        .order_by_desc(entity::bill::Column::CreatedAt)
        .order_by_desc(entity::bill::Column::Id)
}

fn to_active_model(params: &SaveBillParams) -> entity::bill::ActiveModel {
    let (sgst, cgst, igst) = params.gst.columns();
    let details = &params.details;

    entity::bill::ActiveModel {
        buyer_name: ActiveValue::Set(params.buyer_name.clone()),
        bill_no: ActiveValue::Set(params.bill_no.clone()),
        bill_date: ActiveValue::Set(params.bill_date.clone()),
        sgst: ActiveValue::Set(sgst),
        cgst: ActiveValue::Set(cgst),
        igst: ActiveValue::Set(igst),
        total_amount: ActiveValue::Set(params.total_amount),
        gst_percentage: ActiveValue::Set(params.gst_percentage),
        status: ActiveValue::Set(params.status.as_str().to_string()),
        address: ActiveValue::Set(details.address.clone()),
        pincode: ActiveValue::Set(details.pincode.clone()),
        gstin: ActiveValue::Set(details.gstin.clone()),
        phones: ActiveValue::Set(serde_json::json!(details.phones)),
        challan_no: ActiveValue::Set(details.challan_no.clone()),
        order_no: ActiveValue::Set(details.order_no.clone()),
        place_of_supply: ActiveValue::Set(details.place_of_supply.clone()),
        hsn: ActiveValue::Set(details.hsn.clone()),
        transport_name: ActiveValue::Set(details.transport_name.clone()),
        freight: ActiveValue::Set(details.freight.clone()),
        lr_no: ActiveValue::Set(details.lr_no.clone()),
        lr_date: ActiveValue::Set(details.lr_date.clone()),
        station: ActiveValue::Set(details.station.clone()),
        account_no: ActiveValue::Set(details.account_no.clone()),
        ifsc_code: ActiveValue::Set(details.ifsc_code.clone()),
        branch: ActiveValue::Set(details.branch.clone()),
        remarks: ActiveValue::Set(details.remarks.clone()),
        agent_name: ActiveValue::Set(details.collection_agent.name.clone()),
        agent_address: ActiveValue::Set(details.collection_agent.address.clone()),
        agent_phones: ActiveValue::Set(serde_json::json!(details.collection_agent.phones)),
        ..Default::default()
    }
}

async fn insert_products<C: ConnectionTrait>(
    conn: &C,
    bill_id: i32,
    params: &SaveBillParams,
) -> Result<Vec<entity::bill_product::Model>, DbErr> {
    let mut products = Vec::with_capacity(params.products.len());
    for (position, product) in params.products.iter().enumerate() {
        let product = entity::bill_product::ActiveModel {
            bill_id: ActiveValue::Set(bill_id),
            position: ActiveValue::Set(position as i32),
            product_name: ActiveValue::Set(product.product_name.clone()),
            quantity: ActiveValue::Set(product.quantity),
            rate: ActiveValue::Set(product.rate),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        products.push(product);
    }

    Ok(products)
}
