//! Bill factory for creating test bill entities with product lines.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bills.
///
/// Creates a bill with split GST (SGST + CGST) and a single product line unless
/// customized.
pub struct BillFactory<'a> {
    db: &'a DatabaseConnection,
    buyer_name: String,
    bill_no: String,
    bill_date: String,
    total_amount: f64,
    status: String,
    products: Vec<(String, f64, f64)>,
}

impl<'a> BillFactory<'a> {
    /// Creates a new BillFactory with default values.
    ///
    /// Defaults:
    /// - buyer_name: `"Buyer {id}"`
    /// - bill_no: `"INV-{id}"`
    /// - bill_date: `"01-03-2025"`
    /// - total_amount: `1180.0`
    /// - status: `"Unpaid"`
    /// - products: one line `("Widget", 10.0, 100.0)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            buyer_name: format!("Buyer {}", id),
            bill_no: format!("INV-{}", id),
            bill_date: "01-03-2025".to_string(),
            total_amount: 1180.0,
            status: "Unpaid".to_string(),
            products: vec![("Widget".to_string(), 10.0, 100.0)],
        }
    }

    pub fn buyer_name(mut self, buyer_name: impl Into<String>) -> Self {
        self.buyer_name = buyer_name.into();
        self
    }

    pub fn bill_no(mut self, bill_no: impl Into<String>) -> Self {
        self.bill_no = bill_no.into();
        self
    }

    pub fn bill_date(mut self, bill_date: impl Into<String>) -> Self {
        self.bill_date = bill_date.into();
        self
    }

    pub fn total_amount(mut self, total_amount: f64) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the bill and its product lines.
    ///
    /// # Returns
    /// - `Ok(entity::bill::Model)` - Created bill entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bill::Model, DbErr> {
        let now = Utc::now();
        let bill = entity::bill::ActiveModel {
            id: ActiveValue::NotSet,
            buyer_name: ActiveValue::Set(self.buyer_name),
            bill_no: ActiveValue::Set(self.bill_no),
            bill_date: ActiveValue::Set(self.bill_date),
            sgst: ActiveValue::Set(Some(9.0)),
            cgst: ActiveValue::Set(Some(9.0)),
            igst: ActiveValue::Set(None),
            total_amount: ActiveValue::Set(self.total_amount),
            gst_percentage: ActiveValue::Set(18),
            status: ActiveValue::Set(self.status),
            address: ActiveValue::Set(None),
            pincode: ActiveValue::Set(None),
            gstin: ActiveValue::Set(None),
            phones: ActiveValue::Set(serde_json::json!([])),
            challan_no: ActiveValue::Set(None),
            order_no: ActiveValue::Set(None),
            place_of_supply: ActiveValue::Set(None),
            hsn: ActiveValue::Set(None),
            transport_name: ActiveValue::Set(None),
            freight: ActiveValue::Set(None),
            lr_no: ActiveValue::Set(None),
            lr_date: ActiveValue::Set(None),
            station: ActiveValue::Set(None),
            account_no: ActiveValue::Set(None),
            ifsc_code: ActiveValue::Set(None),
            branch: ActiveValue::Set(None),
            remarks: ActiveValue::Set(None),
            agent_name: ActiveValue::Set(None),
            agent_address: ActiveValue::Set(None),
            agent_phones: ActiveValue::Set(serde_json::json!([])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for (position, (product_name, quantity, rate)) in self.products.into_iter().enumerate() {
            entity::bill_product::ActiveModel {
                id: ActiveValue::NotSet,
                bill_id: ActiveValue::Set(bill.id),
                position: ActiveValue::Set(position as i32),
                product_name: ActiveValue::Set(product_name),
                quantity: ActiveValue::Set(quantity),
                rate: ActiveValue::Set(rate),
            }
            .insert(self.db)
            .await?;
        }

        Ok(bill)
    }
}

/// Creates a bill with default values.
pub async fn create_bill(db: &DatabaseConnection) -> Result<entity::bill::Model, DbErr> {
    BillFactory::new(db).build().await
}
