use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub buyer_name: String,
    #[sea_orm(unique)]
    pub bill_no: String,
    pub bill_date: String,
    pub sgst: Option<f64>,
    pub cgst: Option<f64>,
    pub igst: Option<f64>,
    pub total_amount: f64,
    pub gst_percentage: i32,
    pub status: String,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub gstin: Option<String>,
    pub phones: Json,
    pub challan_no: Option<String>,
    pub order_no: Option<String>,
    pub place_of_supply: Option<String>,
    pub hsn: Option<String>,
    pub transport_name: Option<String>,
    pub freight: Option<String>,
    pub lr_no: Option<String>,
    pub lr_date: Option<String>,
    pub station: Option<String>,
    pub account_no: Option<String>,
    pub ifsc_code: Option<String>,
    pub branch: Option<String>,
    pub remarks: Option<String>,
    pub agent_name: Option<String>,
    pub agent_address: Option<String>,
    pub agent_phones: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bill_product::Entity")]
    BillProduct,
}

impl Related<super::bill_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
