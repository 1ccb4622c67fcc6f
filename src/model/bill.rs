use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_name: String,
    pub quantity: f64,
    pub rate: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct GstDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sgst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub igst: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CollectionAgentDto {
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
}

/// Request body for creating or replacing a bill.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveBillDto {
    pub buyer_name: Option<String>,
    pub bill_no: Option<String>,
    /// `DD-MM-YYYY`
    pub bill_date: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductDto>,
    pub gst: Option<GstDto>,
    pub total_amount: Option<f64>,
    pub gst_percentage: Option<i32>,
    /// `Paid` or `Unpaid`, defaults to `Unpaid`
    pub status: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub gstin: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
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
    pub collection_agent: Option<CollectionAgentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
    pub id: i32,
    pub buyer_name: String,
    pub bill_no: String,
    pub bill_date: String,
    pub products: Vec<ProductDto>,
    pub gst: GstDto,
    pub total_amount: f64,
    pub gst_percentage: i32,
    pub status: String,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub gstin: Option<String>,
    pub phones: Vec<String>,
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
    pub collection_agent: CollectionAgentDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BillResponseDto {
    pub message: String,
    pub bill: BillDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedBillsDto {
    pub bills: Vec<BillDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}
