//! Domain models and validation for billing records.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    model::bill::{
        BillDto, CollectionAgentDto, GstDto, PaginatedBillsDto, ProductDto, SaveBillDto,
    },
    server::{error::bill::BillError, util::parse::is_day_month_year},
};

const GST_PERCENTAGES: [i32; 4] = [5, 12, 18, 28];

static SAFE_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^[^<>"'`]*$"#).unwrap());
static PINCODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").unwrap());
static GSTIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap()
});
static IFSC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+]?[\d\s-]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    Paid,
    Unpaid,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Paid" => Some(Self::Paid),
            "Unpaid" => Some(Self::Unpaid),
            _ => None,
        }
    }
}

/// Tax applied to a bill: either state + central GST, or integrated GST.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gst {
    Split { sgst: f64, cgst: f64 },
    Integrated { igst: f64 },
}

impl Gst {
    fn from_dto(dto: &GstDto) -> Result<Self, BillError> {
        let gst = match (dto.sgst, dto.cgst, dto.igst) {
            (Some(sgst), Some(cgst), None) => Self::Split { sgst, cgst },
            (None, None, Some(igst)) => Self::Integrated { igst },
            _ => return Err(BillError::InvalidGst),
        };

        let negative = match gst {
            Self::Split { sgst, cgst } => sgst < 0.0 || cgst < 0.0,
            Self::Integrated { igst } => igst < 0.0,
        };
        if negative {
            return Err(invalid("gst", "cannot be negative"));
        }

        Ok(gst)
    }

    /// Column values as `(sgst, cgst, igst)`.
    pub fn columns(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        match *self {
            Self::Split { sgst, cgst } => (Some(sgst), Some(cgst), None),
            Self::Integrated { igst } => (None, None, Some(igst)),
        }
    }

    fn into_dto(self) -> GstDto {
        let (sgst, cgst, igst) = self.columns();
        GstDto { sgst, cgst, igst }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_name: String,
    pub quantity: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionAgent {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phones: Vec<String>,
}

/// Optional shipping, banking and contact details of a bill.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillDetails {
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
    pub collection_agent: CollectionAgent,
}

/// Validated content of a bill, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveBillParams {
    pub buyer_name: String,
    pub bill_no: String,
    /// `DD-MM-YYYY`
    pub bill_date: String,
    pub products: Vec<Product>,
    pub gst: Gst,
    pub total_amount: f64,
    pub gst_percentage: i32,
    pub status: BillStatus,
    pub details: BillDetails,
}

impl SaveBillParams {
    /// Validates a bill request body.
    ///
    /// # Returns
    /// - `Ok(SaveBillParams)` - Every rule satisfied
    /// - `Err(BillError)` - First rule violated, in the order: required fields, GST
    ///   structure, GST percentage, field formats
    pub fn from_dto(dto: SaveBillDto) -> Result<Self, BillError> {
        let buyer_name = non_empty(dto.buyer_name);
        let bill_no = non_empty(dto.bill_no);
        let bill_date = non_empty(dto.bill_date);

        let (
            Some(buyer_name),
            Some(bill_no),
            Some(bill_date),
            Some(gst),
            Some(total_amount),
            Some(gst_percentage),
        ) = (
            buyer_name,
            bill_no,
            bill_date,
            dto.gst,
            dto.total_amount.filter(|amount| *amount != 0.0),
            dto.gst_percentage,
        )
        else {
            return Err(BillError::MissingFields);
        };
        if dto.products.is_empty() {
            return Err(BillError::MissingFields);
        }

        let gst = Gst::from_dto(&gst)?;

        if !GST_PERCENTAGES.contains(&gst_percentage) {
            return Err(BillError::InvalidGstPercentage);
        }

        safe_text("buyerName", &buyer_name)?;
        safe_text("billNo", &bill_no)?;
        if !is_day_month_year(&bill_date) {
            return Err(invalid("billDate", "must be in DD-MM-YYYY format"));
        }
        if total_amount < 0.0 {
            return Err(invalid("totalAmount", "cannot be negative"));
        }

        let products = dto
            .products
            .into_iter()
            .map(Product::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        let status = match dto.status.as_deref() {
            None => BillStatus::Unpaid,
            Some(status) => {
                BillStatus::parse(status).ok_or_else(|| invalid("status", "must be Paid or Unpaid"))?
            }
        };

        let agent = dto.collection_agent.unwrap_or_default();
        let details = BillDetails {
            address: checked_text("address", dto.address)?,
            pincode: matching("pincode", dto.pincode, &PINCODE, "must be a 6-digit number")?,
            gstin: matching("gstin", dto.gstin, &GSTIN, "invalid GSTIN format")?,
            phones: phones("phones", dto.phones)?,
            challan_no: checked_text("challanNo", dto.challan_no)?,
            order_no: checked_text("orderNo", dto.order_no)?,
            place_of_supply: checked_text("placeOfSupply", dto.place_of_supply)?,
            hsn: checked_text("hsn", dto.hsn)?,
            transport_name: checked_text("transportName", dto.transport_name)?,
            freight: checked_text("freight", dto.freight)?,
            lr_no: checked_text("lrNo", dto.lr_no)?,
            lr_date: match non_empty(dto.lr_date) {
                Some(date) if !is_day_month_year(&date) => {
                    return Err(invalid("lrDate", "must be in DD-MM-YYYY format"))
                }
                date => date,
            },
            station: checked_text("station", dto.station)?,
            account_no: checked_text("accountNo", dto.account_no)?,
            ifsc_code: matching("ifscCode", dto.ifsc_code, &IFSC, "invalid IFSC code format")?,
            branch: checked_text("branch", dto.branch)?,
            remarks: checked_text("remarks", dto.remarks)?,
            collection_agent: CollectionAgent {
                name: checked_text("collectionAgent.name", agent.name)?,
                address: checked_text("collectionAgent.address", agent.address)?,
                phones: phones("collectionAgent.phones", agent.phones)?,
            },
        };

        Ok(Self {
            buyer_name,
            bill_no,
            bill_date,
            products,
            gst,
            total_amount,
            gst_percentage,
            status,
            details,
        })
    }
}

impl Product {
    fn from_dto(dto: ProductDto) -> Result<Self, BillError> {
        let product_name = dto.product_name.trim().to_string();
        if product_name.is_empty() {
            return Err(invalid("productName", "is required"));
        }
        safe_text("productName", &product_name)?;
        if dto.quantity < 0.0 {
            return Err(invalid("quantity", "cannot be negative"));
        }
        if dto.rate < 0.0 {
            return Err(invalid("rate", "cannot be negative"));
        }

        Ok(Self {
            product_name,
            quantity: dto.quantity,
            rate: dto.rate,
        })
    }

    pub fn from_entity(entity: entity::bill_product::Model) -> Self {
        Self {
            product_name: entity.product_name,
            quantity: entity.quantity,
            rate: entity.rate,
        }
    }

    fn into_dto(self) -> ProductDto {
        ProductDto {
            product_name: self.product_name,
            quantity: self.quantity,
            rate: self.rate,
        }
    }
}

fn invalid(field: &str, reason: &str) -> BillError {
    BillError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn safe_text(field: &str, value: &str) -> Result<(), BillError> {
    if SAFE_TEXT.is_match(value) {
        Ok(())
    } else {
        Err(invalid(field, "contains invalid characters"))
    }
}

fn checked_text(field: &str, value: Option<String>) -> Result<Option<String>, BillError> {
    let value = non_empty(value);
    if let Some(ref text) = value {
        safe_text(field, text)?;
    }
    Ok(value)
}

fn matching(
    field: &str,
    value: Option<String>,
    pattern: &Regex,
    reason: &str,
) -> Result<Option<String>, BillError> {
    let value = non_empty(value);
    match value {
        Some(ref text) if !pattern.is_match(text) => Err(invalid(field, reason)),
        _ => Ok(value),
    }
}

fn phones(field: &str, values: Vec<String>) -> Result<Vec<String>, BillError> {
    values
        .into_iter()
        .map(|phone| {
            let phone = phone.trim().to_string();
            if PHONE.is_match(&phone) {
                Ok(phone)
            } else {
                Err(invalid(field, "invalid phone number format"))
            }
        })
        .collect()
}

/// A stored bill with its product lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i32,
    pub buyer_name: String,
    pub bill_no: String,
    pub bill_date: String,
    pub products: Vec<Product>,
    pub gst: Gst,
    pub total_amount: f64,
    pub gst_percentage: i32,
    pub status: BillStatus,
    pub details: BillDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    /// Converts a bill entity and its product lines (already ordered) to a domain model.
    pub fn from_entity(
        entity: entity::bill::Model,
        products: Vec<entity::bill_product::Model>,
    ) -> Self {
        let gst = match (entity.sgst, entity.cgst, entity.igst) {
            (_, _, Some(igst)) => Gst::Integrated { igst },
            (sgst, cgst, None) => Gst::Split {
                sgst: sgst.unwrap_or(0.0),
                cgst: cgst.unwrap_or(0.0),
            },
        };

        Self {
            id: entity.id,
            buyer_name: entity.buyer_name,
            bill_no: entity.bill_no,
            bill_date: entity.bill_date,
            products: products.into_iter().map(Product::from_entity).collect(),
            gst,
            total_amount: entity.total_amount,
            gst_percentage: entity.gst_percentage,
            status: BillStatus::parse(&entity.status).unwrap_or(BillStatus::Unpaid),
            details: BillDetails {
                address: entity.address,
                pincode: entity.pincode,
                gstin: entity.gstin,
                phones: serde_json::from_value(entity.phones).unwrap_or_default(),
                challan_no: entity.challan_no,
                order_no: entity.order_no,
                place_of_supply: entity.place_of_supply,
                hsn: entity.hsn,
                transport_name: entity.transport_name,
                freight: entity.freight,
                lr_no: entity.lr_no,
                lr_date: entity.lr_date,
                station: entity.station,
                account_no: entity.account_no,
                ifsc_code: entity.ifsc_code,
                branch: entity.branch,
                remarks: entity.remarks,
                collection_agent: CollectionAgent {
                    name: entity.agent_name,
                    address: entity.agent_address,
                    phones: serde_json::from_value(entity.agent_phones).unwrap_or_default(),
                },
            },
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BillDto {
        let details = self.details;
        BillDto {
            id: self.id,
            buyer_name: self.buyer_name,
            bill_no: self.bill_no,
            bill_date: self.bill_date,
            products: self.products.into_iter().map(Product::into_dto).collect(),
            gst: self.gst.into_dto(),
            total_amount: self.total_amount,
            gst_percentage: self.gst_percentage,
            status: self.status.as_str().to_string(),
            address: details.address,
            pincode: details.pincode,
            gstin: details.gstin,
            phones: details.phones,
            challan_no: details.challan_no,
            order_no: details.order_no,
            place_of_supply: details.place_of_supply,
            hsn: details.hsn,
            transport_name: details.transport_name,
            freight: details.freight,
            lr_no: details.lr_no,
            lr_date: details.lr_date,
            station: details.station,
            account_no: details.account_no,
            ifsc_code: details.ifsc_code,
            branch: details.branch,
            remarks: details.remarks,
            collection_agent: CollectionAgentDto {
                name: details.collection_agent.name,
                address: details.collection_agent.address,
                phones: details.collection_agent.phones,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Filters and paging for listing bills.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillFilter {
    pub bill_date: Option<String>,
    /// Case-insensitive substring of the buyer name.
    pub buyer_name: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

/// A page of bills. When paging is disabled `page` is 1 and `limit` equals `total`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBills {
    pub bills: Vec<Bill>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

impl PaginatedBills {
    pub fn into_dto(self) -> PaginatedBillsDto {
        PaginatedBillsDto {
            bills: self.bills.into_iter().map(Bill::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            pages: self.pages,
        }
    }
}
