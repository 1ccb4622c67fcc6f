use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        bill::{BillDto, BillResponseDto, PaginatedBillsDto, SaveBillDto},
    },
    server::{
        error::AppError,
        model::bill::{BillFilter, SaveBillParams},
        service::bill::{BillService, DEFAULT_PAGE_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping bill endpoints in OpenAPI documentation
pub static BILL_TAG: &str = "bill";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BillListParams {
    /// Page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Bills per page (default: 50)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Exact bill date, `DD-MM-YYYY`
    pub bill_date: Option<String>,
    /// Case-insensitive part of the buyer name
    pub buyer_name: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    /// Return every matching bill on one page
    #[serde(default)]
    pub all: bool,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

/// Create a new bill.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Bill data including products, GST and optional details
///
/// # Returns
/// - `201 Created` - Successfully created bill
/// - `400 Bad Request` - Validation failed or bill number already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bill/billdata",
    tag = BILL_TAG,
    request_body = SaveBillDto,
    responses(
        (status = 201, description = "Successfully created bill", body = BillResponseDto),
        (status = 400, description = "Invalid bill data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bill(
    State(state): State<AppState>,
    Json(payload): Json<SaveBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SaveBillParams::from_dto(payload)?;

    let bill = BillService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(BillResponseDto {
            message: "Bill saved successfully".to_string(),
            bill: bill.into_dto(),
        }),
    ))
}

/// Get bills, optionally filtered.
///
/// # Returns
/// - `200 OK` - Page of bills with paging metadata
/// - `400 Bad Request` - Zero page or limit
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bill/billdata",
    tag = BILL_TAG,
    params(BillListParams),
    responses(
        (status = 200, description = "Successfully retrieved bills", body = PaginatedBillsDto),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills(
    State(state): State<AppState>,
    Query(params): Query<BillListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BillFilter {
        bill_date: params.bill_date.filter(|d| !d.is_empty()),
        buyer_name: params.buyer_name.filter(|n| !n.is_empty()),
        min_amount: params.min_amount,
        max_amount: params.max_amount,
    };

    let bills = BillService::new(&state.db)
        .list(filter, params.page, params.limit, params.all)
        .await?;

    Ok((StatusCode::OK, Json(bills.into_dto())))
}

/// Get a bill by ID.
#[utoipa::path(
    get,
    path = "/api/bill/billdata/{bill_id}",
    tag = BILL_TAG,
    params(
        ("bill_id" = i32, Path, description = "Bill ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bill", body = BillDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let bill = BillService::new(&state.db)
        .get_by_id(bill_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// Replace a bill.
///
/// Every field is overwritten; the same validation as creation applies.
///
/// # Returns
/// - `200 OK` - Bill after the update
/// - `400 Bad Request` - Validation failed or bill number used by another bill
/// - `404 Not Found` - Bill does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bill/billdata/{bill_id}",
    tag = BILL_TAG,
    params(
        ("bill_id" = i32, Path, description = "Bill ID")
    ),
    request_body = SaveBillDto,
    responses(
        (status = 200, description = "Successfully updated bill", body = BillResponseDto),
        (status = 400, description = "Invalid bill data", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i32>,
    Json(payload): Json<SaveBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SaveBillParams::from_dto(payload)?;

    let bill = BillService::new(&state.db)
        .update(bill_id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(BillResponseDto {
            message: "Bill updated successfully".to_string(),
            bill: bill.into_dto(),
        }),
    ))
}

/// Delete a bill.
#[utoipa::path(
    delete,
    path = "/api/bill/billdata/{bill_id}",
    tag = BILL_TAG,
    params(
        ("bill_id" = i32, Path, description = "Bill ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted bill"),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = BillService::new(&state.db).delete(bill_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Bill not found".to_string()))
    }
}
