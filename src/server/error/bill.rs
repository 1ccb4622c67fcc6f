use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum BillError {
    /// One of the mandatory bill fields is absent or empty.
    #[error("All fields are required, including at least one product and valid GST")]
    MissingFields,

    /// GST must be either the SGST + CGST pair or IGST alone.
    #[error("Invalid GST structure: Provide either SGST and CGST or IGST")]
    InvalidGst,

    #[error("Invalid GST percentage: Must be 5, 12, 18, or 28")]
    InvalidGstPercentage,

    /// A field is present but fails its format or range rule.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Wire name of the offending field
        field: String,
        /// Rule the value violated
        reason: String,
    },

    /// Another bill already uses this bill number.
    #[error("Bill number already exists")]
    DuplicateBillNo,
}

/// Converts bill errors into 400 Bad Request responses.
impl IntoResponse for BillError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::new(self.to_string())),
        )
            .into_response()
    }
}
