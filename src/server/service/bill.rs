use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::bill::BillRepository,
    error::{bill::BillError, AppError},
    model::bill::{Bill, BillFilter, PaginatedBills, SaveBillParams},
};

/// Page size used when the request does not specify one.
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

/// Largest page size served; larger requests are clamped.
pub const MAX_PAGE_LIMIT: u64 = 1000;

pub struct BillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new bill
    ///
    /// # Returns
    /// - `Err(AppError::BillErr(DuplicateBillNo))` - Bill number already used
    pub async fn create(&self, params: SaveBillParams) -> Result<Bill, AppError> {
        let repo = BillRepository::new(self.db);

        if repo.bill_no_exists(&params.bill_no, None).await? {
            return Err(BillError::DuplicateBillNo.into());
        }

        let bill = repo.create(params).await.map_err(duplicate_bill_no)?;

        tracing::info!("Created bill {} ({})", bill.id, bill.bill_no);

        Ok(bill)
    }

    /// Replaces a bill
    /// Returns None if the bill doesn't exist
    pub async fn update(&self, id: i32, params: SaveBillParams) -> Result<Option<Bill>, AppError> {
        let repo = BillRepository::new(self.db);

        if repo.bill_no_exists(&params.bill_no, Some(id)).await? {
            return Err(BillError::DuplicateBillNo.into());
        }

        let bill = repo.update(id, params).await.map_err(duplicate_bill_no)?;

        if let Some(ref bill) = bill {
            tracing::info!("Updated bill {} ({})", bill.id, bill.bill_no);
        }

        Ok(bill)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Bill>, AppError> {
        Ok(BillRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets bills matching a filter
    ///
    /// # Arguments
    /// - `filter`: Conditions every returned bill satisfies
    /// - `page`: Page number (1-indexed)
    /// - `limit`: Number of bills per page
    /// - `all`: Return every matching bill on a single page
    ///
    /// # Returns
    /// - `Ok(PaginatedBills)` - Requested page, `limit` clamped to `MAX_PAGE_LIMIT`
    /// - `Err(AppError::BadRequest)` - Zero page or limit, or a page past any storable offset
    pub async fn list(
        &self,
        filter: BillFilter,
        page: u64,
        limit: u64,
        all: bool,
    ) -> Result<PaginatedBills, AppError> {
        let repo = BillRepository::new(self.db);

        if all {
            let bills = repo.get_all(&filter).await?;
            let total = bills.len() as u64;
            return Ok(PaginatedBills {
                bills,
                total,
                page: 1,
                limit: total,
                pages: 1,
            });
        }

        if page == 0 || limit == 0 {
            return Err(AppError::BadRequest(
                "page and limit must be positive integers".to_string(),
            ));
        }

        let limit = limit.min(MAX_PAGE_LIMIT);
        let in_range = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| i64::try_from(offset).is_ok());
        if !in_range {
            return Err(AppError::BadRequest(format!("page {} is out of range", page)));
        }

        let (bills, total) = repo.get_paginated(&filter, page - 1, limit).await?;
        let pages = total.div_ceil(limit).max(1);

        Ok(PaginatedBills {
            bills,
            total,
            page,
            limit,
            pages,
        })
    }

    /// Deletes a bill
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = BillRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted bill {}", id);
        }

        Ok(deleted)
    }
}

/// Maps a unique-index violation on insert or update to `DuplicateBillNo`.
///
/// Covers a bill number taken between the existence check and the write.
fn duplicate_bill_no(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => BillError::DuplicateBillNo.into(),
        _ => err.into(),
    }
}
