//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! tournaments, teams and bills. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and business
//! logic layer. Multi-row writes (team batches, cascading deletes, bills with product
//! lines) each run inside a single transaction.

pub mod bill;
pub mod team;
pub mod tournament;

#[cfg(test)]
mod test;
