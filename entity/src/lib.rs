//! SeaORM entities for the tourneyboard schema.

pub mod prelude;

pub mod bill;
pub mod bill_product;
pub mod team;
pub mod tournament;
