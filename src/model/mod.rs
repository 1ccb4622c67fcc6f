//! Wire-level DTOs shared by the HTTP layer.
//!
//! JSON field names are camelCase to match the public API.

pub mod api;
pub mod bill;
pub mod team;
pub mod tournament;
