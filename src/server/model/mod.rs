//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! tournaments, teams and bills together with the validated parameters of operations
//! on them. Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary.

pub mod bill;
pub mod team;
pub mod tournament;
