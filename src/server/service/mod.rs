//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ranking, team roster rules and bill numbering
//! - **Orchestration**: Loading current state and validating before any write
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod bill;
pub mod leaderboard;
pub mod team;
pub mod tournament;

#[cfg(test)]
mod test;
