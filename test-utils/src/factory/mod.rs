//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let tournament = factory::create_tournament(&db).await?;
//!     let team = factory::team::TeamFactory::new(&db, tournament.id)
//!         .team_name("Alpha")
//!         .kills(3)
//!         .build()
//!         .await?;
//!
//!     let (tournament, teams) = factory::helpers::create_tournament_with_teams(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `tournament` - Create tournament entities
//! - `team` - Create team entities
//! - `bill` - Create bill entities with product lines
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod bill;
pub mod helpers;
pub mod team;
pub mod tournament;

pub use bill::create_bill;
pub use team::create_team;
pub use tournament::create_tournament;
