pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_tournament_table;
mod m20250301_000002_create_team_table;
mod m20250302_000003_create_bill_table;
mod m20250302_000004_create_bill_product_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_tournament_table::Migration),
            Box::new(m20250301_000002_create_team_table::Migration),
            Box::new(m20250302_000003_create_bill_table::Migration),
            Box::new(m20250302_000004_create_bill_product_table::Migration),
        ]
    }
}
