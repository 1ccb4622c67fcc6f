use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000003_create_bill_table::Bill;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(BillProduct::Id))
                    .col(integer(BillProduct::BillId))
                    .col(integer(BillProduct::Position))
                    .col(string(BillProduct::ProductName))
                    .col(double(BillProduct::Quantity))
                    .col(double(BillProduct::Rate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_product_bill_id")
                            .from(BillProduct::Table, BillProduct::BillId)
                            .to(Bill::Table, Bill::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillProduct {
    Table,
    Id,
    BillId,
    Position,
    ProductName,
    Quantity,
    Rate,
}
