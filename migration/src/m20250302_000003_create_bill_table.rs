use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(string(Bill::BuyerName))
                    .col(string_uniq(Bill::BillNo))
                    .col(string(Bill::BillDate))
                    .col(double_null(Bill::Sgst))
                    .col(double_null(Bill::Cgst))
                    .col(double_null(Bill::Igst))
                    .col(double(Bill::TotalAmount))
                    .col(integer(Bill::GstPercentage))
                    .col(string(Bill::Status).default("Unpaid"))
                    .col(string_null(Bill::Address))
                    .col(string_null(Bill::Pincode))
                    .col(string_null(Bill::Gstin))
                    .col(json(Bill::Phones))
                    .col(string_null(Bill::ChallanNo))
                    .col(string_null(Bill::OrderNo))
                    .col(string_null(Bill::PlaceOfSupply))
                    .col(string_null(Bill::Hsn))
                    .col(string_null(Bill::TransportName))
                    .col(string_null(Bill::Freight))
                    .col(string_null(Bill::LrNo))
                    .col(string_null(Bill::LrDate))
                    .col(string_null(Bill::Station))
                    .col(string_null(Bill::AccountNo))
                    .col(string_null(Bill::IfscCode))
                    .col(string_null(Bill::Branch))
                    .col(text_null(Bill::Remarks))
                    .col(string_null(Bill::AgentName))
                    .col(string_null(Bill::AgentAddress))
                    .col(json(Bill::AgentPhones))
                    .col(
                        timestamp(Bill::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Bill::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    BuyerName,
    BillNo,
    BillDate,
    Sgst,
    Cgst,
    Igst,
    TotalAmount,
    GstPercentage,
    Status,
    Address,
    Pincode,
    Gstin,
    Phones,
    ChallanNo,
    OrderNo,
    PlaceOfSupply,
    Hsn,
    TransportName,
    Freight,
    LrNo,
    LrDate,
    Station,
    AccountNo,
    IfscCode,
    Branch,
    Remarks,
    AgentName,
    AgentAddress,
    AgentPhones,
    CreatedAt,
    UpdatedAt,
}
