use crate::server::{
    data::bill::BillRepository,
    model::bill::{BillDetails, BillFilter, BillStatus, Gst, Product, SaveBillParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod bill_no_exists;
mod create;
mod delete;
mod get_paginated;
mod update;

fn save_params(bill_no: &str) -> SaveBillParams {
    SaveBillParams {
        buyer_name: "Acme Traders".to_string(),
        bill_no: bill_no.to_string(),
        bill_date: "15-03-2025".to_string(),
        products: vec![
            Product {
                product_name: "Cable".to_string(),
                quantity: 2.0,
                rate: 50.0,
            },
            Product {
                product_name: "Switch".to_string(),
                quantity: 1.0,
                rate: 200.0,
            },
        ],
        gst: Gst::Split {
            sgst: 27.0,
            cgst: 27.0,
        },
        total_amount: 354.0,
        gst_percentage: 18,
        status: BillStatus::Unpaid,
        details: BillDetails {
            phones: vec!["9845012345".to_string()],
            ..Default::default()
        },
    }
}
