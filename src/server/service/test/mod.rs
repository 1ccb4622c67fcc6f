use crate::server::error::{bill::BillError, team::TeamError, AppError};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod team;
