use crate::server::{
    data::tournament::TournamentRepository, model::tournament::CreateTournamentParams,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_with_teams;
mod get_all;
mod get_by_id;
