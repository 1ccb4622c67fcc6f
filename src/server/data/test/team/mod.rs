use crate::server::{
    data::team::{BulkWriteError, TeamRepository},
    model::team::{Patch, RegisterTeamParams, TeamChanges, TeamUpdateEntry},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod bulk_update;
mod create_many;
mod delete;
mod get_by_tournament;
mod update_fields;
