use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_tournament_table::Tournament;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::TournamentId))
                    .col(string(Team::TeamName))
                    .col(integer(Team::Kills).default(0))
                    .col(integer(Team::Points).default(0))
                    .col(boolean(Team::Eliminated).default(false))
                    .col(string_null(Team::Logo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_tournament_id")
                            .from(Team::Table, Team::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique; names are checked by the service before each write.
        manager
            .create_index(
                Index::create()
                    .name("idx_team_tournament_id_team_name")
                    .table(Team::Table)
                    .col(Team::TournamentId)
                    .col(Team::TeamName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    TournamentId,
    TeamName,
    Kills,
    Points,
    Eliminated,
    Logo,
}
