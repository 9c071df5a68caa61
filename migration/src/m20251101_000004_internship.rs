use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_startup::Startup;

static IDX_INTERNSHIP_STARTUP_ID: &str = "idx-internships-startup_id";
static FK_INTERNSHIP_STARTUP_ID: &str = "fk-internships-startup_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Internship::Table)
                    .if_not_exists()
                    .col(pk_auto(Internship::Id))
                    .col(integer(Internship::StartupId))
                    .col(string(Internship::Title))
                    .col(string_null(Internship::Role))
                    .col(string_null(Internship::Location))
                    .col(string_null(Internship::Stipend))
                    .col(text_null(Internship::Description))
                    .col(json(Internship::RequiredSkills))
                    .col(string(Internship::Status).default("Active"))
                    .col(timestamp(Internship::PostedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INTERNSHIP_STARTUP_ID)
                            .from(Internship::Table, Internship::StartupId)
                            .to(Startup::Table, Startup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INTERNSHIP_STARTUP_ID)
                    .table(Internship::Table)
                    .col(Internship::StartupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INTERNSHIP_STARTUP_ID)
                    .table(Internship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Internship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Internship {
    #[sea_orm(iden = "internships")]
    Table,
    Id,
    StartupId,
    Title,
    Role,
    Location,
    Stipend,
    Description,
    RequiredSkills,
    Status,
    PostedAt,
}
