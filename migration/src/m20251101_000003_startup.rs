use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_user::User;

static FK_STARTUP_USER_ID: &str = "fk-startups-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Startup::Table)
                    .if_not_exists()
                    .col(pk_auto(Startup::Id))
                    .col(integer_uniq(Startup::UserId))
                    .col(string(Startup::Name))
                    .col(text_null(Startup::Description))
                    .col(string_null(Startup::Website))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STARTUP_USER_ID)
                            .from(Startup::Table, Startup::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Startup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Startup {
    #[sea_orm(iden = "startups")]
    Table,
    Id,
    UserId,
    Name,
    Description,
    Website,
}
