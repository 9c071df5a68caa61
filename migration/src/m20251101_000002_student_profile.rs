use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_user::User;

static FK_STUDENT_PROFILE_USER_ID: &str = "fk-student_profiles-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentProfile::Id))
                    .col(integer_uniq(StudentProfile::UserId))
                    .col(string(StudentProfile::Name))
                    .col(string_null(StudentProfile::School))
                    .col(string_null(StudentProfile::Major))
                    .col(date_null(StudentProfile::GraduationDate))
                    .col(string_null(StudentProfile::ResumeUrl))
                    .col(string_null(StudentProfile::PortfolioLink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STUDENT_PROFILE_USER_ID)
                            .from(StudentProfile::Table, StudentProfile::UserId)
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
            .drop_table(Table::drop().table(StudentProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StudentProfile {
    #[sea_orm(iden = "student_profiles")]
    Table,
    Id,
    UserId,
    Name,
    School,
    Major,
    GraduationDate,
    ResumeUrl,
    PortfolioLink,
}
