use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_student_profile::StudentProfile, m20251101_000003_startup::Startup,
    m20251101_000004_internship::Internship,
};

static IDX_APPLICATION_STUDENT_INTERNSHIP: &str = "idx-applications-student_id-internship_id";
static IDX_APPLICATION_STARTUP_ID: &str = "idx-applications-startup_id";
static FK_APPLICATION_STUDENT_ID: &str = "fk-applications-student_id";
static FK_APPLICATION_INTERNSHIP_ID: &str = "fk-applications-internship_id";
static FK_APPLICATION_STARTUP_ID: &str = "fk-applications-startup_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(integer(Application::StudentId))
                    .col(integer(Application::InternshipId))
                    .col(integer(Application::StartupId))
                    .col(string(Application::Status).default("Applied"))
                    .col(text_null(Application::Notes))
                    .col(timestamp(Application::AppliedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPLICATION_STUDENT_ID)
                            .from(Application::Table, Application::StudentId)
                            .to(StudentProfile::Table, StudentProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPLICATION_INTERNSHIP_ID)
                            .from(Application::Table, Application::InternshipId)
                            .to(Internship::Table, Internship::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APPLICATION_STARTUP_ID)
                            .from(Application::Table, Application::StartupId)
                            .to(Startup::Table, Startup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One application per student and internship
        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_STUDENT_INTERNSHIP)
                    .table(Application::Table)
                    .col(Application::StudentId)
                    .col(Application::InternshipId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_STARTUP_ID)
                    .table(Application::Table)
                    .col(Application::StartupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_STARTUP_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_STUDENT_INTERNSHIP)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Application {
    #[sea_orm(iden = "applications")]
    Table,
    Id,
    StudentId,
    InternshipId,
    StartupId,
    Status,
    Notes,
    AppliedAt,
}
