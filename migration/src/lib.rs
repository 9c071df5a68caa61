pub use sea_orm_migration::prelude::*;

mod m20251101_000001_user;
mod m20251101_000002_student_profile;
mod m20251101_000003_startup;
mod m20251101_000004_internship;
mod m20251101_000005_application;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_user::Migration),
            Box::new(m20251101_000002_student_profile::Migration),
            Box::new(m20251101_000003_startup::Migration),
            Box::new(m20251101_000004_internship::Migration),
            Box::new(m20251101_000005_application::Migration),
        ]
    }
}
