use entity::sea_orm_active_enums::{InternshipStatus, UserType};

use crate::{error::TestError, TestContext};

/// One student and one startup with a single active internship
pub struct Marketplace {
    pub student_user: entity::user::Model,
    pub student: entity::student_profile::Model,
    pub startup_user: entity::user::Model,
    pub startup: entity::startup::Model,
    pub internship: entity::internship::Model,
}

impl TestContext {
    pub fn marketplace<'a>(&'a self) -> MarketplaceFixtures<'a> {
        MarketplaceFixtures { context: self }
    }
}

pub struct MarketplaceFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> MarketplaceFixtures<'a> {
    pub async fn insert_marketplace(&self) -> Result<Marketplace, TestError> {
        let student_user = self
            .context
            .user()
            .insert_user("student@example.com", UserType::Student)
            .await?;
        let student = self
            .context
            .profile()
            .insert_student_profile(student_user.id, "Ada Lovelace")
            .await?;

        let startup_user = self
            .context
            .user()
            .insert_user("founder@example.com", UserType::Startup)
            .await?;
        let startup = self
            .context
            .startup()
            .insert_startup(startup_user.id, "Acme")
            .await?;

        let internship = self
            .context
            .internship()
            .insert_internship(
                startup.id,
                "Backend Intern",
                &["Rust", "SQL"],
                InternshipStatus::Active,
            )
            .await?;

        Ok(Marketplace {
            student_user,
            student,
            startup_user,
            startup,
            internship,
        })
    }
}
