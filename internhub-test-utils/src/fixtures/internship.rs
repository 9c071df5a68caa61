use chrono::Utc;
use entity::{internship::RequiredSkills, sea_orm_active_enums::InternshipStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn internship<'a>(&'a self) -> InternshipFixtures<'a> {
        InternshipFixtures { context: self }
    }
}

pub struct InternshipFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> InternshipFixtures<'a> {
    pub async fn insert_internship(
        &self,
        startup_id: i32,
        title: &str,
        required_skills: &[&str],
        status: InternshipStatus,
    ) -> Result<entity::internship::Model, TestError> {
        Ok(
            entity::prelude::Internship::insert(entity::internship::ActiveModel {
                startup_id: ActiveValue::Set(startup_id),
                title: ActiveValue::Set(title.to_string()),
                role: ActiveValue::Set(None),
                location: ActiveValue::Set(Some("Remote".to_string())),
                stipend: ActiveValue::Set(Some("$2000/month".to_string())),
                description: ActiveValue::Set(None),
                required_skills: ActiveValue::Set(RequiredSkills(
                    required_skills.iter().map(|s| s.to_string()).collect(),
                )),
                status: ActiveValue::Set(status),
                posted_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
