use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn profile<'a>(&'a self) -> StudentProfileFixtures<'a> {
        StudentProfileFixtures { context: self }
    }
}

pub struct StudentProfileFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> StudentProfileFixtures<'a> {
    /// Inserts a profile with school and major populated
    pub async fn insert_student_profile(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<entity::student_profile::Model, TestError> {
        Ok(entity::prelude::StudentProfile::insert(
            entity::student_profile::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                school: ActiveValue::Set(Some("MIT".to_string())),
                major: ActiveValue::Set(Some("Computer Science".to_string())),
                graduation_date: ActiveValue::Set(None),
                resume_url: ActiveValue::Set(None),
                portfolio_link: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
