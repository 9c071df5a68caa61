use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn application<'a>(&'a self) -> ApplicationFixtures<'a> {
        ApplicationFixtures { context: self }
    }
}

pub struct ApplicationFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ApplicationFixtures<'a> {
    /// Inserts an application in the `Applied` status without notes
    pub async fn insert_application(
        &self,
        student_id: i32,
        internship_id: i32,
        startup_id: i32,
    ) -> Result<entity::application::Model, TestError> {
        Ok(
            entity::prelude::Application::insert(entity::application::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                internship_id: ActiveValue::Set(internship_id),
                startup_id: ActiveValue::Set(startup_id),
                status: ActiveValue::Set(ApplicationStatus::Applied),
                notes: ActiveValue::Set(None),
                applied_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
