use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn startup<'a>(&'a self) -> StartupFixtures<'a> {
        StartupFixtures { context: self }
    }
}

pub struct StartupFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> StartupFixtures<'a> {
    pub async fn insert_startup(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<entity::startup::Model, TestError> {
        Ok(
            entity::prelude::Startup::insert(entity::startup::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(Some(format!("{} builds things", name))),
                website: ActiveValue::Set(Some("https://example.com".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
