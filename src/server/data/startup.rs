use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    FromQueryResult, IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use crate::server::data::{contains_ignore_case, non_empty};

/// Startup joined with the email of its owning user
#[derive(Debug, Clone, FromQueryResult)]
pub struct StartupRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewStartup {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct StartupPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub website: Option<Option<String>>,
}

impl StartupPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.website.is_none()
    }

    fn apply(self, startup: &mut entity::startup::ActiveModel) {
        if let Some(name) = self.name {
            startup.name = ActiveValue::Set(name);
        }
        if let Some(description) = self.description {
            startup.description = ActiveValue::Set(description);
        }
        if let Some(website) = self.website {
            startup.website = ActiveValue::Set(website);
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct StartupQuery {
    pub name: Option<String>,
    pub website: Option<String>,
}

pub struct StartupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StartupRepository<'a, C> {
    /// Creates a new instance of [`StartupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn select_with_email() -> Select<entity::startup::Entity> {
        entity::prelude::Startup::find()
            .column_as(entity::user::Column::Email, "user_email")
            .join(JoinType::LeftJoin, entity::startup::Relation::User.def())
    }

    pub async fn create(&self, startup: NewStartup) -> Result<entity::startup::Model, DbErr> {
        let startup = entity::startup::ActiveModel {
            user_id: ActiveValue::Set(startup.user_id),
            name: ActiveValue::Set(startup.name),
            description: ActiveValue::Set(startup.description),
            website: ActiveValue::Set(startup.website),
            ..Default::default()
        };

        startup.insert(self.db).await
    }

    /// Lists startups matching `query`, newest first
    pub async fn get_many(&self, query: &StartupQuery) -> Result<Vec<StartupRow>, DbErr> {
        let mut select = Self::select_with_email();

        if let Some(name) = non_empty(&query.name) {
            select = select.filter(contains_ignore_case(entity::startup::Column::Name, name));
        }
        if let Some(website) = non_empty(&query.website) {
            select = select.filter(contains_ignore_case(
                entity::startup::Column::Website,
                website,
            ));
        }

        select
            .order_by_desc(entity::startup::Column::Id)
            .into_model::<StartupRow>()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, startup_id: i32) -> Result<Option<StartupRow>, DbErr> {
        Self::select_with_email()
            .filter(entity::startup::Column::Id.eq(startup_id))
            .into_model::<StartupRow>()
            .one(self.db)
            .await
    }

    /// Gets the startups owned by a user, newest first
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<entity::startup::Model>, DbErr> {
        entity::prelude::Startup::find()
            .filter(entity::startup::Column::UserId.eq(user_id))
            .order_by_desc(entity::startup::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the supplied fields of `patch`
    ///
    /// # Returns
    /// - `None` if no startup has the provided ID
    pub async fn update(
        &self,
        startup_id: i32,
        patch: StartupPatch,
    ) -> Result<Option<entity::startup::Model>, DbErr> {
        let startup = match entity::prelude::Startup::find_by_id(startup_id)
            .one(self.db)
            .await?
        {
            Some(startup) => startup,
            None => return Ok(None),
        };

        let mut startup_am = startup.into_active_model();
        patch.apply(&mut startup_am);

        let startup = startup_am.update(self.db).await?;

        Ok(Some(startup))
    }

    /// Deletes a startup along with its internships and applications
    pub async fn delete(&self, startup_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Startup::delete_by_id(startup_id)
            .exec(self.db)
            .await
    }
}
