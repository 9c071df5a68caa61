use chrono::Utc;
use entity::sea_orm_active_enums::UserType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Columns a user update may touch, `None` leaves the column as is.
#[derive(Debug, Default, Clone)]
pub struct UserPatch {
    pub email: Option<String>,
    pub user_type: Option<UserType>,
    /// Already hashed
    pub password: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.user_type.is_none() && self.password.is_none()
    }

    fn apply(self, user: &mut entity::user::ActiveModel) {
        if let Some(email) = self.email {
            user.email = ActiveValue::Set(email);
        }
        if let Some(user_type) = self.user_type {
            user.user_type = ActiveValue::Set(user_type);
        }
        if let Some(password) = self.password {
            user.password = ActiveValue::Set(password);
        }
    }
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user, `password` must already be hashed
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password.to_string()),
            user_type: ActiveValue::Set(user_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets all users ordered by ID ascending
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user along with the IDs of their student profile and startup
    ///
    /// # Returns
    /// - `Some((user, student_profile_id, startup_id))` if the user exists
    pub async fn get_with_profile_ids(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::user::Model, Option<i32>, Option<i32>)>, DbErr> {
        let Some((user, student_profile)) = entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::student_profile::Entity)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let startup = entity::prelude::Startup::find()
            .filter(entity::startup::Column::UserId.eq(user.id))
            .one(self.db)
            .await?;

        Ok(Some((
            user,
            student_profile.map(|profile| profile.id),
            startup.map(|startup| startup.id),
        )))
    }

    /// Applies the supplied fields of `patch`
    ///
    /// # Returns
    /// - `None` if no user has the provided ID
    pub async fn update(
        &self,
        user_id: i32,
        patch: UserPatch,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        patch.apply(&mut user_am);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user along with every row that references it
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
