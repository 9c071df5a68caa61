use entity::sea_orm_active_enums::UserType as UserTypeColumn;
use sea_orm::{DatabaseConnection, DeleteResult};

use crate::{
    model::user::{LoginDto, SignupDto, UpdateUserDto, UserType},
    server::{
        data::user::{UserPatch, UserRepository},
        error::{auth::AuthError, Error},
        model::db::UserModel,
        service::present,
        util::password::{hash_password, verify_password},
    },
};

static INVALID_USER_TYPE: &str = "user_type must be 'student' or 'startup'";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn parse_user_type(value: &str) -> Result<UserTypeColumn, Error> {
        value
            .parse::<UserType>()
            .map(UserTypeColumn::from)
            .map_err(|_| Error::Validation(INVALID_USER_TYPE.to_string()))
    }

    /// Registers a new user
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::Validation)` - A field is missing or `user_type` is unknown
    /// - `Err(Error::Conflict)` - The email is already registered
    pub async fn signup(&self, payload: SignupDto) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let (Some(email), Some(password), Some(user_type)) = (
            present(payload.email),
            present(payload.password),
            present(payload.user_type),
        ) else {
            return Err(Error::Validation(
                "email, password and user_type are required".to_string(),
            ));
        };
        let user_type = Self::parse_user_type(&user_type)?;

        if user_repository.get_by_email(&email).await?.is_some() {
            return Err(Error::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(&password)?;

        user_repository
            .create(&email, &password_hash, user_type)
            .await
            .map_err(|err| Error::from_write(err, "User already exists", "User not found"))
    }

    /// Verifies the credentials of an existing user
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The authenticated user
    /// - `Err(Error::NotFound)` - No user has the provided email
    /// - `Err(Error::AuthError)` - The password does not match
    pub async fn login(&self, payload: LoginDto) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let (Some(email), Some(password)) = (present(payload.email), present(payload.password))
        else {
            return Err(Error::Validation(
                "email and password required".to_string(),
            ));
        };

        let Some(user) = user_repository.get_by_email(&email).await? else {
            return Err(Error::NotFound("User not found".to_string()));
        };

        if !verify_password(&password, &user.password)? {
            tracing::debug!(user_id = user.id, "Rejected login with invalid password");

            return Err(AuthError::InvalidPassword.into());
        }

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<UserModel>, Error> {
        let user_repository = UserRepository::new(self.db);

        Ok(user_repository.get_all().await?)
    }

    /// Gets a user with the IDs of their student profile and startup
    pub async fn get_detail(
        &self,
        user_id: i32,
    ) -> Result<Option<(UserModel, Option<i32>, Option<i32>)>, Error> {
        let user_repository = UserRepository::new(self.db);

        Ok(user_repository.get_with_profile_ids(user_id).await?)
    }

    /// Updates the supplied fields, rehashing the password if one is provided
    ///
    /// # Returns
    /// - `Ok(None)` - No user has the provided ID
    pub async fn update(
        &self,
        user_id: i32,
        payload: UpdateUserDto,
    ) -> Result<Option<UserModel>, Error> {
        let user_repository = UserRepository::new(self.db);

        let user_type = match present(payload.user_type) {
            Some(user_type) => Some(Self::parse_user_type(&user_type)?),
            None => None,
        };
        let password = match present(payload.password) {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let patch = UserPatch {
            email: present(payload.email),
            user_type,
            password,
        };
        if patch.is_empty() {
            return Err(Error::Validation(
                "Provide email, user_type or password to update".to_string(),
            ));
        }

        user_repository
            .update(user_id, patch)
            .await
            .map_err(|err| Error::from_write(err, "Email already in use", "User not found"))
    }

    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, Error> {
        let user_repository = UserRepository::new(self.db);

        Ok(user_repository.delete(user_id).await?)
    }
}
