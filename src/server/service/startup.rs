use sea_orm::{DatabaseConnection, DeleteResult};

use crate::{
    model::startup::{CreateStartupDto, StartupFilter, UpdateStartupDto},
    server::{
        data::startup::{NewStartup, StartupPatch, StartupQuery, StartupRepository, StartupRow},
        error::Error,
        model::db::StartupModel,
        service::{present, present_id},
    },
};

pub struct StartupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StartupService<'a> {
    /// Creates a new instance of [`StartupService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the startup of a startup user
    ///
    /// # Returns
    /// - `Err(Error::Validation)` - `user_id` or `name` is missing
    /// - `Err(Error::Conflict)` - The user already owns a startup
    /// - `Err(Error::NotFound)` - The user does not exist
    pub async fn create(&self, payload: CreateStartupDto) -> Result<StartupModel, Error> {
        let repository = StartupRepository::new(self.db);

        let (Some(user_id), Some(name)) = (present_id(payload.user_id), present(payload.name))
        else {
            return Err(Error::Validation(
                "user_id and name are required".to_string(),
            ));
        };

        repository
            .create(NewStartup {
                user_id,
                name,
                description: payload.description,
                website: payload.website,
            })
            .await
            .map_err(|err| {
                Error::from_write(err, "Startup already exists for this user", "User not found")
            })
    }

    pub async fn get_all(&self, filter: StartupFilter) -> Result<Vec<StartupRow>, Error> {
        let repository = StartupRepository::new(self.db);

        let query = StartupQuery {
            name: filter.name,
            website: filter.website,
        };

        Ok(repository.get_many(&query).await?)
    }

    pub async fn get_by_id(&self, startup_id: i32) -> Result<Option<StartupRow>, Error> {
        let repository = StartupRepository::new(self.db);

        Ok(repository.get_by_id(startup_id).await?)
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<StartupModel>, Error> {
        let repository = StartupRepository::new(self.db);

        Ok(repository.get_by_user_id(user_id).await?)
    }

    /// Updates the supplied fields
    ///
    /// # Returns
    /// - `Ok(None)` - No startup has the provided ID
    pub async fn update(
        &self,
        startup_id: i32,
        payload: UpdateStartupDto,
    ) -> Result<Option<StartupModel>, Error> {
        let repository = StartupRepository::new(self.db);

        if matches!(payload.name.as_deref(), Some("")) {
            return Err(Error::Validation("name cannot be empty".to_string()));
        }

        let patch = StartupPatch {
            name: payload.name,
            description: payload.description,
            website: payload.website,
        };
        if patch.is_empty() {
            return Err(Error::Validation(
                "Provide at least one field to update".to_string(),
            ));
        }

        Ok(repository.update(startup_id, patch).await?)
    }

    pub async fn delete(&self, startup_id: i32) -> Result<DeleteResult, Error> {
        let repository = StartupRepository::new(self.db);

        Ok(repository.delete(startup_id).await?)
    }
}
