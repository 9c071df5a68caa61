use sea_orm::{DatabaseConnection, DeleteResult};

use crate::{
    model::student::{CreateStudentProfileDto, StudentProfileFilter, UpdateStudentProfileDto},
    server::{
        data::student_profile::{
            NewStudentProfile, StudentProfilePatch, StudentProfileQuery, StudentProfileRepository,
            StudentProfileRow,
        },
        error::Error,
        model::db::StudentProfileModel,
        service::{present, present_id},
    },
};

static PROFILE_EXISTS: &str = "Student profile already exists for this user";

pub struct StudentProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentProfileService<'a> {
    /// Creates a new instance of [`StudentProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the profile of a student user
    ///
    /// # Returns
    /// - `Err(Error::Validation)` - `user_id` or `name` is missing
    /// - `Err(Error::Conflict)` - The user already owns a profile
    /// - `Err(Error::NotFound)` - The user does not exist
    pub async fn create(
        &self,
        payload: CreateStudentProfileDto,
    ) -> Result<StudentProfileModel, Error> {
        let repository = StudentProfileRepository::new(self.db);

        let (Some(user_id), Some(name)) = (present_id(payload.user_id), present(payload.name))
        else {
            return Err(Error::Validation(
                "user_id and name are required".to_string(),
            ));
        };

        repository
            .create(NewStudentProfile {
                user_id,
                name,
                school: payload.school,
                major: payload.major,
                graduation_date: payload.graduation_date,
                resume_url: payload.resume_url,
                portfolio_link: payload.portfolio_link,
            })
            .await
            .map_err(|err| Error::from_write(err, PROFILE_EXISTS, "User not found"))
    }

    pub async fn get_all(
        &self,
        filter: StudentProfileFilter,
    ) -> Result<Vec<StudentProfileRow>, Error> {
        let repository = StudentProfileRepository::new(self.db);

        let query = StudentProfileQuery {
            school: filter.school,
            major: filter.major,
            q: filter.q,
        };

        Ok(repository.get_many(&query).await?)
    }

    pub async fn get_by_id(&self, profile_id: i32) -> Result<Option<StudentProfileRow>, Error> {
        let repository = StudentProfileRepository::new(self.db);

        Ok(repository.get_by_id(profile_id).await?)
    }

    /// Gets the profile owned by a user, also used to resolve the caller's own profile
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<StudentProfileRow>, Error> {
        let repository = StudentProfileRepository::new(self.db);

        Ok(repository.get_by_user_id(user_id).await?)
    }

    /// Updates the supplied fields
    ///
    /// # Returns
    /// - `Ok(None)` - No profile has the provided ID
    /// - `Err(Error::Validation)` - No field supplied or `name` is empty
    pub async fn update(
        &self,
        profile_id: i32,
        payload: UpdateStudentProfileDto,
    ) -> Result<Option<StudentProfileModel>, Error> {
        let repository = StudentProfileRepository::new(self.db);

        if matches!(payload.name.as_deref(), Some("")) {
            return Err(Error::Validation("name cannot be empty".to_string()));
        }

        let patch = StudentProfilePatch {
            name: payload.name,
            school: payload.school,
            major: payload.major,
            graduation_date: payload.graduation_date,
            resume_url: payload.resume_url,
            portfolio_link: payload.portfolio_link,
        };
        if patch.is_empty() {
            return Err(Error::Validation(
                "Provide at least one field to update".to_string(),
            ));
        }

        Ok(repository.update(profile_id, patch).await?)
    }

    pub async fn delete(&self, profile_id: i32) -> Result<DeleteResult, Error> {
        let repository = StudentProfileRepository::new(self.db);

        Ok(repository.delete(profile_id).await?)
    }
}
