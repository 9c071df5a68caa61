use entity::sea_orm_active_enums::ApplicationStatus as ApplicationStatusColumn;
use sea_orm::{DatabaseConnection, DeleteResult};

use crate::{
    model::application::{ApplicationStatus, CreateApplicationDto, UpdateApplicationDto},
    server::{
        data::application::{
            ApplicationPatch, ApplicationRepository, ApplicationRow, NewApplication,
            StudentApplicationRow,
        },
        error::Error,
        model::db::ApplicationModel,
        service::{parse_enum, present, present_id},
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn parse_status(value: Option<String>) -> Result<Option<ApplicationStatusColumn>, Error> {
        present(value)
            .map(|status| parse_enum::<ApplicationStatus>("status", &status).map(Into::into))
            .transpose()
    }

    /// Submits an application, `Applied` unless another status is supplied
    ///
    /// The unique (student, internship) index rejects a second application for
    /// the same internship, so no read-before-write check is needed.
    ///
    /// # Returns
    /// - `Err(Error::Validation)` - A foreign ID is missing or the status is unknown
    /// - `Err(Error::Conflict)` - The student already applied to the internship
    /// - `Err(Error::NotFound)` - A referenced student, internship or startup does not exist
    pub async fn create(&self, payload: CreateApplicationDto) -> Result<ApplicationModel, Error> {
        let repository = ApplicationRepository::new(self.db);

        let (Some(student_id), Some(internship_id), Some(startup_id)) = (
            present_id(payload.student_id),
            present_id(payload.internship_id),
            present_id(payload.startup_id),
        ) else {
            return Err(Error::Validation(
                "student_id, internship_id and startup_id are required".to_string(),
            ));
        };
        let status =
            Self::parse_status(payload.status)?.unwrap_or(ApplicationStatusColumn::Applied);

        repository
            .create(NewApplication {
                student_id,
                internship_id,
                startup_id,
                status,
                notes: payload.notes,
            })
            .await
            .map_err(|err| {
                Error::from_write(
                    err,
                    "Application already exists",
                    "Student, internship or startup not found",
                )
            })
    }

    pub async fn get_all(&self) -> Result<Vec<ApplicationRow>, Error> {
        let repository = ApplicationRepository::new(self.db);

        Ok(repository.get_all().await?)
    }

    pub async fn get_by_id(&self, application_id: i32) -> Result<Option<ApplicationRow>, Error> {
        let repository = ApplicationRepository::new(self.db);

        Ok(repository.get_by_id(application_id).await?)
    }

    /// Lists a student's applications with internship and startup details
    ///
    /// # Returns
    /// - `Err(Error::Validation)` - `student_id` is not a positive integer
    pub async fn get_by_student_id(
        &self,
        student_id: i32,
    ) -> Result<Vec<StudentApplicationRow>, Error> {
        let repository = ApplicationRepository::new(self.db);

        let Some(student_id) = present_id(Some(student_id)) else {
            return Err(Error::Validation("Valid student_id is required".to_string()));
        };

        Ok(repository.get_by_student_id(student_id).await?)
    }

    pub async fn get_by_startup_id(&self, startup_id: i32) -> Result<Vec<ApplicationRow>, Error> {
        let repository = ApplicationRepository::new(self.db);

        Ok(repository.get_by_startup_id(startup_id).await?)
    }

    /// Updates status and/or notes
    ///
    /// # Returns
    /// - `Ok(None)` - No application has the provided ID
    /// - `Err(Error::Validation)` - Neither field supplied or the status is unknown
    pub async fn update(
        &self,
        application_id: i32,
        payload: UpdateApplicationDto,
    ) -> Result<Option<ApplicationModel>, Error> {
        let repository = ApplicationRepository::new(self.db);

        let patch = ApplicationPatch {
            status: Self::parse_status(payload.status)?,
            notes: payload.notes,
        };
        if patch.is_empty() {
            return Err(Error::Validation(
                "Provide status or notes to update".to_string(),
            ));
        }

        Ok(repository.update(application_id, patch).await?)
    }

    pub async fn delete(&self, application_id: i32) -> Result<DeleteResult, Error> {
        let repository = ApplicationRepository::new(self.db);

        Ok(repository.delete(application_id).await?)
    }
}
