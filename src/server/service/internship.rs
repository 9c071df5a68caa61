use entity::sea_orm_active_enums::InternshipStatus as InternshipStatusColumn;
use sea_orm::{DatabaseConnection, DeleteResult};

use crate::{
    model::internship::{
        CreateInternshipDto, InternshipFilter, InternshipStatus, UpdateInternshipDto,
    },
    server::{
        data::internship::{
            InternshipPatch, InternshipQuery, InternshipRepository, InternshipRow, NewInternship,
        },
        error::Error,
        model::db::InternshipModel,
        service::{parse_enum, present, present_id},
    },
};

pub struct InternshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InternshipService<'a> {
    /// Creates a new instance of [`InternshipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn parse_status(value: Option<String>) -> Result<Option<InternshipStatusColumn>, Error> {
        present(value)
            .map(|status| parse_enum::<InternshipStatus>("status", &status).map(Into::into))
            .transpose()
    }

    /// Posts a new internship, `Active` unless another status is supplied
    ///
    /// # Returns
    /// - `Err(Error::Validation)` - `startup_id` or `title` is missing, or the status is unknown
    /// - `Err(Error::NotFound)` - The startup does not exist
    pub async fn create(&self, payload: CreateInternshipDto) -> Result<InternshipModel, Error> {
        let repository = InternshipRepository::new(self.db);

        let (Some(startup_id), Some(title)) =
            (present_id(payload.startup_id), present(payload.title))
        else {
            return Err(Error::Validation(
                "startup_id and title are required".to_string(),
            ));
        };
        let status = Self::parse_status(payload.status)?.unwrap_or(InternshipStatusColumn::Active);
        let required_skills = payload
            .required_skills
            .map(|skills| skills.normalize())
            .unwrap_or_default();

        repository
            .create(NewInternship {
                startup_id,
                title,
                role: payload.role,
                location: payload.location,
                stipend: payload.stipend,
                description: payload.description,
                required_skills,
                status,
            })
            .await
            .map_err(|err| Error::from_write(err, "Internship already exists", "Startup not found"))
    }

    /// Lists internships matching every supplied filter
    pub async fn get_all(&self, filter: InternshipFilter) -> Result<Vec<InternshipRow>, Error> {
        let repository = InternshipRepository::new(self.db);

        let query = InternshipQuery {
            startup_id: filter.startup_id,
            status: Self::parse_status(filter.status)?,
            skill: filter.skill,
            q: filter.q,
        };

        Ok(repository.get_many(&query).await?)
    }

    pub async fn get_by_id(&self, internship_id: i32) -> Result<Option<InternshipRow>, Error> {
        let repository = InternshipRepository::new(self.db);

        Ok(repository.get_by_id(internship_id).await?)
    }

    pub async fn get_by_startup_id(&self, startup_id: i32) -> Result<Vec<InternshipModel>, Error> {
        let repository = InternshipRepository::new(self.db);

        Ok(repository.get_by_startup_id(startup_id).await?)
    }

    /// Updates the supplied fields, renormalizing skills and revalidating status
    ///
    /// # Returns
    /// - `Ok(None)` - No internship has the provided ID
    pub async fn update(
        &self,
        internship_id: i32,
        payload: UpdateInternshipDto,
    ) -> Result<Option<InternshipModel>, Error> {
        let repository = InternshipRepository::new(self.db);

        if matches!(payload.title.as_deref(), Some("")) {
            return Err(Error::Validation("title cannot be empty".to_string()));
        }

        let patch = InternshipPatch {
            title: payload.title,
            role: payload.role,
            location: payload.location,
            stipend: payload.stipend,
            description: payload.description,
            required_skills: payload
                .required_skills
                .map(|skills| skills.map(|skills| skills.normalize()).unwrap_or_default()),
            status: Self::parse_status(payload.status)?,
        };
        if patch.is_empty() {
            return Err(Error::Validation(
                "Provide at least one field to update".to_string(),
            ));
        }

        Ok(repository.update(internship_id, patch).await?)
    }

    pub async fn delete(&self, internship_id: i32) -> Result<DeleteResult, Error> {
        let repository = InternshipRepository::new(self.db);

        Ok(repository.delete(internship_id).await?)
    }
}
