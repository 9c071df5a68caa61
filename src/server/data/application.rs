use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    prelude::DateTime, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, FromQueryResult, IntoActiveModel, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

/// Application joined with the student, internship and startup names
#[derive(Debug, Clone, FromQueryResult)]
pub struct ApplicationRow {
    pub id: i32,
    pub student_id: i32,
    pub internship_id: i32,
    pub startup_id: i32,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_at: DateTime,
    pub student_name: Option<String>,
    pub internship_title: Option<String>,
    pub startup_name: Option<String>,
}

/// Application as seen by the applying student, carrying internship details
#[derive(Debug, Clone, FromQueryResult)]
pub struct StudentApplicationRow {
    pub application_id: i32,
    pub student_id: i32,
    pub internship_id: i32,
    pub startup_id: i32,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_at: DateTime,
    pub internship_title: Option<String>,
    pub internship_description: Option<String>,
    pub internship_location: Option<String>,
    pub internship_stipend: Option<String>,
    pub startup_name: Option<String>,
    pub startup_website: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub student_id: i32,
    pub internship_id: i32,
    pub startup_id: i32,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
    pub notes: Option<Option<String>>,
}

impl ApplicationPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none()
    }
}

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn select_detailed() -> Select<entity::application::Entity> {
        entity::prelude::Application::find()
            .column_as(entity::student_profile::Column::Name, "student_name")
            .column_as(entity::internship::Column::Title, "internship_title")
            .column_as(entity::startup::Column::Name, "startup_name")
            .join(
                JoinType::LeftJoin,
                entity::application::Relation::StudentProfile.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::application::Relation::Internship.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::application::Relation::Startup.def(),
            )
    }

    pub async fn create(
        &self,
        application: NewApplication,
    ) -> Result<entity::application::Model, DbErr> {
        let application = entity::application::ActiveModel {
            student_id: ActiveValue::Set(application.student_id),
            internship_id: ActiveValue::Set(application.internship_id),
            startup_id: ActiveValue::Set(application.startup_id),
            status: ActiveValue::Set(application.status),
            notes: ActiveValue::Set(application.notes),
            applied_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Lists every application, most recent first
    pub async fn get_all(&self) -> Result<Vec<ApplicationRow>, DbErr> {
        Self::select_detailed()
            .order_by_desc(entity::application::Column::AppliedAt)
            .order_by_desc(entity::application::Column::Id)
            .into_model::<ApplicationRow>()
            .all(self.db)
            .await
    }

    /// Lists the applications received by a startup, most recent first
    pub async fn get_by_startup_id(&self, startup_id: i32) -> Result<Vec<ApplicationRow>, DbErr> {
        Self::select_detailed()
            .filter(entity::application::Column::StartupId.eq(startup_id))
            .order_by_desc(entity::application::Column::AppliedAt)
            .order_by_desc(entity::application::Column::Id)
            .into_model::<ApplicationRow>()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, application_id: i32) -> Result<Option<ApplicationRow>, DbErr> {
        Self::select_detailed()
            .filter(entity::application::Column::Id.eq(application_id))
            .into_model::<ApplicationRow>()
            .one(self.db)
            .await
    }

    /// Gets a student's applications with internship and startup details, most recent first
    pub async fn get_by_student_id(
        &self,
        student_id: i32,
    ) -> Result<Vec<StudentApplicationRow>, DbErr> {
        entity::prelude::Application::find()
            .select_only()
            .column_as(entity::application::Column::Id, "application_id")
            .columns([
                entity::application::Column::StudentId,
                entity::application::Column::InternshipId,
                entity::application::Column::StartupId,
                entity::application::Column::Status,
                entity::application::Column::Notes,
                entity::application::Column::AppliedAt,
            ])
            .column_as(entity::internship::Column::Title, "internship_title")
            .column_as(
                entity::internship::Column::Description,
                "internship_description",
            )
            .column_as(entity::internship::Column::Location, "internship_location")
            .column_as(entity::internship::Column::Stipend, "internship_stipend")
            .column_as(entity::startup::Column::Name, "startup_name")
            .column_as(entity::startup::Column::Website, "startup_website")
            .join(
                JoinType::LeftJoin,
                entity::application::Relation::Internship.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::application::Relation::Startup.def(),
            )
            .filter(entity::application::Column::StudentId.eq(student_id))
            .order_by_desc(entity::application::Column::AppliedAt)
            .order_by_desc(entity::application::Column::Id)
            .into_model::<StudentApplicationRow>()
            .all(self.db)
            .await
    }

    /// Applies the supplied fields of `patch`
    ///
    /// # Returns
    /// - `None` if no application has the provided ID
    pub async fn update(
        &self,
        application_id: i32,
        patch: ApplicationPatch,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        let application = match entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await?
        {
            Some(application) => application,
            None => return Ok(None),
        };

        let mut application_am = application.into_active_model();
        if let Some(status) = patch.status {
            application_am.status = ActiveValue::Set(status);
        }
        if let Some(notes) = patch.notes {
            application_am.notes = ActiveValue::Set(notes);
        }

        let application = application_am.update(self.db).await?;

        Ok(Some(application))
    }

    pub async fn delete(&self, application_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Application::delete_by_id(application_id)
            .exec(self.db)
            .await
    }
}
