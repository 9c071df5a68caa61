use chrono::Utc;
use entity::{internship::RequiredSkills, sea_orm_active_enums::InternshipStatus};
use sea_orm::{
    prelude::DateTime, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, DeleteResult, EntityTrait, FromQueryResult, IntoActiveModel, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::data::{contains_ignore_case, non_empty};

/// Internship joined with the name and website of the posting startup
#[derive(Debug, Clone, FromQueryResult)]
pub struct InternshipRow {
    pub id: i32,
    pub startup_id: i32,
    pub title: String,
    pub role: Option<String>,
    pub location: Option<String>,
    pub stipend: Option<String>,
    pub description: Option<String>,
    pub required_skills: RequiredSkills,
    pub status: InternshipStatus,
    pub posted_at: DateTime,
    pub startup_name: Option<String>,
    pub startup_website: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewInternship {
    pub startup_id: i32,
    pub title: String,
    pub role: Option<String>,
    pub location: Option<String>,
    pub stipend: Option<String>,
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub status: InternshipStatus,
}

#[derive(Debug, Default, Clone)]
pub struct InternshipPatch {
    pub title: Option<String>,
    pub role: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub stipend: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub required_skills: Option<Vec<String>>,
    pub status: Option<InternshipStatus>,
}

impl InternshipPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.role.is_none()
            && self.location.is_none()
            && self.stipend.is_none()
            && self.description.is_none()
            && self.required_skills.is_none()
            && self.status.is_none()
    }

    fn apply(self, internship: &mut entity::internship::ActiveModel) {
        if let Some(title) = self.title {
            internship.title = ActiveValue::Set(title);
        }
        if let Some(role) = self.role {
            internship.role = ActiveValue::Set(role);
        }
        if let Some(location) = self.location {
            internship.location = ActiveValue::Set(location);
        }
        if let Some(stipend) = self.stipend {
            internship.stipend = ActiveValue::Set(stipend);
        }
        if let Some(description) = self.description {
            internship.description = ActiveValue::Set(description);
        }
        if let Some(required_skills) = self.required_skills {
            internship.required_skills = ActiveValue::Set(RequiredSkills(required_skills));
        }
        if let Some(status) = self.status {
            internship.status = ActiveValue::Set(status);
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct InternshipQuery {
    pub startup_id: Option<i32>,
    pub status: Option<InternshipStatus>,
    /// Exact, case-sensitive membership in the required skills
    pub skill: Option<String>,
    /// Matches title or description
    pub q: Option<String>,
}

pub struct InternshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InternshipRepository<'a, C> {
    /// Creates a new instance of [`InternshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn select_with_startup() -> Select<entity::internship::Entity> {
        entity::prelude::Internship::find()
            .column_as(entity::startup::Column::Name, "startup_name")
            .column_as(entity::startup::Column::Website, "startup_website")
            .join(
                JoinType::LeftJoin,
                entity::internship::Relation::Startup.def(),
            )
    }

    pub async fn create(
        &self,
        internship: NewInternship,
    ) -> Result<entity::internship::Model, DbErr> {
        let internship = entity::internship::ActiveModel {
            startup_id: ActiveValue::Set(internship.startup_id),
            title: ActiveValue::Set(internship.title),
            role: ActiveValue::Set(internship.role),
            location: ActiveValue::Set(internship.location),
            stipend: ActiveValue::Set(internship.stipend),
            description: ActiveValue::Set(internship.description),
            required_skills: ActiveValue::Set(RequiredSkills(internship.required_skills)),
            status: ActiveValue::Set(internship.status),
            posted_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        internship.insert(self.db).await
    }

    /// Lists internships matching `query`, most recently posted first
    ///
    /// Skill membership is checked after the rows are loaded since the skill list
    /// is stored as a JSON document.
    pub async fn get_many(&self, query: &InternshipQuery) -> Result<Vec<InternshipRow>, DbErr> {
        let mut select = Self::select_with_startup();

        if let Some(startup_id) = query.startup_id {
            select = select.filter(entity::internship::Column::StartupId.eq(startup_id));
        }
        if let Some(status) = query.status {
            select = select.filter(entity::internship::Column::Status.eq(status));
        }
        if let Some(q) = non_empty(&query.q) {
            select = select.filter(
                Condition::any()
                    .add(contains_ignore_case(entity::internship::Column::Title, q))
                    .add(contains_ignore_case(
                        entity::internship::Column::Description,
                        q,
                    )),
            );
        }

        let rows = select
            .order_by_desc(entity::internship::Column::PostedAt)
            .order_by_desc(entity::internship::Column::Id)
            .into_model::<InternshipRow>()
            .all(self.db)
            .await?;

        let rows = match non_empty(&query.skill) {
            Some(skill) => rows
                .into_iter()
                .filter(|row| row.required_skills.0.iter().any(|s| s == skill))
                .collect(),
            None => rows,
        };

        Ok(rows)
    }

    pub async fn get_by_id(&self, internship_id: i32) -> Result<Option<InternshipRow>, DbErr> {
        Self::select_with_startup()
            .filter(entity::internship::Column::Id.eq(internship_id))
            .into_model::<InternshipRow>()
            .one(self.db)
            .await
    }

    /// Gets the internships posted by a startup, most recently posted first
    pub async fn get_by_startup_id(
        &self,
        startup_id: i32,
    ) -> Result<Vec<entity::internship::Model>, DbErr> {
        entity::prelude::Internship::find()
            .filter(entity::internship::Column::StartupId.eq(startup_id))
            .order_by_desc(entity::internship::Column::PostedAt)
            .order_by_desc(entity::internship::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the supplied fields of `patch`
    ///
    /// # Returns
    /// - `None` if no internship has the provided ID
    pub async fn update(
        &self,
        internship_id: i32,
        patch: InternshipPatch,
    ) -> Result<Option<entity::internship::Model>, DbErr> {
        let internship = match entity::prelude::Internship::find_by_id(internship_id)
            .one(self.db)
            .await?
        {
            Some(internship) => internship,
            None => return Ok(None),
        };

        let mut internship_am = internship.into_active_model();
        patch.apply(&mut internship_am);

        let internship = internship_am.update(self.db).await?;

        Ok(Some(internship))
    }

    /// Deletes an internship along with its applications
    pub async fn delete(&self, internship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Internship::delete_by_id(internship_id)
            .exec(self.db)
            .await
    }
}
