use sea_orm::{
    prelude::Date, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, FromQueryResult, IntoActiveModel, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::data::{contains_ignore_case, non_empty};

/// Student profile joined with the email of its owning user
#[derive(Debug, Clone, FromQueryResult)]
pub struct StudentProfileRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub school: Option<String>,
    pub major: Option<String>,
    pub graduation_date: Option<Date>,
    pub resume_url: Option<String>,
    pub portfolio_link: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewStudentProfile {
    pub user_id: i32,
    pub name: String,
    pub school: Option<String>,
    pub major: Option<String>,
    pub graduation_date: Option<Date>,
    pub resume_url: Option<String>,
    pub portfolio_link: Option<String>,
}

/// Outer `None` leaves a column untouched, `Some(None)` clears a nullable column.
#[derive(Debug, Default, Clone)]
pub struct StudentProfilePatch {
    pub name: Option<String>,
    pub school: Option<Option<String>>,
    pub major: Option<Option<String>>,
    pub graduation_date: Option<Option<Date>>,
    pub resume_url: Option<Option<String>>,
    pub portfolio_link: Option<Option<String>>,
}

impl StudentProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.school.is_none()
            && self.major.is_none()
            && self.graduation_date.is_none()
            && self.resume_url.is_none()
            && self.portfolio_link.is_none()
    }

    fn apply(self, profile: &mut entity::student_profile::ActiveModel) {
        if let Some(name) = self.name {
            profile.name = ActiveValue::Set(name);
        }
        if let Some(school) = self.school {
            profile.school = ActiveValue::Set(school);
        }
        if let Some(major) = self.major {
            profile.major = ActiveValue::Set(major);
        }
        if let Some(graduation_date) = self.graduation_date {
            profile.graduation_date = ActiveValue::Set(graduation_date);
        }
        if let Some(resume_url) = self.resume_url {
            profile.resume_url = ActiveValue::Set(resume_url);
        }
        if let Some(portfolio_link) = self.portfolio_link {
            profile.portfolio_link = ActiveValue::Set(portfolio_link);
        }
    }
}

/// Optional list filters, absent or empty values are ignored
#[derive(Debug, Default, Clone)]
pub struct StudentProfileQuery {
    pub school: Option<String>,
    pub major: Option<String>,
    /// Matches name, resume URL or portfolio link
    pub q: Option<String>,
}

pub struct StudentProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentProfileRepository<'a, C> {
    /// Creates a new instance of [`StudentProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn select_with_email() -> Select<entity::student_profile::Entity> {
        entity::prelude::StudentProfile::find()
            .column_as(entity::user::Column::Email, "user_email")
            .join(
                JoinType::LeftJoin,
                entity::student_profile::Relation::User.def(),
            )
    }

    pub async fn create(
        &self,
        profile: NewStudentProfile,
    ) -> Result<entity::student_profile::Model, DbErr> {
        let profile = entity::student_profile::ActiveModel {
            user_id: ActiveValue::Set(profile.user_id),
            name: ActiveValue::Set(profile.name),
            school: ActiveValue::Set(profile.school),
            major: ActiveValue::Set(profile.major),
            graduation_date: ActiveValue::Set(profile.graduation_date),
            resume_url: ActiveValue::Set(profile.resume_url),
            portfolio_link: ActiveValue::Set(profile.portfolio_link),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    /// Lists profiles matching `query`, newest first
    pub async fn get_many(
        &self,
        query: &StudentProfileQuery,
    ) -> Result<Vec<StudentProfileRow>, DbErr> {
        let mut select = Self::select_with_email();

        if let Some(school) = non_empty(&query.school) {
            select = select.filter(contains_ignore_case(
                entity::student_profile::Column::School,
                school,
            ));
        }
        if let Some(major) = non_empty(&query.major) {
            select = select.filter(contains_ignore_case(
                entity::student_profile::Column::Major,
                major,
            ));
        }
        if let Some(q) = non_empty(&query.q) {
            select = select.filter(
                Condition::any()
                    .add(contains_ignore_case(
                        entity::student_profile::Column::Name,
                        q,
                    ))
                    .add(contains_ignore_case(
                        entity::student_profile::Column::ResumeUrl,
                        q,
                    ))
                    .add(contains_ignore_case(
                        entity::student_profile::Column::PortfolioLink,
                        q,
                    )),
            );
        }

        select
            .order_by_desc(entity::student_profile::Column::Id)
            .into_model::<StudentProfileRow>()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, profile_id: i32) -> Result<Option<StudentProfileRow>, DbErr> {
        Self::select_with_email()
            .filter(entity::student_profile::Column::Id.eq(profile_id))
            .into_model::<StudentProfileRow>()
            .one(self.db)
            .await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<StudentProfileRow>, DbErr> {
        Self::select_with_email()
            .filter(entity::student_profile::Column::UserId.eq(user_id))
            .into_model::<StudentProfileRow>()
            .one(self.db)
            .await
    }

    /// Applies the supplied fields of `patch`
    ///
    /// # Returns
    /// - `None` if no profile has the provided ID
    pub async fn update(
        &self,
        profile_id: i32,
        patch: StudentProfilePatch,
    ) -> Result<Option<entity::student_profile::Model>, DbErr> {
        let profile = match entity::prelude::StudentProfile::find_by_id(profile_id)
            .one(self.db)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        patch.apply(&mut profile_am);

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }

    /// Deletes a profile along with its applications
    pub async fn delete(&self, profile_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StudentProfile::delete_by_id(profile_id)
            .exec(self.db)
            .await
    }
}
