//! Database model type aliases and conversions into API DTOs.
//!
//! The entity crate owns the persisted status enumerations and the shared
//! `model` module owns their wire counterparts. Conversions between the two
//! live here.

use crate::model::{
    application::{ApplicationDto, ApplicationStatus, StudentApplicationDto},
    internship::{InternshipDto, InternshipStatus},
    startup::StartupDto,
    student::StudentProfileDto,
    user::{UserDetailDto, UserDto, UserType},
};
use crate::server::data::{
    application::{ApplicationRow, StudentApplicationRow},
    internship::InternshipRow,
    startup::StartupRow,
    student_profile::StudentProfileRow,
};

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password` - Argon2id hash, never exposed
/// - `user_type` - `student` or `startup`
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::user::Model;

/// Type alias for the student profile database model.
pub type StudentProfileModel = entity::student_profile::Model;

/// Type alias for the startup database model.
pub type StartupModel = entity::startup::Model;

/// Type alias for the internship database model.
///
/// `required_skills` is the JSON-encoded ordered skill list.
pub type InternshipModel = entity::internship::Model;

/// Type alias for the application database model.
///
/// `startup_id` is stored as supplied by the applicant.
pub type ApplicationModel = entity::application::Model;

macro_rules! mirror_enum {
    ($entity:ty, $wire:ty, [$($variant:ident),+ $(,)?]) => {
        impl From<$entity> for $wire {
            fn from(value: $entity) -> Self {
                type Source = $entity;

                match value {
                    $(Source::$variant => Self::$variant,)+
                }
            }
        }

        impl From<$wire> for $entity {
            fn from(value: $wire) -> Self {
                type Source = $wire;

                match value {
                    $(Source::$variant => Self::$variant,)+
                }
            }
        }
    };
}

mirror_enum!(
    entity::sea_orm_active_enums::UserType,
    UserType,
    [Student, Startup]
);
mirror_enum!(
    entity::sea_orm_active_enums::InternshipStatus,
    InternshipStatus,
    [Active, Closed, Draft]
);
mirror_enum!(
    entity::sea_orm_active_enums::ApplicationStatus,
    ApplicationStatus,
    [Applied, Reviewing, Interviewing, Offer, Rejected]
);

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_type: user.user_type.into(),
            created_at: user.created_at,
        }
    }
}

impl From<StudentProfileModel> for StudentProfileDto {
    fn from(profile: StudentProfileModel) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            name: profile.name,
            school: profile.school,
            major: profile.major,
            graduation_date: profile.graduation_date,
            resume_url: profile.resume_url,
            portfolio_link: profile.portfolio_link,
            user_email: None,
        }
    }
}

impl From<StartupModel> for StartupDto {
    fn from(startup: StartupModel) -> Self {
        Self {
            id: startup.id,
            user_id: startup.user_id,
            name: startup.name,
            description: startup.description,
            website: startup.website,
            user_email: None,
        }
    }
}

impl From<InternshipModel> for InternshipDto {
    fn from(internship: InternshipModel) -> Self {
        Self {
            id: internship.id,
            startup_id: internship.startup_id,
            title: internship.title,
            role: internship.role,
            location: internship.location,
            stipend: internship.stipend,
            description: internship.description,
            required_skills: internship.required_skills.0,
            status: internship.status.into(),
            posted_at: internship.posted_at,
            startup_name: None,
            startup_website: None,
        }
    }
}

impl From<ApplicationModel> for ApplicationDto {
    fn from(application: ApplicationModel) -> Self {
        Self {
            id: application.id,
            student_id: application.student_id,
            internship_id: application.internship_id,
            startup_id: application.startup_id,
            status: application.status.into(),
            notes: application.notes,
            applied_at: application.applied_at,
            student_name: None,
            internship_title: None,
            startup_name: None,
        }
    }
}

/// User together with the IDs resolved from the one-to-one profile tables
impl From<(UserModel, Option<i32>, Option<i32>)> for UserDetailDto {
    fn from((user, student_profile_id, startup_id): (UserModel, Option<i32>, Option<i32>)) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_type: user.user_type.into(),
            created_at: user.created_at,
            student_profile_id,
            startup_id,
        }
    }
}

impl From<StudentProfileRow> for StudentProfileDto {
    fn from(row: StudentProfileRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            school: row.school,
            major: row.major,
            graduation_date: row.graduation_date,
            resume_url: row.resume_url,
            portfolio_link: row.portfolio_link,
            user_email: row.user_email,
        }
    }
}

impl From<StartupRow> for StartupDto {
    fn from(row: StartupRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            description: row.description,
            website: row.website,
            user_email: row.user_email,
        }
    }
}

impl From<InternshipRow> for InternshipDto {
    fn from(row: InternshipRow) -> Self {
        Self {
            id: row.id,
            startup_id: row.startup_id,
            title: row.title,
            role: row.role,
            location: row.location,
            stipend: row.stipend,
            description: row.description,
            required_skills: row.required_skills.0,
            status: row.status.into(),
            posted_at: row.posted_at,
            startup_name: row.startup_name,
            startup_website: row.startup_website,
        }
    }
}

impl From<ApplicationRow> for ApplicationDto {
    fn from(row: ApplicationRow) -> Self {
        Self {
            id: row.id,
            student_id: row.student_id,
            internship_id: row.internship_id,
            startup_id: row.startup_id,
            status: row.status.into(),
            notes: row.notes,
            applied_at: row.applied_at,
            student_name: row.student_name,
            internship_title: row.internship_title,
            startup_name: row.startup_name,
        }
    }
}

impl From<StudentApplicationRow> for StudentApplicationDto {
    fn from(row: StudentApplicationRow) -> Self {
        Self {
            application_id: row.application_id,
            student_id: row.student_id,
            internship_id: row.internship_id,
            startup_id: row.startup_id,
            status: row.status.into(),
            notes: row.notes,
            applied_at: row.applied_at,
            internship_title: row.internship_title,
            internship_description: row.internship_description,
            internship_location: row.internship_location,
            internship_stipend: row.internship_stipend,
            startup_name: row.startup_name,
            startup_website: row.startup_website,
        }
    }
}
