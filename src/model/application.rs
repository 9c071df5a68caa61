use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::string_enum;

string_enum! {
    /// Triage state of an application
    ApplicationStatus {
        Applied => "Applied",
        Reviewing => "Reviewing",
        Interviewing => "Interviewing",
        Offer => "Offer",
        Rejected => "Rejected",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApplicationDto {
    pub id: i32,
    pub student_id: i32,
    pub internship_id: i32,
    pub startup_id: i32,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internship_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_name: Option<String>,
}

/// An application as seen by the applying student, with posting details
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentApplicationDto {
    pub application_id: i32,
    pub student_id: i32,
    pub internship_id: i32,
    pub startup_id: i32,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_at: NaiveDateTime,
    pub internship_title: Option<String>,
    pub internship_description: Option<String>,
    pub internship_location: Option<String>,
    pub internship_stipend: Option<String>,
    pub startup_name: Option<String>,
    pub startup_website: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateApplicationDto {
    pub student_id: Option<i32>,
    pub internship_id: Option<i32>,
    pub startup_id: Option<i32>,
    /// Defaults to `Applied`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateApplicationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub notes: Option<Option<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApplicationEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub application: ApplicationDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApplicationsDto {
    pub applications: Vec<ApplicationDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentApplicationsDto {
    pub applications: Vec<StudentApplicationDto>,
}
