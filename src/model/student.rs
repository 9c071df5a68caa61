use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentProfileDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub school: Option<String>,
    pub major: Option<String>,
    pub graduation_date: Option<NaiveDate>,
    pub resume_url: Option<String>,
    pub portfolio_link: Option<String>,
    /// Email of the owning user, present on joined reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateStudentProfileDto {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub graduation_date: Option<NaiveDate>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub portfolio_link: Option<String>,
}

/// Partial update, an absent key leaves the column untouched while an explicit
/// `null` clears a nullable column
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateStudentProfileDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub school: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub major: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<NaiveDate>))]
    pub graduation_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub resume_url: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub portfolio_link: Option<Option<String>>,
}

/// Query parameters accepted by the student profile listing
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct StudentProfileFilter {
    /// Case-insensitive substring of the school
    pub school: Option<String>,
    /// Case-insensitive substring of the major
    pub major: Option<String>,
    /// Case-insensitive substring of the name, resume URL or portfolio link
    pub q: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentProfileEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub student_profile: StudentProfileDto,
}

/// Body of `GET /students/me`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CurrentStudentDto {
    pub student: StudentProfileDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentProfilesDto {
    pub student_profiles: Vec<StudentProfileDto>,
}
