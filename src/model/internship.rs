use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

use crate::model::string_enum;

string_enum! {
    /// Publication state of an internship posting
    InternshipStatus {
        Active => "Active",
        Closed => "Closed",
        Draft => "Draft",
    }
}

/// Skills as accepted on the wire, either `"React, Node"` or `["React", "Node"]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum SkillsInput {
    Text(String),
    List(Vec<String>),
}

impl SkillsInput {
    /// Trims every entry and drops the empty ones. Order and repeated entries
    /// are kept.
    pub fn normalize(self) -> Vec<String> {
        let entries: Vec<String> = match self {
            Self::Text(text) => text.split(',').map(str::to_string).collect(),
            Self::List(list) => list,
        };

        entries
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InternshipDto {
    pub id: i32,
    pub startup_id: i32,
    pub title: String,
    pub role: Option<String>,
    pub location: Option<String>,
    pub stipend: Option<String>,
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub status: InternshipStatus,
    pub posted_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_website: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateInternshipDto {
    pub startup_id: Option<i32>,
    pub title: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub stipend: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Option<SkillsInput>,
    /// Defaults to `Active`
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateInternshipDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub role: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub location: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub stipend: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub description: Option<Option<String>>,
    /// `null` clears the list
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<SkillsInput>))]
    pub required_skills: Option<Option<SkillsInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Query parameters accepted by the internship listing, all filters combine
/// with AND
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct InternshipFilter {
    /// `?startup_id=` is treated as absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "NoneAsEmptyString")]
    pub startup_id: Option<i32>,
    pub status: Option<String>,
    /// Exact, case-sensitive member of `required_skills`
    pub skill: Option<String>,
    /// Case-insensitive substring of the title or description
    pub q: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InternshipEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub internship: InternshipDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InternshipsDto {
    pub internships: Vec<InternshipDto>,
}
