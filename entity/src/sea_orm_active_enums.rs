use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserType {
    #[sea_orm(string_value = "student")]
    #[serde(rename = "student")]
    Student,
    #[sea_orm(string_value = "startup")]
    #[serde(rename = "startup")]
    Startup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum InternshipStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Closed")]
    Closed,
    #[sea_orm(string_value = "Draft")]
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "Applied")]
    Applied,
    #[sea_orm(string_value = "Reviewing")]
    Reviewing,
    #[sea_orm(string_value = "Interviewing")]
    Interviewing,
    #[sea_orm(string_value = "Offer")]
    Offer,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}
