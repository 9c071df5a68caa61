//! SeaORM entities for the internship marketplace tables.

pub mod prelude;

pub mod application;
pub mod internship;
pub mod sea_orm_active_enums;
pub mod startup;
pub mod student_profile;
pub mod user;
