//! Data access layer repositories.
//!
//! One repository per table. Repositories only translate between Rust values
//! and SQL: they return `DbErr` untouched and leave validation and constraint
//! classification to the service layer.

pub mod application;
pub mod internship;
pub mod startup;
pub mod student_profile;
pub mod user;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, Condition,
};

/// Case-insensitive substring match of `needle` against `column`.
///
/// Both sides are lowered so the comparison behaves the same on Postgres and SQLite.
pub(crate) fn contains_ignore_case<C: ColumnTrait>(column: C, needle: &str) -> Condition {
    let pattern = format!("%{}%", needle.to_lowercase());

    Condition::all().add(Expr::expr(Func::lower(Expr::col(column.as_column_ref()))).like(pattern))
}

/// Filters out absent and empty query parameters.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
