//! Tests for the internship endpoints.
//!
//! Includes the listing filters: exact skill membership, status validation and
//! the free-text search over title and description.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::InternshipStatus;
use internhub::{
    model::internship::{CreateInternshipDto, InternshipFilter, SkillsInput, UpdateInternshipDto},
    server::controller::{
        internship::{
            create_internship, delete_internship, get_internship, get_internships,
            get_internships_by_startup, update_internship,
        },
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};
use serde_json::json;

use super::*;

/// Expect omitted skills to be stored as an empty list and status to default to Active
#[tokio::test]
async fn create_internship_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = create_internship(
        State(test.to_app_state()),
        ApiJson(CreateInternshipDto {
            startup_id: Some(market.startup.id),
            title: Some("Frontend Intern".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Internship created");
    assert_eq!(body["internship"]["required_skills"], json!([]));
    assert_eq!(body["internship"]["status"], "Active");

    Ok(())
}

/// Expect comma separated skills to be trimmed and empty entries dropped
#[tokio::test]
async fn create_internship_normalizes_skills() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = create_internship(
        State(test.to_app_state()),
        ApiJson(CreateInternshipDto {
            startup_id: Some(market.startup.id),
            title: Some("Frontend Intern".to_string()),
            required_skills: Some(SkillsInput::Text("React, Node, ".to_string())),
            status: Some("Draft".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["internship"]["required_skills"], json!(["React", "Node"]));
    assert_eq!(body["internship"]["status"], "Draft");

    Ok(())
}

#[tokio::test]
async fn create_internship_fails_for_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = create_internship(
        State(test.to_app_state()),
        ApiJson(CreateInternshipDto {
            startup_id: Some(market.startup.id),
            title: Some("Frontend Intern".to_string()),
            status: Some("Open".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "status must be one of: Active, Closed, Draft");

    Ok(())
}

#[tokio::test]
async fn create_internship_fails_for_unknown_startup() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = create_internship(
        State(test.to_app_state()),
        ApiJson(CreateInternshipDto {
            startup_id: Some(999),
            title: Some("Frontend Intern".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Startup not found");

    Ok(())
}

/// Expect skill matching to be exact and case sensitive
#[tokio::test]
async fn get_internships_filters_by_exact_skill() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    let react = test
        .internship()
        .insert_internship(
            market.startup.id,
            "Frontend Intern",
            &["React", "CSS"],
            InternshipStatus::Active,
        )
        .await?;
    test.internship()
        .insert_internship(
            market.startup.id,
            "Native Intern",
            &["React Native"],
            InternshipStatus::Active,
        )
        .await?;

    let exact = get_internships(
        State(test.to_app_state()),
        ApiQuery(InternshipFilter {
            skill: Some("React".to_string()),
            ..Default::default()
        }),
    )
    .await;
    let lowercase = get_internships(
        State(test.to_app_state()),
        ApiQuery(InternshipFilter {
            skill: Some("react".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(exact.unwrap().into_response()).await;
    let internships = body["internships"].as_array().unwrap();
    assert_eq!(internships.len(), 1);
    assert_eq!(internships[0]["id"], react.id);
    assert_eq!(internships[0]["startup_name"], "Acme");

    let body = read_json(lowercase.unwrap().into_response()).await;
    assert!(body["internships"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect status and free-text filters to combine
#[tokio::test]
async fn get_internships_combines_filters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    test.internship()
        .insert_internship(
            market.startup.id,
            "Backend Intern (closed)",
            &["Rust"],
            InternshipStatus::Closed,
        )
        .await?;

    let result = get_internships(
        State(test.to_app_state()),
        ApiQuery(InternshipFilter {
            status: Some("Active".to_string()),
            q: Some("backend".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    let internships = body["internships"].as_array().unwrap();
    assert_eq!(internships.len(), 1);
    assert_eq!(internships[0]["id"], market.internship.id);

    Ok(())
}

#[tokio::test]
async fn get_internships_fails_for_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = get_internships(
        State(test.to_app_state()),
        ApiQuery(InternshipFilter {
            status: Some("active".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn get_internship_includes_startup() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = get_internship(State(test.to_app_state()), ApiPath(market.internship.id)).await;
    let missing = get_internship(State(test.to_app_state()), ApiPath(999)).await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["internship"]["title"], "Backend Intern");
    assert_eq!(body["internship"]["startup_name"], "Acme");
    assert_eq!(body["internship"]["startup_website"], "https://example.com");
    assert_eq!(body["internship"]["required_skills"], json!(["Rust", "SQL"]));

    assert!(missing.is_err());
    let resp = missing.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Internship not found");

    Ok(())
}

#[tokio::test]
async fn get_internships_by_startup_lists_postings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = get_internships_by_startup(
        State(test.to_app_state()),
        ApiPath(market.startup.id),
    )
    .await;
    let empty = get_internships_by_startup(State(test.to_app_state()), ApiPath(999)).await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["internships"].as_array().unwrap().len(), 1);

    let body = read_json(empty.unwrap().into_response()).await;
    assert!(body["internships"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect a null skill list to clear the column and other fields to stay
#[tokio::test]
async fn update_internship_clears_skills() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = update_internship(
        State(test.to_app_state()),
        ApiPath(market.internship.id),
        ApiJson(UpdateInternshipDto {
            required_skills: Some(None),
            status: Some("Closed".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "Internship updated");
    assert_eq!(body["internship"]["required_skills"], json!([]));
    assert_eq!(body["internship"]["status"], "Closed");
    assert_eq!(body["internship"]["title"], "Backend Intern");

    Ok(())
}

#[tokio::test]
async fn update_internship_fails_for_empty_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = update_internship(
        State(test.to_app_state()),
        ApiPath(market.internship.id),
        ApiJson(UpdateInternshipDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn delete_internship_then_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let deleted =
        delete_internship(State(test.to_app_state()), ApiPath(market.internship.id)).await;
    let again = delete_internship(State(test.to_app_state()), ApiPath(market.internship.id)).await;

    let body = read_json(deleted.unwrap().into_response()).await;
    assert_eq!(body["message"], "Internship deleted");

    assert!(again.is_err());
    let resp = again.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
