//! Tests for the startup endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::UserType;
use internhub::{
    model::startup::{CreateStartupDto, StartupFilter, UpdateStartupDto},
    server::controller::{
        startup::{
            create_startup, delete_startup, get_startup, get_startups, get_startups_by_user,
            update_startup,
        },
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

use super::*;

#[tokio::test]
async fn create_startup_returns_startup() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let user = test
        .user()
        .insert_user("founder@example.com", UserType::Startup)
        .await?;

    let result = create_startup(
        State(test.to_app_state()),
        ApiJson(CreateStartupDto {
            user_id: Some(user.id),
            name: Some("Acme".to_string()),
            website: Some("https://acme.dev".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Startup created");
    assert_eq!(body["startup"]["name"], "Acme");
    assert!(body["startup"]["description"].is_null());

    Ok(())
}

/// Expect a second startup for the same user to be rejected
#[tokio::test]
async fn create_startup_fails_for_duplicate_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = create_startup(
        State(test.to_app_state()),
        ApiJson(CreateStartupDto {
            user_id: Some(market.startup_user.id),
            name: Some("Acme Two".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Startup already exists for this user");

    Ok(())
}

/// Expect the name filter to match case-insensitive substrings
#[tokio::test]
async fn get_startups_filters_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = get_startups(
        State(test.to_app_state()),
        ApiQuery(StartupFilter {
            name: Some("acm".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    let startups = body["startups"].as_array().unwrap();
    assert_eq!(startups.len(), 1);
    assert_eq!(startups[0]["id"], market.startup.id);
    assert_eq!(startups[0]["user_email"], "founder@example.com");

    Ok(())
}

/// Expect an empty filter value to be ignored
#[tokio::test]
async fn get_startups_ignores_empty_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    test.marketplace().insert_marketplace().await?;

    let result = get_startups(
        State(test.to_app_state()),
        ApiQuery(StartupFilter {
            website: Some(String::new()),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["startups"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn get_startup_by_id_and_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let by_id = get_startup(State(test.to_app_state()), ApiPath(market.startup.id)).await;
    let by_user = get_startups_by_user(
        State(test.to_app_state()),
        ApiPath(market.startup_user.id),
    )
    .await;
    let none = get_startups_by_user(
        State(test.to_app_state()),
        ApiPath(market.student_user.id),
    )
    .await;
    let missing = get_startup(State(test.to_app_state()), ApiPath(999)).await;

    let body = read_json(by_id.unwrap().into_response()).await;
    assert_eq!(body["startup"]["name"], "Acme");

    let body = read_json(by_user.unwrap().into_response()).await;
    assert_eq!(body["startups"][0]["id"], market.startup.id);

    let body = read_json(none.unwrap().into_response()).await;
    assert!(body["startups"].as_array().unwrap().is_empty());

    assert!(missing.is_err());
    let resp = missing.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Startup not found");

    Ok(())
}

#[tokio::test]
async fn update_startup_clears_website() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = update_startup(
        State(test.to_app_state()),
        ApiPath(market.startup.id),
        ApiJson(UpdateStartupDto {
            website: Some(None),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "Startup updated");
    assert!(body["startup"]["website"].is_null());
    assert_eq!(body["startup"]["name"], "Acme");

    Ok(())
}

#[tokio::test]
async fn update_startup_fails_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = update_startup(
        State(test.to_app_state()),
        ApiPath(999),
        ApiJson(UpdateStartupDto {
            name: Some("Nobody".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the startup's internships to go with it
#[tokio::test]
async fn delete_startup_cascades() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = delete_startup(State(test.to_app_state()), ApiPath(market.startup.id)).await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "Startup deleted");
    assert_eq!(body["id"], market.startup.id);

    let internship = internhub::server::controller::internship::get_internship(
        State(test.to_app_state()),
        ApiPath(market.internship.id),
    )
    .await;
    assert!(internship.is_err());

    Ok(())
}
