//! Tests for the student profile endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::UserType;
use internhub::{
    model::student::{CreateStudentProfileDto, StudentProfileFilter, UpdateStudentProfileDto},
    server::controller::{
        student::{
            create_student, delete_student, get_current_student, get_student,
            get_student_by_user, get_students, update_student,
        },
        util::{
            extract::{ApiJson, ApiPath, ApiQuery},
            identity::CallerIdentity,
        },
    },
};

use super::*;

/// Expect 201 with the created profile
#[tokio::test]
async fn create_student_returns_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let user = test
        .user()
        .insert_user("ada@example.com", UserType::Student)
        .await?;

    let result = create_student(
        State(test.to_app_state()),
        ApiJson(CreateStudentProfileDto {
            user_id: Some(user.id),
            name: Some("Ada Lovelace".to_string()),
            school: Some("Cambridge".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Student profile created");
    assert_eq!(body["student_profile"]["user_id"], user.id);
    assert_eq!(body["student_profile"]["school"], "Cambridge");
    assert!(body["student_profile"]["major"].is_null());

    Ok(())
}

/// Expect 400 when the name is missing
#[tokio::test]
async fn create_student_fails_without_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let user = test
        .user()
        .insert_user("ada@example.com", UserType::Student)
        .await?;

    let result = create_student(
        State(test.to_app_state()),
        ApiJson(CreateStudentProfileDto {
            user_id: Some(user.id),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "user_id and name are required");

    Ok(())
}

/// Expect 404 when the referenced user does not exist
#[tokio::test]
async fn create_student_fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = create_student(
        State(test.to_app_state()),
        ApiJson(CreateStudentProfileDto {
            user_id: Some(99),
            name: Some("Ghost".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the caller's own profile
#[tokio::test]
async fn get_current_student_returns_caller_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = get_current_student(
        State(test.to_app_state()),
        CallerIdentity(market.student_user.id),
    )
    .await;

    assert!(result.is_ok());
    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["student"]["id"], market.student.id);
    assert_eq!(body["student"]["name"], "Ada Lovelace");

    Ok(())
}

/// Expect 404 when the caller has no profile
#[tokio::test]
async fn get_current_student_fails_without_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = get_current_student(
        State(test.to_app_state()),
        CallerIdentity(market.startup_user.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Student profile not found for this user");

    Ok(())
}

/// Expect the school filter to match case-insensitively and carry the owner's email
#[tokio::test]
async fn get_students_filters_by_school() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let matching = get_students(
        State(test.to_app_state()),
        ApiQuery(StudentProfileFilter {
            school: Some("mit".to_string()),
            ..Default::default()
        }),
    )
    .await;
    let other = get_students(
        State(test.to_app_state()),
        ApiQuery(StudentProfileFilter {
            school: Some("Stanford".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = read_json(matching.unwrap().into_response()).await;
    let profiles = body["student_profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["id"], market.student.id);
    assert_eq!(profiles[0]["user_email"], "student@example.com");

    let body = read_json(other.unwrap().into_response()).await;
    assert!(body["student_profiles"].as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn get_student_by_id_and_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let by_id = get_student(State(test.to_app_state()), ApiPath(market.student.id)).await;
    let by_user = get_student_by_user(
        State(test.to_app_state()),
        ApiPath(market.student_user.id),
    )
    .await;
    let missing = get_student_by_user(
        State(test.to_app_state()),
        ApiPath(market.startup_user.id),
    )
    .await;

    let body = read_json(by_id.unwrap().into_response()).await;
    assert_eq!(body["student_profile"]["user_id"], market.student_user.id);

    let body = read_json(by_user.unwrap().into_response()).await;
    assert_eq!(body["student_profile"]["id"], market.student.id);

    assert!(missing.is_err());
    let resp = missing.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect supplied fields to change, explicit null to clear and absent fields to stay
#[tokio::test]
async fn update_student_applies_patch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = update_student(
        State(test.to_app_state()),
        ApiPath(market.student.id),
        ApiJson(UpdateStudentProfileDto {
            major: Some(Some("Mathematics".to_string())),
            school: Some(None),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "Student profile updated");
    assert_eq!(body["student_profile"]["major"], "Mathematics");
    assert!(body["student_profile"]["school"].is_null());
    assert_eq!(body["student_profile"]["name"], "Ada Lovelace");

    Ok(())
}

#[tokio::test]
async fn update_student_fails_for_empty_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = update_student(
        State(test.to_app_state()),
        ApiPath(market.student.id),
        ApiJson(UpdateStudentProfileDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Provide at least one field to update");

    Ok(())
}

#[tokio::test]
async fn delete_student_then_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let deleted = delete_student(State(test.to_app_state()), ApiPath(market.student.id)).await;
    let again = delete_student(State(test.to_app_state()), ApiPath(market.student.id)).await;

    let body = read_json(deleted.unwrap().into_response()).await;
    assert_eq!(body["message"], "Student profile deleted");
    assert_eq!(body["id"], market.student.id);

    assert!(again.is_err());
    let resp = again.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
