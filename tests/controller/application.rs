//! Tests for the application endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use internhub::{
    model::application::{CreateApplicationDto, UpdateApplicationDto},
    server::controller::{
        application::{
            create_application, delete_application, get_application, get_applications,
            get_applications_by_startup, get_applications_by_student, update_application,
        },
        util::extract::{ApiJson, ApiPath},
    },
};

use super::*;

fn apply(market: &Marketplace) -> CreateApplicationDto {
    CreateApplicationDto {
        student_id: Some(market.student.id),
        internship_id: Some(market.internship.id),
        startup_id: Some(market.startup.id),
        ..Default::default()
    }
}

/// Expect 201 with status defaulting to Applied and the foreign ids echoed back
#[tokio::test]
async fn create_application_defaults_to_applied() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = create_application(State(test.to_app_state()), ApiJson(apply(&market))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Application created successfully");
    assert_eq!(body["application"]["status"], "Applied");
    assert_eq!(body["application"]["student_id"], market.student.id);
    assert_eq!(body["application"]["internship_id"], market.internship.id);
    assert_eq!(body["application"]["startup_id"], market.startup.id);

    Ok(())
}

/// Expect the same student applying twice to the same internship to be rejected
#[tokio::test]
async fn create_application_fails_for_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    create_application(State(test.to_app_state()), ApiJson(apply(&market)))
        .await
        .unwrap();

    let result = create_application(State(test.to_app_state()), ApiJson(apply(&market))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Application already exists");

    Ok(())
}

#[tokio::test]
async fn create_application_fails_for_missing_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = create_application(
        State(test.to_app_state()),
        ApiJson(CreateApplicationDto {
            startup_id: None,
            ..apply(&market)
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(
        body["message"],
        "student_id, internship_id and startup_id are required"
    );

    Ok(())
}

#[tokio::test]
async fn create_application_fails_for_unknown_internship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = create_application(
        State(test.to_app_state()),
        ApiJson(CreateApplicationDto {
            internship_id: Some(999),
            ..apply(&market)
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect listings to carry the joined student, internship and startup names
#[tokio::test]
async fn get_applications_includes_names() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    let application = test
        .application()
        .insert_application(market.student.id, market.internship.id, market.startup.id)
        .await?;

    let all = get_applications(State(test.to_app_state())).await;
    let by_startup = get_applications_by_startup(
        State(test.to_app_state()),
        ApiPath(market.startup.id),
    )
    .await;
    let single = get_application(State(test.to_app_state()), ApiPath(application.id)).await;

    let body = read_json(all.unwrap().into_response()).await;
    let applications = body["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["student_name"], "Ada Lovelace");
    assert_eq!(applications[0]["internship_title"], "Backend Intern");
    assert_eq!(applications[0]["startup_name"], "Acme");

    let body = read_json(by_startup.unwrap().into_response()).await;
    assert_eq!(body["applications"][0]["id"], application.id);

    let body = read_json(single.unwrap().into_response()).await;
    assert_eq!(body["application"]["id"], application.id);

    Ok(())
}

/// Expect a student's applications to expose the posting details
#[tokio::test]
async fn get_applications_by_student_includes_posting() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    let application = test
        .application()
        .insert_application(market.student.id, market.internship.id, market.startup.id)
        .await?;

    let result = get_applications_by_student(
        State(test.to_app_state()),
        ApiPath(market.student.id),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    let applications = body["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["application_id"], application.id);
    assert_eq!(applications[0]["internship_title"], "Backend Intern");
    assert_eq!(applications[0]["internship_location"], "Remote");
    assert_eq!(applications[0]["startup_website"], "https://example.com");

    Ok(())
}

#[tokio::test]
async fn get_applications_by_student_fails_for_invalid_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = get_applications_by_student(State(test.to_app_state()), ApiPath(0)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Valid student_id is required");

    Ok(())
}

#[tokio::test]
async fn update_application_changes_status_and_notes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    let application = test
        .application()
        .insert_application(market.student.id, market.internship.id, market.startup.id)
        .await?;

    let result = update_application(
        State(test.to_app_state()),
        ApiPath(application.id),
        ApiJson(UpdateApplicationDto {
            status: Some("Interviewing".to_string()),
            notes: Some(Some("Strong candidate".to_string())),
        }),
    )
    .await;

    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "Application updated");
    assert_eq!(body["application"]["status"], "Interviewing");
    assert_eq!(body["application"]["notes"], "Strong candidate");

    Ok(())
}

/// Expect a status outside the enumeration to be rejected and the row left unchanged
#[tokio::test]
async fn update_application_rejects_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    let application = test
        .application()
        .insert_application(market.student.id, market.internship.id, market.startup.id)
        .await?;

    let result = update_application(
        State(test.to_app_state()),
        ApiPath(application.id),
        ApiJson(UpdateApplicationDto {
            status: Some("Hired".to_string()),
            notes: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(
        body["message"],
        "status must be one of: Applied, Reviewing, Interviewing, Offer, Rejected"
    );

    let current = get_application(State(test.to_app_state()), ApiPath(application.id)).await;
    let body = read_json(current.unwrap().into_response()).await;
    assert_eq!(body["application"]["status"], "Applied");

    Ok(())
}

#[tokio::test]
async fn delete_application_then_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;
    let application = test
        .application()
        .insert_application(market.student.id, market.internship.id, market.startup.id)
        .await?;

    let deleted = delete_application(State(test.to_app_state()), ApiPath(application.id)).await;
    let again = get_application(State(test.to_app_state()), ApiPath(application.id)).await;

    let body = read_json(deleted.unwrap().into_response()).await;
    assert_eq!(body["message"], "Application deleted");
    assert_eq!(body["id"], application.id);

    assert!(again.is_err());
    let resp = again.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Application not found");

    Ok(())
}
