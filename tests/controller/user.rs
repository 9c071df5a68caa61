//! Tests for the user endpoints.
//!
//! Covers sign-up, login and logout with their session side effects, the user
//! listing and detail projection, and updates and deletion.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::UserType;
use internhub::{
    model::user::{LoginDto, SignupDto, UpdateUserDto},
    server::{
        controller::{
            student::get_student,
            user::{delete_user, get_user, get_users, login, logout, signup, update_user},
            util::extract::{ApiJson, ApiPath},
        },
        model::session::user::SessionUserId,
    },
};

use super::*;

fn signup_payload(email: &str, user_type: &str) -> SignupDto {
    SignupDto {
        email: Some(email.to_string()),
        password: Some("hunter22".to_string()),
        user_type: Some(user_type.to_string()),
    }
}

/// Expect 201 with the user minus password, and the new ID stored in the session
#[tokio::test]
async fn signup_creates_user_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = signup(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(signup_payload("ada@example.com", "student")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["user_type"], "student");
    assert!(body["user"].get("password").is_none());

    let user_id = body["user"]["id"].as_i64().unwrap() as i32;
    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user_id));

    Ok(())
}

/// Expect 400 when the email is already registered
#[tokio::test]
async fn signup_fails_for_existing_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .with_user("ada@example.com", UserType::Student)
        .build()
        .await?;

    let result = signup(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(signup_payload("ada@example.com", "startup")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "User already exists");

    Ok(())
}

/// Expect 400 when user_type is outside the enumeration
#[tokio::test]
async fn signup_fails_for_unknown_user_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = signup(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(signup_payload("ada@example.com", "admin")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "user_type must be 'student' or 'startup'");

    Ok(())
}

/// Expect login with the sign-up credentials to succeed and a wrong password to give 401
#[tokio::test]
async fn login_checks_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    signup(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(signup_payload("ada@example.com", "student")),
    )
    .await
    .unwrap();

    let ok = login(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(LoginDto {
            email: Some("ada@example.com".to_string()),
            password: Some("hunter22".to_string()),
        }),
    )
    .await;
    let wrong = login(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(LoginDto {
            email: Some("ada@example.com".to_string()),
            password: Some("hunter23".to_string()),
        }),
    )
    .await;

    assert!(ok.is_ok());
    let resp = ok.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Login successful");

    assert!(wrong.is_err());
    let resp = wrong.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "Invalid password");

    Ok(())
}

/// Expect 404 for an unknown email
#[tokio::test]
async fn login_fails_for_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(LoginDto {
            email: Some("nobody@example.com".to_string()),
            password: Some("secret".to_string()),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when either credential is missing
#[tokio::test]
async fn login_fails_for_missing_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        ApiJson(LoginDto {
            email: Some("ada@example.com".to_string()),
            password: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "email and password required");

    Ok(())
}

#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

#[tokio::test]
async fn get_users_lists_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .with_user("a@example.com", UserType::Student)
        .with_user("b@example.com", UserType::Startup)
        .build()
        .await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let body = read_json(result.unwrap().into_response()).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "a@example.com");
    assert!(users[0].get("password").is_none());

    Ok(())
}

/// Expect the detail projection to carry the IDs of the rows the user owns
#[tokio::test]
async fn get_user_includes_profile_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let student = get_user(
        State(test.to_app_state()),
        ApiPath(market.student_user.id),
    )
    .await;
    let founder = get_user(
        State(test.to_app_state()),
        ApiPath(market.startup_user.id),
    )
    .await;

    let body = read_json(student.unwrap().into_response()).await;
    assert_eq!(body["user"]["student_profile_id"], market.student.id);
    assert!(body["user"]["startup_id"].is_null());

    let body = read_json(founder.unwrap().into_response()).await;
    assert_eq!(body["user"]["startup_id"], market.startup.id);
    assert!(body["user"]["student_profile_id"].is_null());

    Ok(())
}

#[tokio::test]
async fn get_user_fails_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = get_user(State(test.to_app_state()), ApiPath(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["message"], "User not found");

    Ok(())
}

#[tokio::test]
async fn update_user_changes_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let user = test
        .user()
        .insert_user("old@example.com", UserType::Student)
        .await?;

    let result = update_user(
        State(test.to_app_state()),
        ApiPath(user.id),
        ApiJson(UpdateUserDto {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "User updated");
    assert_eq!(body["user"]["email"], "new@example.com");
    assert_eq!(body["user"]["user_type"], "student");

    Ok(())
}

/// Expect 400 when no field is supplied
#[tokio::test]
async fn update_user_fails_for_empty_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let user = test
        .user()
        .insert_user("old@example.com", UserType::Student)
        .await?;

    let result = update_user(
        State(test.to_app_state()),
        ApiPath(user.id),
        ApiJson(UpdateUserDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(
        body["message"],
        "Provide email, user_type or password to update"
    );

    Ok(())
}

#[tokio::test]
async fn update_user_fails_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;

    let result = update_user(
        State(test.to_app_state()),
        ApiPath(42),
        ApiJson(UpdateUserDto {
            user_type: Some("startup".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect deletion to cascade to the user's student profile
#[tokio::test]
async fn delete_user_removes_owned_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_marketplace_tables().build().await?;
    let market = test.marketplace().insert_marketplace().await?;

    let result = delete_user(
        State(test.to_app_state()),
        ApiPath(market.student_user.id),
    )
    .await;

    assert!(result.is_ok());
    let body = read_json(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "User deleted");
    assert_eq!(body["id"], market.student_user.id);

    let profile = get_student(State(test.to_app_state()), ApiPath(market.student.id)).await;
    assert!(profile.is_err());

    let again = delete_user(
        State(test.to_app_state()),
        ApiPath(market.student_user.id),
    )
    .await;
    assert!(again.is_err());
    let resp = again.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
