use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, MessageDto},
        user::{
            LoginDto, SignupDto, UpdateUserDto, UserDetailEnvelope, UserDto, UserEnvelope,
            UsersDto,
        },
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "users";

fn user_not_found() -> Error {
    Error::NotFound("User not found".to_string())
}

/// Register a new student or startup account
///
/// The new user's ID is stored in the session.
#[utoipa::path(
    post,
    path = "/api/users/signup",
    tag = USER_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Missing field, unknown user_type or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.signup(payload).await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(user_id = user.id, "Created user");

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            message: Some("User created successfully".to_string()),
            user: user.into(),
        }),
    ))
}

/// Log in with email and password
///
/// The returned user object is the caller's identity; its `id` is expected back
/// in the `X-User-ID` header on later requests.
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = UserEnvelope),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.login(payload).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(UserEnvelope {
            message: Some("Login successful".to_string()),
            user: user.into(),
        }),
    ))
}

/// Log out by clearing the session
#[utoipa::path(
    post,
    path = "/api/users/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// List all users ordered by ID
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users, passwords excluded", body = UsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users: Vec<UserDto> = user_service
        .get_all()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok((StatusCode::OK, Json(UsersDto { users })))
}

/// Get a user with the IDs of their student profile and startup
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDetailEnvelope),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service
        .get_detail(user_id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok((StatusCode::OK, Json(UserDetailEnvelope { user: user.into() })))
}

/// Update a user's email, type or password
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "No field supplied, unknown user_type or email already in use", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service
        .update(user_id, payload)
        .await?
        .ok_or_else(user_not_found)?;

    Ok((
        StatusCode::OK,
        Json(UserEnvelope {
            message: Some("User updated".to_string()),
            user: user.into(),
        }),
    ))
}

/// Delete a user along with their profile, startup and everything referencing them
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeletedDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let result = user_service.delete(user_id).await?;
    if result.rows_affected == 0 {
        return Err(user_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "User deleted".to_string(),
            id: user_id,
        }),
    ))
}
