use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        startup::{
            CreateStartupDto, StartupDto, StartupEnvelope, StartupFilter, StartupsDto,
            UpdateStartupDto,
        },
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath, ApiQuery},
        error::Error,
        model::app::AppState,
        service::startup::StartupService,
    },
};

pub static STARTUP_TAG: &str = "startups";

fn startup_not_found() -> Error {
    Error::NotFound("Startup not found".to_string())
}

#[utoipa::path(
    post,
    path = "/api/startups",
    tag = STARTUP_TAG,
    request_body = CreateStartupDto,
    responses(
        (status = 201, description = "Startup created", body = StartupEnvelope),
        (status = 400, description = "Missing user_id or name, or the user already has a startup", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_startup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStartupDto>,
) -> Result<impl IntoResponse, Error> {
    let service = StartupService::new(&state.db);

    let startup = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(StartupEnvelope {
            message: Some("Startup created".to_string()),
            startup: startup.into(),
        }),
    ))
}

/// List startups, newest first
#[utoipa::path(
    get,
    path = "/api/startups",
    tag = STARTUP_TAG,
    params(StartupFilter),
    responses(
        (status = 200, description = "Matching startups with the owner's email", body = StartupsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_startups(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<StartupFilter>,
) -> Result<impl IntoResponse, Error> {
    let service = StartupService::new(&state.db);

    let startups: Vec<StartupDto> = service
        .get_all(filter)
        .await?
        .into_iter()
        .map(StartupDto::from)
        .collect();

    Ok((StatusCode::OK, Json(StartupsDto { startups })))
}

#[utoipa::path(
    get,
    path = "/api/startups/{id}",
    tag = STARTUP_TAG,
    params(("id" = i32, Path, description = "Startup ID")),
    responses(
        (status = 200, description = "Startup found", body = StartupEnvelope),
        (status = 404, description = "Startup not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_startup(
    State(state): State<AppState>,
    ApiPath(startup_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = StartupService::new(&state.db);

    let startup = service
        .get_by_id(startup_id)
        .await?
        .ok_or_else(startup_not_found)?;

    Ok((
        StatusCode::OK,
        Json(StartupEnvelope {
            message: None,
            startup: startup.into(),
        }),
    ))
}

/// List the startups owned by a user
#[utoipa::path(
    get,
    path = "/api/startups/user/{user_id}",
    tag = STARTUP_TAG,
    params(("user_id" = i32, Path, description = "ID of the owning user")),
    responses(
        (status = 200, description = "Startups of the user, possibly empty", body = StartupsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_startups_by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = StartupService::new(&state.db);

    let startups: Vec<StartupDto> = service
        .get_by_user_id(user_id)
        .await?
        .into_iter()
        .map(StartupDto::from)
        .collect();

    Ok((StatusCode::OK, Json(StartupsDto { startups })))
}

#[utoipa::path(
    patch,
    path = "/api/startups/{id}",
    tag = STARTUP_TAG,
    params(("id" = i32, Path, description = "Startup ID")),
    request_body = UpdateStartupDto,
    responses(
        (status = 200, description = "Startup updated", body = StartupEnvelope),
        (status = 400, description = "No field supplied", body = ErrorDto),
        (status = 404, description = "Startup not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_startup(
    State(state): State<AppState>,
    ApiPath(startup_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateStartupDto>,
) -> Result<impl IntoResponse, Error> {
    let service = StartupService::new(&state.db);

    let startup = service
        .update(startup_id, payload)
        .await?
        .ok_or_else(startup_not_found)?;

    Ok((
        StatusCode::OK,
        Json(StartupEnvelope {
            message: Some("Startup updated".to_string()),
            startup: startup.into(),
        }),
    ))
}

/// Delete a startup along with its internships and their applications
#[utoipa::path(
    delete,
    path = "/api/startups/{id}",
    tag = STARTUP_TAG,
    params(("id" = i32, Path, description = "Startup ID")),
    responses(
        (status = 200, description = "Startup deleted", body = DeletedDto),
        (status = 404, description = "Startup not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_startup(
    State(state): State<AppState>,
    ApiPath(startup_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = StartupService::new(&state.db);

    let result = service.delete(startup_id).await?;
    if result.rows_affected == 0 {
        return Err(startup_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Startup deleted".to_string(),
            id: startup_id,
        }),
    ))
}
