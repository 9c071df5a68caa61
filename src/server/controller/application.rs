use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        application::{
            ApplicationDto, ApplicationEnvelope, ApplicationsDto, CreateApplicationDto,
            StudentApplicationDto, StudentApplicationsDto, UpdateApplicationDto,
        },
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::Error,
        model::app::AppState,
        service::application::ApplicationService,
    },
};

pub static APPLICATION_TAG: &str = "applications";

fn application_not_found() -> Error {
    Error::NotFound("Application not found".to_string())
}

/// Apply to an internship
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application created", body = ApplicationEnvelope),
        (status = 400, description = "Missing foreign ID, unknown status or already applied", body = ErrorDto),
        (status = 404, description = "Student, internship or startup not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let service = ApplicationService::new(&state.db);

    let application = service.create(payload).await?;

    tracing::info!(
        application_id = application.id,
        student_id = application.student_id,
        internship_id = application.internship_id,
        "Created application"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApplicationEnvelope {
            message: Some("Application created successfully".to_string()),
            application: application.into(),
        }),
    ))
}

/// List all applications, most recent first
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Applications with student, internship and startup names", body = ApplicationsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = ApplicationService::new(&state.db);

    let applications: Vec<ApplicationDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(ApplicationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(ApplicationsDto { applications })))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application found", body = ApplicationEnvelope),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    ApiPath(application_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ApplicationService::new(&state.db);

    let application = service
        .get_by_id(application_id)
        .await?
        .ok_or_else(application_not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApplicationEnvelope {
            message: None,
            application: application.into(),
        }),
    ))
}

/// List a student's applications with internship and startup details
#[utoipa::path(
    get,
    path = "/api/applications/student/{student_id}",
    tag = APPLICATION_TAG,
    params(("student_id" = i32, Path, description = "Student profile ID")),
    responses(
        (status = 200, description = "Applications of the student, possibly empty", body = StudentApplicationsDto),
        (status = 400, description = "Student ID is not a positive integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications_by_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ApplicationService::new(&state.db);

    let applications: Vec<StudentApplicationDto> = service
        .get_by_student_id(student_id)
        .await?
        .into_iter()
        .map(StudentApplicationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(StudentApplicationsDto { applications })))
}

/// List the applications a startup received
#[utoipa::path(
    get,
    path = "/api/applications/startup/{startup_id}",
    tag = APPLICATION_TAG,
    params(("startup_id" = i32, Path, description = "Startup ID")),
    responses(
        (status = 200, description = "Applications with student and internship names, possibly empty", body = ApplicationsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications_by_startup(
    State(state): State<AppState>,
    ApiPath(startup_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ApplicationService::new(&state.db);

    let applications: Vec<ApplicationDto> = service
        .get_by_startup_id(startup_id)
        .await?
        .into_iter()
        .map(ApplicationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(ApplicationsDto { applications })))
}

/// Move an application to another status and/or replace its notes
#[utoipa::path(
    patch,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    request_body = UpdateApplicationDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationEnvelope),
        (status = 400, description = "Neither field supplied or unknown status", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application(
    State(state): State<AppState>,
    ApiPath(application_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let service = ApplicationService::new(&state.db);

    let application = service
        .update(application_id, payload)
        .await?
        .ok_or_else(application_not_found)?;

    Ok((
        StatusCode::OK,
        Json(ApplicationEnvelope {
            message: Some("Application updated".to_string()),
            application: application.into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application deleted", body = DeletedDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    ApiPath(application_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ApplicationService::new(&state.db);

    let result = service.delete(application_id).await?;
    if result.rows_affected == 0 {
        return Err(application_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Application deleted".to_string(),
            id: application_id,
        }),
    ))
}
