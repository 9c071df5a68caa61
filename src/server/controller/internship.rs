use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        internship::{
            CreateInternshipDto, InternshipDto, InternshipEnvelope, InternshipFilter,
            InternshipsDto, UpdateInternshipDto,
        },
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath, ApiQuery},
        error::Error,
        model::app::AppState,
        service::internship::InternshipService,
    },
};

pub static INTERNSHIP_TAG: &str = "internships";

fn internship_not_found() -> Error {
    Error::NotFound("Internship not found".to_string())
}

/// Post an internship
///
/// `required_skills` accepts either a comma separated string or a list of strings.
#[utoipa::path(
    post,
    path = "/api/internships",
    tag = INTERNSHIP_TAG,
    request_body = CreateInternshipDto,
    responses(
        (status = 201, description = "Internship created", body = InternshipEnvelope),
        (status = 400, description = "Missing startup_id or title, or unknown status", body = ErrorDto),
        (status = 404, description = "Startup not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_internship(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateInternshipDto>,
) -> Result<impl IntoResponse, Error> {
    let service = InternshipService::new(&state.db);

    let internship = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(InternshipEnvelope {
            message: Some("Internship created".to_string()),
            internship: internship.into(),
        }),
    ))
}

/// List internships, most recently posted first
///
/// All supplied filters must match.
#[utoipa::path(
    get,
    path = "/api/internships",
    tag = INTERNSHIP_TAG,
    params(InternshipFilter),
    responses(
        (status = 200, description = "Matching internships with startup name and website", body = InternshipsDto),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_internships(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<InternshipFilter>,
) -> Result<impl IntoResponse, Error> {
    let service = InternshipService::new(&state.db);

    let internships: Vec<InternshipDto> = service
        .get_all(filter)
        .await?
        .into_iter()
        .map(InternshipDto::from)
        .collect();

    Ok((StatusCode::OK, Json(InternshipsDto { internships })))
}

#[utoipa::path(
    get,
    path = "/api/internships/{id}",
    tag = INTERNSHIP_TAG,
    params(("id" = i32, Path, description = "Internship ID")),
    responses(
        (status = 200, description = "Internship found", body = InternshipEnvelope),
        (status = 404, description = "Internship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_internship(
    State(state): State<AppState>,
    ApiPath(internship_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = InternshipService::new(&state.db);

    let internship = service
        .get_by_id(internship_id)
        .await?
        .ok_or_else(internship_not_found)?;

    Ok((
        StatusCode::OK,
        Json(InternshipEnvelope {
            message: None,
            internship: internship.into(),
        }),
    ))
}

/// List the internships posted by a startup
#[utoipa::path(
    get,
    path = "/api/internships/startup/{startup_id}",
    tag = INTERNSHIP_TAG,
    params(("startup_id" = i32, Path, description = "Startup ID")),
    responses(
        (status = 200, description = "Internships of the startup, possibly empty", body = InternshipsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_internships_by_startup(
    State(state): State<AppState>,
    ApiPath(startup_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = InternshipService::new(&state.db);

    let internships: Vec<InternshipDto> = service
        .get_by_startup_id(startup_id)
        .await?
        .into_iter()
        .map(InternshipDto::from)
        .collect();

    Ok((StatusCode::OK, Json(InternshipsDto { internships })))
}

#[utoipa::path(
    patch,
    path = "/api/internships/{id}",
    tag = INTERNSHIP_TAG,
    params(("id" = i32, Path, description = "Internship ID")),
    request_body = UpdateInternshipDto,
    responses(
        (status = 200, description = "Internship updated", body = InternshipEnvelope),
        (status = 400, description = "No field supplied or unknown status", body = ErrorDto),
        (status = 404, description = "Internship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_internship(
    State(state): State<AppState>,
    ApiPath(internship_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateInternshipDto>,
) -> Result<impl IntoResponse, Error> {
    let service = InternshipService::new(&state.db);

    let internship = service
        .update(internship_id, payload)
        .await?
        .ok_or_else(internship_not_found)?;

    Ok((
        StatusCode::OK,
        Json(InternshipEnvelope {
            message: Some("Internship updated".to_string()),
            internship: internship.into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/internships/{id}",
    tag = INTERNSHIP_TAG,
    params(("id" = i32, Path, description = "Internship ID")),
    responses(
        (status = 200, description = "Internship deleted", body = DeletedDto),
        (status = 404, description = "Internship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_internship(
    State(state): State<AppState>,
    ApiPath(internship_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = InternshipService::new(&state.db);

    let result = service.delete(internship_id).await?;
    if result.rows_affected == 0 {
        return Err(internship_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Internship deleted".to_string(),
            id: internship_id,
        }),
    ))
}
