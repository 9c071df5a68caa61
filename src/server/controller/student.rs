use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        student::{
            CreateStudentProfileDto, CurrentStudentDto, StudentProfileDto,
            StudentProfileEnvelope, StudentProfileFilter, StudentProfilesDto,
            UpdateStudentProfileDto,
        },
    },
    server::{
        controller::util::{
            extract::{ApiJson, ApiPath, ApiQuery},
            identity::CallerIdentity,
        },
        error::Error,
        model::app::AppState,
        service::student_profile::StudentProfileService,
    },
};

pub static STUDENT_TAG: &str = "students";

fn profile_not_found() -> Error {
    Error::NotFound("Student profile not found".to_string())
}

/// Create a student profile
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentProfileDto,
    responses(
        (status = 201, description = "Student profile created", body = StudentProfileEnvelope),
        (status = 400, description = "Missing user_id or name, or the user already has a profile", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStudentProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let service = StudentProfileService::new(&state.db);

    let profile = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(StudentProfileEnvelope {
            message: Some("Student profile created".to_string()),
            student_profile: profile.into(),
        }),
    ))
}

/// Get the profile of the calling student
///
/// The caller is identified by the `X-User-ID` header.
#[utoipa::path(
    get,
    path = "/api/students/me",
    tag = STUDENT_TAG,
    params(("X-User-ID" = i32, Header, description = "ID of the calling user")),
    responses(
        (status = 200, description = "Profile of the caller", body = CurrentStudentDto),
        (status = 400, description = "Header is not a valid user ID", body = ErrorDto),
        (status = 401, description = "Header missing or not matching the session", body = ErrorDto),
        (status = 404, description = "Caller has no student profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_student(
    State(state): State<AppState>,
    CallerIdentity(user_id): CallerIdentity,
) -> Result<impl IntoResponse, Error> {
    let service = StudentProfileService::new(&state.db);

    let profile = service.get_by_user_id(user_id).await?.ok_or_else(|| {
        Error::NotFound("Student profile not found for this user".to_string())
    })?;

    Ok((
        StatusCode::OK,
        Json(CurrentStudentDto {
            student: profile.into(),
        }),
    ))
}

/// List student profiles, newest first
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentProfileFilter),
    responses(
        (status = 200, description = "Matching profiles with the owner's email", body = StudentProfilesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<StudentProfileFilter>,
) -> Result<impl IntoResponse, Error> {
    let service = StudentProfileService::new(&state.db);

    let student_profiles: Vec<StudentProfileDto> = service
        .get_all(filter)
        .await?
        .into_iter()
        .map(StudentProfileDto::from)
        .collect();

    Ok((StatusCode::OK, Json(StudentProfilesDto { student_profiles })))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student profile ID")),
    responses(
        (status = 200, description = "Student profile found", body = StudentProfileEnvelope),
        (status = 404, description = "Student profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = StudentProfileService::new(&state.db);

    let profile = service
        .get_by_id(profile_id)
        .await?
        .ok_or_else(profile_not_found)?;

    Ok((
        StatusCode::OK,
        Json(StudentProfileEnvelope {
            message: None,
            student_profile: profile.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/students/user/{user_id}",
    tag = STUDENT_TAG,
    params(("user_id" = i32, Path, description = "ID of the owning user")),
    responses(
        (status = 200, description = "Student profile found", body = StudentProfileEnvelope),
        (status = 404, description = "User has no student profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = StudentProfileService::new(&state.db);

    let profile = service.get_by_user_id(user_id).await?.ok_or_else(|| {
        Error::NotFound("Student profile not found for this user".to_string())
    })?;

    Ok((
        StatusCode::OK,
        Json(StudentProfileEnvelope {
            message: None,
            student_profile: profile.into(),
        }),
    ))
}

/// Update the supplied profile fields, `null` clears an optional field
#[utoipa::path(
    patch,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student profile ID")),
    request_body = UpdateStudentProfileDto,
    responses(
        (status = 200, description = "Student profile updated", body = StudentProfileEnvelope),
        (status = 400, description = "No field supplied", body = ErrorDto),
        (status = 404, description = "Student profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateStudentProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let service = StudentProfileService::new(&state.db);

    let profile = service
        .update(profile_id, payload)
        .await?
        .ok_or_else(profile_not_found)?;

    Ok((
        StatusCode::OK,
        Json(StudentProfileEnvelope {
            message: Some("Student profile updated".to_string()),
            student_profile: profile.into(),
        }),
    ))
}

/// Delete a student profile along with its applications
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student profile ID")),
    responses(
        (status = 200, description = "Student profile deleted", body = DeletedDto),
        (status = 404, description = "Student profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(profile_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = StudentProfileService::new(&state.db);

    let result = service.delete(profile_id).await?;
    if result.rows_affected == 0 {
        return Err(profile_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Student profile deleted".to_string(),
            id: profile_id,
        }),
    ))
}
