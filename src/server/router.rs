//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI
//! specification. Swagger UI is served at `/api/docs` and the generated
//! document at `/api/docs/openapi.json`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` group so that
/// utoipa-axum merges them into a single method router.
///
/// # Registered Endpoints
/// - `/api/users`: signup, login, logout, list, get, update (PUT), delete
/// - `/api/students`: create, list, `me`, get, by user, update, delete
/// - `/api/startups`: create, list, get, by user, update, delete
/// - `/api/internships`: create, filtered list, get, by startup, update, delete
/// - `/api/applications`: create, list, get, by student, by startup, update, delete
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "InternHub", description = "Internship marketplace API"),
        tags(
            (name = controller::user::USER_TAG, description = "User accounts and sessions"),
            (name = controller::student::STUDENT_TAG, description = "Student profiles"),
            (name = controller::startup::STARTUP_TAG, description = "Startup profiles"),
            (name = controller::internship::INTERNSHIP_TAG, description = "Internship postings"),
            (name = controller::application::APPLICATION_TAG, description = "Applications to internships"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Users
        .routes(routes!(controller::user::signup))
        .routes(routes!(controller::user::login))
        .routes(routes!(controller::user::logout))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        // Student profiles
        .routes(routes!(
            controller::student::create_student,
            controller::student::get_students
        ))
        .routes(routes!(controller::student::get_current_student))
        .routes(routes!(controller::student::get_student_by_user))
        .routes(routes!(
            controller::student::get_student,
            controller::student::update_student,
            controller::student::delete_student
        ))
        // Startups
        .routes(routes!(
            controller::startup::create_startup,
            controller::startup::get_startups
        ))
        .routes(routes!(controller::startup::get_startups_by_user))
        .routes(routes!(
            controller::startup::get_startup,
            controller::startup::update_startup,
            controller::startup::delete_startup
        ))
        // Internships
        .routes(routes!(
            controller::internship::create_internship,
            controller::internship::get_internships
        ))
        .routes(routes!(controller::internship::get_internships_by_startup))
        .routes(routes!(
            controller::internship::get_internship,
            controller::internship::update_internship,
            controller::internship::delete_internship
        ))
        // Applications
        .routes(routes!(
            controller::application::create_application,
            controller::application::get_applications
        ))
        .routes(routes!(controller::application::get_applications_by_student))
        .routes(routes!(controller::application::get_applications_by_startup))
        .routes(routes!(
            controller::application::get_application,
            controller::application::update_application,
            controller::application::delete_application
        ))
        .split_for_parts();

    routes
        .route("/", get(health))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

async fn health() -> &'static str {
    "InternHub API is running"
}
