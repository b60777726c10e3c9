use axum::{
    Router,
    routing::{get, post},
};
use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use doc::ApiDoc;
use utils::shutdown::shutdown_signal;

fn app(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/departments", get(routes::department::get_departments))
        .route(
            "/courses",
            get(routes::course::get_courses).post(routes::course::add_course),
        )
        .route("/courses/{id}", get(routes::course::get_course_details))
        .route(
            "/courses/{id}/students",
            get(routes::course::get_course_students),
        )
        .route(
            "/courses/{id}/instructors",
            get(routes::course::get_course_instructors),
        )
        .route(
            "/students",
            get(routes::student::get_students).post(routes::student::add_student),
        )
        .route(
            "/students/advisors",
            get(routes::student::get_students_with_advisors),
        )
        .route(
            "/students/{id}/advisor",
            post(routes::student::assign_advisor),
        )
        .route(
            "/students/{id}/prerequisites/{course_id}",
            get(routes::student::check_prerequisites),
        )
        .route(
            "/instructors",
            get(routes::instructor::get_instructors).post(routes::instructor::add_instructor),
        )
        .route(
            "/sections",
            get(routes::section::get_sections).post(routes::section::add_section),
        )
        .route(
            "/sections/assignments",
            post(routes::section::assign_instructor),
        )
        .route("/enrollments", post(routes::enrollment::enroll_student))
        .route(
            "/reports/average-salary",
            get(routes::report::get_average_salary),
        )
        .route(
            "/reports/students-by-credits",
            get(routes::report::get_students_by_credits),
        )
        .route("/admin/reseed", post(routes::admin::reseed))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_connection().await?;
    Migrator::up(&db, None).await?;

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Running axum on http://{addr}");

    axum::serve(listener, app(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
