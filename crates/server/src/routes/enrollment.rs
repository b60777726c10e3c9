use crate::dtos::enrollment::{EnrollmentRequest, EnrollmentResponse};
use crate::error::ApiError;
use crate::routes::parse_semester;
use axum::{Json, extract::State, http::StatusCode};
use database::services::enrollment::EnrollmentService;
use sea_orm::DatabaseConnection;

/// Enroll a student in an existing section
#[utoipa::path(
    post,
    path = "/enrollments",
    request_body = EnrollmentRequest,
    responses(
        (status = 201, description = "Student enrolled", body = EnrollmentResponse),
        (status = 400, description = "Invalid enrollment data"),
        (status = 404, description = "Section not found"),
        (status = 409, description = "Student already enrolled"),
        (status = 422, description = "Student does not exist")
    ),
    tag = "Enrollments"
)]
pub async fn enroll_student(
    State(db): State<DatabaseConnection>,
    Json(request): Json<EnrollmentRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    let semester = parse_semester(&request.semester)?;
    let enrollment = EnrollmentService::enroll_student(
        &db,
        request.student_id,
        &request.course_id,
        &request.sec_id,
        semester,
        request.year,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}
