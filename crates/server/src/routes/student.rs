use crate::dtos::student::{
    AdvisedStudentResponse, AdvisorAssignmentRequest, AdvisorResponse, NewStudentRequest,
    PrereqStatusResponse, StudentResponse,
};
use crate::error::ApiError;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::{enrollment::EnrollmentService, people::PeopleService};
use sea_orm::DatabaseConnection;

/// Get every student
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "Students retrieved successfully", body = [StudentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_students(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = PeopleService::list_students(&db).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Add a new student; the id is assigned by the database
#[utoipa::path(
    post,
    path = "/students",
    request_body = NewStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid student data"),
        (status = 422, description = "Department does not exist")
    ),
    tag = "Students"
)]
pub async fn add_student(
    State(db): State<DatabaseConnection>,
    Json(request): Json<NewStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = PeopleService::add_student(&db, &request.name, &request.dept_name).await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Get every advised student together with their advisor
#[utoipa::path(
    get,
    path = "/students/advisors",
    responses(
        (status = 200, description = "Advised students", body = [AdvisedStudentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_students_with_advisors(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<AdvisedStudentResponse>>, ApiError> {
    let pairs = PeopleService::students_with_advisors(&db).await?;
    Ok(Json(
        pairs
            .into_iter()
            .map(|(student, advisor)| AdvisedStudentResponse {
                student: student.into(),
                advisor: advisor.into(),
            })
            .collect(),
    ))
}

/// Assign an advisor to a student
#[utoipa::path(
    post,
    path = "/students/{id}/advisor",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = AdvisorAssignmentRequest,
    responses(
        (status = 201, description = "Advisor assigned", body = AdvisorResponse),
        (status = 404, description = "Student or instructor not found"),
        (status = 409, description = "Student already has an advisor")
    ),
    tag = "Students"
)]
pub async fn assign_advisor(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(request): Json<AdvisorAssignmentRequest>,
) -> Result<(StatusCode, Json<AdvisorResponse>), ApiError> {
    let assignment = PeopleService::assign_advisor(&db, id, request.instructor_id).await?;
    Ok((StatusCode::CREATED, Json(assignment.into())))
}

/// Check whether a student satisfies every prerequisite of a course
#[utoipa::path(
    get,
    path = "/students/{id}/prerequisites/{course_id}",
    params(
        ("id" = i32, Path, description = "Student ID"),
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Prerequisite status", body = PrereqStatusResponse),
        (status = 404, description = "Student or course not found")
    ),
    tag = "Students"
)]
pub async fn check_prerequisites(
    State(db): State<DatabaseConnection>,
    Path((id, course_id)): Path<(i32, String)>,
) -> Result<Json<PrereqStatusResponse>, ApiError> {
    let status = EnrollmentService::check_prerequisites(&db, id, &course_id).await?;
    Ok(Json(status.into()))
}
