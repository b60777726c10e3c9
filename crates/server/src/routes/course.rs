use crate::dtos::course::{CourseDetailsResponse, CourseResponse, NewCourseRequest};
use crate::dtos::instructor::InstructorResponse;
use crate::dtos::student::StudentResponse;
use crate::error::ApiError;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::{
    catalog::CatalogService, enrollment::EnrollmentService, teaching::TeachingService,
};
use sea_orm::DatabaseConnection;

/// Get every course
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "Courses retrieved successfully", body = [CourseResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = CatalogService::list_courses(&db).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Add a new course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = NewCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid course data"),
        (status = 409, description = "Course id already exists"),
        (status = 422, description = "Department does not exist")
    ),
    tag = "Courses"
)]
pub async fn add_course(
    State(db): State<DatabaseConnection>,
    Json(request): Json<NewCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let course = CatalogService::add_course(
        &db,
        &request.course_id,
        &request.title,
        &request.dept_name,
        request.credits,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Get a course with its department, teaching staff, and roster
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailsResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course_details(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<CourseDetailsResponse>, ApiError> {
    let details = CatalogService::course_details(&db, &id).await?;
    Ok(Json(details.into()))
}

/// Get the students enrolled in a course
#[utoipa::path(
    get,
    path = "/courses/{id}/students",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrolled students", body = [StudentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_students(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = EnrollmentService::students_by_course(&db, &id).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Get the instructors teaching any section of a course
#[utoipa::path(
    get,
    path = "/courses/{id}/instructors",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Teaching staff", body = [InstructorResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_instructors(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<Vec<InstructorResponse>>, ApiError> {
    let instructors = TeachingService::instructors_by_course(&db, &id).await?;
    Ok(Json(instructors.into_iter().map(Into::into).collect()))
}
