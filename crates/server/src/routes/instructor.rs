use crate::dtos::instructor::{InstructorResponse, NewInstructorRequest};
use crate::error::ApiError;
use axum::{Json, extract::State, http::StatusCode};
use database::services::people::PeopleService;
use sea_orm::DatabaseConnection;

/// Get every instructor
#[utoipa::path(
    get,
    path = "/instructors",
    responses(
        (status = 200, description = "Instructors retrieved successfully", body = [InstructorResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Instructors"
)]
pub async fn get_instructors(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<InstructorResponse>>, ApiError> {
    let instructors = PeopleService::list_instructors(&db).await?;
    Ok(Json(instructors.into_iter().map(Into::into).collect()))
}

/// Add a new instructor; the id is assigned by the database
#[utoipa::path(
    post,
    path = "/instructors",
    request_body = NewInstructorRequest,
    responses(
        (status = 201, description = "Instructor created", body = InstructorResponse),
        (status = 400, description = "Invalid instructor data"),
        (status = 422, description = "Department does not exist")
    ),
    tag = "Instructors"
)]
pub async fn add_instructor(
    State(db): State<DatabaseConnection>,
    Json(request): Json<NewInstructorRequest>,
) -> Result<(StatusCode, Json<InstructorResponse>), ApiError> {
    let instructor =
        PeopleService::add_instructor(&db, &request.name, &request.dept_name, request.salary)
            .await?;
    Ok((StatusCode::CREATED, Json(instructor.into())))
}
