use crate::dtos::section::{
    NewSectionRequest, SectionResponse, SectionWithRoomResponse, TeachingAssignmentRequest,
    TeachingAssignmentResponse,
};
use crate::error::ApiError;
use crate::routes::parse_semester;
use axum::{Json, extract::State, http::StatusCode};
use database::services::teaching::TeachingService;
use sea_orm::DatabaseConnection;

/// Get every section with its course title, room capacity, and staff
#[utoipa::path(
    get,
    path = "/sections",
    responses(
        (status = 200, description = "Sections retrieved successfully", body = [SectionWithRoomResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Sections"
)]
pub async fn get_sections(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<SectionWithRoomResponse>>, ApiError> {
    let sections = TeachingService::sections_with_rooms(&db).await?;
    Ok(Json(sections.into_iter().map(Into::into).collect()))
}

/// Create a section of an existing course in an existing classroom
#[utoipa::path(
    post,
    path = "/sections",
    request_body = NewSectionRequest,
    responses(
        (status = 201, description = "Section created", body = SectionResponse),
        (status = 400, description = "Invalid section data"),
        (status = 404, description = "Course or classroom not found"),
        (status = 409, description = "Section already exists")
    ),
    tag = "Sections"
)]
pub async fn add_section(
    State(db): State<DatabaseConnection>,
    Json(request): Json<NewSectionRequest>,
) -> Result<(StatusCode, Json<SectionResponse>), ApiError> {
    let semester = parse_semester(&request.semester)?;
    let section = TeachingService::add_section(
        &db,
        &request.course_id,
        &request.sec_id,
        semester,
        request.year,
        &request.building,
        &request.room_number,
        &request.time_slot_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(section.into())))
}

/// Record that an instructor teaches a section
#[utoipa::path(
    post,
    path = "/sections/assignments",
    request_body = TeachingAssignmentRequest,
    responses(
        (status = 201, description = "Instructor assigned", body = TeachingAssignmentResponse),
        (status = 404, description = "Instructor or section not found"),
        (status = 409, description = "Assignment already exists")
    ),
    tag = "Sections"
)]
pub async fn assign_instructor(
    State(db): State<DatabaseConnection>,
    Json(request): Json<TeachingAssignmentRequest>,
) -> Result<(StatusCode, Json<TeachingAssignmentResponse>), ApiError> {
    let semester = parse_semester(&request.semester)?;
    let assignment = TeachingService::assign_instructor(
        &db,
        request.instructor_id,
        &request.course_id,
        &request.sec_id,
        semester,
        request.year,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(assignment.into())))
}
