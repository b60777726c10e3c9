use crate::dtos::report::{DepartmentSalaryResponse, MinCreditsParams};
use crate::dtos::student::StudentResponse;
use crate::error::ApiError;
use axum::{
    Json,
    extract::{Query, State},
};
use database::services::report::ReportService;
use sea_orm::DatabaseConnection;

/// Get the mean instructor salary per department
#[utoipa::path(
    get,
    path = "/reports/average-salary",
    responses(
        (status = 200, description = "Average salary per department", body = [DepartmentSalaryResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn get_average_salary(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<DepartmentSalaryResponse>>, ApiError> {
    let rows = ReportService::average_salary_by_department(&db).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Get students holding at least the given number of total credits
#[utoipa::path(
    get,
    path = "/reports/students-by-credits",
    params(MinCreditsParams),
    responses(
        (status = 200, description = "Qualifying students", body = [StudentResponse]),
        (status = 400, description = "Invalid threshold")
    ),
    tag = "Reports"
)]
pub async fn get_students_by_credits(
    State(db): State<DatabaseConnection>,
    Query(params): Query<MinCreditsParams>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = ReportService::students_with_min_credits(&db, params.min).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}
