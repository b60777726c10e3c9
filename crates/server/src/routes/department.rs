use crate::dtos::department::DepartmentResponse;
use crate::error::ApiError;
use axum::{Json, extract::State};
use database::services::catalog::CatalogService;
use sea_orm::DatabaseConnection;

/// Get every department
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "Departments retrieved successfully", body = [DepartmentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn get_departments(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let departments = CatalogService::list_departments(&db).await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}
