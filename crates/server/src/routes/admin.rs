use crate::dtos::admin::SeedReportResponse;
use crate::error::ApiError;
use axum::{Json, extract::State};
use database::seed::SeedService;
use sea_orm::DatabaseConnection;

/// Delete every row and reinsert the fixed seed dataset
#[utoipa::path(
    post,
    path = "/admin/reseed",
    responses(
        (status = 200, description = "Database reseeded", body = SeedReportResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn reseed(
    State(db): State<DatabaseConnection>,
) -> Result<Json<SeedReportResponse>, ApiError> {
    let report = SeedService::reseed(&db).await?;
    Ok(Json(report.into()))
}
