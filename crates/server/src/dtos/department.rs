use database::entities::department;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentResponse {
    pub dept_name: String,
    pub building: String,
    pub budget: f64,
}

impl From<department::Model> for DepartmentResponse {
    fn from(model: department::Model) -> Self {
        Self {
            dept_name: model.dept_name,
            building: model.building,
            budget: model.budget,
        }
    }
}
