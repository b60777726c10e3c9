use database::entities::instructor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorResponse {
    pub id: i32,
    pub name: String,
    pub dept_name: String,
    pub salary: f64,
}

impl From<instructor::Model> for InstructorResponse {
    fn from(model: instructor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            dept_name: model.dept_name,
            salary: model.salary,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewInstructorRequest {
    pub name: String,
    pub dept_name: String,
    pub salary: f64,
}
