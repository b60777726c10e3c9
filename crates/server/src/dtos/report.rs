use database::services::report::DepartmentSalary;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentSalaryResponse {
    pub dept_name: String,
    pub avg_salary: f64,
}

impl From<DepartmentSalary> for DepartmentSalaryResponse {
    fn from(row: DepartmentSalary) -> Self {
        Self {
            dept_name: row.dept_name,
            avg_salary: row.avg_salary,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct MinCreditsParams {
    /// Minimum total credits a student must hold to be listed
    pub min: i32,
}
