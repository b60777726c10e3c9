use crate::dtos::instructor::InstructorResponse;
use database::entities::{advisor, student};
use database::services::enrollment::PrereqStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub dept_name: String,
    pub tot_cred: i32,
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            dept_name: model.dept_name,
            tot_cred: model.tot_cred,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewStudentRequest {
    pub name: String,
    pub dept_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdvisorAssignmentRequest {
    pub instructor_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisorResponse {
    pub student_id: i32,
    pub instructor_id: i32,
}

impl From<advisor::Model> for AdvisorResponse {
    fn from(model: advisor::Model) -> Self {
        Self {
            student_id: model.student_id,
            instructor_id: model.instructor_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdvisedStudentResponse {
    pub student: StudentResponse,
    pub advisor: InstructorResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrereqStatusResponse {
    pub satisfied: bool,
    pub missing: Vec<String>,
}

impl From<PrereqStatus> for PrereqStatusResponse {
    fn from(status: PrereqStatus) -> Self {
        Self {
            satisfied: status.satisfied,
            missing: status.missing,
        }
    }
}
