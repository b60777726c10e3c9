use database::entities::takes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollmentRequest {
    pub student_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub student_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i16,
    pub grade: Option<String>,
}

impl From<takes::Model> for EnrollmentResponse {
    fn from(model: takes::Model) -> Self {
        Self {
            student_id: model.student_id,
            course_id: model.course_id,
            sec_id: model.sec_id,
            semester: model.semester,
            year: model.year,
            grade: model.grade,
        }
    }
}
