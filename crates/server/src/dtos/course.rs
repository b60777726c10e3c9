use crate::dtos::{
    department::DepartmentResponse, instructor::InstructorResponse, student::StudentResponse,
};
use database::entities::course;
use database::services::catalog::CourseDetails;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: String,
    pub title: String,
    pub dept_name: String,
    pub credits: i32,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        Self {
            course_id: model.course_id,
            title: model.title,
            dept_name: model.dept_name,
            credits: model.credits,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewCourseRequest {
    pub course_id: String,
    pub title: String,
    pub dept_name: String,
    pub credits: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailsResponse {
    pub course: CourseResponse,
    pub department: Option<DepartmentResponse>,
    pub instructors: Vec<InstructorResponse>,
    pub students: Vec<StudentResponse>,
}

impl From<CourseDetails> for CourseDetailsResponse {
    fn from(details: CourseDetails) -> Self {
        Self {
            course: details.course.into(),
            department: details.department.map(Into::into),
            instructors: details.instructors.into_iter().map(Into::into).collect(),
            students: details.roster.into_iter().map(Into::into).collect(),
        }
    }
}
