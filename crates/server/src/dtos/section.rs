use database::entities::{section, teaches};
use database::services::teaching::SectionWithRoom;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i16,
    pub building: String,
    pub room_number: String,
    pub time_slot_id: String,
}

impl From<section::Model> for SectionResponse {
    fn from(model: section::Model) -> Self {
        Self {
            course_id: model.course_id,
            sec_id: model.sec_id,
            semester: model.semester,
            year: model.year,
            building: model.building,
            room_number: model.room_number,
            time_slot_id: model.time_slot_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewSectionRequest {
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i16,
    pub building: String,
    pub room_number: String,
    pub time_slot_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SectionWithRoomResponse {
    pub section: SectionResponse,
    pub course_title: Option<String>,
    pub capacity: Option<i32>,
    pub instructors: Vec<String>,
}

impl From<SectionWithRoom> for SectionWithRoomResponse {
    fn from(row: SectionWithRoom) -> Self {
        Self {
            section: row.section.into(),
            course_title: row.course_title,
            capacity: row.capacity,
            instructors: row.instructors,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TeachingAssignmentRequest {
    pub instructor_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeachingAssignmentResponse {
    pub instructor_id: i32,
    pub course_id: String,
    pub sec_id: String,
    pub semester: String,
    pub year: i16,
}

impl From<teaches::Model> for TeachingAssignmentResponse {
    fn from(model: teaches::Model) -> Self {
        Self {
            instructor_id: model.instructor_id,
            course_id: model.course_id,
            sec_id: model.sec_id,
            semester: model.semester,
            year: model.year,
        }
    }
}
