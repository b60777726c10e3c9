use crate::entities::{classroom, course, instructor, section, teaches};
use crate::error::{RegistrarError, Result};
use crate::services::validate_year;
use models::Semester;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use serde::Serialize;
use std::collections::HashMap;

/// Sections and the instructor assignments onto them.
pub struct TeachingService;

/// A section joined with its course title, room capacity, and teaching
/// staff for the capacity report.
#[derive(Debug, Clone, Serialize)]
pub struct SectionWithRoom {
    pub section: section::Model,
    pub course_title: Option<String>,
    pub capacity: Option<i32>,
    pub instructors: Vec<String>,
}

impl TeachingService {
    /// Creates a section of an existing course in an existing classroom.
    pub async fn add_section(
        db: &DatabaseConnection,
        course_id: &str,
        sec_id: &str,
        semester: Semester,
        year: i16,
        building: &str,
        room_number: &str,
        time_slot_id: &str,
    ) -> Result<section::Model> {
        if sec_id.trim().is_empty() {
            return Err(RegistrarError::Validation(
                "section id must not be empty".to_owned(),
            ));
        }
        validate_year(year)?;

        let txn = db.begin().await?;

        course::Entity::find_by_id(course_id.to_owned())
            .one(&txn)
            .await?
            .ok_or(RegistrarError::not_found("course"))?;

        classroom::Entity::find_by_id((building.to_owned(), room_number.to_owned()))
            .one(&txn)
            .await?
            .ok_or(RegistrarError::not_found("classroom"))?;

        let inserted = section::ActiveModel {
            course_id: Set(course_id.to_owned()),
            sec_id: Set(sec_id.trim().to_owned()),
            semester: Set(semester.to_string()),
            year: Set(year),
            building: Set(building.to_owned()),
            room_number: Set(room_number.to_owned()),
            time_slot_id: Set(time_slot_id.to_owned()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(inserted)
    }

    /// Records that an instructor teaches a section. The target section must
    /// exist; assigning the same instructor twice surfaces as
    /// `UniqueViolation`.
    pub async fn assign_instructor(
        db: &DatabaseConnection,
        instructor_id: i32,
        course_id: &str,
        sec_id: &str,
        semester: Semester,
        year: i16,
    ) -> Result<teaches::Model> {
        let txn = db.begin().await?;

        instructor::Entity::find_by_id(instructor_id)
            .one(&txn)
            .await?
            .ok_or(RegistrarError::not_found("instructor"))?;

        section::Entity::find_by_id((
            course_id.to_owned(),
            sec_id.to_owned(),
            semester.to_string(),
            year,
        ))
        .one(&txn)
        .await?
        .ok_or(RegistrarError::not_found("section"))?;

        let assignment = teaches::ActiveModel {
            instructor_id: Set(instructor_id),
            course_id: Set(course_id.to_owned()),
            sec_id: Set(sec_id.to_owned()),
            semester: Set(semester.to_string()),
            year: Set(year),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        log::info!("assigned instructor {instructor_id} to {course_id}/{sec_id} {semester} {year}");
        Ok(assignment)
    }

    pub async fn instructors_by_course(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Vec<instructor::Model>> {
        let assignments = teaches::Entity::find()
            .filter(teaches::Column::CourseId.eq(course_id))
            .all(db)
            .await?;

        let mut instructor_ids: Vec<i32> = assignments.iter().map(|t| t.instructor_id).collect();
        instructor_ids.sort_unstable();
        instructor_ids.dedup();

        Ok(instructor::Entity::find()
            .filter(instructor::Column::Id.is_in(instructor_ids))
            .order_by_asc(instructor::Column::Id)
            .all(db)
            .await?)
    }

    /// Every section joined with its course title, room capacity, and
    /// instructor names. Batch reads stitched in memory instead of one wide
    /// join.
    pub async fn sections_with_rooms(db: &DatabaseConnection) -> Result<Vec<SectionWithRoom>> {
        let sections = section::Entity::find()
            .order_by_asc(section::Column::CourseId)
            .order_by_asc(section::Column::SecId)
            .order_by_asc(section::Column::Year)
            .order_by_asc(section::Column::Semester)
            .all(db)
            .await?;

        if sections.is_empty() {
            return Ok(Vec::new());
        }

        let mut course_ids: Vec<String> = sections.iter().map(|s| s.course_id.clone()).collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        let titles: HashMap<String, String> = course::Entity::find()
            .filter(course::Column::CourseId.is_in(course_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.course_id, c.title))
            .collect();

        let capacities: HashMap<(String, String), i32> = classroom::Entity::find()
            .all(db)
            .await?
            .into_iter()
            .map(|r| ((r.building, r.room_number), r.capacity))
            .collect();

        let assignments = teaches::Entity::find().all(db).await?;

        let mut instructor_ids: Vec<i32> = assignments.iter().map(|t| t.instructor_id).collect();
        instructor_ids.sort_unstable();
        instructor_ids.dedup();

        let names_by_id: HashMap<i32, String> = instructor::Entity::find()
            .filter(instructor::Column::Id.is_in(instructor_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|i| (i.id, i.name))
            .collect();

        let mut names_by_section: HashMap<(String, String, String, i16), Vec<String>> =
            HashMap::new();
        for assignment in assignments {
            if let Some(name) = names_by_id.get(&assignment.instructor_id) {
                names_by_section
                    .entry((
                        assignment.course_id,
                        assignment.sec_id,
                        assignment.semester,
                        assignment.year,
                    ))
                    .or_default()
                    .push(name.clone());
            }
        }

        Ok(sections
            .into_iter()
            .map(|section| {
                let key = (
                    section.course_id.clone(),
                    section.sec_id.clone(),
                    section.semester.clone(),
                    section.year,
                );
                SectionWithRoom {
                    course_title: titles.get(&section.course_id).cloned(),
                    capacity: capacities
                        .get(&(section.building.clone(), section.room_number.clone()))
                        .copied(),
                    instructors: names_by_section.remove(&key).unwrap_or_default(),
                    section,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn assign_instructor_requires_an_existing_section() {
        let known_instructor = instructor::Model {
            id: 2,
            name: "Dr. Robert Moore".to_owned(),
            dept_name: "Computer Science".to_owned(),
            salary: 80_000.0,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![known_instructor]])
            .append_query_results([Vec::<section::Model>::new()])
            .into_connection();

        let err =
            TeachingService::assign_instructor(&db, 2, "CS-999", "1", Semester::Fall, 2025)
                .await
                .unwrap_err();
        assert!(matches!(err, RegistrarError::NotFound { entity: "section" }));
    }

    #[tokio::test]
    async fn add_section_rejects_blank_sec_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = TeachingService::add_section(
            &db,
            "CS-201",
            " ",
            Semester::Fall,
            2025,
            "Building B",
            "201",
            "B",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[tokio::test]
    async fn add_section_rejects_out_of_range_year() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = TeachingService::add_section(
            &db,
            "CS-201",
            "1",
            Semester::Fall,
            999,
            "Building B",
            "201",
            "B",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[tokio::test]
    async fn sections_report_joins_title_capacity_and_staff() {
        let sections = vec![section::Model {
            course_id: "CS-201".to_owned(),
            sec_id: "1".to_owned(),
            semester: "Fall".to_owned(),
            year: 2025,
            building: "Building B".to_owned(),
            room_number: "201".to_owned(),
            time_slot_id: "B".to_owned(),
        }];
        let courses = vec![course::Model {
            course_id: "CS-201".to_owned(),
            title: "Algorithms".to_owned(),
            dept_name: "Computer Science".to_owned(),
            credits: 4,
        }];
        let rooms = vec![classroom::Model {
            building: "Building B".to_owned(),
            room_number: "201".to_owned(),
            capacity: 25,
        }];
        let assignments = vec![teaches::Model {
            instructor_id: 2,
            course_id: "CS-201".to_owned(),
            sec_id: "1".to_owned(),
            semester: "Fall".to_owned(),
            year: 2025,
        }];
        let instructors = vec![instructor::Model {
            id: 2,
            name: "Dr. Robert Moore".to_owned(),
            dept_name: "Computer Science".to_owned(),
            salary: 80_000.0,
        }];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sections])
            .append_query_results([courses])
            .append_query_results([rooms])
            .append_query_results([assignments])
            .append_query_results([instructors])
            .into_connection();

        let report = TeachingService::sections_with_rooms(&db).await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].course_title.as_deref(), Some("Algorithms"));
        assert_eq!(report[0].capacity, Some(25));
        assert_eq!(report[0].instructors, vec!["Dr. Robert Moore"]);
    }
}
