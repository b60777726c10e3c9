use crate::entities::{course, department, instructor, student};
use crate::error::{RegistrarError, Result};
use crate::services::{enrollment::EnrollmentService, teaching::TeachingService};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

pub struct CatalogService;

/// A course joined with its department, the instructors teaching any of its
/// sections, and the enrolled students.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetails {
    pub course: course::Model,
    pub department: Option<department::Model>,
    pub instructors: Vec<instructor::Model>,
    pub roster: Vec<student::Model>,
}

impl CatalogService {
    pub async fn list_departments(db: &DatabaseConnection) -> Result<Vec<department::Model>> {
        Ok(department::Entity::find()
            .order_by_asc(department::Column::DeptName)
            .all(db)
            .await?)
    }

    pub async fn list_courses(db: &DatabaseConnection) -> Result<Vec<course::Model>> {
        Ok(course::Entity::find()
            .order_by_asc(course::Column::CourseId)
            .all(db)
            .await?)
    }

    /// Inserts a new course. The department must already exist; a dangling
    /// name surfaces as `ForeignKeyViolation`, a duplicate course id as
    /// `UniqueViolation`.
    pub async fn add_course(
        db: &DatabaseConnection,
        course_id: &str,
        title: &str,
        dept_name: &str,
        credits: i32,
    ) -> Result<course::Model> {
        let course_id = course_id.trim();
        if course_id.is_empty() {
            return Err(RegistrarError::Validation(
                "course id must not be empty".to_owned(),
            ));
        }
        if title.trim().is_empty() {
            return Err(RegistrarError::Validation(
                "course title must not be empty".to_owned(),
            ));
        }
        if credits <= 0 {
            return Err(RegistrarError::Validation(format!(
                "credits must be positive, got {credits}"
            )));
        }

        let inserted = course::ActiveModel {
            course_id: Set(course_id.to_owned()),
            title: Set(title.trim().to_owned()),
            dept_name: Set(dept_name.to_owned()),
            credits: Set(credits),
        }
        .insert(db)
        .await?;

        log::info!("added course {}", inserted.course_id);
        Ok(inserted)
    }

    /// Course, department, teaching staff, and roster in one shape. The two
    /// fan-out reads run concurrently.
    pub async fn course_details(db: &DatabaseConnection, course_id: &str) -> Result<CourseDetails> {
        let course = course::Entity::find_by_id(course_id.to_owned())
            .one(db)
            .await?
            .ok_or(RegistrarError::not_found("course"))?;

        let department = department::Entity::find_by_id(course.dept_name.clone())
            .one(db)
            .await?;

        let (instructors, roster) = futures::try_join!(
            TeachingService::instructors_by_course(db, course_id),
            EnrollmentService::students_by_course(db, course_id),
        )?;

        Ok(CourseDetails {
            course,
            department,
            instructors,
            roster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_departments() -> Vec<department::Model> {
        vec![
            department::Model {
                dept_name: "Biology".to_owned(),
                building: "Building E".to_owned(),
                budget: 520_000.0,
            },
            department::Model {
                dept_name: "Physics".to_owned(),
                building: "Building C".to_owned(),
                budget: 450_000.0,
            },
        ]
    }

    #[tokio::test]
    async fn list_departments_returns_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sample_departments()])
            .into_connection();

        let departments = CatalogService::list_departments(&db).await.unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0].dept_name, "Biology");
    }

    #[tokio::test]
    async fn list_departments_empty_is_ok_not_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<department::Model>::new()])
            .into_connection();

        let departments = CatalogService::list_departments(&db).await.unwrap();
        assert!(departments.is_empty());
    }

    #[tokio::test]
    async fn add_course_rejects_non_positive_credits() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = CatalogService::add_course(&db, "CS-101", "Intro", "Computer Science", 0)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[tokio::test]
    async fn add_course_rejects_blank_course_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = CatalogService::add_course(&db, "  ", "Intro", "Computer Science", 3)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }
}
