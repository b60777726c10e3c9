use crate::entities::{course, prereq, section, student, takes};
use crate::error::{RegistrarError, Result};
use crate::services::validate_year;
use models::Semester;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use serde::Serialize;
use std::collections::HashMap;

pub struct EnrollmentService;

/// Outcome of a prerequisite check: `missing` lists every required course
/// the student has not yet passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrereqStatus {
    pub satisfied: bool,
    pub missing: Vec<String>,
}

impl EnrollmentService {
    /// Enrolls a student in a section. The section existence check and the
    /// insert run in one transaction; a duplicate enrollment surfaces as
    /// `UniqueViolation` and leaves the original row untouched.
    pub async fn enroll_student(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: &str,
        sec_id: &str,
        semester: Semester,
        year: i16,
    ) -> Result<takes::Model> {
        validate_year(year)?;

        let txn = db.begin().await?;

        section::Entity::find_by_id((
            course_id.to_owned(),
            sec_id.to_owned(),
            semester.to_string(),
            year,
        ))
        .one(&txn)
        .await?
        .ok_or(RegistrarError::not_found("section"))?;

        let enrollment = takes::ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id.to_owned()),
            sec_id: Set(sec_id.to_owned()),
            semester: Set(semester.to_string()),
            year: Set(year),
            grade: Set(None),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        log::info!("enrolled student {student_id} in {course_id}/{sec_id} {semester} {year}");
        Ok(enrollment)
    }

    pub async fn students_by_course(
        db: &DatabaseConnection,
        course_id: &str,
    ) -> Result<Vec<student::Model>> {
        let enrollments = takes::Entity::find()
            .filter(takes::Column::CourseId.eq(course_id))
            .all(db)
            .await?;

        let mut student_ids: Vec<i32> = enrollments.iter().map(|t| t.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();

        Ok(student::Entity::find()
            .filter(student::Column::Id.is_in(student_ids))
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?)
    }

    /// True only when every prerequisite of the course has a passing grade
    /// on some enrollment of the student. A prerequisite never attempted, one
    /// still without a grade, and one graded `F` all count as unsatisfied.
    pub async fn check_prerequisites(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: &str,
    ) -> Result<PrereqStatus> {
        course::Entity::find_by_id(course_id.to_owned())
            .one(db)
            .await?
            .ok_or(RegistrarError::not_found("course"))?;

        student::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or(RegistrarError::not_found("student"))?;

        let required: Vec<String> = prereq::Entity::find()
            .filter(prereq::Column::CourseId.eq(course_id))
            .all(db)
            .await?
            .into_iter()
            .map(|p| p.prereq_id)
            .collect();

        if required.is_empty() {
            return Ok(PrereqStatus {
                satisfied: true,
                missing: Vec::new(),
            });
        }

        let attempts = takes::Entity::find()
            .filter(takes::Column::StudentId.eq(student_id))
            .filter(takes::Column::CourseId.is_in(required.clone()))
            .all(db)
            .await?;

        let mut grades: HashMap<String, Vec<Option<String>>> = HashMap::new();
        for attempt in attempts {
            grades.entry(attempt.course_id).or_default().push(attempt.grade);
        }

        let missing = missing_prerequisites(&required, &grades);
        Ok(PrereqStatus {
            satisfied: missing.is_empty(),
            missing,
        })
    }
}

/// A required course is satisfied when any attempt carries a recorded
/// passing grade. Grades that fail to parse never count as passing.
fn missing_prerequisites(
    required: &[String],
    grades: &HashMap<String, Vec<Option<String>>>,
) -> Vec<String> {
    let mut missing: Vec<String> = required
        .iter()
        .filter(|course_id| {
            let passed = grades.get(*course_id).is_some_and(|attempts| {
                attempts.iter().any(|grade| {
                    grade
                        .as_deref()
                        .is_some_and(|g| g.parse::<models::Grade>().is_ok_and(|g| g.is_passing()))
                })
            });
            !passed
        })
        .cloned()
        .collect();
    missing.sort_unstable();
    missing.dedup();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn grades(entries: &[(&str, &[Option<&str>])]) -> HashMap<String, Vec<Option<String>>> {
        entries
            .iter()
            .map(|(course, attempts)| {
                (
                    (*course).to_owned(),
                    attempts.iter().map(|g| g.map(str::to_owned)).collect(),
                )
            })
            .collect()
    }

    fn required(courses: &[&str]) -> Vec<String> {
        courses.iter().map(|c| (*c).to_owned()).collect()
    }

    #[test]
    fn never_attempted_prerequisite_is_missing() {
        let missing = missing_prerequisites(&required(&["BIO-101"]), &grades(&[]));
        assert_eq!(missing, vec!["BIO-101"]);
    }

    #[test]
    fn ungraded_attempt_does_not_satisfy() {
        let missing =
            missing_prerequisites(&required(&["CS-201"]), &grades(&[("CS-201", &[None])]));
        assert_eq!(missing, vec!["CS-201"]);
    }

    #[test]
    fn failing_grade_does_not_satisfy() {
        let missing =
            missing_prerequisites(&required(&["BIO-101"]), &grades(&[("BIO-101", &[Some("F")])]));
        assert_eq!(missing, vec!["BIO-101"]);
    }

    #[test]
    fn any_passing_attempt_satisfies() {
        let missing = missing_prerequisites(
            &required(&["BIO-101"]),
            &grades(&[("BIO-101", &[Some("F"), Some("C-")])]),
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn unparseable_grade_does_not_satisfy() {
        let missing =
            missing_prerequisites(&required(&["CS-201"]), &grades(&[("CS-201", &[Some("??")])]));
        assert_eq!(missing, vec!["CS-201"]);
    }

    #[test]
    fn missing_list_covers_every_unmet_requirement() {
        let missing = missing_prerequisites(
            &required(&["CS-201", "CS-202"]),
            &grades(&[("CS-201", &[Some("B+")])]),
        );
        assert_eq!(missing, vec!["CS-202"]);
    }

    #[tokio::test]
    async fn enroll_rejects_out_of_range_year() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = EnrollmentService::enroll_student(&db, 1, "CS-201", "1", Semester::Fall, 999)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[tokio::test]
    async fn enroll_fails_with_not_found_when_section_is_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<section::Model>::new()])
            .into_connection();

        let err = EnrollmentService::enroll_student(&db, 1, "CS-201", "1", Semester::Fall, 2025)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::NotFound { entity: "section" }));
    }

    // A second enrollment of the same student in the same section trips the
    // takes primary key. Building a real unique-constraint error needs a live
    // connection, so the classification into `UniqueViolation` is covered by
    // `From<DbErr>`; this pins that an insert failure aborts the enrollment
    // instead of being swallowed.
    #[tokio::test]
    async fn enroll_surfaces_a_failed_insert() {
        let existing_section = section::Model {
            course_id: "CS-201".to_owned(),
            sec_id: "1".to_owned(),
            semester: "Fall".to_owned(),
            year: 2025,
            building: "Building B".to_owned(),
            room_number: "201".to_owned(),
            time_slot_id: "B".to_owned(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing_section]])
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates \"takes_pkey\"".to_owned(),
            )])
            .into_connection();

        let err = EnrollmentService::enroll_student(&db, 1, "CS-201", "1", Semester::Fall, 2025)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Db(_)));
    }

    #[tokio::test]
    async fn check_prerequisites_reports_missing_and_satisfied() {
        let course = course::Model {
            course_id: "BIO-301".to_owned(),
            title: "Genetics".to_owned(),
            dept_name: "Biology".to_owned(),
            credits: 3,
        };
        let student = student::Model {
            id: 5,
            name: "Oliver Stone".to_owned(),
            dept_name: "Biology".to_owned(),
            tot_cred: 90,
        };
        let requirement = prereq::Model {
            course_id: "BIO-301".to_owned(),
            prereq_id: "BIO-101".to_owned(),
        };
        let failed_attempt = takes::Model {
            student_id: 5,
            course_id: "BIO-101".to_owned(),
            sec_id: "1".to_owned(),
            semester: "Fall".to_owned(),
            year: 2025,
            grade: Some("F".to_owned()),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![course]])
            .append_query_results([vec![student]])
            .append_query_results([vec![requirement]])
            .append_query_results([vec![failed_attempt]])
            .into_connection();

        let status = EnrollmentService::check_prerequisites(&db, 5, "BIO-301")
            .await
            .unwrap();
        assert!(!status.satisfied);
        assert_eq!(status.missing, vec!["BIO-101"]);
    }
}
