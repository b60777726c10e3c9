use crate::entities::{advisor, instructor, student};
use crate::error::{RegistrarError, Result};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

/// Students, instructors, and the advisor assignments between them.
pub struct PeopleService;

impl PeopleService {
    pub async fn list_students(db: &DatabaseConnection) -> Result<Vec<student::Model>> {
        Ok(student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn list_instructors(db: &DatabaseConnection) -> Result<Vec<instructor::Model>> {
        Ok(instructor::Entity::find()
            .order_by_asc(instructor::Column::Id)
            .all(db)
            .await?)
    }

    /// Inserts a student; the id comes from the engine's identity column.
    /// A dangling department surfaces as `ForeignKeyViolation`.
    pub async fn add_student(
        db: &DatabaseConnection,
        name: &str,
        dept_name: &str,
    ) -> Result<student::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistrarError::Validation(
                "student name must not be empty".to_owned(),
            ));
        }

        let inserted = student::ActiveModel {
            name: Set(name.to_owned()),
            dept_name: Set(dept_name.to_owned()),
            tot_cred: Set(0),
            ..Default::default()
        }
        .insert(db)
        .await?;

        log::info!("added student {} ({})", inserted.id, inserted.name);
        Ok(inserted)
    }

    /// Inserts an instructor; the id comes from the engine's identity
    /// column, so concurrent inserts cannot collide.
    pub async fn add_instructor(
        db: &DatabaseConnection,
        name: &str,
        dept_name: &str,
        salary: f64,
    ) -> Result<instructor::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistrarError::Validation(
                "instructor name must not be empty".to_owned(),
            ));
        }
        if !salary.is_finite() || salary < 0.0 {
            return Err(RegistrarError::Validation(format!(
                "salary must be non-negative, got {salary}"
            )));
        }

        let inserted = instructor::ActiveModel {
            name: Set(name.to_owned()),
            dept_name: Set(dept_name.to_owned()),
            salary: Set(salary),
            ..Default::default()
        }
        .insert(db)
        .await?;

        log::info!("added instructor {} ({})", inserted.id, inserted.name);
        Ok(inserted)
    }

    /// Assigns an advisor to a student. Each student holds at most one
    /// advisor; a second assignment surfaces as `UniqueViolation`.
    pub async fn assign_advisor(
        db: &DatabaseConnection,
        student_id: i32,
        instructor_id: i32,
    ) -> Result<advisor::Model> {
        let txn = db.begin().await?;

        student::Entity::find_by_id(student_id)
            .one(&txn)
            .await?
            .ok_or(RegistrarError::not_found("student"))?;

        instructor::Entity::find_by_id(instructor_id)
            .one(&txn)
            .await?
            .ok_or(RegistrarError::not_found("instructor"))?;

        let assignment = advisor::ActiveModel {
            student_id: Set(student_id),
            instructor_id: Set(instructor_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(assignment)
    }

    /// Every advised student paired with their advisor, ordered by student
    /// id.
    pub async fn students_with_advisors(
        db: &DatabaseConnection,
    ) -> Result<Vec<(student::Model, instructor::Model)>> {
        let mut assignments = advisor::Entity::find().all(db).await?;
        assignments.sort_by_key(|a| a.student_id);

        let student_ids: Vec<i32> = assignments.iter().map(|a| a.student_id).collect();
        let mut instructor_ids: Vec<i32> = assignments.iter().map(|a| a.instructor_id).collect();
        instructor_ids.sort_unstable();
        instructor_ids.dedup();

        let students_by_id: HashMap<i32, student::Model> = student::Entity::find()
            .filter(student::Column::Id.is_in(student_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let instructors_by_id: HashMap<i32, instructor::Model> = instructor::Entity::find()
            .filter(instructor::Column::Id.is_in(instructor_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        Ok(assignments
            .into_iter()
            .filter_map(|a| {
                let student = students_by_id.get(&a.student_id)?.clone();
                let advisor = instructors_by_id.get(&a.instructor_id)?.clone();
                Some((student, advisor))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn add_student_rejects_blank_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = PeopleService::add_student(&db, "   ", "Biology")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[tokio::test]
    async fn add_instructor_rejects_negative_salary() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = PeopleService::add_instructor(&db, "Dr. Anna Martin", "Mathematics", -1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[tokio::test]
    async fn assign_advisor_requires_an_existing_student() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<student::Model>::new()])
            .into_connection();

        let err = PeopleService::assign_advisor(&db, 99, 1).await.unwrap_err();
        assert!(matches!(err, RegistrarError::NotFound { entity: "student" }));
    }

    #[tokio::test]
    async fn students_with_advisors_stitches_pairs_in_student_order() {
        let assignments = vec![
            advisor::Model {
                student_id: 2,
                instructor_id: 7,
            },
            advisor::Model {
                student_id: 1,
                instructor_id: 7,
            },
        ];
        let students = vec![
            student::Model {
                id: 1,
                name: "Liam White".to_owned(),
                dept_name: "Mathematics".to_owned(),
                tot_cred: 45,
            },
            student::Model {
                id: 2,
                name: "Olivia Green".to_owned(),
                dept_name: "Computer Science".to_owned(),
                tot_cred: 30,
            },
        ];
        let instructors = vec![instructor::Model {
            id: 7,
            name: "Dr. Henry Adams".to_owned(),
            dept_name: "Environmental Science".to_owned(),
            salary: 79_000.0,
        }];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([assignments])
            .append_query_results([students])
            .append_query_results([instructors])
            .into_connection();

        let pairs = PeopleService::students_with_advisors(&db).await.unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0.id, 1);
        assert_eq!(pairs[1].0.id, 2);
        assert_eq!(pairs[0].1.name, "Dr. Henry Adams");
    }
}
