use crate::entities::{instructor, student};
use crate::error::{RegistrarError, Result};
use sea_orm::sea_query::{Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::Serialize;

pub struct ReportService;

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct DepartmentSalary {
    pub dept_name: String,
    pub avg_salary: f64,
}

impl ReportService {
    /// Mean instructor salary per department, computed by the engine.
    pub async fn average_salary_by_department(
        db: &DatabaseConnection,
    ) -> Result<Vec<DepartmentSalary>> {
        Ok(instructor::Entity::find()
            .select_only()
            .column(instructor::Column::DeptName)
            .column_as(
                SimpleExpr::from(Func::avg(instructor::Column::Salary.into_expr())),
                "avg_salary",
            )
            .group_by(instructor::Column::DeptName)
            .order_by_asc(instructor::Column::DeptName)
            .into_model::<DepartmentSalary>()
            .all(db)
            .await?)
    }

    /// Students holding at least `min_credits` total credits.
    pub async fn students_with_min_credits(
        db: &DatabaseConnection,
        min_credits: i32,
    ) -> Result<Vec<student::Model>> {
        if min_credits < 0 {
            return Err(RegistrarError::Validation(format!(
                "minimum credits must be non-negative, got {min_credits}"
            )));
        }

        Ok(student::Entity::find()
            .filter(student::Column::TotCred.gte(min_credits))
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn min_credits_must_be_non_negative() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = ReportService::students_with_min_credits(&db, -5)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Validation(_)));
    }

    #[tokio::test]
    async fn min_credits_filter_passes_rows_through() {
        let qualifying = vec![student::Model {
            id: 9,
            name: "Mason Hall".to_owned(),
            dept_name: "Chemistry".to_owned(),
            tot_cred: 102,
        }];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([qualifying])
            .into_connection();

        let students = ReportService::students_with_min_credits(&db, 60).await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].tot_cred, 102);
    }
}
