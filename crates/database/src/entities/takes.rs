use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One enrollment of a student in a section. `grade` stays NULL until a
/// grade is recorded; a NULL or `F` grade never satisfies a prerequisite.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "takes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub sec_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub semester: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub year: i16,
    pub grade: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "(Column::CourseId, Column::SecId, Column::Semester, Column::Year)",
        to = "(super::section::Column::CourseId, super::section::Column::SecId, super::section::Column::Semester, super::section::Column::Year)"
    )]
    Section,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
