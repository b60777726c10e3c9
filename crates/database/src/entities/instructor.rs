use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructor")]
pub struct Model {
    /// Assigned by the storage engine, never computed application-side.
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub dept_name: String,
    pub salary: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DeptName",
        to = "super::department::Column::DeptName"
    )]
    Department,
    #[sea_orm(has_many = "super::teaches::Entity")]
    Teaches,
    #[sea_orm(has_many = "super::advisor::Entity")]
    Advisees,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::teaches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teaches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
