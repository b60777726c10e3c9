use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    /// Assigned by the storage engine, never computed application-side.
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub dept_name: String,
    pub tot_cred: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DeptName",
        to = "super::department::Column::DeptName"
    )]
    Department,
    #[sea_orm(has_many = "super::takes::Entity")]
    Takes,
    #[sea_orm(has_one = "super::advisor::Entity")]
    Advisor,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::takes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Takes.def()
    }
}

impl Related<super::advisor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advisor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
