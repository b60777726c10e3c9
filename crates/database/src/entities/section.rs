use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "section")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub sec_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub semester: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub year: i16,
    pub building: String,
    pub room_number: String,
    pub time_slot_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::CourseId"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::classroom::Entity",
        from = "(Column::Building, Column::RoomNumber)",
        to = "(super::classroom::Column::Building, super::classroom::Column::RoomNumber)"
    )]
    Classroom,
    #[sea_orm(has_many = "super::takes::Entity")]
    Takes,
    #[sea_orm(has_many = "super::teaches::Entity")]
    Teaches,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
