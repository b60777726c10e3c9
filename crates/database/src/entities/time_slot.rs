use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One meeting period of a slot. A slot id groups several rows, one per day
/// it meets on; `day` is the single-letter code from `models::Day`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_slot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time_slot_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub day: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub start_hour: i16,
    #[sea_orm(primary_key, auto_increment = false)]
    pub start_minute: i16,
    pub end_hour: i16,
    pub end_minute: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
