//! 社团全局设置实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "club_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_join_period_start: Option<i64>,
    pub student_join_period_end: Option<i64>,
    pub is_joining_open: bool,
    pub max_clubs_per_student: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_club_settings(self) -> crate::models::club_settings::entities::ClubSettings {
        use super::to_datetime;
        use crate::models::club_settings::entities::ClubSettings;

        ClubSettings {
            id: self.id,
            student_join_period_start: self.student_join_period_start.map(to_datetime),
            student_join_period_end: self.student_join_period_end.map(to_datetime),
            is_joining_open: self.is_joining_open,
            max_clubs_per_student: self.max_clubs_per_student,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
