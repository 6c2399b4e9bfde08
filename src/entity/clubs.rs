//! 社团实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clubs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub club_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub coordinator_id: i64,
    pub max_members: i32,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::CoordinatorId",
        to = "super::staff::Column::Id"
    )]
    Coordinator,
    #[sea_orm(has_many = "super::club_members::Entity")]
    ClubMembers,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coordinator.def()
    }
}

impl Related<super::club_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubMembers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 社团列表展示所需的关联统计
#[derive(Debug, Clone, Default)]
pub struct ClubStats {
    pub coordinator_name: Option<String>,
    pub department_name: Option<String>,
    pub member_count: u64,
    pub representative_count: u64,
}

impl Model {
    pub fn into_club(self, stats: ClubStats) -> crate::models::clubs::entities::Club {
        use super::to_datetime;
        use crate::models::clubs::entities::Club;

        Club {
            id: self.id,
            club_id: self.club_id,
            name: self.name,
            description: self.description,
            coordinator: self.coordinator_id,
            coordinator_name: stats.coordinator_name,
            department_name: stats.department_name,
            max_members: self.max_members,
            member_count: stats.member_count as i64,
            representative_count: stats.representative_count as i64,
            is_active: self.is_active,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
