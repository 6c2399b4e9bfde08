//! 社团成员实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "club_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub club_id: i64,
    pub student_id: i64,
    pub is_representative: bool,
    pub is_active: bool,
    pub joined_at: i64,
    pub left_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clubs::Entity",
        from = "Column::ClubId",
        to = "super::clubs::Column::Id"
    )]
    Club,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::clubs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_club_member(
        self,
        student: Option<&super::students::Model>,
    ) -> crate::models::clubs::entities::ClubMember {
        use super::to_datetime;
        use crate::models::clubs::entities::ClubMember;

        ClubMember {
            id: self.id,
            club: self.club_id,
            student: self.student_id,
            student_name: student.map(|s| s.name.clone()),
            student_number: student.map(|s| s.student_id.clone()),
            is_representative: self.is_representative,
            is_active: self.is_active,
            joined_at: to_datetime(self.joined_at),
            left_at: self.left_at.map(to_datetime),
        }
    }
}
