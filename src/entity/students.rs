//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub student_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub cluster_id: i64,
    #[sea_orm(unique)]
    pub roll_number: Option<String>,
    pub year_of_admission: i32,
    pub current_semester: i32,
    pub password: Option<String>,
    pub can_change_club: bool,
    pub club_change_expires_at: Option<i64>,
    pub is_active: bool,
    pub credentials_sent: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::clusters::Entity",
        from = "Column::ClusterId",
        to = "super::clusters::Column::Id"
    )]
    Cluster,
    #[sea_orm(has_many = "super::club_members::Entity")]
    ClubMembers,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::clusters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cluster.def()
    }
}

impl Related<super::club_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubMembers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（附带账号用户名与学群名称）
impl Model {
    pub fn into_student(
        self,
        account: Option<&super::users::Model>,
        cluster: Option<&super::clusters::Model>,
    ) -> crate::models::students::entities::Student {
        use super::to_datetime;
        use crate::models::students::entities::Student;

        Student {
            id: self.id,
            user_id: self.user_id,
            student_id: self.student_id,
            username: account.map(|a| a.username.clone()).unwrap_or_default(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            cluster: self.cluster_id,
            cluster_name: cluster.map(|c| c.cluster_name.clone()),
            roll_number: self.roll_number,
            year_of_admission: self.year_of_admission,
            current_semester: self.current_semester,
            password: self.password,
            can_change_club: self.can_change_club,
            club_change_expires_at: self.club_change_expires_at.map(to_datetime),
            is_active: self.is_active,
            credentials_sent: self.credentials_sent,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
