//! 教职工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub staff_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub subject_expertise: String,
    pub qualification: String,
    pub department_id: i64,
    pub photo: Option<String>,
    pub departmental_access_enabled: bool,
    pub mentor_access_enabled: bool,
    pub mentor_cluster_id: Option<i64>,
    pub is_active: bool,
    pub date_joined: i64,
    pub last_updated: i64,
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
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::clusters::Entity",
        from = "Column::MentorClusterId",
        to = "super::clusters::Column::Id"
    )]
    MentorCluster,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::clusters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorCluster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（附带院系与导师学群名称）
impl Model {
    pub fn into_staff(
        self,
        department: Option<&super::departments::Model>,
        mentor_cluster: Option<&super::clusters::Model>,
    ) -> crate::models::staff::entities::Staff {
        use super::to_datetime;
        use crate::models::staff::entities::{Staff, StaffDisplayInfo};

        let department_name = department.map(|d| d.name.clone());

        Staff {
            display_info: StaffDisplayInfo {
                id: self.id,
                name: self.name.clone(),
                photo: self.photo.clone(),
                department: department_name.clone(),
            },
            id: self.id,
            user_id: self.user_id,
            staff_id: self.staff_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject_expertise: self.subject_expertise,
            qualification: self.qualification,
            department: self.department_id,
            department_name,
            photo: self.photo,
            departmental_access_enabled: self.departmental_access_enabled,
            mentor_access_enabled: self.mentor_access_enabled,
            mentor_cluster: self.mentor_cluster_id,
            mentor_cluster_name: mentor_cluster.map(|c| c.cluster_name.clone()),
            is_active: self.is_active,
            date_joined: to_datetime(self.date_joined),
            last_updated: to_datetime(self.last_updated),
        }
    }
}
