//! 学群实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clusters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub cluster_name: String,
    #[sea_orm(unique)]
    pub cluster_code: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
    #[sea_orm(has_many = "super::student_bulk_uploads::Entity")]
    StudentBulkUploads,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::student_bulk_uploads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentBulkUploads.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_cluster(self) -> crate::models::clusters::entities::Cluster {
        use super::to_datetime;
        use crate::models::clusters::entities::Cluster;

        Cluster {
            display_name: format!("{} ({})", self.cluster_code, self.cluster_name),
            id: self.id,
            cluster_name: self.cluster_name,
            cluster_code: self.cluster_code,
            description: self.description,
            is_active: self.is_active,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
