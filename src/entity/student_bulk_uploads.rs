//! 学生批量导入记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_bulk_uploads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub cluster_id: i64,
    pub file_name: String,
    pub total_students: i32,
    pub successful_uploads: i32,
    pub failed_uploads: i32,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_log: Option<String>,
    pub upload_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clusters::Entity",
        from = "Column::ClusterId",
        to = "super::clusters::Column::Id"
    )]
    Cluster,
}

impl Related<super::clusters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cluster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_bulk_upload(self) -> crate::models::students::entities::StudentBulkUpload {
        use crate::models::students::entities::{BulkUploadStatus, StudentBulkUpload};

        StudentBulkUpload {
            id: self.id,
            cluster: self.cluster_id,
            file_name: self.file_name,
            total_students: self.total_students,
            successful_uploads: self.successful_uploads,
            failed_uploads: self.failed_uploads,
            status: self
                .status
                .parse::<BulkUploadStatus>()
                .unwrap_or(BulkUploadStatus::Processing),
            error_log: self.error_log,
            upload_date: super::to_datetime(self.upload_date),
        }
    }
}
