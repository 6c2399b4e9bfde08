use super::SeaOrmStorage;
use crate::entity::student_bulk_uploads::{ActiveModel, Column, Entity as BulkUploads};
use crate::errors::{AppError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    students::{
        entities::{BulkUploadStatus, StudentBulkUpload},
        requests::BulkUploadListQuery,
        responses::BulkUploadListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建导入记录，初始状态为 processing
    pub async fn create_bulk_upload_impl(
        &self,
        cluster_id: i64,
        file_name: &str,
        total_students: i32,
    ) -> Result<StudentBulkUpload> {
        let model = ActiveModel {
            cluster_id: Set(cluster_id),
            file_name: Set(file_name.to_string()),
            total_students: Set(total_students),
            successful_uploads: Set(0),
            failed_uploads: Set(0),
            status: Set(BulkUploadStatus::Processing.to_string()),
            error_log: Set(None),
            upload_date: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建导入记录失败: {e}")))?;

        Ok(result.into_bulk_upload())
    }

    /// 写入导入结果并确定最终状态
    pub async fn finish_bulk_upload_impl(
        &self,
        id: i64,
        successful_uploads: i32,
        failed_uploads: i32,
        error_log: Option<String>,
    ) -> Result<StudentBulkUpload> {
        let status = BulkUploadStatus::finished(failed_uploads as usize);

        let model = ActiveModel {
            id: Set(id),
            successful_uploads: Set(successful_uploads),
            failed_uploads: Set(failed_uploads),
            status: Set(status.to_string()),
            error_log: Set(error_log),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("更新导入记录失败: {e}")))?;

        Ok(result.into_bulk_upload())
    }

    /// 分页列出导入记录（最新的在前）
    pub async fn list_bulk_uploads_with_pagination_impl(
        &self,
        query: BulkUploadListQuery,
    ) -> Result<BulkUploadListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = BulkUploads::find();
        if let Some(cluster) = query.cluster {
            select = select.filter(Column::ClusterId.eq(cluster));
        }

        let paginator = select
            .order_by_desc(Column::UploadDate)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::database_operation(format!("查询导入记录总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::database_operation(format!("查询导入记录页数失败: {e}")))?;
        let uploads = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AppError::database_operation(format!("查询导入记录失败: {e}")))?;

        Ok(BulkUploadListResponse {
            items: uploads.into_iter().map(|m| m.into_bulk_upload()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }
}
