use super::SeaOrmStorage;
use crate::entity::clusters::{ActiveModel, Column, Entity as Clusters};
use crate::errors::{AppError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    clusters::{
        entities::Cluster,
        requests::{ClusterListQuery, CreateClusterRequest, UpdateClusterRequest},
        responses::ClusterListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学群
    pub async fn create_cluster_impl(&self, req: CreateClusterRequest) -> Result<Cluster> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            cluster_name: Set(req.cluster_name.trim().to_string()),
            cluster_code: Set(req.cluster_code.trim().to_uppercase()),
            description: Set(req.description),
            is_active: Set(req.is_active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建学群失败: {e}")))?;

        Ok(result.into_cluster())
    }

    /// 通过 ID 获取学群
    pub async fn get_cluster_by_id_impl(&self, id: i64) -> Result<Option<Cluster>> {
        let result = Clusters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群失败: {e}")))?;

        Ok(result.map(|m| m.into_cluster()))
    }

    /// 通过代码获取学群（代码统一存储为大写）
    pub async fn get_cluster_by_code_impl(&self, code: &str) -> Result<Option<Cluster>> {
        let result = Clusters::find()
            .filter(Column::ClusterCode.eq(code.trim().to_uppercase()))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群失败: {e}")))?;

        Ok(result.map(|m| m.into_cluster()))
    }

    /// 通过名称获取学群
    pub async fn get_cluster_by_name_impl(&self, name: &str) -> Result<Option<Cluster>> {
        let result = Clusters::find()
            .filter(Column::ClusterName.eq(name.trim()))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群失败: {e}")))?;

        Ok(result.map(|m| m.into_cluster()))
    }

    /// 分页列出学群
    pub async fn list_clusters_with_pagination_impl(
        &self,
        query: ClusterListQuery,
    ) -> Result<ClusterListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Clusters::find();

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::ClusterName.like(contains_pattern(search)))
                    .add(Column::ClusterCode.like(contains_pattern(search))),
            );
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群页数失败: {e}")))?;
        let clusters = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群列表失败: {e}")))?;

        Ok(ClusterListResponse {
            items: clusters.into_iter().map(|m| m.into_cluster()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 列出启用的学群
    pub async fn list_active_clusters_impl(&self) -> Result<Vec<Cluster>> {
        let clusters = Clusters::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群列表失败: {e}")))?;

        Ok(clusters.into_iter().map(|m| m.into_cluster()).collect())
    }

    /// 更新学群
    pub async fn update_cluster_impl(
        &self,
        id: i64,
        update: UpdateClusterRequest,
    ) -> Result<Option<Cluster>> {
        let Some(existing) = Clusters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(cluster_name) = update.cluster_name {
            model.cluster_name = Set(cluster_name.trim().to_string());
        }
        if let Some(cluster_code) = update.cluster_code {
            model.cluster_code = Set(cluster_code.trim().to_uppercase());
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("更新学群失败: {e}")))?;

        Ok(Some(updated.into_cluster()))
    }

    /// 删除学群
    pub async fn delete_cluster_impl(&self, id: i64) -> Result<bool> {
        let result = Clusters::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("删除学群失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 切换学群启用状态
    pub async fn toggle_cluster_status_impl(&self, id: i64) -> Result<Option<Cluster>> {
        let Some(existing) = Clusters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学群失败: {e}")))?
        else {
            return Ok(None);
        };

        let is_active = existing.is_active;
        let mut model: ActiveModel = existing.into();
        model.is_active = Set(!is_active);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("切换学群状态失败: {e}")))?;

        Ok(Some(updated.into_cluster()))
    }
}
