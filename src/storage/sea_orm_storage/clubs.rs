use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::club_members::{Column as MemberColumn, Entity as ClubMembers};
use crate::entity::clubs::{ActiveModel, ClubStats, Column, Entity as Clubs, Model as ClubModel};
use crate::entity::departments::{Column as DepartmentColumn, Entity as Departments};
use crate::entity::staff::{Column as StaffColumn, Entity as StaffEntity};
use crate::errors::{AppError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    clubs::{
        entities::Club,
        requests::{ClubListQuery, CreateClubRequest, UpdateClubRequest},
        responses::ClubListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

/// 社团默认人数上限
const DEFAULT_MAX_MEMBERS: i32 = 50;

impl SeaOrmStorage {
    /// 批量加载负责人、院系与成员统计
    async fn hydrate_clubs(&self, models: Vec<ClubModel>) -> Result<Vec<Club>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let club_ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let coordinator_ids: HashSet<i64> = models.iter().map(|m| m.coordinator_id).collect();

        let coordinators: HashMap<i64, _> = StaffEntity::find()
            .filter(StaffColumn::Id.is_in(coordinator_ids))
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团负责人失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let department_ids: HashSet<i64> = coordinators.values().map(|s| s.department_id).collect();
        let departments: HashMap<i64, _> = if department_ids.is_empty() {
            HashMap::new()
        } else {
            Departments::find()
                .filter(DepartmentColumn::Id.is_in(department_ids))
                .all(&self.db)
                .await
                .map_err(|e| AppError::database_operation(format!("查询院系失败: {e}")))?
                .into_iter()
                .map(|d| (d.id, d))
                .collect()
        };

        // 只统计在籍成员
        let active_members = ClubMembers::find()
            .filter(MemberColumn::ClubId.is_in(club_ids))
            .filter(MemberColumn::IsActive.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团成员失败: {e}")))?;

        let mut counts: HashMap<i64, (u64, u64)> = HashMap::new();
        for member in active_members {
            let entry = counts.entry(member.club_id).or_default();
            entry.0 += 1;
            if member.is_representative {
                entry.1 += 1;
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let coordinator = coordinators.get(&m.coordinator_id);
                let (member_count, representative_count) =
                    counts.get(&m.id).copied().unwrap_or_default();
                let stats = ClubStats {
                    coordinator_name: coordinator.map(|s| s.name.clone()),
                    department_name: coordinator
                        .and_then(|s| departments.get(&s.department_id))
                        .map(|d| d.name.clone()),
                    member_count,
                    representative_count,
                };
                m.into_club(stats)
            })
            .collect())
    }

    async fn hydrate_one_club(&self, model: ClubModel) -> Result<Club> {
        self.hydrate_clubs(vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::not_found("Club not found"))
    }

    async fn find_club_model(&self, id: i64) -> Result<Option<ClubModel>> {
        Clubs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团失败: {e}")))
    }

    /// 创建社团，club_id 生成后不可修改
    pub async fn create_club_impl(&self, req: CreateClubRequest) -> Result<Club> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            club_id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name.trim().to_string()),
            description: Set(req.description),
            coordinator_id: Set(req.coordinator),
            max_members: Set(req.max_members.unwrap_or(DEFAULT_MAX_MEMBERS)),
            is_active: Set(req.is_active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建社团失败: {e}")))?;

        self.hydrate_one_club(result).await
    }

    pub async fn get_club_by_id_impl(&self, id: i64) -> Result<Option<Club>> {
        match self.find_club_model(id).await? {
            Some(model) => Ok(Some(self.hydrate_one_club(model).await?)),
            None => Ok(None),
        }
    }

    /// 分页列出社团（按名称排序）
    pub async fn list_clubs_with_pagination_impl(
        &self,
        query: ClubListQuery,
    ) -> Result<ClubListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Clubs::find();

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(search)))
                    .add(Column::Description.like(contains_pattern(search))),
            );
        }

        let paginator = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团列表失败: {e}")))?;

        Ok(ClubListResponse {
            items: self.hydrate_clubs(models).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_active_clubs_impl(&self) -> Result<Vec<Club>> {
        let models = Clubs::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团列表失败: {e}")))?;

        self.hydrate_clubs(models).await
    }

    pub async fn update_club_impl(
        &self,
        id: i64,
        update: UpdateClubRequest,
    ) -> Result<Option<Club>> {
        let Some(existing) = self.find_club_model(id).await? else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(coordinator) = update.coordinator {
            model.coordinator_id = Set(coordinator);
        }
        if let Some(max_members) = update.max_members {
            model.max_members = Set(max_members);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("更新社团失败: {e}")))?;

        Ok(Some(self.hydrate_one_club(updated).await?))
    }

    pub async fn delete_club_impl(&self, id: i64) -> Result<bool> {
        let result = Clubs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("删除社团失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn toggle_club_status_impl(&self, id: i64) -> Result<Option<Club>> {
        let Some(existing) = self.find_club_model(id).await? else {
            return Ok(None);
        };

        let is_active = existing.is_active;
        let mut model: ActiveModel = existing.into();
        model.is_active = Set(!is_active);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("切换社团状态失败: {e}")))?;

        Ok(Some(self.hydrate_one_club(updated).await?))
    }
}
