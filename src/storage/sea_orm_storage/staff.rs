use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::clusters::{Column as ClusterColumn, Entity as Clusters};
use crate::entity::departments::{Column as DepartmentColumn, Entity as Departments};
use crate::entity::staff::{ActiveModel, Column, Entity as StaffEntity, Model as StaffModel};
use crate::entity::users::{self, split_name};
use crate::errors::{AppError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    staff::{
        entities::Staff,
        requests::{NewStaff, StaffListQuery, UpdateStaffRequest},
        responses::StaffListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量加载院系与导师学群名称
    async fn hydrate_staff(&self, models: Vec<StaffModel>) -> Result<Vec<Staff>> {
        let department_ids: HashSet<i64> = models.iter().map(|m| m.department_id).collect();
        let cluster_ids: HashSet<i64> = models.iter().filter_map(|m| m.mentor_cluster_id).collect();

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

        let clusters: HashMap<i64, _> = if cluster_ids.is_empty() {
            HashMap::new()
        } else {
            Clusters::find()
                .filter(ClusterColumn::Id.is_in(cluster_ids))
                .all(&self.db)
                .await
                .map_err(|e| AppError::database_operation(format!("查询学群失败: {e}")))?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let department = departments.get(&m.department_id);
                let cluster = m.mentor_cluster_id.and_then(|id| clusters.get(&id));
                m.into_staff(department, cluster)
            })
            .collect())
    }

    async fn hydrate_one_staff(&self, model: StaffModel) -> Result<Staff> {
        self.hydrate_staff(vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::not_found("Staff not found"))
    }

    async fn find_staff_model(&self, id: i64) -> Result<Option<StaffModel>> {
        StaffEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询教职工失败: {e}")))
    }

    /// 创建教职工及其登录账号（同一事务）
    pub async fn create_staff_impl(&self, staff: NewStaff) -> Result<Staff> {
        let NewStaff {
            request: req,
            password_hash,
        } = staff;
        let now = chrono::Utc::now().timestamp();
        let is_active = req.is_active.unwrap_or(true);
        let (first_name, last_name) = split_name(&req.name);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("开启事务失败: {e}")))?;

        let account = users::ActiveModel {
            username: Set(req.staff_id.trim().to_string()),
            email: Set(req.email.trim().to_string()),
            password_hash: Set(password_hash),
            first_name: Set(first_name),
            last_name: Set(last_name),
            is_active: Set(is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::database_operation(format!("创建教职工账号失败: {e}")))?;

        let model = ActiveModel {
            user_id: Set(account.id),
            staff_id: Set(req.staff_id.trim().to_string()),
            name: Set(req.name.trim().to_string()),
            email: Set(req.email.trim().to_string()),
            phone: Set(req.phone),
            subject_expertise: Set(req.subject_expertise),
            qualification: Set(req.qualification),
            department_id: Set(req.department),
            photo: Set(req.photo),
            departmental_access_enabled: Set(req.departmental_access_enabled.unwrap_or(false)),
            mentor_access_enabled: Set(req.mentor_access_enabled.unwrap_or(false)),
            mentor_cluster_id: Set(req.mentor_cluster),
            is_active: Set(is_active),
            date_joined: Set(now),
            last_updated: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::database_operation(format!("创建教职工失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("提交事务失败: {e}")))?;

        self.hydrate_one_staff(model).await
    }

    pub async fn get_staff_by_id_impl(&self, id: i64) -> Result<Option<Staff>> {
        match self.find_staff_model(id).await? {
            Some(model) => Ok(Some(self.hydrate_one_staff(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_staff_by_staff_id_impl(&self, staff_id: &str) -> Result<Option<Staff>> {
        let result = StaffEntity::find()
            .filter(Column::StaffId.eq(staff_id.trim()))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询教职工失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_one_staff(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_staff_by_email_impl(&self, email: &str) -> Result<Option<Staff>> {
        let result = StaffEntity::find()
            .filter(Column::Email.eq(email.trim()))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询教职工失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_one_staff(model).await?)),
            None => Ok(None),
        }
    }

    /// 分页列出教职工
    pub async fn list_staff_with_pagination_impl(
        &self,
        query: StaffListQuery,
    ) -> Result<StaffListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = StaffEntity::find();

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }
        if let Some(department) = query.department {
            select = select.filter(Column::DepartmentId.eq(department));
        }
        if let Some(mentor_enabled) = query.mentor_enabled {
            select = select.filter(Column::MentorAccessEnabled.eq(mentor_enabled));
        }

        // 搜索姓名、工号、邮箱
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(search)))
                    .add(Column::StaffId.like(contains_pattern(search)))
                    .add(Column::Email.like(contains_pattern(search))),
            );
        }

        let paginator = select.order_by_asc(Column::Name).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::database_operation(format!("查询教职工总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::database_operation(format!("查询教职工页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AppError::database_operation(format!("查询教职工列表失败: {e}")))?;

        Ok(StaffListResponse {
            items: self.hydrate_staff(models).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_active_staff_impl(&self) -> Result<Vec<Staff>> {
        let models = StaffEntity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询教职工列表失败: {e}")))?;

        self.hydrate_staff(models).await
    }

    /// 可担任导师的教职工：启用且开放院系权限
    pub async fn list_mentor_candidates_impl(
        &self,
        department_id: Option<i64>,
    ) -> Result<Vec<Staff>> {
        let mut select = StaffEntity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::DepartmentalAccessEnabled.eq(true));

        if let Some(department_id) = department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        let models = select
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询导师列表失败: {e}")))?;

        self.hydrate_staff(models).await
    }

    /// 更新教职工，同步登录账号的用户名、邮箱与姓名
    pub async fn update_staff_impl(
        &self,
        id: i64,
        update: UpdateStaffRequest,
    ) -> Result<Option<Staff>> {
        let Some(existing) = self.find_staff_model(id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let user_id = existing.user_id;
        let mut model: ActiveModel = existing.into();
        let mut account = users::ActiveModel {
            id: Set(user_id),
            ..Default::default()
        };
        let mut account_changed = false;

        if let Some(staff_id) = update.staff_id {
            let staff_id = staff_id.trim().to_string();
            account.username = Set(staff_id.clone());
            account_changed = true;
            model.staff_id = Set(staff_id);
        }
        if let Some(name) = update.name {
            let (first_name, last_name) = split_name(&name);
            account.first_name = Set(first_name);
            account.last_name = Set(last_name);
            account_changed = true;
            model.name = Set(name.trim().to_string());
        }
        if let Some(email) = update.email {
            let email = email.trim().to_string();
            account.email = Set(email.clone());
            account_changed = true;
            model.email = Set(email);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(subject_expertise) = update.subject_expertise {
            model.subject_expertise = Set(subject_expertise);
        }
        if let Some(qualification) = update.qualification {
            model.qualification = Set(qualification);
        }
        if let Some(department) = update.department {
            model.department_id = Set(department);
        }
        if let Some(photo) = update.photo {
            model.photo = Set(Some(photo));
        }
        if let Some(enabled) = update.departmental_access_enabled {
            model.departmental_access_enabled = Set(enabled);
        }
        if let Some(enabled) = update.mentor_access_enabled {
            model.mentor_access_enabled = Set(enabled);
        }
        if let Some(mentor_cluster) = update.mentor_cluster {
            model.mentor_cluster_id = Set(Some(mentor_cluster));
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        model.last_updated = Set(now);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("开启事务失败: {e}")))?;

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("更新教职工失败: {e}")))?;

        if account_changed {
            account.updated_at = Set(now);
            account
                .update(&txn)
                .await
                .map_err(|e| AppError::database_operation(format!("更新教职工账号失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(self.hydrate_one_staff(updated).await?))
    }

    /// 删除教职工及其登录账号
    pub async fn delete_staff_impl(&self, id: i64) -> Result<bool> {
        let Some(existing) = self.find_staff_model(id).await? else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("开启事务失败: {e}")))?;

        StaffEntity::delete_by_id(existing.id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("删除教职工失败: {e}")))?;
        users::Entity::delete_by_id(existing.user_id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("删除教职工账号失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    pub async fn toggle_staff_status_impl(&self, id: i64) -> Result<Option<Staff>> {
        let Some(existing) = self.find_staff_model(id).await? else {
            return Ok(None);
        };

        let is_active = existing.is_active;
        let mut model: ActiveModel = existing.into();
        model.is_active = Set(!is_active);
        model.last_updated = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("切换教职工状态失败: {e}")))?;

        Ok(Some(self.hydrate_one_staff(updated).await?))
    }

    /// 切换导师权限；关闭后导师学群一律清空
    pub async fn toggle_staff_mentor_access_impl(&self, id: i64) -> Result<Option<Staff>> {
        let Some(existing) = self.find_staff_model(id).await? else {
            return Ok(None);
        };

        let enabled = !existing.mentor_access_enabled;
        let mut model: ActiveModel = existing.into();
        model.mentor_access_enabled = Set(enabled);
        if !enabled {
            model.mentor_cluster_id = Set(None);
        }
        model.last_updated = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("切换导师权限失败: {e}")))?;

        Ok(Some(self.hydrate_one_staff(updated).await?))
    }
}
