use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::clusters::{Column as ClusterColumn, Entity as Clusters};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model as StudentModel};
use crate::entity::users::{self, Column as UserColumn, split_name};
use crate::errors::{AppError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    students::{
        entities::Student,
        requests::{NewStudent, StudentListQuery, StudentUpdate},
        responses::StudentListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量加载账号用户名与学群名称
    async fn hydrate_students(&self, models: Vec<StudentModel>) -> Result<Vec<Student>> {
        let user_ids: HashSet<i64> = models.iter().map(|m| m.user_id).collect();
        let cluster_ids: HashSet<i64> = models.iter().map(|m| m.cluster_id).collect();

        let accounts: HashMap<i64, _> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            users::Entity::find()
                .filter(UserColumn::Id.is_in(user_ids))
                .all(&self.db)
                .await
                .map_err(|e| AppError::database_operation(format!("查询学生账号失败: {e}")))?
                .into_iter()
                .map(|u| (u.id, u))
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
                let account = accounts.get(&m.user_id);
                let cluster = clusters.get(&m.cluster_id);
                m.into_student(account, cluster)
            })
            .collect())
    }

    async fn hydrate_one_student(&self, model: StudentModel) -> Result<Student> {
        self.hydrate_students(vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::not_found("Student not found"))
    }

    async fn find_student_model(&self, id: i64) -> Result<Option<StudentModel>> {
        Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学生失败: {e}")))
    }

    async fn find_student_by(&self, condition: Condition) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(condition)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学生失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_one_student(model).await?)),
            None => Ok(None),
        }
    }

    /// 创建学生及其登录账号（同一事务）
    pub async fn create_student_impl(&self, student: NewStudent) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let (first_name, last_name) = split_name(&student.name);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("开启事务失败: {e}")))?;

        let account = users::ActiveModel {
            username: Set(student.username),
            email: Set(student.email.clone()),
            password_hash: Set(student.password_hash),
            first_name: Set(first_name),
            last_name: Set(last_name),
            is_active: Set(student.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::database_operation(format!("创建学生账号失败: {e}")))?;

        let model = ActiveModel {
            user_id: Set(account.id),
            student_id: Set(student.student_id),
            name: Set(student.name),
            email: Set(student.email),
            phone: Set(student.phone),
            cluster_id: Set(student.cluster_id),
            roll_number: Set(student.roll_number),
            year_of_admission: Set(student.year_of_admission),
            current_semester: Set(student.current_semester),
            password: Set(Some(student.password)),
            can_change_club: Set(student.can_change_club),
            club_change_expires_at: Set(None),
            is_active: Set(student.is_active),
            credentials_sent: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AppError::database_operation(format!("创建学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("提交事务失败: {e}")))?;

        self.hydrate_one_student(model).await
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        match self.find_student_model(id).await? {
            Some(model) => Ok(Some(self.hydrate_one_student(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_student_by_student_id_impl(&self, student_id: &str) -> Result<Option<Student>> {
        self.find_student_by(Condition::all().add(Column::StudentId.eq(student_id)))
            .await
    }

    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        self.find_student_by(Condition::all().add(Column::Email.eq(email.trim())))
            .await
    }

    pub async fn get_student_by_roll_number_impl(
        &self,
        roll_number: &str,
    ) -> Result<Option<Student>> {
        self.find_student_by(Condition::all().add(Column::RollNumber.eq(roll_number.trim())))
            .await
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Students::find();

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }
        if let Some(cluster) = query.cluster {
            select = select.filter(Column::ClusterId.eq(cluster));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(search)))
                    .add(Column::StudentId.like(contains_pattern(search)))
                    .add(Column::Email.like(contains_pattern(search)))
                    .add(Column::RollNumber.like(contains_pattern(search))),
            );
        }

        let paginator = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::database_operation(format!("查询学生总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::database_operation(format!("查询学生页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: self.hydrate_students(models).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_active_students_impl(&self) -> Result<Vec<Student>> {
        let models = Students::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学生列表失败: {e}")))?;

        self.hydrate_students(models).await
    }

    /// 更新学生，同步登录账号的邮箱、姓名与密码
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: StudentUpdate,
    ) -> Result<Option<Student>> {
        let Some(existing) = self.find_student_model(id).await? else {
            return Ok(None);
        };

        let StudentUpdate {
            request: req,
            password_hash,
        } = update;
        let now = chrono::Utc::now().timestamp();
        let user_id = existing.user_id;
        let mut model: ActiveModel = existing.into();
        let mut account = users::ActiveModel {
            id: Set(user_id),
            ..Default::default()
        };
        let mut account_changed = false;

        if let Some(name) = req.name {
            let (first_name, last_name) = split_name(&name);
            account.first_name = Set(first_name);
            account.last_name = Set(last_name);
            account_changed = true;
            model.name = Set(name.trim().to_string());
        }
        if let Some(email) = req.email {
            let email = email.trim().to_string();
            account.email = Set(email.clone());
            account_changed = true;
            model.email = Set(email);
        }
        if let (Some(password), Some(hash)) = (req.password, password_hash) {
            account.password_hash = Set(hash);
            account_changed = true;
            model.password = Set(Some(password));
        }
        if let Some(phone) = req.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(cluster) = req.cluster {
            model.cluster_id = Set(cluster);
        }
        if let Some(roll_number) = req.roll_number {
            model.roll_number = Set(Some(roll_number.trim().to_string()));
        }
        if let Some(year) = req.year_of_admission {
            model.year_of_admission = Set(year);
        }
        if let Some(semester) = req.current_semester {
            model.current_semester = Set(semester);
        }
        if let Some(is_active) = req.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(can_change_club) = req.can_change_club {
            model.can_change_club = Set(can_change_club);
        }
        model.updated_at = Set(now);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("开启事务失败: {e}")))?;

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("更新学生失败: {e}")))?;

        if account_changed {
            account.updated_at = Set(now);
            account
                .update(&txn)
                .await
                .map_err(|e| AppError::database_operation(format!("更新学生账号失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(self.hydrate_one_student(updated).await?))
    }

    /// 删除学生及其登录账号
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let Some(existing) = self.find_student_model(id).await? else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("开启事务失败: {e}")))?;

        Students::delete_by_id(existing.id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("删除学生失败: {e}")))?;
        users::Entity::delete_by_id(existing.user_id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("删除学生账号失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    pub async fn toggle_student_status_impl(&self, id: i64) -> Result<Option<Student>> {
        let Some(existing) = self.find_student_model(id).await? else {
            return Ok(None);
        };

        let is_active = existing.is_active;
        let mut model: ActiveModel = existing.into();
        model.is_active = Set(!is_active);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("切换学生状态失败: {e}")))?;

        Ok(Some(self.hydrate_one_student(updated).await?))
    }

    /// 切换换社团权限：开启时截止时间为当前时间加窗口时长，关闭时清空
    pub async fn toggle_student_club_change_impl(
        &self,
        id: i64,
        window_hours: i64,
    ) -> Result<Option<Student>> {
        let Some(existing) = self.find_student_model(id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let enabled = !existing.can_change_club;
        let mut model: ActiveModel = existing.into();
        model.can_change_club = Set(enabled);
        model.club_change_expires_at = Set(enabled.then(|| now + window_hours * 3600));
        model.updated_at = Set(now);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("切换换社团权限失败: {e}")))?;

        Ok(Some(self.hydrate_one_student(updated).await?))
    }

    pub async fn mark_credentials_sent_impl(&self, id: i64) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(Column::CredentialsSent, sea_orm::sea_query::Expr::value(true))
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("更新凭据发送状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 重置密码：学生明文副本与账号哈希在同一事务中更新
    pub async fn reset_student_password_impl(
        &self,
        id: i64,
        password: &str,
        password_hash: &str,
    ) -> Result<Option<Student>> {
        let Some(existing) = self.find_student_model(id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let user_id = existing.user_id;
        let mut model: ActiveModel = existing.into();
        model.password = Set(Some(password.to_string()));
        model.updated_at = Set(now);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("开启事务失败: {e}")))?;

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("重置学生密码失败: {e}")))?;

        users::ActiveModel {
            id: Set(user_id),
            password_hash: Set(password_hash.to_string()),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| AppError::database_operation(format!("更新账号密码失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(self.hydrate_one_student(updated).await?))
    }
}
