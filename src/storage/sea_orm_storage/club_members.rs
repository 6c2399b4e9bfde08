use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::club_members::{ActiveModel, Column, Entity as ClubMembers, Model as MemberModel};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{AppError, Result};
use crate::models::clubs::entities::ClubMember;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 批量加载成员的学生姓名与学号
    async fn hydrate_members(&self, models: Vec<MemberModel>) -> Result<Vec<ClubMember>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<i64> = models.iter().map(|m| m.student_id).collect();
        let students: HashMap<i64, _> = Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询成员学生失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let student = students.get(&m.student_id);
                m.into_club_member(student)
            })
            .collect())
    }

    async fn hydrate_one_member(&self, model: MemberModel) -> Result<ClubMember> {
        self.hydrate_members(vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::not_found("Club member not found"))
    }

    async fn find_member_model(&self, club_id: i64, member_id: i64) -> Result<Option<MemberModel>> {
        ClubMembers::find_by_id(member_id)
            .filter(Column::ClubId.eq(club_id))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团成员失败: {e}")))
    }

    pub async fn list_club_members_impl(
        &self,
        club_id: i64,
        is_active: Option<bool>,
    ) -> Result<Vec<ClubMember>> {
        let mut select = ClubMembers::find().filter(Column::ClubId.eq(club_id));
        if let Some(is_active) = is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        let models = select
            .order_by_asc(Column::JoinedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团成员失败: {e}")))?;

        self.hydrate_members(models).await
    }

    pub async fn get_club_member_impl(
        &self,
        club_id: i64,
        member_id: i64,
    ) -> Result<Option<ClubMember>> {
        match self.find_member_model(club_id, member_id).await? {
            Some(model) => Ok(Some(self.hydrate_one_member(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_club_membership_impl(
        &self,
        club_id: i64,
        student_id: i64,
    ) -> Result<Option<ClubMember>> {
        let result = ClubMembers::find()
            .filter(Column::ClubId.eq(club_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团成员失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_one_member(model).await?)),
            None => Ok(None),
        }
    }

    pub async fn count_active_student_memberships_impl(&self, student_id: i64) -> Result<u64> {
        ClubMembers::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("统计学生社团数失败: {e}")))
    }

    /// 添加成员；已退出的成员记录重新激活，保证 (社团, 学生) 只有一条记录
    pub async fn add_club_member_impl(
        &self,
        club_id: i64,
        student_id: i64,
        is_representative: bool,
    ) -> Result<ClubMember> {
        let now = chrono::Utc::now().timestamp();

        let existing = ClubMembers::find()
            .filter(Column::ClubId.eq(club_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团成员失败: {e}")))?;

        let model = match existing {
            Some(member) if member.is_active => {
                return Err(AppError::conflict(
                    "Student is already a member of this club",
                ));
            }
            Some(member) => {
                let mut model: ActiveModel = member.into();
                model.is_active = Set(true);
                model.is_representative = Set(is_representative);
                model.joined_at = Set(now);
                model.left_at = Set(None);
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| AppError::database_operation(format!("恢复社团成员失败: {e}")))?
            }
            None => ActiveModel {
                club_id: Set(club_id),
                student_id: Set(student_id),
                is_representative: Set(is_representative),
                is_active: Set(true),
                joined_at: Set(now),
                left_at: Set(None),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("添加社团成员失败: {e}")))?,
        };

        self.hydrate_one_member(model).await
    }

    /// 退出社团：保留记录，标记为非在籍
    pub async fn leave_club_member_impl(
        &self,
        club_id: i64,
        member_id: i64,
    ) -> Result<Option<ClubMember>> {
        let Some(existing) = self.find_member_model(club_id, member_id).await? else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.is_active = Set(false);
        model.left_at = Set(Some(chrono::Utc::now().timestamp()));

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("退出社团失败: {e}")))?;

        Ok(Some(self.hydrate_one_member(updated).await?))
    }

    pub async fn toggle_club_representative_impl(
        &self,
        club_id: i64,
        member_id: i64,
    ) -> Result<Option<ClubMember>> {
        let Some(existing) = self.find_member_model(club_id, member_id).await? else {
            return Ok(None);
        };

        let is_representative = existing.is_representative;
        let mut model: ActiveModel = existing.into();
        model.is_representative = Set(!is_representative);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("切换社团代表失败: {e}")))?;

        Ok(Some(self.hydrate_one_member(updated).await?))
    }
}
