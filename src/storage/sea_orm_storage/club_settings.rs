use super::SeaOrmStorage;
use crate::entity::club_settings::{ActiveModel, Column, Entity as ClubSettingsEntity};
use crate::errors::{AppError, Result};
use crate::models::club_settings::{
    entities::ClubSettings,
    requests::{CreateClubSettingsRequest, UpdateClubSettingsRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::info;

/// 每名学生默认可加入的社团数
const DEFAULT_MAX_CLUBS_PER_STUDENT: i32 = 1;

impl SeaOrmStorage {
    pub async fn create_club_settings_impl(
        &self,
        req: CreateClubSettingsRequest,
    ) -> Result<ClubSettings> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_join_period_start: Set(req.student_join_period_start.map(|t| t.timestamp())),
            student_join_period_end: Set(req.student_join_period_end.map(|t| t.timestamp())),
            is_joining_open: Set(req.is_joining_open.unwrap_or(false)),
            max_clubs_per_student: Set(req
                .max_clubs_per_student
                .unwrap_or(DEFAULT_MAX_CLUBS_PER_STUDENT)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建社团设置失败: {e}")))?;

        Ok(result.into_club_settings())
    }

    pub async fn get_club_settings_by_id_impl(&self, id: i64) -> Result<Option<ClubSettings>> {
        let result = ClubSettingsEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团设置失败: {e}")))?;

        Ok(result.map(|m| m.into_club_settings()))
    }

    pub async fn list_club_settings_impl(&self) -> Result<Vec<ClubSettings>> {
        let settings = ClubSettingsEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团设置失败: {e}")))?;

        Ok(settings.into_iter().map(|m| m.into_club_settings()).collect())
    }

    /// 当前生效的设置：ID 最小的记录
    pub async fn get_current_club_settings_impl(&self) -> Result<Option<ClubSettings>> {
        let result = ClubSettingsEntity::find()
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团设置失败: {e}")))?;

        Ok(result.map(|m| m.into_club_settings()))
    }

    pub async fn ensure_club_settings_impl(&self) -> Result<ClubSettings> {
        if let Some(settings) = self.get_current_club_settings_impl().await? {
            return Ok(settings);
        }

        info!("No club settings found, creating defaults");
        self.create_club_settings_impl(CreateClubSettingsRequest::default())
            .await
    }

    pub async fn update_club_settings_impl(
        &self,
        id: i64,
        update: UpdateClubSettingsRequest,
    ) -> Result<Option<ClubSettings>> {
        let Some(existing) = ClubSettingsEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询社团设置失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(start) = update.student_join_period_start {
            model.student_join_period_start = Set(Some(start.timestamp()));
        }
        if let Some(end) = update.student_join_period_end {
            model.student_join_period_end = Set(Some(end.timestamp()));
        }
        if let Some(is_joining_open) = update.is_joining_open {
            model.is_joining_open = Set(is_joining_open);
        }
        if let Some(max_clubs) = update.max_clubs_per_student {
            model.max_clubs_per_student = Set(max_clubs);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("更新社团设置失败: {e}")))?;

        Ok(Some(updated.into_club_settings()))
    }

    pub async fn delete_club_settings_impl(&self, id: i64) -> Result<bool> {
        let result = ClubSettingsEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("删除社团设置失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
