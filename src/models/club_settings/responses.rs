use serde::Serialize;
use ts_rs::TS;

use super::entities::ClubSettings;

// 当前生效的社团设置
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club_settings.ts")]
pub struct CurrentClubSettingsResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub settings: ClubSettings,
    pub is_joining_period_active: bool,
}

impl From<ClubSettings> for CurrentClubSettingsResponse {
    fn from(settings: ClubSettings) -> Self {
        let is_joining_period_active = settings.is_joining_period_active();
        Self {
            settings,
            is_joining_period_active,
        }
    }
}
