use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 社团全局设置
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/club_settings.ts")]
pub struct ClubSettings {
    pub id: i64,
    pub student_join_period_start: Option<DateTime<Utc>>,
    pub student_join_period_end: Option<DateTime<Utc>>,
    pub is_joining_open: bool,
    pub max_clubs_per_student: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClubSettings {
    /// 学生自助加入是否开放
    ///
    /// 总开关关闭时始终为 false；起止时间都设置时要求 `start <= now <= end`；
    /// 否则以总开关为准。
    pub fn is_joining_period_active_at(&self, now: DateTime<Utc>) -> bool {
        if !self.is_joining_open {
            return false;
        }
        match (self.student_join_period_start, self.student_join_period_end) {
            (Some(start), Some(end)) => start <= now && now <= end,
            _ => self.is_joining_open,
        }
    }

    pub fn is_joining_period_active(&self) -> bool {
        self.is_joining_period_active_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn settings(open: bool, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> ClubSettings {
        let now = Utc::now();
        ClubSettings {
            id: 1,
            student_join_period_start: start,
            student_join_period_end: end,
            is_joining_open: open,
            max_clubs_per_student: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_closed_switch_wins_over_window() {
        let now = Utc::now();
        let s = settings(
            false,
            Some(now - Duration::hours(1)),
            Some(now + Duration::hours(1)),
        );
        assert!(!s.is_joining_period_active_at(now));
        assert!(!settings(false, None, None).is_joining_period_active_at(now));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let now = Utc::now();
        let start = now - Duration::hours(2);
        let end = now + Duration::hours(2);
        let s = settings(true, Some(start), Some(end));
        assert!(s.is_joining_period_active_at(now));
        assert!(s.is_joining_period_active_at(start));
        assert!(s.is_joining_period_active_at(end));
        assert!(!s.is_joining_period_active_at(start - Duration::seconds(1)));
        assert!(!s.is_joining_period_active_at(end + Duration::seconds(1)));
    }

    #[test]
    fn test_partial_window_falls_back_to_switch() {
        let now = Utc::now();
        let s = settings(true, Some(now + Duration::days(1)), None);
        assert!(s.is_joining_period_active_at(now));
        assert!(settings(true, None, None).is_joining_period_active_at(now));
    }
}
