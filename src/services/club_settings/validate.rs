use chrono::{DateTime, Utc};

use crate::models::FieldErrors;

pub(super) fn check_settings_fields(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    max_clubs_per_student: Option<i32>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(max) = max_clubs_per_student
        && max < 1
    {
        errors.add(
            "max_clubs_per_student",
            "Ensure this value is greater than or equal to 1.",
        );
    }

    if let (Some(start), Some(end)) = (start, end)
        && start > end
    {
        errors.add(
            "student_join_period_end",
            "Join period end must not be before its start.",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_period_order_and_limit() {
        let now = Utc::now();
        assert!(check_settings_fields(Some(now), Some(now), Some(1)).is_empty());

        let errors = check_settings_fields(Some(now), Some(now - Duration::hours(1)), Some(0));
        assert!(errors.contains("student_join_period_end"));
        assert!(errors.contains("max_clubs_per_student"));
    }
}
