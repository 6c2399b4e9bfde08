use std::sync::Arc;

use crate::errors::Result;
use crate::models::FieldErrors;
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

const NAME_MAX: usize = 100;

/// 校验社团名称、负责人与人数上限
pub(super) async fn check_club_fields(
    storage: &Arc<dyn Storage>,
    name: Option<&str>,
    coordinator: Option<i64>,
    max_members: Option<i32>,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(name) = name {
        FieldValidator::new(&mut errors).required("name", name, NAME_MAX);
    }

    if let Some(max_members) = max_members
        && max_members < 1
    {
        errors.add(
            "max_members",
            "Ensure this value is greater than or equal to 1.",
        );
    }

    // 负责人必须是在职教职工
    if let Some(coordinator) = coordinator {
        let active = storage
            .get_staff_by_id(coordinator)
            .await?
            .is_some_and(|staff| staff.is_active);
        if !active {
            errors.add("coordinator", "Coordinator must be an active staff member.");
        }
    }

    Ok(errors)
}
