use std::sync::Arc;

use crate::errors::Result;
use crate::models::FieldErrors;
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

const NAME_MAX: usize = 100;
const CODE_MAX: usize = 10;

/// 校验名称与代码；`current_id` 为更新时的自身 ID
pub(super) async fn check_cluster_fields(
    storage: &Arc<dyn Storage>,
    name: Option<&str>,
    code: Option<&str>,
    current_id: Option<i64>,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut validator = FieldValidator::new(&mut errors);

    let name_ok = name.is_none_or(|n| validator.required("cluster_name", n, NAME_MAX));
    let code_ok = code.is_none_or(|c| validator.required("cluster_code", c, CODE_MAX));

    if let Some(name) = name.filter(|_| name_ok)
        && let Some(existing) = storage.get_cluster_by_name(name.trim()).await?
        && Some(existing.id) != current_id
    {
        errors.add("cluster_name", "Cluster name must be unique.");
    }

    if let Some(code) = code.filter(|_| code_ok)
        && let Some(existing) = storage
            .get_cluster_by_code(&code.trim().to_uppercase())
            .await?
        && Some(existing.id) != current_id
    {
        errors.add("cluster_code", "Cluster code must be unique.");
    }

    Ok(errors)
}
