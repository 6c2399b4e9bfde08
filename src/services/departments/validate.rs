use std::sync::Arc;

use crate::errors::Result;
use crate::models::FieldErrors;
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

const NAME_MAX: usize = 100;
const CODE_MAX: usize = 10;

/// 校验院系名称与代码的必填、长度与唯一性
pub(super) async fn check_department_fields(
    storage: &Arc<dyn Storage>,
    name: Option<&str>,
    code: Option<&str>,
    current_id: Option<i64>,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut validator = FieldValidator::new(&mut errors);

    let name_ok = name.is_none_or(|n| validator.required("name", n, NAME_MAX));
    let code_ok = code.is_none_or(|c| validator.required("code", c, CODE_MAX));

    if let Some(name) = name.filter(|_| name_ok)
        && let Some(existing) = storage.get_department_by_name(name.trim()).await?
        && Some(existing.id) != current_id
    {
        errors.add("name", "Department name must be unique.");
    }

    if let Some(code) = code.filter(|_| code_ok)
        && let Some(existing) = storage.get_department_by_code(code.trim()).await?
        && Some(existing.id) != current_id
    {
        errors.add("code", "Department code must be unique.");
    }

    Ok(errors)
}
