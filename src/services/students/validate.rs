use std::sync::Arc;

use crate::errors::Result;
use crate::models::FieldErrors;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::storage::Storage;
use crate::utils::validate::{FieldValidator, invalid_pk_message};

const NAME_MAX: usize = 100;
const PHONE_MAX: usize = 15;
const ROLL_NUMBER_MAX: usize = 20;
const PASSWORD_MAX: usize = 100;

/// 待校验的学生字段，`None` 表示未提供
#[derive(Debug, Default)]
pub(crate) struct StudentFields<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub roll_number: Option<&'a str>,
    pub password: Option<&'a str>,
    pub cluster: Option<i64>,
}

impl<'a> From<&'a CreateStudentRequest> for StudentFields<'a> {
    fn from(req: &'a CreateStudentRequest) -> Self {
        Self {
            name: Some(&req.name),
            email: Some(&req.email),
            phone: req.phone.as_deref(),
            roll_number: req.roll_number.as_deref(),
            password: req.password.as_deref(),
            cluster: Some(req.cluster),
        }
    }
}

impl<'a> From<&'a UpdateStudentRequest> for StudentFields<'a> {
    fn from(req: &'a UpdateStudentRequest) -> Self {
        Self {
            name: req.name.as_deref(),
            email: req.email.as_deref(),
            phone: req.phone.as_deref(),
            roll_number: req.roll_number.as_deref(),
            password: req.password.as_deref(),
            cluster: req.cluster,
        }
    }
}

/// 校验学生字段；邮箱与座号需唯一（更新时排除自身）
pub(crate) async fn check_student_fields(
    storage: &Arc<dyn Storage>,
    fields: StudentFields<'_>,
    current_id: Option<i64>,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut validator = FieldValidator::new(&mut errors);

    if let Some(name) = fields.name {
        validator.required("name", name, NAME_MAX);
    }
    validator.optional("phone", fields.phone, PHONE_MAX);
    validator.optional("password", fields.password, PASSWORD_MAX);
    let roll_ok = validator.optional("roll_number", fields.roll_number, ROLL_NUMBER_MAX);
    let email_ok = fields.email.is_none_or(|v| validator.email("email", v));

    if let Some(email) = fields.email.filter(|_| email_ok)
        && let Some(existing) = storage.get_student_by_email(email.trim()).await?
        && Some(existing.id) != current_id
    {
        errors.add("email", "Email already exists.");
    }

    if let Some(roll_number) = fields
        .roll_number
        .map(str::trim)
        .filter(|r| roll_ok && !r.is_empty())
        && let Some(existing) = storage.get_student_by_roll_number(roll_number).await?
        && Some(existing.id) != current_id
    {
        errors.add("roll_number", "Roll number already exists.");
    }

    if let Some(cluster) = fields.cluster
        && storage.get_cluster_by_id(cluster).await?.is_none()
    {
        errors.add("cluster", invalid_pk_message(cluster));
    }

    Ok(errors)
}
