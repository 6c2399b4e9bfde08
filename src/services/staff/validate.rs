use std::sync::Arc;

use crate::errors::Result;
use crate::models::FieldErrors;
use crate::models::staff::requests::{CreateStaffRequest, UpdateStaffRequest};
use crate::storage::Storage;
use crate::utils::validate::{FieldValidator, invalid_pk_message};

const STAFF_ID_MAX: usize = 20;
const NAME_MAX: usize = 100;
const PHONE_MAX: usize = 15;
const TEXT_MAX: usize = 200;

/// 待校验的教职工字段，`None` 表示未提供
pub(super) struct StaffFields<'a> {
    pub staff_id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub subject_expertise: Option<&'a str>,
    pub qualification: Option<&'a str>,
    pub department: Option<i64>,
    pub mentor_cluster: Option<i64>,
}

impl<'a> From<&'a CreateStaffRequest> for StaffFields<'a> {
    fn from(req: &'a CreateStaffRequest) -> Self {
        Self {
            staff_id: Some(&req.staff_id),
            name: Some(&req.name),
            email: Some(&req.email),
            phone: req.phone.as_deref(),
            subject_expertise: Some(&req.subject_expertise),
            qualification: Some(&req.qualification),
            department: Some(req.department),
            mentor_cluster: req.mentor_cluster,
        }
    }
}

impl<'a> From<&'a UpdateStaffRequest> for StaffFields<'a> {
    fn from(req: &'a UpdateStaffRequest) -> Self {
        Self {
            staff_id: req.staff_id.as_deref(),
            name: req.name.as_deref(),
            email: req.email.as_deref(),
            phone: req.phone.as_deref(),
            subject_expertise: req.subject_expertise.as_deref(),
            qualification: req.qualification.as_deref(),
            department: req.department,
            mentor_cluster: req.mentor_cluster,
        }
    }
}

pub(super) async fn check_staff_fields(
    storage: &Arc<dyn Storage>,
    fields: StaffFields<'_>,
    current_id: Option<i64>,
) -> Result<FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut validator = FieldValidator::new(&mut errors);

    let staff_id_ok = fields
        .staff_id
        .is_none_or(|v| validator.required("staff_id", v, STAFF_ID_MAX));
    validator.optional("phone", fields.phone, PHONE_MAX);
    if let Some(name) = fields.name {
        validator.required("name", name, NAME_MAX);
    }
    if let Some(expertise) = fields.subject_expertise {
        validator.required("subject_expertise", expertise, TEXT_MAX);
    }
    if let Some(qualification) = fields.qualification {
        validator.required("qualification", qualification, TEXT_MAX);
    }
    let email_ok = fields.email.is_none_or(|v| validator.email("email", v));

    if let Some(staff_id) = fields.staff_id.filter(|_| staff_id_ok)
        && let Some(existing) = storage.get_staff_by_staff_id(staff_id.trim()).await?
        && Some(existing.id) != current_id
    {
        errors.add("staff_id", "Staff ID must be unique.");
    }

    if let Some(email) = fields.email.filter(|_| email_ok)
        && let Some(existing) = storage.get_staff_by_email(email.trim()).await?
        && Some(existing.id) != current_id
    {
        errors.add("email", "Email must be unique.");
    }

    if let Some(department) = fields.department
        && storage.get_department_by_id(department).await?.is_none()
    {
        errors.add("department", invalid_pk_message(department));
    }

    if let Some(cluster) = fields.mentor_cluster
        && storage.get_cluster_by_id(cluster).await?.is_none()
    {
        errors.add("mentor_cluster", invalid_pk_message(cluster));
    }

    Ok(errors)
}
