//! 学生注册：单个创建与批量导入共用

use std::sync::Arc;

use crate::errors::{AppError, Result};
use crate::models::clusters::entities::Cluster;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, NewStudent},
};
use crate::storage::Storage;
use crate::utils::password::hash_password_blocking;
use crate::utils::random_code::{generate_password, generate_student_number};

const STUDENT_ID_ATTEMPTS: usize = 20;

/// 生成学号、用户名与密码后创建学生及其登录账号
pub async fn register_student(
    storage: &Arc<dyn Storage>,
    request: CreateStudentRequest,
    cluster: &Cluster,
) -> Result<Student> {
    let password = request
        .password
        .filter(|p| !p.is_empty())
        .unwrap_or_else(generate_password);
    let password_hash = hash_password_blocking(password.clone()).await?;

    let student_id = allocate_student_id(storage, &cluster.cluster_code).await?;
    let email = request.email.trim().to_string();
    let username = student_username(&email, &student_id);

    let new_student = NewStudent {
        student_id,
        username,
        name: request.name.trim().to_string(),
        email,
        phone: non_blank(request.phone),
        cluster_id: cluster.id,
        roll_number: non_blank(request.roll_number),
        year_of_admission: request.year_of_admission,
        current_semester: request.current_semester.unwrap_or(1),
        is_active: request.is_active.unwrap_or(true),
        can_change_club: request.can_change_club.unwrap_or(false),
        password,
        password_hash,
    };

    storage.create_student(new_student).await
}

/// 学号格式为 `{学群代码}{四位随机数}`，冲突时重新生成
async fn allocate_student_id(storage: &Arc<dyn Storage>, cluster_code: &str) -> Result<String> {
    for _ in 0..STUDENT_ID_ATTEMPTS {
        let candidate = generate_student_number(cluster_code);
        if storage.get_student_by_student_id(&candidate).await?.is_none() {
            return Ok(candidate);
        }
    }
    Err(AppError::conflict(format!(
        "No free student ID left for cluster {cluster_code}"
    )))
}

/// 登录用户名：邮箱本地部分 + `_` + 学号
fn student_username(email: &str, student_id: &str) -> String {
    let local = email.split_once('@').map_or(email, |(local, _)| local);
    format!("{local}_{student_id}")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_username() {
        assert_eq!(
            student_username("jane.doe@school.edu", "CSE1234"),
            "jane.doe_CSE1234"
        );
        assert_eq!(student_username("nodomain", "CSE1234"), "nodomain_CSE1234");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" ST01 ".to_string())), Some("ST01".to_string()));
        assert_eq!(non_blank(None), None);
    }
}
