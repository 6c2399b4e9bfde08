use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    accounts::{entities::Account, requests::AccountListQuery, responses::AccountListResponse},
    club_settings::{
        entities::ClubSettings,
        requests::{CreateClubSettingsRequest, UpdateClubSettingsRequest},
    },
    clubs::{
        entities::{Club, ClubMember},
        requests::{ClubListQuery, CreateClubRequest, UpdateClubRequest},
        responses::ClubListResponse,
    },
    clusters::{
        entities::Cluster,
        requests::{ClusterListQuery, CreateClusterRequest, UpdateClusterRequest},
        responses::ClusterListResponse,
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
        responses::DepartmentListResponse,
    },
    staff::{
        entities::Staff,
        requests::{NewStaff, StaffListQuery, UpdateStaffRequest},
        responses::StaffListResponse,
    },
    students::{
        entities::{Student, StudentBulkUpload},
        requests::{BulkUploadListQuery, NewStudent, StudentListQuery, StudentUpdate},
        responses::{BulkUploadListResponse, StudentListResponse},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 登录账号方法
    // 通过ID获取账号
    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>>;
    // 列出账号
    async fn list_accounts_with_pagination(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse>;

    /// 学群管理方法
    // 创建学群
    async fn create_cluster(&self, cluster: CreateClusterRequest) -> Result<Cluster>;
    // 通过ID获取学群
    async fn get_cluster_by_id(&self, id: i64) -> Result<Option<Cluster>>;
    // 通过代码获取学群
    async fn get_cluster_by_code(&self, code: &str) -> Result<Option<Cluster>>;
    // 通过名称获取学群
    async fn get_cluster_by_name(&self, name: &str) -> Result<Option<Cluster>>;
    // 列出学群
    async fn list_clusters_with_pagination(
        &self,
        query: ClusterListQuery,
    ) -> Result<ClusterListResponse>;
    // 列出启用的学群
    async fn list_active_clusters(&self) -> Result<Vec<Cluster>>;
    // 更新学群
    async fn update_cluster(
        &self,
        id: i64,
        update: UpdateClusterRequest,
    ) -> Result<Option<Cluster>>;
    // 删除学群
    async fn delete_cluster(&self, id: i64) -> Result<bool>;
    // 切换学群启用状态
    async fn toggle_cluster_status(&self, id: i64) -> Result<Option<Cluster>>;

    /// 院系管理方法
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn get_department_by_code(&self, code: &str) -> Result<Option<Department>>;
    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>>;
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse>;
    async fn list_active_departments(&self) -> Result<Vec<Department>>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 教职工管理方法
    // 创建教职工（同时创建登录账号）
    async fn create_staff(&self, staff: NewStaff) -> Result<Staff>;
    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>>;
    // 通过工号获取教职工
    async fn get_staff_by_staff_id(&self, staff_id: &str) -> Result<Option<Staff>>;
    async fn get_staff_by_email(&self, email: &str) -> Result<Option<Staff>>;
    async fn list_staff_with_pagination(&self, query: StaffListQuery)
    -> Result<StaffListResponse>;
    async fn list_active_staff(&self) -> Result<Vec<Staff>>;
    // 启用且开放院系权限的教职工，可按院系过滤
    async fn list_mentor_candidates(&self, department_id: Option<i64>) -> Result<Vec<Staff>>;
    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>>;
    // 删除教职工及其登录账号
    async fn delete_staff(&self, id: i64) -> Result<bool>;
    async fn toggle_staff_status(&self, id: i64) -> Result<Option<Staff>>;
    // 切换导师权限，关闭时清空导师学群
    async fn toggle_staff_mentor_access(&self, id: i64) -> Result<Option<Staff>>;

    /// 学生管理方法
    // 创建学生（同时创建登录账号）
    async fn create_student(&self, student: NewStudent) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生
    async fn get_student_by_student_id(&self, student_id: &str) -> Result<Option<Student>>;
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    async fn get_student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn list_active_students(&self) -> Result<Vec<Student>>;
    async fn update_student(&self, id: i64, update: StudentUpdate) -> Result<Option<Student>>;
    // 删除学生及其登录账号
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn toggle_student_status(&self, id: i64) -> Result<Option<Student>>;
    // 切换换社团权限，开启时设置截止时间
    async fn toggle_student_club_change(
        &self,
        id: i64,
        window_hours: i64,
    ) -> Result<Option<Student>>;
    // 标记凭据已发送
    async fn mark_credentials_sent(&self, id: i64) -> Result<bool>;
    // 重置密码：同时更新学生明文副本与账号哈希
    async fn reset_student_password(
        &self,
        id: i64,
        password: &str,
        password_hash: &str,
    ) -> Result<Option<Student>>;

    /// 批量导入记录方法
    async fn create_bulk_upload(
        &self,
        cluster_id: i64,
        file_name: &str,
        total_students: i32,
    ) -> Result<StudentBulkUpload>;
    async fn finish_bulk_upload(
        &self,
        id: i64,
        successful_uploads: i32,
        failed_uploads: i32,
        error_log: Option<String>,
    ) -> Result<StudentBulkUpload>;
    async fn list_bulk_uploads_with_pagination(
        &self,
        query: BulkUploadListQuery,
    ) -> Result<BulkUploadListResponse>;

    /// 社团管理方法
    async fn create_club(&self, club: CreateClubRequest) -> Result<Club>;
    async fn get_club_by_id(&self, id: i64) -> Result<Option<Club>>;
    async fn list_clubs_with_pagination(&self, query: ClubListQuery) -> Result<ClubListResponse>;
    async fn list_active_clubs(&self) -> Result<Vec<Club>>;
    async fn update_club(&self, id: i64, update: UpdateClubRequest) -> Result<Option<Club>>;
    async fn delete_club(&self, id: i64) -> Result<bool>;
    async fn toggle_club_status(&self, id: i64) -> Result<Option<Club>>;

    /// 社团成员方法
    async fn list_club_members(
        &self,
        club_id: i64,
        is_active: Option<bool>,
    ) -> Result<Vec<ClubMember>>;
    async fn get_club_member(&self, club_id: i64, member_id: i64) -> Result<Option<ClubMember>>;
    // 查询学生在某社团的成员记录（含已退出）
    async fn get_club_membership(
        &self,
        club_id: i64,
        student_id: i64,
    ) -> Result<Option<ClubMember>>;
    // 学生当前加入的社团数
    async fn count_active_student_memberships(&self, student_id: i64) -> Result<u64>;
    // 添加成员，已退出的记录会被重新激活
    async fn add_club_member(
        &self,
        club_id: i64,
        student_id: i64,
        is_representative: bool,
    ) -> Result<ClubMember>;
    async fn leave_club_member(&self, club_id: i64, member_id: i64)
    -> Result<Option<ClubMember>>;
    async fn toggle_club_representative(
        &self,
        club_id: i64,
        member_id: i64,
    ) -> Result<Option<ClubMember>>;

    /// 社团设置方法
    async fn create_club_settings(&self, settings: CreateClubSettingsRequest)
    -> Result<ClubSettings>;
    async fn get_club_settings_by_id(&self, id: i64) -> Result<Option<ClubSettings>>;
    async fn list_club_settings(&self) -> Result<Vec<ClubSettings>>;
    // 当前生效的设置（ID 最小的记录）
    async fn get_current_club_settings(&self) -> Result<Option<ClubSettings>>;
    // 不存在时以默认值创建
    async fn ensure_club_settings(&self) -> Result<ClubSettings>;
    async fn update_club_settings(
        &self,
        id: i64,
        update: UpdateClubSettingsRequest,
    ) -> Result<Option<ClubSettings>>;
    async fn delete_club_settings(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 使用指定的数据库配置创建存储
pub async fn create_storage_with(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_with_config(config).await?;
    Ok(Arc::new(storage))
}
