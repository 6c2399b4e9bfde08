//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accounts;
mod bulk_uploads;
mod club_members;
mod club_settings;
mod clubs;
mod clusters;
mod departments;
mod staff;
mod students;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{AppError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::new_with_config(&AppConfig::get().database).await
    }

    /// 使用指定配置创建存储实例并运行迁移
    pub async fn new_with_config(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AppError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存库不支持 WAL
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 每个内存库连接都是独立的数据库，只能使用单连接
        let max_connections = if in_memory { 1 } else { config.pool_size };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(if in_memory {
                None
            } else {
                Some(Duration::from_secs(300))
            })
            .max_lifetime(if in_memory {
                None
            } else {
                Some(Duration::from_secs(1800))
            })
            .connect_with(opt)
            .await
            .map_err(|e| AppError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AppError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AppError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.get_account_by_id_impl(id).await
    }

    async fn list_accounts_with_pagination(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse> {
        self.list_accounts_with_pagination_impl(query).await
    }

    // 学群模块
    async fn create_cluster(&self, cluster: CreateClusterRequest) -> Result<Cluster> {
        self.create_cluster_impl(cluster).await
    }

    async fn get_cluster_by_id(&self, id: i64) -> Result<Option<Cluster>> {
        self.get_cluster_by_id_impl(id).await
    }

    async fn get_cluster_by_code(&self, code: &str) -> Result<Option<Cluster>> {
        self.get_cluster_by_code_impl(code).await
    }

    async fn get_cluster_by_name(&self, name: &str) -> Result<Option<Cluster>> {
        self.get_cluster_by_name_impl(name).await
    }

    async fn list_clusters_with_pagination(
        &self,
        query: ClusterListQuery,
    ) -> Result<ClusterListResponse> {
        self.list_clusters_with_pagination_impl(query).await
    }

    async fn list_active_clusters(&self) -> Result<Vec<Cluster>> {
        self.list_active_clusters_impl().await
    }

    async fn update_cluster(
        &self,
        id: i64,
        update: UpdateClusterRequest,
    ) -> Result<Option<Cluster>> {
        self.update_cluster_impl(id, update).await
    }

    async fn delete_cluster(&self, id: i64) -> Result<bool> {
        self.delete_cluster_impl(id).await
    }

    async fn toggle_cluster_status(&self, id: i64) -> Result<Option<Cluster>> {
        self.toggle_cluster_status_impl(id).await
    }

    // 院系模块
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(department).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_by_code(&self, code: &str) -> Result<Option<Department>> {
        self.get_department_by_code_impl(code).await
    }

    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>> {
        self.get_department_by_name_impl(name).await
    }

    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        self.list_departments_with_pagination_impl(query).await
    }

    async fn list_active_departments(&self) -> Result<Vec<Department>> {
        self.list_active_departments_impl().await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    // 教职工模块
    async fn create_staff(&self, staff: NewStaff) -> Result<Staff> {
        self.create_staff_impl(staff).await
    }

    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>> {
        self.get_staff_by_id_impl(id).await
    }

    async fn get_staff_by_staff_id(&self, staff_id: &str) -> Result<Option<Staff>> {
        self.get_staff_by_staff_id_impl(staff_id).await
    }

    async fn get_staff_by_email(&self, email: &str) -> Result<Option<Staff>> {
        self.get_staff_by_email_impl(email).await
    }

    async fn list_staff_with_pagination(
        &self,
        query: StaffListQuery,
    ) -> Result<StaffListResponse> {
        self.list_staff_with_pagination_impl(query).await
    }

    async fn list_active_staff(&self) -> Result<Vec<Staff>> {
        self.list_active_staff_impl().await
    }

    async fn list_mentor_candidates(&self, department_id: Option<i64>) -> Result<Vec<Staff>> {
        self.list_mentor_candidates_impl(department_id).await
    }

    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>> {
        self.update_staff_impl(id, update).await
    }

    async fn delete_staff(&self, id: i64) -> Result<bool> {
        self.delete_staff_impl(id).await
    }

    async fn toggle_staff_status(&self, id: i64) -> Result<Option<Staff>> {
        self.toggle_staff_status_impl(id).await
    }

    async fn toggle_staff_mentor_access(&self, id: i64) -> Result<Option<Staff>> {
        self.toggle_staff_mentor_access_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_student_id(&self, student_id: &str) -> Result<Option<Student>> {
        self.get_student_by_student_id_impl(student_id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn get_student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>> {
        self.get_student_by_roll_number_impl(roll_number).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn list_active_students(&self) -> Result<Vec<Student>> {
        self.list_active_students_impl().await
    }

    async fn update_student(&self, id: i64, update: StudentUpdate) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn toggle_student_status(&self, id: i64) -> Result<Option<Student>> {
        self.toggle_student_status_impl(id).await
    }

    async fn toggle_student_club_change(
        &self,
        id: i64,
        window_hours: i64,
    ) -> Result<Option<Student>> {
        self.toggle_student_club_change_impl(id, window_hours).await
    }

    async fn mark_credentials_sent(&self, id: i64) -> Result<bool> {
        self.mark_credentials_sent_impl(id).await
    }

    async fn reset_student_password(
        &self,
        id: i64,
        password: &str,
        password_hash: &str,
    ) -> Result<Option<Student>> {
        self.reset_student_password_impl(id, password, password_hash)
            .await
    }

    // 批量导入模块
    async fn create_bulk_upload(
        &self,
        cluster_id: i64,
        file_name: &str,
        total_students: i32,
    ) -> Result<StudentBulkUpload> {
        self.create_bulk_upload_impl(cluster_id, file_name, total_students)
            .await
    }

    async fn finish_bulk_upload(
        &self,
        id: i64,
        successful_uploads: i32,
        failed_uploads: i32,
        error_log: Option<String>,
    ) -> Result<StudentBulkUpload> {
        self.finish_bulk_upload_impl(id, successful_uploads, failed_uploads, error_log)
            .await
    }

    async fn list_bulk_uploads_with_pagination(
        &self,
        query: BulkUploadListQuery,
    ) -> Result<BulkUploadListResponse> {
        self.list_bulk_uploads_with_pagination_impl(query).await
    }

    // 社团模块
    async fn create_club(&self, club: CreateClubRequest) -> Result<Club> {
        self.create_club_impl(club).await
    }

    async fn get_club_by_id(&self, id: i64) -> Result<Option<Club>> {
        self.get_club_by_id_impl(id).await
    }

    async fn list_clubs_with_pagination(&self, query: ClubListQuery) -> Result<ClubListResponse> {
        self.list_clubs_with_pagination_impl(query).await
    }

    async fn list_active_clubs(&self) -> Result<Vec<Club>> {
        self.list_active_clubs_impl().await
    }

    async fn update_club(&self, id: i64, update: UpdateClubRequest) -> Result<Option<Club>> {
        self.update_club_impl(id, update).await
    }

    async fn delete_club(&self, id: i64) -> Result<bool> {
        self.delete_club_impl(id).await
    }

    async fn toggle_club_status(&self, id: i64) -> Result<Option<Club>> {
        self.toggle_club_status_impl(id).await
    }

    // 社团成员模块
    async fn list_club_members(
        &self,
        club_id: i64,
        is_active: Option<bool>,
    ) -> Result<Vec<ClubMember>> {
        self.list_club_members_impl(club_id, is_active).await
    }

    async fn get_club_member(&self, club_id: i64, member_id: i64) -> Result<Option<ClubMember>> {
        self.get_club_member_impl(club_id, member_id).await
    }

    async fn get_club_membership(
        &self,
        club_id: i64,
        student_id: i64,
    ) -> Result<Option<ClubMember>> {
        self.get_club_membership_impl(club_id, student_id).await
    }

    async fn count_active_student_memberships(&self, student_id: i64) -> Result<u64> {
        self.count_active_student_memberships_impl(student_id).await
    }

    async fn add_club_member(
        &self,
        club_id: i64,
        student_id: i64,
        is_representative: bool,
    ) -> Result<ClubMember> {
        self.add_club_member_impl(club_id, student_id, is_representative)
            .await
    }

    async fn leave_club_member(
        &self,
        club_id: i64,
        member_id: i64,
    ) -> Result<Option<ClubMember>> {
        self.leave_club_member_impl(club_id, member_id).await
    }

    async fn toggle_club_representative(
        &self,
        club_id: i64,
        member_id: i64,
    ) -> Result<Option<ClubMember>> {
        self.toggle_club_representative_impl(club_id, member_id)
            .await
    }

    // 社团设置模块
    async fn create_club_settings(
        &self,
        settings: CreateClubSettingsRequest,
    ) -> Result<ClubSettings> {
        self.create_club_settings_impl(settings).await
    }

    async fn get_club_settings_by_id(&self, id: i64) -> Result<Option<ClubSettings>> {
        self.get_club_settings_by_id_impl(id).await
    }

    async fn list_club_settings(&self) -> Result<Vec<ClubSettings>> {
        self.list_club_settings_impl().await
    }

    async fn get_current_club_settings(&self) -> Result<Option<ClubSettings>> {
        self.get_current_club_settings_impl().await
    }

    async fn ensure_club_settings(&self) -> Result<ClubSettings> {
        self.ensure_club_settings_impl().await
    }

    async fn update_club_settings(
        &self,
        id: i64,
        update: UpdateClubSettingsRequest,
    ) -> Result<Option<ClubSettings>> {
        self.update_club_settings_impl(id, update).await
    }

    async fn delete_club_settings(&self, id: i64) -> Result<bool> {
        self.delete_club_settings_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::SeaOrmStorage;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("campus.db").unwrap(),
            "sqlite://campus.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").is_ok());
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }
}
