//! 集成测试公共设施：内存 SQLite 存储、可观测的邮件后端、测试数据构造

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use campus_admin::config::DatabaseConfig;
use campus_admin::errors::{AppError, Result};
use campus_admin::mail::{CredentialEmail, CredentialMailer};
use campus_admin::models::{
    clusters::{entities::Cluster, requests::CreateClusterRequest},
    departments::{entities::Department, requests::CreateDepartmentRequest},
};
use campus_admin::storage::{Storage, create_storage_with};

/// 记录所有发出的邮件
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<CredentialEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<CredentialEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CredentialMailer for RecordingMailer {
    async fn send(&self, email: &CredentialEmail) -> Result<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }
        Ok(())
    }
}

/// 永远发送失败
pub struct FailingMailer;

#[async_trait::async_trait]
impl CredentialMailer for FailingMailer {
    async fn send(&self, _email: &CredentialEmail) -> Result<()> {
        Err(AppError::email_delivery("SMTP server unavailable"))
    }
}

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<dyn CredentialMailer>,
    pub recorder: Arc<RecordingMailer>,
}

impl TestContext {
    /// 每个测试独立的内存库
    pub async fn new() -> Self {
        let recorder = Arc::new(RecordingMailer::default());
        let mut ctx = Self::with_mailer(recorder.clone()).await;
        ctx.recorder = recorder;
        ctx
    }

    pub async fn with_mailer(mailer: Arc<dyn CredentialMailer>) -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 30,
        };
        let storage = create_storage_with(&config)
            .await
            .expect("in-memory storage should initialize");

        Self {
            storage,
            mailer,
            recorder: Arc::new(RecordingMailer::default()),
        }
    }

    pub async fn cluster(&self, name: &str, code: &str) -> Cluster {
        self.storage
            .create_cluster(CreateClusterRequest {
                cluster_name: name.to_string(),
                cluster_code: code.to_string(),
                description: None,
                is_active: None,
            })
            .await
            .expect("cluster should be created")
    }

    pub async fn department(&self, name: &str, code: &str) -> Department {
        self.storage
            .create_department(CreateDepartmentRequest {
                name: name.to_string(),
                code: code.to_string(),
                description: None,
                is_active: None,
            })
            .await
            .expect("department should be created")
    }
}

/// 以测试上下文构建完整应用
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(campus_admin::utils::query_error_handler),
                )
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(campus_admin::utils::json_error_handler),
                )
                .app_data(actix_web::web::Data::new($ctx.storage.clone()))
                .app_data(actix_web::web::Data::new($ctx.mailer.clone()))
                .configure(campus_admin::routes::configure_api_routes),
        )
        .await
    };
}

/// 构造 multipart/form-data 请求体
pub fn multipart_body(
    boundary: &str,
    file: Option<(&str, &[u8])>,
    fields: &[(&str, &str)],
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

/// 生成导入用的 xlsx，第一行为表头
pub fn student_sheet(rows: &[[&str; 6]]) -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    let headers = [
        "Name",
        "Email",
        "Phone",
        "Roll Number",
        "Year Of Admission",
        "Current Semester",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .expect("header should be written");
    }
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            sheet
                .write_string(row as u32 + 1, col as u16, *value)
                .expect("cell should be written");
        }
    }
    workbook.save_to_buffer().expect("workbook should serialize")
}
