pub mod active;
pub mod bulk_upload;
pub mod bulk_uploads;
pub mod create;
pub mod credentials;
pub mod delete;
pub mod get;
pub mod import;
pub mod list;
pub mod registration;
pub mod template;
pub mod toggle;
pub mod update;
mod validate;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::mail::CredentialMailer;
use crate::models::students::requests::{
    BulkUploadListParams, CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
    mailer: Option<Arc<dyn CredentialMailer>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            mailer: None,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_mailer(&self, request: &HttpRequest) -> Arc<dyn CredentialMailer> {
        if let Some(mailer) = &self.mailer {
            mailer.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn CredentialMailer>>>()
                .expect("Mailer not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取学生列表
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    pub async fn list_active_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        active::list_active_students(self, request).await
    }

    // 创建学生并发送凭据邮件
    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    pub async fn get_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id, request).await
    }

    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update_data, request).await
    }

    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }

    pub async fn toggle_status(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_student_status(self, student_id, request).await
    }

    // 切换换社团权限
    pub async fn toggle_club_change(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_club_change(self, student_id, request).await
    }

    // 发送凭据邮件
    pub async fn send_credentials(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        credentials::send_credentials(self, student_id, request).await
    }

    // 重置密码
    pub async fn reset_password(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        credentials::reset_password(self, student_id, request).await
    }

    // 下载导入模板
    pub async fn download_template(&self) -> ActixResult<HttpResponse> {
        template::download_template().await
    }

    // 批量导入
    pub async fn bulk_upload(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_upload::bulk_upload(self, payload, request).await
    }

    // 批量导入记录
    pub async fn list_bulk_uploads(
        &self,
        query: BulkUploadListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_uploads::list_bulk_uploads(self, query, request).await
    }
}
