//! 批量导入学生 (multipart: `file` + `cluster`)

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::StreamExt;
use tracing::error;

use super::StudentService;
use super::import::{import_students, parse_student_sheet};
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::{SpreadsheetKind, validate_magic_bytes};

#[derive(Default)]
struct UploadForm {
    file_name: Option<String>,
    file_bytes: Vec<u8>,
    cluster: Option<String>,
}

fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub async fn bulk_upload(
    service: &StudentService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let max_size = AppConfig::get().upload.max_size;

    let form = match read_upload_form(&mut payload, max_size).await {
        Ok(form) => form,
        Err(response) => return Ok(response),
    };

    // 先检查文件名后缀，不合法时不解析内容
    let Some(file_name) = form.file_name else {
        return Ok(bad_request(ErrorCode::ImportFileMissing, "No file provided"));
    };
    let Some(kind) = SpreadsheetKind::from_file_name(&file_name) else {
        return Ok(bad_request(
            ErrorCode::ImportFileTypeInvalid,
            "Invalid file type. Please upload an Excel file.",
        ));
    };
    if !validate_magic_bytes(&form.file_bytes, kind) {
        return Ok(bad_request(
            ErrorCode::ImportFileTypeInvalid,
            "File content does not match its extension",
        ));
    }

    let cluster_id = match form.cluster.as_deref().map(str::trim) {
        None | Some("") => {
            return Ok(bad_request(
                ErrorCode::ImportClusterMissing,
                "Cluster is required",
            ));
        }
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                return Ok(bad_request(
                    ErrorCode::ImportClusterMissing,
                    format!("Invalid cluster id: {raw}"),
                ));
            }
        },
    };

    let storage = service.get_storage(request);
    let cluster = match storage.get_cluster_by_id(cluster_id).await {
        Ok(Some(cluster)) => cluster,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClusterNotFound,
                "Cluster not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve cluster: {e}"),
                )),
            );
        }
    };

    let rows = match parse_student_sheet(&form.file_bytes) {
        Ok(rows) => rows,
        Err(e) => return Ok(bad_request(e.error_code(), e.message())),
    };

    match import_students(&storage, &cluster, &file_name, rows).await {
        Ok(response) => {
            let message = response.message.clone();
            Ok(HttpResponse::Created().json(ApiResponse::success(response, message)))
        }
        Err(e) => {
            error!("Bulk upload of {file_name} failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Bulk upload failed: {e}"),
                )),
            )
        }
    }
}

async fn read_upload_form(
    payload: &mut Multipart,
    max_size: usize,
) -> Result<UploadForm, HttpResponse> {
    let mut form = UploadForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            bad_request(ErrorCode::BadRequest, format!("Failed to read form field: {e}"))
        })?;

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                form.file_name = Some(
                    field
                        .content_disposition()
                        .and_then(|cd| cd.get_filename())
                        .unwrap_or_default()
                        .to_string(),
                );
                while let Some(chunk) = field.next().await {
                    let data = chunk.map_err(|e| {
                        bad_request(ErrorCode::BadRequest, format!("Failed to read file: {e}"))
                    })?;
                    if form.file_bytes.len() + data.len() > max_size {
                        return Err(bad_request(
                            ErrorCode::ImportFileTooLarge,
                            format!("File exceeds the maximum size of {max_size} bytes"),
                        ));
                    }
                    form.file_bytes.extend_from_slice(&data);
                }
            }
            "cluster" => {
                let mut value = Vec::new();
                while let Some(chunk) = field.next().await {
                    let data = chunk.map_err(|e| {
                        bad_request(ErrorCode::BadRequest, format!("Failed to read cluster: {e}"))
                    })?;
                    value.extend_from_slice(&data);
                }
                form.cluster = Some(String::from_utf8_lossy(&value).into_owned());
            }
            // 忽略其他字段
            _ => {
                while field.next().await.is_some() {}
            }
        }
    }

    Ok(form)
}
