use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClusterService;
use super::validate::check_cluster_fields;
use crate::models::{ApiResponse, ErrorCode, clusters::requests::CreateClusterRequest};

pub async fn create_cluster(
    service: &ClusterService,
    cluster_data: CreateClusterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let errors = match check_cluster_fields(
        &storage,
        Some(&cluster_data.cluster_name),
        Some(&cluster_data.cluster_code),
        None,
    )
    .await
    {
        Ok(errors) => errors,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Cluster validation failed: {e}"),
                )),
            );
        }
    };
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::validation_failed(errors)));
    }

    match storage.create_cluster(cluster_data).await {
        Ok(cluster) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(cluster, "Cluster created successfully"))),
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::ClusterAlreadyExists,
                "Cluster name or code already exists",
            ),
        )),
        Err(e) => {
            error!("Cluster creation failed: {e}");
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClusterCreationFailed,
                    format!("Cluster creation failed: {e}"),
                )),
            )
        }
    }
}
