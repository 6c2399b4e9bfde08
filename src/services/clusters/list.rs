use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClusterService;
use crate::models::{
    ApiResponse, ErrorCode,
    clusters::requests::{ClusterListParams, ClusterListQuery},
};

pub async fn list_clusters(
    service: &ClusterService,
    query: ClusterListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_clusters_with_pagination(ClusterListQuery::from(query))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Cluster list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve cluster list: {e}"),
            )),
        ),
    }
}
