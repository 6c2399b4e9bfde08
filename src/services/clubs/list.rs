use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClubService;
use crate::models::{
    ApiResponse, ErrorCode,
    clubs::requests::{ClubListParams, ClubListQuery},
};

pub async fn list_clubs(
    service: &ClubService,
    query: ClubListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_clubs_with_pagination(ClubListQuery::from(query))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Club list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve club list: {e}"),
            )),
        ),
    }
}
