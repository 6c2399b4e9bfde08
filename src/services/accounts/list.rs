use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AccountService;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::requests::{AccountListParams, AccountListQuery},
};

pub async fn list_accounts(
    service: &AccountService,
    request: &HttpRequest,
    query: AccountListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AccountListQuery::from(query);

    match storage.list_accounts_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Accounts retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve accounts: {e}"),
            )),
        ),
    }
}
