use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::accounts::requests::AccountListParams;
use crate::services::AccountService;
use crate::utils::SafeIDI64;

static ACCOUNT_SERVICE: Lazy<AccountService> = Lazy::new(AccountService::new_lazy);

pub async fn list_accounts(
    req: HttpRequest,
    query: web::Query<AccountListParams>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .list_accounts(&req, query.into_inner())
        .await
}

pub async fn get_account(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.get_account(id.0, &req).await
}

// 只读
pub fn configure_accounts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .route("", web::get().to(list_accounts))
            .route("/{id}", web::get().to(get_account)),
    );
}
