pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::accounts::requests::AccountListParams;
use crate::storage::Storage;

pub struct AccountService {
    storage: Option<Arc<dyn Storage>>,
}

impl AccountService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
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

    pub async fn list_accounts(
        &self,
        request: &HttpRequest,
        query: AccountListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_accounts(self, request, query).await
    }

    pub async fn get_account(
        &self,
        account_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_account(self, account_id, request).await
    }
}
