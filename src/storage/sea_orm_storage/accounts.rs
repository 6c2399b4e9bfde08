use super::SeaOrmStorage;
use crate::entity::users::{Column, Entity as Users};
use crate::errors::{AppError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    accounts::{entities::Account, requests::AccountListQuery, responses::AccountListResponse},
};
use crate::utils::contains_pattern;
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取账号
    pub async fn get_account_by_id_impl(&self, id: i64) -> Result<Option<Account>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询账号失败: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 分页列出账号
    pub async fn list_accounts_with_pagination_impl(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Users::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Username.like(contains_pattern(search)))
                    .add(Column::Email.like(contains_pattern(search)))
                    .add(Column::FirstName.like(contains_pattern(search)))
                    .add(Column::LastName.like(contains_pattern(search))),
            );
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AppError::database_operation(format!("查询账号总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::database_operation(format!("查询账号页数失败: {e}")))?;
        let accounts = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AppError::database_operation(format!("查询账号列表失败: {e}")))?;

        Ok(AccountListResponse {
            items: accounts.into_iter().map(|m| m.into_account()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }
}
