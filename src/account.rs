//! Routes for the user's accounts, their balance snapshots and balance recalculation.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, extract::State, routing::get};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for accounts.
#[async_trait]
pub trait AccountController: Send + Sync {
    /// `POST /accounts`
    async fn create_account(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_account"))
    }

    /// `GET /accounts`
    async fn get_all_accounts_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_accounts_for_user"))
    }

    /// `DELETE /accounts`
    async fn delete_account(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("delete_account"))
    }

    /// `PUT /accounts`
    async fn update_account(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_account"))
    }

    /// `GET /accounts/stats/balance-snapshots`
    async fn get_user_accounts_balance_snapshot(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_user_accounts_balance_snapshot"))
    }

    /// `GET /accounts/recalculate-balance/all`
    async fn recalculate_all_user_accounts_balances(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("recalculate_all_user_accounts_balances"))
    }
}

type AccountState = State<Arc<dyn AccountController>>;

/// The routes mounted under [endpoints::ACCOUNTS].
pub fn accounts_router() -> Router<AppState> {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_all_accounts_for_user_endpoint)
                .post(create_account_endpoint)
                .delete(delete_account_endpoint)
                .put(update_account_endpoint),
        )
        .route(
            endpoints::ACCOUNTS_BALANCE_SNAPSHOTS,
            get(get_user_accounts_balance_snapshot_endpoint),
        )
        .route(
            endpoints::ACCOUNTS_RECALCULATE_ALL,
            get(recalculate_all_user_accounts_balances_endpoint),
        )
}

async fn create_account_endpoint(State(accounts): AccountState, request: ApiRequest) -> ApiResult {
    accounts.create_account(request).await
}

async fn get_all_accounts_for_user_endpoint(
    State(accounts): AccountState,
    request: ApiRequest,
) -> ApiResult {
    accounts.get_all_accounts_for_user(request).await
}

async fn delete_account_endpoint(State(accounts): AccountState, request: ApiRequest) -> ApiResult {
    accounts.delete_account(request).await
}

async fn update_account_endpoint(State(accounts): AccountState, request: ApiRequest) -> ApiResult {
    accounts.update_account(request).await
}

async fn get_user_accounts_balance_snapshot_endpoint(
    State(accounts): AccountState,
    request: ApiRequest,
) -> ApiResult {
    accounts.get_user_accounts_balance_snapshot(request).await
}

async fn recalculate_all_user_accounts_balances_endpoint(
    State(accounts): AccountState,
    request: ApiRequest,
) -> ApiResult {
    accounts.recalculate_all_user_accounts_balances(request).await
}
