//! Routes for buying, selling and otherwise moving investment assets.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    routing::{get, put},
};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for investment transactions.
#[async_trait]
pub trait InvestTransactionsController: Send + Sync {
    /// `GET /invest/trx`
    async fn get_all_transactions_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_transactions_for_user"))
    }

    /// `POST /invest/trx`
    async fn create_transaction(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_transaction"))
    }

    /// `DELETE /invest/trx/{id}`
    async fn delete_transaction(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("delete_transaction"))
    }

    /// `PUT /invest/trx/{id}`
    async fn update_transaction(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_transaction"))
    }
}

type InvestTransactionState = State<Arc<dyn InvestTransactionsController>>;

/// The routes mounted under [endpoints::INVEST_TRANSACTIONS].
pub fn invest_transactions_router() -> Router<AppState> {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_all_transactions_for_user_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::INVEST_TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
}

async fn get_all_transactions_for_user_endpoint(
    State(transactions): InvestTransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.get_all_transactions_for_user(request).await
}

async fn create_transaction_endpoint(
    State(transactions): InvestTransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.create_transaction(request).await
}

async fn delete_transaction_endpoint(
    State(transactions): InvestTransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.delete_transaction(request).await
}

async fn update_transaction_endpoint(
    State(transactions): InvestTransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.update_transaction(request).await
}

#[cfg(test)]
mod invest_transaction_route_tests {
    use axum::http::{Method, StatusCode};
    use serde_json::Value;

    use crate::test_utils::{assert_dispatches, get_recording_server};

    #[tokio::test]
    async fn invest_transaction_routes_dispatch_to_their_handlers() {
        let server = get_recording_server();

        let cases = [
            (Method::GET, "/invest/trx", "get_all_transactions_for_user"),
            (Method::POST, "/invest/trx", "create_transaction"),
            (Method::DELETE, "/invest/trx/8", "delete_transaction"),
            (Method::PUT, "/invest/trx/8", "update_transaction"),
        ];

        for (method, path, handler) in cases {
            assert_dispatches(&server, method, path, handler).await;
        }
    }

    #[tokio::test]
    async fn same_handler_names_do_not_collide_with_cash_transactions() {
        let server = get_recording_server();

        let response = server.delete("/invest/trx/8").await;
        assert_eq!(response.json::<Value>()["controller"], "invest_transactions");

        let response = server.delete("/trxs").await;
        assert_eq!(response.json::<Value>()["controller"], "transactions");
    }

    #[tokio::test]
    async fn single_transactions_cannot_be_fetched() {
        let server = get_recording_server();

        server
            .get("/invest/trx/8")
            .expect_failure()
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
