//! Routes for transactions: CRUD, paging, auto-categorisation and the three
//! step import pipeline.
//!
//! Creation and import are split into steps. Step 0 returns what the client
//! needs to fill in the form (accounts, categories, entities, or the parsed
//! import preview) and the last step persists the result. The route layer only
//! forwards each step to the controller.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for transactions.
#[async_trait]
pub trait TransactionController: Send + Sync {
    /// `GET /trxs`
    async fn get_transactions_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_transactions_for_user"))
    }

    /// `GET /trxs/filteredByPage/{page}`
    async fn get_filtered_trx_by_page(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_filtered_trx_by_page"))
    }

    /// `POST /trxs/step0`
    async fn create_transaction_step0(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_transaction_step0"))
    }

    /// `POST /trxs/step1`
    async fn create_transaction(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_transaction"))
    }

    /// `DELETE /trxs`
    async fn delete_transaction(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("delete_transaction"))
    }

    /// `PUT /trxs`
    async fn update_transaction(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_transaction"))
    }

    /// `GET /trxs/inMonthAndCategory`
    async fn get_all_transactions_for_user_in_category_and_in_month(
        &self,
        _request: ApiRequest,
    ) -> ApiResult {
        Err(Error::NotImplemented(
            "get_all_transactions_for_user_in_category_and_in_month",
        ))
    }

    /// `POST /trxs/auto-cat-trx`
    async fn auto_categorize_transaction(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("auto_categorize_transaction"))
    }

    /// `POST /trxs/import/step0`
    async fn import_transactions_step0(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("import_transactions_step0"))
    }

    /// `POST /trxs/import/step1`
    async fn import_transactions_step1(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("import_transactions_step1"))
    }

    /// `POST /trxs/import/step2`
    async fn import_transactions_step2(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("import_transactions_step2"))
    }
}

type TransactionState = State<Arc<dyn TransactionController>>;

/// The routes mounted under [endpoints::TRANSACTIONS].
pub fn transactions_router() -> Router<AppState> {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_transactions_for_user_endpoint)
                .delete(delete_transaction_endpoint)
                .put(update_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_BY_PAGE,
            get(get_filtered_trx_by_page_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_STEP0,
            post(create_transaction_step0_endpoint),
        )
        .route(endpoints::TRANSACTIONS_STEP1, post(create_transaction_endpoint))
        .route(
            endpoints::TRANSACTIONS_IN_MONTH_AND_CATEGORY,
            get(get_all_transactions_for_user_in_category_and_in_month_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_AUTO_CATEGORIZE,
            post(auto_categorize_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_IMPORT_STEP0,
            post(import_transactions_step0_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_IMPORT_STEP1,
            post(import_transactions_step1_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_IMPORT_STEP2,
            post(import_transactions_step2_endpoint),
        )
}

async fn get_transactions_for_user_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.get_transactions_for_user(request).await
}

async fn get_filtered_trx_by_page_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.get_filtered_trx_by_page(request).await
}

async fn create_transaction_step0_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.create_transaction_step0(request).await
}

async fn create_transaction_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.create_transaction(request).await
}

async fn delete_transaction_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.delete_transaction(request).await
}

async fn update_transaction_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.update_transaction(request).await
}

async fn get_all_transactions_for_user_in_category_and_in_month_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions
        .get_all_transactions_for_user_in_category_and_in_month(request)
        .await
}

async fn auto_categorize_transaction_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.auto_categorize_transaction(request).await
}

async fn import_transactions_step0_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.import_transactions_step0(request).await
}

async fn import_transactions_step1_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.import_transactions_step1(request).await
}

async fn import_transactions_step2_endpoint(
    State(transactions): TransactionState,
    request: ApiRequest,
) -> ApiResult {
    transactions.import_transactions_step2(request).await
}
