//! Routes for the budget lifecycle: the two step creation, paging, status
//! changes and the planned values per category.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, post, put},
};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for budgets.
#[async_trait]
pub trait BudgetController: Send + Sync {
    /// `GET /budgets`
    async fn get_all_budgets_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_budgets_for_user"))
    }

    /// `GET /budgets/filteredByPage/{page}`
    async fn get_filtered_budgets_for_user_by_page(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_filtered_budgets_for_user_by_page"))
    }

    /// `POST /budgets/step0`
    async fn add_budget_step0(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("add_budget_step0"))
    }

    /// `POST /budgets/step1`
    async fn create_budget(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_budget"))
    }

    /// `GET /budgets/{id}`
    async fn get_budget(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_budget"))
    }

    /// `PUT /budgets`
    async fn update_budget(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_budget"))
    }

    /// `PUT /budgets/status`
    async fn change_budget_status(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("change_budget_status"))
    }

    /// `DELETE /budgets`
    async fn remove_budget(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("remove_budget"))
    }

    /// `GET /budgets/list/summary`
    async fn get_budgets_list_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_budgets_list_for_user"))
    }

    /// `PUT /budgets/{id}`
    async fn update_budget_category_planned_values(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_budget_category_planned_values"))
    }
}

type BudgetState = State<Arc<dyn BudgetController>>;

/// The routes mounted under [endpoints::BUDGETS].
///
/// The static segments `step0`, `step1` and `status` take precedence over the
/// `{id}` parameter for the methods they bind. Other methods on those paths
/// are handled by the `{id}` routes with the segment as the id.
pub fn budgets_router() -> Router<AppState> {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_all_budgets_for_user_endpoint)
                .put(update_budget_endpoint)
                .delete(remove_budget_endpoint),
        )
        .route(
            endpoints::BUDGETS_BY_PAGE,
            get(get_filtered_budgets_for_user_by_page_endpoint),
        )
        .route(
            endpoints::BUDGETS_STEP0,
            or_budget_by_id(post(add_budget_step0_endpoint), "step0"),
        )
        .route(
            endpoints::BUDGETS_STEP1,
            or_budget_by_id(post(create_budget_endpoint), "step1"),
        )
        .route(
            endpoints::BUDGETS_STATUS,
            or_budget_by_id(put(change_budget_status_endpoint), "status"),
        )
        .route(
            endpoints::BUDGETS_LIST_SUMMARY,
            get(get_budgets_list_for_user_endpoint),
        )
        .route(
            endpoints::BUDGET,
            get(get_budget_endpoint).put(update_budget_category_planned_values_endpoint),
        )
}

/// Send the methods `route` does not bind to the [endpoints::BUDGET] handlers,
/// with `segment` as the id.
fn or_budget_by_id(route: MethodRouter<AppState>, segment: &'static str) -> MethodRouter<AppState> {
    route.fallback(move |budgets: BudgetState, method: Method, request: ApiRequest| {
        budget_by_id_endpoint(budgets, method, request, segment)
    })
}

async fn budget_by_id_endpoint(
    State(budgets): BudgetState,
    method: Method,
    mut request: ApiRequest,
    id: &'static str,
) -> Response {
    request.params.insert("id".to_owned(), id.to_owned());

    match method {
        Method::GET | Method::HEAD => budgets.get_budget(request).await.into_response(),
        Method::PUT => budgets
            .update_budget_category_planned_values(request)
            .await
            .into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn get_all_budgets_for_user_endpoint(
    State(budgets): BudgetState,
    request: ApiRequest,
) -> ApiResult {
    budgets.get_all_budgets_for_user(request).await
}

async fn get_filtered_budgets_for_user_by_page_endpoint(
    State(budgets): BudgetState,
    request: ApiRequest,
) -> ApiResult {
    budgets.get_filtered_budgets_for_user_by_page(request).await
}

async fn add_budget_step0_endpoint(State(budgets): BudgetState, request: ApiRequest) -> ApiResult {
    budgets.add_budget_step0(request).await
}

async fn create_budget_endpoint(State(budgets): BudgetState, request: ApiRequest) -> ApiResult {
    budgets.create_budget(request).await
}

async fn get_budget_endpoint(State(budgets): BudgetState, request: ApiRequest) -> ApiResult {
    budgets.get_budget(request).await
}

async fn update_budget_endpoint(State(budgets): BudgetState, request: ApiRequest) -> ApiResult {
    budgets.update_budget(request).await
}

async fn change_budget_status_endpoint(
    State(budgets): BudgetState,
    request: ApiRequest,
) -> ApiResult {
    budgets.change_budget_status(request).await
}

async fn remove_budget_endpoint(State(budgets): BudgetState, request: ApiRequest) -> ApiResult {
    budgets.remove_budget(request).await
}

async fn get_budgets_list_for_user_endpoint(
    State(budgets): BudgetState,
    request: ApiRequest,
) -> ApiResult {
    budgets.get_budgets_list_for_user(request).await
}

async fn update_budget_category_planned_values_endpoint(
    State(budgets): BudgetState,
    request: ApiRequest,
) -> ApiResult {
    budgets.update_budget_category_planned_values(request).await
}
