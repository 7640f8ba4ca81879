//! Routes for the categories that transactions and budgets are grouped by.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, extract::State, routing::get};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for categories.
#[async_trait]
pub trait CategoryController: Send + Sync {
    /// `GET /cats`
    async fn get_all_categories_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_categories_for_user"))
    }

    /// `POST /cats`
    async fn create_category(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_category"))
    }

    /// `DELETE /cats`
    async fn delete_category(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("delete_category"))
    }

    /// `PUT /cats`
    async fn update_category(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_category"))
    }
}

type CategoryState = State<Arc<dyn CategoryController>>;

/// The routes mounted under [endpoints::CATEGORIES].
pub fn categories_router() -> Router<AppState> {
    Router::new().route(
        endpoints::ROOT,
        get(get_all_categories_for_user_endpoint)
            .post(create_category_endpoint)
            .delete(delete_category_endpoint)
            .put(update_category_endpoint),
    )
}

async fn get_all_categories_for_user_endpoint(
    State(categories): CategoryState,
    request: ApiRequest,
) -> ApiResult {
    categories.get_all_categories_for_user(request).await
}

async fn create_category_endpoint(
    State(categories): CategoryState,
    request: ApiRequest,
) -> ApiResult {
    categories.create_category(request).await
}

async fn delete_category_endpoint(
    State(categories): CategoryState,
    request: ApiRequest,
) -> ApiResult {
    categories.delete_category(request).await
}

async fn update_category_endpoint(
    State(categories): CategoryState,
    request: ApiRequest,
) -> ApiResult {
    categories.update_category(request).await
}

#[cfg(test)]
mod category_route_tests {
    use axum::http::Method;

    use crate::test_utils::{assert_dispatches, get_recording_server};

    #[tokio::test]
    async fn category_routes_dispatch_to_their_handlers() {
        let server = get_recording_server();

        assert_dispatches(&server, Method::GET, "/cats", "get_all_categories_for_user").await;
        assert_dispatches(&server, Method::POST, "/cats", "create_category").await;
        assert_dispatches(&server, Method::DELETE, "/cats", "delete_category").await;
        assert_dispatches(&server, Method::PUT, "/cats", "update_category").await;
    }

    #[tokio::test]
    async fn root_with_trailing_slash() {
        let server = get_recording_server();

        assert_dispatches(&server, Method::GET, "/cats/", "get_all_categories_for_user").await;
    }

    #[tokio::test]
    async fn category_ids_are_not_routes() {
        let server = get_recording_server();

        server
            .delete("/cats/4")
            .expect_failure()
            .await
            .assert_status_not_found();
    }
}
