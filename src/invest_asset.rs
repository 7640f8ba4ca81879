//! Routes for investment assets, their current value and the portfolio summary.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, put},
};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for investment assets.
#[async_trait]
pub trait InvestAssetsController: Send + Sync {
    /// `GET /invest/assets`
    async fn get_all_assets_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_assets_for_user"))
    }

    /// `POST /invest/assets`
    async fn create_asset(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_asset"))
    }

    /// `DELETE /invest/assets/{id}`
    async fn delete_asset(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("delete_asset"))
    }

    /// `PUT /invest/assets/{id}`
    async fn update_asset(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_asset"))
    }

    /// `PUT /invest/assets/{id}/value`
    async fn update_current_asset_value(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_current_asset_value"))
    }

    /// `GET /invest/assets/summary`
    async fn get_all_assets_summary_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_assets_summary_for_user"))
    }

    /// `GET /invest/assets/stats`
    async fn get_asset_stats_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_asset_stats_for_user"))
    }

    /// `GET /invest/assets/{id}`
    async fn get_asset_details_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_asset_details_for_user"))
    }
}

type AssetState = State<Arc<dyn InvestAssetsController>>;

/// The routes mounted under [endpoints::INVEST_ASSETS].
///
/// `summary` and `stats` only shadow the `{id}` routes for `GET`, other
/// methods reach the `{id}` handlers with the segment as the id.
pub fn invest_assets_router() -> Router<AppState> {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_all_assets_for_user_endpoint).post(create_asset_endpoint),
        )
        .route(
            endpoints::INVEST_ASSETS_SUMMARY,
            or_asset_by_id(get(get_all_assets_summary_for_user_endpoint), "summary"),
        )
        .route(
            endpoints::INVEST_ASSETS_STATS,
            or_asset_by_id(get(get_asset_stats_for_user_endpoint), "stats"),
        )
        .route(
            endpoints::INVEST_ASSET,
            get(get_asset_details_for_user_endpoint)
                .put(update_asset_endpoint)
                .delete(delete_asset_endpoint),
        )
        .route(
            endpoints::INVEST_ASSET_VALUE,
            put(update_current_asset_value_endpoint),
        )
}

/// Send the methods `route` does not bind to the [endpoints::INVEST_ASSET]
/// handlers, with `segment` as the id.
fn or_asset_by_id(route: MethodRouter<AppState>, segment: &'static str) -> MethodRouter<AppState> {
    route.fallback(move |assets: AssetState, method: Method, request: ApiRequest| {
        asset_by_id_endpoint(assets, method, request, segment)
    })
}

async fn asset_by_id_endpoint(
    State(assets): AssetState,
    method: Method,
    mut request: ApiRequest,
    id: &'static str,
) -> Response {
    request.params.insert("id".to_owned(), id.to_owned());

    match method {
        Method::PUT => assets.update_asset(request).await.into_response(),
        Method::DELETE => assets.delete_asset(request).await.into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn get_all_assets_for_user_endpoint(
    State(assets): AssetState,
    request: ApiRequest,
) -> ApiResult {
    assets.get_all_assets_for_user(request).await
}

async fn create_asset_endpoint(State(assets): AssetState, request: ApiRequest) -> ApiResult {
    assets.create_asset(request).await
}

async fn delete_asset_endpoint(State(assets): AssetState, request: ApiRequest) -> ApiResult {
    assets.delete_asset(request).await
}

async fn update_asset_endpoint(State(assets): AssetState, request: ApiRequest) -> ApiResult {
    assets.update_asset(request).await
}

async fn update_current_asset_value_endpoint(
    State(assets): AssetState,
    request: ApiRequest,
) -> ApiResult {
    assets.update_current_asset_value(request).await
}

async fn get_all_assets_summary_for_user_endpoint(
    State(assets): AssetState,
    request: ApiRequest,
) -> ApiResult {
    assets.get_all_assets_summary_for_user(request).await
}

async fn get_asset_stats_for_user_endpoint(
    State(assets): AssetState,
    request: ApiRequest,
) -> ApiResult {
    assets.get_asset_stats_for_user(request).await
}

async fn get_asset_details_for_user_endpoint(
    State(assets): AssetState,
    request: ApiRequest,
) -> ApiResult {
    assets.get_asset_details_for_user(request).await
}
