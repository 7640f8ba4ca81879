//! Routes for entities, the counterparties of transactions (shops, employers, ...).

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, extract::State, routing::get};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for entities.
#[async_trait]
pub trait EntityController: Send + Sync {
    /// `GET /entities`
    async fn get_all_entities_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_entities_for_user"))
    }

    /// `POST /entities`
    async fn create_entity(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_entity"))
    }

    /// `DELETE /entities`
    async fn delete_entity(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("delete_entity"))
    }

    /// `PUT /entities`
    async fn update_entity(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_entity"))
    }
}

type EntityState = State<Arc<dyn EntityController>>;

/// The routes mounted under [endpoints::ENTITIES].
pub fn entities_router() -> Router<AppState> {
    Router::new().route(
        endpoints::ROOT,
        get(get_all_entities_for_user_endpoint)
            .post(create_entity_endpoint)
            .delete(delete_entity_endpoint)
            .put(update_entity_endpoint),
    )
}

async fn get_all_entities_for_user_endpoint(
    State(entities): EntityState,
    request: ApiRequest,
) -> ApiResult {
    entities.get_all_entities_for_user(request).await
}

async fn create_entity_endpoint(State(entities): EntityState, request: ApiRequest) -> ApiResult {
    entities.create_entity(request).await
}

async fn delete_entity_endpoint(State(entities): EntityState, request: ApiRequest) -> ApiResult {
    entities.delete_entity(request).await
}

async fn update_entity_endpoint(State(entities): EntityState, request: ApiRequest) -> ApiResult {
    entities.update_entity(request).await
}
