//! Routes for the rules used to auto-categorise transactions.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, extract::State, routing::get};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for rules.
#[async_trait]
pub trait RuleController: Send + Sync {
    /// `GET /rules`
    async fn get_all_rules_for_user(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_all_rules_for_user"))
    }

    /// `POST /rules`
    async fn create_rule(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_rule"))
    }

    /// `DELETE /rules`
    async fn delete_rule(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("delete_rule"))
    }

    /// `PUT /rules`
    async fn update_rule(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("update_rule"))
    }
}

type RuleState = State<Arc<dyn RuleController>>;

/// The routes mounted under [endpoints::RULES].
pub fn rules_router() -> Router<AppState> {
    Router::new().route(
        endpoints::ROOT,
        get(get_all_rules_for_user_endpoint)
            .post(create_rule_endpoint)
            .delete(delete_rule_endpoint)
            .put(update_rule_endpoint),
    )
}

async fn get_all_rules_for_user_endpoint(
    State(rules): RuleState,
    request: ApiRequest,
) -> ApiResult {
    rules.get_all_rules_for_user(request).await
}

async fn create_rule_endpoint(State(rules): RuleState, request: ApiRequest) -> ApiResult {
    rules.create_rule(request).await
}

async fn delete_rule_endpoint(State(rules): RuleState, request: ApiRequest) -> ApiResult {
    rules.delete_rule(request).await
}

async fn update_rule_endpoint(State(rules): RuleState, request: ApiRequest) -> ApiResult {
    rules.update_rule(request).await
}
