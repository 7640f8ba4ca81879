//! Routes for registering users, logging in and checking sessions.
//!
//! These are served by four sub-routers because the prefixes `/user`,
//! `/users`, `/auth` and `/validity` are mounted separately.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    routing::{get, post, put},
};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for users and their sessions.
#[async_trait]
pub trait UserController: Send + Sync {
    /// `GET /user/categoriesAndEntities`
    async fn get_user_categories_and_entities(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_user_categories_and_entities"))
    }

    /// `POST /users`
    async fn create_one(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("create_one"))
    }

    /// `PUT /users/changePW`
    async fn change_user_password(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("change_user_password"))
    }

    /// `POST /users/demo`
    async fn auto_populate_demo_data(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("auto_populate_demo_data"))
    }

    /// `POST /auth`
    async fn attempt_login(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("attempt_login"))
    }

    /// `POST /validity`
    async fn check_session_validity(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("check_session_validity"))
    }
}

type UserState = State<Arc<dyn UserController>>;

/// The routes mounted under [endpoints::USER].
pub fn user_router() -> Router<AppState> {
    Router::new().route(
        endpoints::USER_CATEGORIES_AND_ENTITIES,
        get(get_user_categories_and_entities_endpoint),
    )
}

/// The routes mounted under [endpoints::USERS].
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route(endpoints::ROOT, post(create_one_endpoint))
        .route(
            endpoints::USERS_CHANGE_PASSWORD,
            put(change_user_password_endpoint),
        )
        .route(endpoints::USERS_DEMO, post(auto_populate_demo_data_endpoint))
}

/// The routes mounted under [endpoints::AUTH].
pub fn auth_router() -> Router<AppState> {
    Router::new().route(endpoints::ROOT, post(attempt_login_endpoint))
}

/// The routes mounted under [endpoints::VALIDITY].
pub fn validity_router() -> Router<AppState> {
    Router::new().route(endpoints::ROOT, post(check_session_validity_endpoint))
}

async fn get_user_categories_and_entities_endpoint(
    State(users): UserState,
    request: ApiRequest,
) -> ApiResult {
    users.get_user_categories_and_entities(request).await
}

async fn create_one_endpoint(State(users): UserState, request: ApiRequest) -> ApiResult {
    users.create_one(request).await
}

async fn change_user_password_endpoint(State(users): UserState, request: ApiRequest) -> ApiResult {
    users.change_user_password(request).await
}

async fn auto_populate_demo_data_endpoint(
    State(users): UserState,
    request: ApiRequest,
) -> ApiResult {
    users.auto_populate_demo_data(request).await
}

async fn attempt_login_endpoint(State(users): UserState, request: ApiRequest) -> ApiResult {
    users.attempt_login(request).await
}

async fn check_session_validity_endpoint(
    State(users): UserState,
    request: ApiRequest,
) -> ApiResult {
    users.check_session_validity(request).await
}
