//! The route table of a personal finance web app.
//!
//! This library mounts the app's JSON API (users, accounts, transactions,
//! budgets, categories, entities, rules, stats and investments) and forwards
//! each request to a controller. The controllers are supplied by the caller
//! through the traits re-exported here, see [AppState].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod budget;
mod category;
pub mod endpoints;
mod entity;
mod error;
mod invest_asset;
mod invest_transaction;
mod logging;
mod request;
mod routing;
mod rule;
mod stats;
#[cfg(test)]
mod test_utils;
mod transaction;
mod user;

pub use account::AccountController;
pub use app_state::{AppState, Unwired};
pub use budget::BudgetController;
pub use category::CategoryController;
pub use entity::EntityController;
pub use error::Error;
pub use invest_asset::InvestAssetsController;
pub use invest_transaction::InvestTransactionsController;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use request::{ApiRequest, ApiResponse, ApiResult};
pub use routing::{build_app, build_router, sub_routers, trim_trailing_slashes};
pub use rule::RuleController;
pub use stats::StatsController;
pub use transaction::TransactionController;
pub use user::UserController;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
