//! Routes for the dashboard and statistics pages.
//!
//! All of them are read-only `GET` routes, the filters (month, year,
//! category, entity) are passed in the query string.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, extract::State, routing::get};

use crate::{
    AppState, Error, endpoints,
    request::{ApiRequest, ApiResult},
};

/// The handlers for statistics.
#[async_trait]
pub trait StatsController: Send + Sync {
    /// `GET /stats/dashboard/month-expenses-income-distribution`
    async fn get_expenses_income_distribution_for_month(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented(
            "get_expenses_income_distribution_for_month",
        ))
    }

    /// `GET /stats/stats/monthly-patrimony-projections`
    async fn get_monthly_patrimony_projections(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_monthly_patrimony_projections"))
    }

    /// `GET /stats/userStats`
    async fn get_user_counter_stats(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_user_counter_stats"))
    }

    /// `GET /stats/category-expenses-evolution`
    async fn get_category_entity_expenses_evolution(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_category_entity_expenses_evolution"))
    }

    /// `GET /stats/category-income-evolution`
    async fn get_category_entity_income_evolution(&self, _request: ApiRequest) -> ApiResult {
        Err(Error::NotImplemented("get_category_entity_income_evolution"))
    }

    /// `GET /stats/year-by-year-income-expense-distribution`
    async fn get_year_by_year_income_expense_distribution(
        &self,
        _request: ApiRequest,
    ) -> ApiResult {
        Err(Error::NotImplemented(
            "get_year_by_year_income_expense_distribution",
        ))
    }
}

type StatsState = State<Arc<dyn StatsController>>;

/// The routes mounted under [endpoints::STATS].
pub fn stats_router() -> Router<AppState> {
    Router::new()
        .route(
            endpoints::STATS_MONTH_DISTRIBUTION,
            get(get_expenses_income_distribution_for_month_endpoint),
        )
        .route(
            endpoints::STATS_PATRIMONY_PROJECTIONS,
            get(get_monthly_patrimony_projections_endpoint),
        )
        .route(
            endpoints::STATS_USER_COUNTERS,
            get(get_user_counter_stats_endpoint),
        )
        .route(
            endpoints::STATS_EXPENSES_EVOLUTION,
            get(get_category_entity_expenses_evolution_endpoint),
        )
        .route(
            endpoints::STATS_INCOME_EVOLUTION,
            get(get_category_entity_income_evolution_endpoint),
        )
        .route(
            endpoints::STATS_YEAR_BY_YEAR,
            get(get_year_by_year_income_expense_distribution_endpoint),
        )
}

async fn get_expenses_income_distribution_for_month_endpoint(
    State(stats): StatsState,
    request: ApiRequest,
) -> ApiResult {
    stats
        .get_expenses_income_distribution_for_month(request)
        .await
}

async fn get_monthly_patrimony_projections_endpoint(
    State(stats): StatsState,
    request: ApiRequest,
) -> ApiResult {
    stats.get_monthly_patrimony_projections(request).await
}

async fn get_user_counter_stats_endpoint(State(stats): StatsState, request: ApiRequest) -> ApiResult {
    stats.get_user_counter_stats(request).await
}

async fn get_category_entity_expenses_evolution_endpoint(
    State(stats): StatsState,
    request: ApiRequest,
) -> ApiResult {
    stats.get_category_entity_expenses_evolution(request).await
}

async fn get_category_entity_income_evolution_endpoint(
    State(stats): StatsState,
    request: ApiRequest,
) -> ApiResult {
    stats.get_category_entity_income_evolution(request).await
}

async fn get_year_by_year_income_expense_distribution_endpoint(
    State(stats): StatsState,
    request: ApiRequest,
) -> ApiResult {
    stats
        .get_year_by_year_income_expense_distribution(request)
        .await
}
