use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use crate::{
    AccountController, ApiRequest, ApiResponse, ApiResult, AppState, BudgetController,
    CategoryController, EntityController, InvestAssetsController, InvestTransactionsController,
    RuleController, StatsController, TransactionController, UserController,
};

/// A controller for every domain that answers each request with the name of
/// the handler that was called and everything it received.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RecordingController;

fn record(controller: &str, handler: &str, request: ApiRequest) -> ApiResult {
    let headers: Map<String, Value> = request
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_owned(), Value::from(value)))
        })
        .collect();

    Ok(ApiResponse::ok(json!({
        "controller": controller,
        "handler": handler,
        "params": request.params,
        "query": request.query,
        "headers": headers,
        "body": request.body,
    })))
}

macro_rules! impl_recording_controller {
    ($controller:ident, $label:literal, [$($handler:ident),* $(,)?]) => {
        #[async_trait]
        impl $controller for RecordingController {
            $(
                async fn $handler(&self, request: ApiRequest) -> ApiResult {
                    record($label, stringify!($handler), request)
                }
            )*
        }
    };
}

impl_recording_controller!(
    UserController,
    "users",
    [
        get_user_categories_and_entities,
        create_one,
        change_user_password,
        auto_populate_demo_data,
        attempt_login,
        check_session_validity,
    ]
);

impl_recording_controller!(
    AccountController,
    "accounts",
    [
        create_account,
        get_all_accounts_for_user,
        delete_account,
        update_account,
        get_user_accounts_balance_snapshot,
        recalculate_all_user_accounts_balances,
    ]
);

impl_recording_controller!(
    BudgetController,
    "budgets",
    [
        get_all_budgets_for_user,
        get_filtered_budgets_for_user_by_page,
        add_budget_step0,
        create_budget,
        get_budget,
        update_budget,
        change_budget_status,
        remove_budget,
        get_budgets_list_for_user,
        update_budget_category_planned_values,
    ]
);

impl_recording_controller!(
    CategoryController,
    "categories",
    [
        get_all_categories_for_user,
        create_category,
        delete_category,
        update_category,
    ]
);

impl_recording_controller!(
    EntityController,
    "entities",
    [
        get_all_entities_for_user,
        create_entity,
        delete_entity,
        update_entity,
    ]
);

impl_recording_controller!(
    RuleController,
    "rules",
    [get_all_rules_for_user, create_rule, delete_rule, update_rule]
);

impl_recording_controller!(
    StatsController,
    "stats",
    [
        get_expenses_income_distribution_for_month,
        get_monthly_patrimony_projections,
        get_user_counter_stats,
        get_category_entity_expenses_evolution,
        get_category_entity_income_evolution,
        get_year_by_year_income_expense_distribution,
    ]
);

impl_recording_controller!(
    TransactionController,
    "transactions",
    [
        get_transactions_for_user,
        get_filtered_trx_by_page,
        create_transaction_step0,
        create_transaction,
        delete_transaction,
        update_transaction,
        get_all_transactions_for_user_in_category_and_in_month,
        auto_categorize_transaction,
        import_transactions_step0,
        import_transactions_step1,
        import_transactions_step2,
    ]
);

impl_recording_controller!(
    InvestAssetsController,
    "invest_assets",
    [
        get_all_assets_for_user,
        create_asset,
        delete_asset,
        update_asset,
        update_current_asset_value,
        get_all_assets_summary_for_user,
        get_asset_stats_for_user,
        get_asset_details_for_user,
    ]
);

impl_recording_controller!(
    InvestTransactionsController,
    "invest_transactions",
    [
        get_all_transactions_for_user,
        create_transaction,
        delete_transaction,
        update_transaction,
    ]
);

/// An [AppState] where every controller is a [RecordingController].
pub(crate) fn get_recording_state() -> AppState {
    let recorder = Arc::new(RecordingController);

    AppState::unwired()
        .with_users(recorder.clone())
        .with_accounts(recorder.clone())
        .with_budgets(recorder.clone())
        .with_categories(recorder.clone())
        .with_entities(recorder.clone())
        .with_rules(recorder.clone())
        .with_stats(recorder.clone())
        .with_transactions(recorder.clone())
        .with_invest_assets(recorder.clone())
        .with_invest_transactions(recorder)
}
