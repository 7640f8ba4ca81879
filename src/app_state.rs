//! Implements the struct that holds the controllers behind the routes.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    account::AccountController, budget::BudgetController, category::CategoryController,
    entity::EntityController, invest_asset::InvestAssetsController,
    invest_transaction::InvestTransactionsController, rule::RuleController,
    stats::StatsController, transaction::TransactionController, user::UserController,
};

/// The state of the REST server: one controller per domain.
///
/// Each sub-router extracts only its own controller, e.g. the handlers
/// under `/cats` take `State<Arc<dyn CategoryController>>`.
#[derive(Clone)]
pub struct AppState {
    /// Serves `/user`, `/users`, `/auth` and `/validity`.
    pub users: Arc<dyn UserController>,
    /// Serves `/accounts`.
    pub accounts: Arc<dyn AccountController>,
    /// Serves `/budgets`.
    pub budgets: Arc<dyn BudgetController>,
    /// Serves `/cats`.
    pub categories: Arc<dyn CategoryController>,
    /// Serves `/entities`.
    pub entities: Arc<dyn EntityController>,
    /// Serves `/rules`.
    pub rules: Arc<dyn RuleController>,
    /// Serves `/stats`.
    pub stats: Arc<dyn StatsController>,
    /// Serves `/trxs`.
    pub transactions: Arc<dyn TransactionController>,
    /// Serves `/invest/assets`.
    pub invest_assets: Arc<dyn InvestAssetsController>,
    /// Serves `/invest/trx`.
    pub invest_transactions: Arc<dyn InvestTransactionsController>,
}

/// A controller that provides none of the handlers.
///
/// Every route answers `501 Not Implemented` with the name of the missing
/// handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unwired;

impl UserController for Unwired {}
impl AccountController for Unwired {}
impl BudgetController for Unwired {}
impl CategoryController for Unwired {}
impl EntityController for Unwired {}
impl RuleController for Unwired {}
impl StatsController for Unwired {}
impl TransactionController for Unwired {}
impl InvestAssetsController for Unwired {}
impl InvestTransactionsController for Unwired {}

impl AppState {
    /// Create an [AppState] where every controller is [Unwired].
    ///
    /// Use the `with_*` methods to plug in the controllers that exist.
    pub fn unwired() -> Self {
        let unwired = Arc::new(Unwired);

        Self {
            users: unwired.clone(),
            accounts: unwired.clone(),
            budgets: unwired.clone(),
            categories: unwired.clone(),
            entities: unwired.clone(),
            rules: unwired.clone(),
            stats: unwired.clone(),
            transactions: unwired.clone(),
            invest_assets: unwired.clone(),
            invest_transactions: unwired,
        }
    }

    /// Replace the user controller.
    pub fn with_users(mut self, users: Arc<dyn UserController>) -> Self {
        self.users = users;
        self
    }

    /// Replace the account controller.
    pub fn with_accounts(mut self, accounts: Arc<dyn AccountController>) -> Self {
        self.accounts = accounts;
        self
    }

    /// Replace the budget controller.
    pub fn with_budgets(mut self, budgets: Arc<dyn BudgetController>) -> Self {
        self.budgets = budgets;
        self
    }

    /// Replace the category controller.
    pub fn with_categories(mut self, categories: Arc<dyn CategoryController>) -> Self {
        self.categories = categories;
        self
    }

    /// Replace the entity controller.
    pub fn with_entities(mut self, entities: Arc<dyn EntityController>) -> Self {
        self.entities = entities;
        self
    }

    /// Replace the rule controller.
    pub fn with_rules(mut self, rules: Arc<dyn RuleController>) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the stats controller.
    pub fn with_stats(mut self, stats: Arc<dyn StatsController>) -> Self {
        self.stats = stats;
        self
    }

    /// Replace the transaction controller.
    pub fn with_transactions(mut self, transactions: Arc<dyn TransactionController>) -> Self {
        self.transactions = transactions;
        self
    }

    /// Replace the investment asset controller.
    pub fn with_invest_assets(mut self, invest_assets: Arc<dyn InvestAssetsController>) -> Self {
        self.invest_assets = invest_assets;
        self
    }

    /// Replace the investment transaction controller.
    pub fn with_invest_transactions(
        mut self,
        invest_transactions: Arc<dyn InvestTransactionsController>,
    ) -> Self {
        self.invest_transactions = invest_transactions;
        self
    }
}

// These impls tell `State` how to get each controller out of the app state.
impl FromRef<AppState> for Arc<dyn UserController> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn AccountController> {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}

impl FromRef<AppState> for Arc<dyn BudgetController> {
    fn from_ref(state: &AppState) -> Self {
        state.budgets.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CategoryController> {
    fn from_ref(state: &AppState) -> Self {
        state.categories.clone()
    }
}

impl FromRef<AppState> for Arc<dyn EntityController> {
    fn from_ref(state: &AppState) -> Self {
        state.entities.clone()
    }
}

impl FromRef<AppState> for Arc<dyn RuleController> {
    fn from_ref(state: &AppState) -> Self {
        state.rules.clone()
    }
}

impl FromRef<AppState> for Arc<dyn StatsController> {
    fn from_ref(state: &AppState) -> Self {
        state.stats.clone()
    }
}

impl FromRef<AppState> for Arc<dyn TransactionController> {
    fn from_ref(state: &AppState) -> Self {
        state.transactions.clone()
    }
}

impl FromRef<AppState> for Arc<dyn InvestAssetsController> {
    fn from_ref(state: &AppState) -> Self {
        state.invest_assets.clone()
    }
}

impl FromRef<AppState> for Arc<dyn InvestTransactionsController> {
    fn from_ref(state: &AppState) -> Self {
        state.invest_transactions.clone()
    }
}
