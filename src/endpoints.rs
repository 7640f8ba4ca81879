//! The API endpoint URIs.
//!
//! Each domain is mounted under a prefix (e.g. [TRANSACTIONS]) and its routes
//! are relative to that prefix (e.g. [TRANSACTIONS_BY_PAGE]).
//! For endpoints that take a parameter, e.g., '/filteredByPage/{page}', use [format_endpoint].
//!
//! Paths are stored without trailing slashes, the router trims trailing
//! slashes from request paths before matching.

/// The root of a sub-router, i.e. the prefix itself.
pub const ROOT: &str = "/";

/// The prefix for the current user's lookups.
pub const USER: &str = "/user";
/// The route for the categories and entities of the current user.
pub const USER_CATEGORIES_AND_ENTITIES: &str = "/categoriesAndEntities";

/// The prefix for creating and managing users.
pub const USERS: &str = "/users";
/// The route for changing the user's password.
pub const USERS_CHANGE_PASSWORD: &str = "/changePW";
/// The route for populating an account with demo data.
pub const USERS_DEMO: &str = "/demo";

/// The prefix for logging in.
pub const AUTH: &str = "/auth";
/// The prefix for checking whether a session is still valid.
pub const VALIDITY: &str = "/validity";

/// The prefix for accounts.
pub const ACCOUNTS: &str = "/accounts";
/// The route for the balance snapshots of all of the user's accounts.
pub const ACCOUNTS_BALANCE_SNAPSHOTS: &str = "/stats/balance-snapshots";
/// The route for recalculating the balance of every account of the user.
pub const ACCOUNTS_RECALCULATE_ALL: &str = "/recalculate-balance/all";

/// The prefix for budgets.
pub const BUDGETS: &str = "/budgets";
/// The route for a page of budgets.
pub const BUDGETS_BY_PAGE: &str = "/filteredByPage/{page}";
/// The first step of creating a budget.
pub const BUDGETS_STEP0: &str = "/step0";
/// The second and final step of creating a budget.
pub const BUDGETS_STEP1: &str = "/step1";
/// The route for changing the open/closed status of a budget.
pub const BUDGETS_STATUS: &str = "/status";
/// The route for the summarised list of budgets.
pub const BUDGETS_LIST_SUMMARY: &str = "/list/summary";
/// The route for a single budget.
pub const BUDGET: &str = "/{id}";

/// The prefix for categories.
pub const CATEGORIES: &str = "/cats";
/// The prefix for entities.
pub const ENTITIES: &str = "/entities";
/// The prefix for rules.
pub const RULES: &str = "/rules";

/// The prefix for statistics.
pub const STATS: &str = "/stats";
/// Expense/income distribution for a single month.
pub const STATS_MONTH_DISTRIBUTION: &str = "/dashboard/month-expenses-income-distribution";
/// Monthly projections of the user's patrimony.
pub const STATS_PATRIMONY_PROJECTIONS: &str = "/stats/monthly-patrimony-projections";
/// Counters of the user's data.
pub const STATS_USER_COUNTERS: &str = "/userStats";
/// The evolution of expenses for a category or entity.
pub const STATS_EXPENSES_EVOLUTION: &str = "/category-expenses-evolution";
/// The evolution of income for a category or entity.
pub const STATS_INCOME_EVOLUTION: &str = "/category-income-evolution";
/// Income and expenses per year.
pub const STATS_YEAR_BY_YEAR: &str = "/year-by-year-income-expense-distribution";

/// The prefix for transactions.
pub const TRANSACTIONS: &str = "/trxs";
/// The route for a page of transactions.
pub const TRANSACTIONS_BY_PAGE: &str = "/filteredByPage/{page}";
/// The first step of creating a transaction.
pub const TRANSACTIONS_STEP0: &str = "/step0";
/// The second and final step of creating a transaction.
pub const TRANSACTIONS_STEP1: &str = "/step1";
/// The route for transactions in a given month and category.
pub const TRANSACTIONS_IN_MONTH_AND_CATEGORY: &str = "/inMonthAndCategory";
/// The route for auto-categorising a transaction.
pub const TRANSACTIONS_AUTO_CATEGORIZE: &str = "/auto-cat-trx";
/// The first step of importing transactions.
pub const TRANSACTIONS_IMPORT_STEP0: &str = "/import/step0";
/// The second step of importing transactions.
pub const TRANSACTIONS_IMPORT_STEP1: &str = "/import/step1";
/// The final step of importing transactions.
pub const TRANSACTIONS_IMPORT_STEP2: &str = "/import/step2";

/// The prefix for investment assets.
pub const INVEST_ASSETS: &str = "/invest/assets";
/// The route for a single asset.
pub const INVEST_ASSET: &str = "/{id}";
/// The route for updating the current value of an asset.
pub const INVEST_ASSET_VALUE: &str = "/{id}/value";
/// The summary of all assets.
pub const INVEST_ASSETS_SUMMARY: &str = "/summary";
/// Statistics over all assets.
pub const INVEST_ASSETS_STATS: &str = "/stats";

/// The prefix for investment transactions.
pub const INVEST_TRANSACTIONS: &str = "/invest/trx";
/// The route for a single investment transaction.
pub const INVEST_TRANSACTION: &str = "/{id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/filteredByPage/{page}', '{page}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
