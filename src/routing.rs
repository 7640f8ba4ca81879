//! Application router configuration: every domain's sub-router mounted under its prefix.

use axum::Router;
use tower_http::normalize_path::NormalizePath;

use crate::{
    AppState,
    account::accounts_router,
    budget::budgets_router,
    category::categories_router,
    endpoints,
    entity::entities_router,
    invest_asset::invest_assets_router,
    invest_transaction::invest_transactions_router,
    rule::rules_router,
    stats::stats_router,
    transaction::transactions_router,
    user::{auth_router, user_router, users_router, validity_router},
};

/// The sub-routers of the app paired with the prefix they are mounted under.
///
/// The prefixes are disjoint, so the order in which they are mounted does
/// not change which handler a request resolves to.
pub fn sub_routers() -> Vec<(&'static str, Router<AppState>)> {
    vec![
        (endpoints::USERS, users_router()),
        (endpoints::USER, user_router()),
        (endpoints::AUTH, auth_router()),
        (endpoints::VALIDITY, validity_router()),
        (endpoints::ACCOUNTS, accounts_router()),
        (endpoints::TRANSACTIONS, transactions_router()),
        (endpoints::BUDGETS, budgets_router()),
        (endpoints::CATEGORIES, categories_router()),
        (endpoints::ENTITIES, entities_router()),
        (endpoints::RULES, rules_router()),
        (endpoints::STATS, stats_router()),
        (endpoints::INVEST_ASSETS, invest_assets_router()),
        (endpoints::INVEST_TRANSACTIONS, invest_transactions_router()),
    ]
}

/// Return a router with all the app's routes.
///
/// Paths must match exactly, see [build_app] for a router that also accepts
/// trailing slashes. Requests that match no route get the default `404 Not
/// Found` response with an empty body.
pub fn build_router(state: AppState) -> Router {
    mount(sub_routers(), state)
}

fn mount(sub_routers: Vec<(&'static str, Router<AppState>)>, state: AppState) -> Router {
    sub_routers
        .into_iter()
        .fold(Router::new(), |router, (prefix, sub_router)| {
            router.nest(prefix, sub_router)
        })
        .with_state(state)
}

/// Return the app: [build_router] behind a layer that trims trailing slashes
/// from the request path before routing, so '/cats/' is handled like '/cats'.
pub fn build_app(state: AppState) -> Router {
    trim_trailing_slashes(build_router(state))
}

/// Wrap `router` so that trailing slashes are trimmed from the request path
/// before it is routed.
///
/// Layers added to `router` itself still see the [MatchedPath](axum::extract::MatchedPath)
/// of the request, layers added to the returned router do not.
pub fn trim_trailing_slashes(router: Router) -> Router {
    Router::new().fallback_service(NormalizePath::trim_trailing_slash(router))
}

#[cfg(test)]
mod routing_tests {
    use axum::{
        extract::{MatchedPath, Request},
        http::{HeaderName, HeaderValue, Method, StatusCode},
        middleware::{self, Next},
        response::Response,
    };
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{
        build_router, trim_trailing_slashes,
        test_utils::{assert_dispatches, get_recording_server, get_recording_state},
    };

    use super::{mount, sub_routers};

    // Every route of the app with the handler it must reach.
    const ROUTE_TABLE: [(&str, &str, &str); 63] = [
        ("GET", "/user/categoriesAndEntities", "get_user_categories_and_entities"),
        ("POST", "/users", "create_one"),
        ("PUT", "/users/changePW", "change_user_password"),
        ("POST", "/users/demo", "auto_populate_demo_data"),
        ("POST", "/auth", "attempt_login"),
        ("POST", "/validity", "check_session_validity"),
        ("POST", "/accounts", "create_account"),
        ("GET", "/accounts", "get_all_accounts_for_user"),
        ("DELETE", "/accounts", "delete_account"),
        ("PUT", "/accounts", "update_account"),
        ("GET", "/accounts/stats/balance-snapshots", "get_user_accounts_balance_snapshot"),
        ("GET", "/accounts/recalculate-balance/all", "recalculate_all_user_accounts_balances"),
        ("GET", "/budgets", "get_all_budgets_for_user"),
        ("GET", "/budgets/filteredByPage/1", "get_filtered_budgets_for_user_by_page"),
        ("POST", "/budgets/step0", "add_budget_step0"),
        ("POST", "/budgets/step1", "create_budget"),
        ("GET", "/budgets/3", "get_budget"),
        ("PUT", "/budgets", "update_budget"),
        ("PUT", "/budgets/status", "change_budget_status"),
        ("DELETE", "/budgets", "remove_budget"),
        ("GET", "/budgets/list/summary", "get_budgets_list_for_user"),
        ("PUT", "/budgets/3", "update_budget_category_planned_values"),
        ("GET", "/cats", "get_all_categories_for_user"),
        ("POST", "/cats", "create_category"),
        ("DELETE", "/cats", "delete_category"),
        ("PUT", "/cats", "update_category"),
        ("GET", "/entities", "get_all_entities_for_user"),
        ("POST", "/entities", "create_entity"),
        ("DELETE", "/entities", "delete_entity"),
        ("PUT", "/entities", "update_entity"),
        ("GET", "/rules", "get_all_rules_for_user"),
        ("POST", "/rules", "create_rule"),
        ("DELETE", "/rules", "delete_rule"),
        ("PUT", "/rules", "update_rule"),
        (
            "GET",
            "/stats/dashboard/month-expenses-income-distribution",
            "get_expenses_income_distribution_for_month",
        ),
        ("GET", "/stats/stats/monthly-patrimony-projections", "get_monthly_patrimony_projections"),
        ("GET", "/stats/userStats", "get_user_counter_stats"),
        ("GET", "/stats/category-expenses-evolution", "get_category_entity_expenses_evolution"),
        ("GET", "/stats/category-income-evolution", "get_category_entity_income_evolution"),
        (
            "GET",
            "/stats/year-by-year-income-expense-distribution",
            "get_year_by_year_income_expense_distribution",
        ),
        ("GET", "/trxs", "get_transactions_for_user"),
        ("GET", "/trxs/filteredByPage/4", "get_filtered_trx_by_page"),
        ("POST", "/trxs/step0", "create_transaction_step0"),
        ("POST", "/trxs/step1", "create_transaction"),
        ("DELETE", "/trxs", "delete_transaction"),
        ("PUT", "/trxs", "update_transaction"),
        (
            "GET",
            "/trxs/inMonthAndCategory",
            "get_all_transactions_for_user_in_category_and_in_month",
        ),
        ("POST", "/trxs/auto-cat-trx", "auto_categorize_transaction"),
        ("POST", "/trxs/import/step0", "import_transactions_step0"),
        ("POST", "/trxs/import/step1", "import_transactions_step1"),
        ("POST", "/trxs/import/step2", "import_transactions_step2"),
        ("GET", "/invest/assets", "get_all_assets_for_user"),
        ("POST", "/invest/assets", "create_asset"),
        ("DELETE", "/invest/assets/2", "delete_asset"),
        ("PUT", "/invest/assets/2", "update_asset"),
        ("PUT", "/invest/assets/2/value", "update_current_asset_value"),
        ("GET", "/invest/assets/summary", "get_all_assets_summary_for_user"),
        ("GET", "/invest/assets/stats", "get_asset_stats_for_user"),
        ("GET", "/invest/assets/2", "get_asset_details_for_user"),
        ("GET", "/invest/trx", "get_all_transactions_for_user"),
        ("POST", "/invest/trx", "create_transaction"),
        ("DELETE", "/invest/trx/6", "delete_transaction"),
        ("PUT", "/invest/trx/6", "update_transaction"),
    ];

    fn method(name: &str) -> Method {
        name.parse().expect("Invalid HTTP method in route table")
    }

    #[tokio::test]
    async fn every_route_dispatches_to_its_handler() {
        let server = get_recording_server();

        for (method_name, path, handler) in ROUTE_TABLE {
            assert_dispatches(&server, method(method_name), path, handler).await;
        }
    }

    #[tokio::test]
    async fn every_route_accepts_a_trailing_slash() {
        let server = get_recording_server();

        for (method_name, path, handler) in ROUTE_TABLE {
            let path = format!("{path}/");
            assert_dispatches(&server, method(method_name), &path, handler).await;
        }
    }

    #[tokio::test]
    async fn mounting_order_does_not_change_resolution() {
        let mut reversed = sub_routers();
        reversed.reverse();
        let server = TestServer::new(mount(reversed, get_recording_state()));

        for (method_name, path, handler) in ROUTE_TABLE {
            assert_dispatches(&server, method(method_name), path, handler).await;
        }
    }

    #[test]
    fn prefixes_are_disjoint() {
        let prefixes: Vec<&str> = sub_routers().into_iter().map(|(prefix, _)| prefix).collect();
        assert_eq!(prefixes.len(), 13);

        for prefix in &prefixes {
            for other in &prefixes {
                if prefix == other {
                    continue;
                }

                assert!(
                    !other.starts_with(&format!("{prefix}/")),
                    "{other} is nested in {prefix}"
                );
            }
        }

        let mut deduplicated = prefixes.clone();
        deduplicated.sort();
        deduplicated.dedup();
        assert_eq!(deduplicated.len(), prefixes.len());
    }

    #[tokio::test]
    async fn undefined_paths_are_not_found() {
        let server = get_recording_server();

        for path in ["/", "/transactions", "/invest", "/user/settings", "/cats/extra/deep"] {
            let response = server.get(path).expect_failure().await;

            response.assert_status_not_found();
            assert!(response.as_bytes().is_empty(), "{path} has a non-empty body");
        }
    }

    #[tokio::test]
    async fn user_and_users_are_different_prefixes() {
        let server = get_recording_server();

        server
            .get("/users/categoriesAndEntities")
            .expect_failure()
            .await
            .assert_status_not_found();
        server
            .post("/user")
            .expect_failure()
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn build_router_matches_exact_paths() {
        let server = TestServer::new(build_router(get_recording_state()));

        server.get("/cats").await.assert_status_ok();
        server
            .get("/invest/assets/summary/")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn controller_receives_the_request_headers() {
        let server = get_recording_server();

        let response = server
            .post("/validity")
            .add_header(
                HeaderName::from_static("authusername"),
                HeaderValue::from_static("demo"),
            )
            .add_header(
                HeaderName::from_static("sessionkey"),
                HeaderValue::from_static("abc123"),
            )
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["headers"]["authusername"], "demo");
        assert_eq!(body["headers"]["sessionkey"], "abc123");
    }

    async fn matched_path_header(request: Request, next: Next) -> Response {
        let matched_path = request
            .extensions()
            .get::<MatchedPath>()
            .map(|matched_path| matched_path.as_str().to_owned());

        let mut response = next.run(request).await;

        if let Some(matched_path) = matched_path {
            response.headers_mut().insert(
                "x-matched-path",
                HeaderValue::from_str(&matched_path).unwrap(),
            );
        }

        response
    }

    #[tokio::test]
    async fn router_layers_see_the_matched_path_behind_slash_trimming() {
        let router =
            build_router(get_recording_state()).layer(middleware::from_fn(matched_path_header));
        let server = TestServer::new(trim_trailing_slashes(router));

        let response = server.get("/budgets/12/").await;

        response.assert_status_ok();
        assert_eq!(response.header("x-matched-path"), "/budgets/{id}");
    }
}
