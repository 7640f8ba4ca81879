use axum::http::Method;
use axum_test::TestServer;
use serde_json::Value;

use crate::build_app;

use super::get_recording_state;

/// A test server for the full app where every controller records its calls.
pub(crate) fn get_recording_server() -> TestServer {
    TestServer::new(build_app(get_recording_state()))
}

/// Send an empty `method` request to `path` and check that it reached `handler`.
pub(crate) async fn assert_dispatches(
    server: &TestServer,
    method: Method,
    path: &str,
    handler: &str,
) {
    let response = server.method(method.clone(), path).await;

    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::OK,
        "{method} {path} did not reach a handler"
    );

    let body = response.json::<Value>();
    assert_eq!(
        body["handler"], handler,
        "want {method} {path} to be handled by {handler}, got {}",
        body["handler"]
    );
}
