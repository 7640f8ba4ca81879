//! The request and response envelopes exchanged between the routes and the controllers.

use std::{collections::HashMap, str::FromStr};

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::PathRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// The result of a controller method.
pub type ApiResult = Result<ApiResponse, Error>;

/// Everything a controller may need from an incoming request.
///
/// The route layer does not validate any of it, that is left to the
/// controllers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRequest {
    /// The path parameters by name, e.g. `page` for '/filteredByPage/{page}'.
    pub params: HashMap<String, String>,
    /// The query string pairs. The last value wins for repeated keys.
    pub query: HashMap<String, String>,
    /// The request headers, including the session headers.
    pub headers: HeaderMap,
    /// The JSON body, or [Value::Null] if the request had no body.
    pub body: Value,
}

impl ApiRequest {
    /// Parse the path parameter `name`.
    ///
    /// # Errors
    /// Returns [Error::MissingParameter] if the route has no such parameter
    /// and [Error::InvalidParameter] if it cannot be parsed as `T`.
    pub fn param<T: FromStr>(&self, name: &str) -> Result<T, Error> {
        let value = self
            .params
            .get(name)
            .ok_or_else(|| Error::MissingParameter(name.to_owned()))?;

        parse_parameter(name, value)
    }

    /// Parse the query parameter `name`, returning `None` if it was not given.
    ///
    /// # Errors
    /// Returns [Error::InvalidParameter] if the value cannot be parsed as `T`.
    pub fn query<T: FromStr>(&self, name: &str) -> Result<Option<T>, Error> {
        self.query
            .get(name)
            .map(|value| parse_parameter(name, value))
            .transpose()
    }

    /// Get the header `name` if it is present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    /// Deserialize the JSON body into `T`.
    ///
    /// # Errors
    /// Returns [Error::InvalidJson] if the body does not have the shape of `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(self.body.clone())
            .map_err(|error| Error::InvalidJson(error.to_string()))
    }
}

fn parse_parameter<T: FromStr>(name: &str, value: &str) -> Result<T, Error> {
    value.parse().map_err(|_| Error::InvalidParameter {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

impl<S> FromRequest<S> for ApiRequest
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = request.into_parts();

        let params =
            match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state).await {
                Ok(Path(params)) => params,
                Err(PathRejection::MissingPathParams(_)) => HashMap::new(),
                Err(rejection) => return Err(Error::InvalidPath(rejection.body_text())),
            };

        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;

        let headers = parts.headers.clone();

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state).await?;

        Ok(Self {
            params,
            query,
            headers,
            body: parse_body(&bytes)?,
        })
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(bytes).map_err(|error| Error::InvalidJson(error.to_string()))
}

/// A JSON response produced by a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code of the response.
    pub status: StatusCode,
    /// The JSON body of the response.
    pub body: Value,
}

impl ApiResponse {
    /// A `200 OK` response.
    pub fn ok(body: Value) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// A `201 Created` response.
    pub fn created(body: Value) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    /// A response with an arbitrary status code.
    pub fn with_status(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
