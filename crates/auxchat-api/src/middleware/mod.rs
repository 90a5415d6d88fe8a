//! Middleware stack for the API server
//!
//! Request IDs, tracing, timeouts, CORS, rate limiting and JSON bodies for
//! framework-generated 405/429 replies.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use auxchat_common::{AppError, CorsConfig, RateLimitConfig};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::extractors::ADMIN_SECRET_HEADER;
use crate::response::ApiError;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Preflight cache lifetime
const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Per-request deadline
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply the shared middleware stack
///
/// Order for an incoming request: RequestID -> Trace -> Timeout -> CORS -> error body mapping -> Handler.
pub fn apply_middleware<S>(router: Router<S>, cors_config: &CorsConfig, is_production: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(axum::middleware::map_response(json_error_body))
        .layer(create_cors_layer(cors_config, is_production))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Outermost so the trace span sees the generated id
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Apply the global rate limiter
///
/// A zero rate or burst cannot be turned into a limiter; the router is then
/// returned unchanged.
pub fn apply_rate_limit<S>(router: Router<S>, config: &RateLimitConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let Some(governor_conf) = GovernorConfigBuilder::default()
        .per_second(config.requests_per_second.into())
        .burst_size(config.burst)
        // Single bucket shared by every client
        .key_extractor(GlobalKeyExtractor)
        .finish()
    else {
        tracing::warn!(
            requests_per_second = config.requests_per_second,
            burst = config.burst,
            "Invalid rate limit configuration, rate limiting disabled"
        );
        return router;
    };

    router.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    })
}

/// Give framework-generated 405 and 429 replies the standard JSON error body
///
/// Headers such as `Allow`, `Retry-After` and `x-ratelimit-*` are carried over.
pub async fn json_error_body(response: Response) -> Response {
    let error = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed,
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
        _ => return response,
    };

    let already_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if already_json {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut mapped = ApiError::App(error).into_response();
    for (name, value) in &parts.headers {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            mapped.headers_mut().append(name, value.clone());
        }
    }
    mapped
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(ADMIN_SECRET_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(CORS_MAX_AGE);

    if config.allowed_origins.is_empty() {
        if is_production {
            tracing::warn!("CORS: no allowed origins configured, allowing any origin");
        }
        return base_layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!(origin = %origin, "Invalid CORS origin");
                None
            })
        })
        .collect();

    tracing::info!("CORS: Allowing {} configured origins", origins.len());
    base_layer.allow_origin(AllowOrigin::list(origins))
}
