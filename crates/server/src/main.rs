// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod negotiate;

use axum::{
    Json, Router,
    extract::{RawQuery, State as AxumState},
    http::{HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use marquee::ToggleMode;
use marquee_api::{
    ApiError, HtmlRenderer, ListView, PageView, Renderer, show_catalog, toggle_selection,
};
use marquee_domain::Catalog;
use negotiate::ResponseFormat;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Header telling htmx which URL to push into the browser history.
const HX_PUSH_URL: &str = "hx-push-url";

/// Marquee Server - browse and filter the movie catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Both members are read-only for the lifetime of the process, so no
/// locking is needed.
#[derive(Clone)]
struct AppState {
    /// The catalog every request filters.
    catalog: Arc<Catalog>,
    /// Turns view models into markup.
    renderer: Arc<dyn Renderer>,
}

impl AppState {
    /// Creates state with the given catalog and the HTML renderer.
    fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            renderer: Arc::new(HtmlRenderer::new()),
        }
    }
}

/// HTTP error wrapper that implements `IntoResponse`.
///
/// Bodies are plain text.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidQuery { message } => {
                warn!(reason = %message, "Rejecting malformed query");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: String::from("Invalid query parameters"),
                }
            }
            ApiError::RenderFailed { message } => {
                error!(error = %message, "Rendering failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Rendering failed: {message}"),
                }
            }
        }
    }
}

/// Attaches the canonical URL of the selection to a response.
fn with_push_url(canonical_url: &str, response: impl IntoResponse) -> Result<Response, HttpError> {
    let value: HeaderValue = HeaderValue::from_str(canonical_url).map_err(|err| {
        error!(error = %err, url = canonical_url, "Canonical URL is not a valid header");
        HttpError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Failed to encode canonical URL"),
        }
    })?;
    Ok(([(HX_PUSH_URL, value)], response).into_response())
}

/// Sends `view` in the requested format.
fn respond<V, F>(
    format: ResponseFormat,
    canonical_url: &str,
    view: &V,
    render: F,
) -> Result<Response, HttpError>
where
    V: Serialize,
    F: FnOnce(&V) -> Result<String, ApiError>,
{
    match format {
        ResponseFormat::Json => with_push_url(canonical_url, Json(view)),
        ResponseFormat::Html => {
            let body: String = render(view)?;
            with_push_url(canonical_url, Html(body))
        }
    }
}

/// Handler for GET `/` endpoint.
///
/// Renders the full page for the selection carried in the query string.
async fn handle_index(
    AxumState(app_state): AxumState<AppState>,
    format: ResponseFormat,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, HttpError> {
    info!(
        query = raw_query.as_deref().unwrap_or_default(),
        "Handling index request"
    );

    let view: PageView = show_catalog(&app_state.catalog, raw_query.as_deref())?;
    info!(
        matches = view.movies.len(),
        url = %view.canonical_url,
        "Rendering catalog page"
    );

    respond(format, &view.canonical_url, &view, |v| {
        app_state.renderer.render_page(v).map_err(ApiError::from)
    })
}

/// Shared body of the `/filter` and `/remove` handlers.
fn handle_toggle(
    app_state: &AppState,
    format: ResponseFormat,
    raw_query: Option<&str>,
    mode: ToggleMode,
) -> Result<Response, HttpError> {
    info!(
        query = raw_query.unwrap_or_default(),
        %mode,
        "Handling toggle request"
    );

    let view: ListView = toggle_selection(&app_state.catalog, raw_query, mode)?;
    info!(
        matches = view.movies.len(),
        url = %view.canonical_url,
        "Rendering movie list"
    );

    respond(format, &view.canonical_url, &view, |v| {
        app_state.renderer.render_list(v).map_err(ApiError::from)
    })
}

/// Handler for GET `/filter` endpoint.
///
/// Adds the singular `genre`/`year`/`rating` values to the selection.
async fn handle_filter(
    AxumState(app_state): AxumState<AppState>,
    format: ResponseFormat,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, HttpError> {
    handle_toggle(&app_state, format, raw_query.as_deref(), ToggleMode::Add)
}

/// Handler for GET `/remove` endpoint.
///
/// Removes the singular `genre`/`year`/`rating` values from the selection.
async fn handle_remove(
    AxumState(app_state): AxumState<AppState>,
    format: ResponseFormat,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, HttpError> {
    handle_toggle(&app_state, format, raw_query.as_deref(), ToggleMode::Remove)
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> &'static str {
    "ok"
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/filter", get(handle_filter))
        .route("/remove", get(handle_remove))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Marquee Server");

    let catalog: Catalog = Catalog::builtin();
    info!(movies = catalog.len(), "Loaded built-in catalog");

    let app: Router = build_router(AppState::new(catalog));

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode, header::CONTENT_TYPE},
    };
    use marquee_api::RenderError;
    use marquee_domain::Movie;
    use tower::ServiceExt;

    /// Renderer that always fails, for exercising the error path.
    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render_page(&self, _view: &PageView) -> Result<String, RenderError> {
            Err(RenderError::Format(std::fmt::Error))
        }

        fn render_list(&self, _view: &ListView) -> Result<String, RenderError> {
            Err(RenderError::Format(std::fmt::Error))
        }
    }

    /// Helper to create test app state over the built-in catalog.
    fn create_test_app_state() -> AppState {
        AppState::new(Catalog::builtin())
    }

    /// Helper to issue a GET request against a fresh router.
    async fn get_request(app_state: AppState, uri: &str, accept: Option<&str>) -> Response {
        let app: Router = build_router(app_state);
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(accept) = accept {
            builder = builder.header("accept", accept);
        }
        app.oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body_bytes.to_vec()).unwrap()
    }

    fn push_url(response: &Response) -> &str {
        response
            .headers()
            .get(HX_PUSH_URL)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_full_page() {
        let response = get_request(create_test_app_state(), "/", None).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(push_url(&response), "/");
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let body: String = body_string(response).await;
        assert!(body.contains("<!DOCTYPE html>"));
        assert_eq!(body.matches("<li class=\"movie\">").count(), 20);
    }

    #[tokio::test]
    async fn test_index_honours_selection_in_query() {
        let response = get_request(
            create_test_app_state(),
            "/?genres=Sci-Fi&years=1999",
            Some("application/json"),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(push_url(&response), "/?genres=Sci-Fi&years=1999");

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let view: PageView = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(view.movies.len(), 1);
        assert_eq!(view.movies[0].title, "The Matrix");
        assert_eq!(view.genres.len(), 11);
    }

    #[tokio::test]
    async fn test_filter_adds_genre_and_returns_fragment() {
        let response = get_request(create_test_app_state(), "/filter?genre=Drama", None).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(push_url(&response), "/?genres=Drama");

        let body: String = body_string(response).await;
        assert!(!body.contains("<html"));
        assert_eq!(body.matches("<li class=\"movie\">").count(), 4);
        assert!(body.contains("The Shawshank Redemption"));
        assert!(body.contains("Whiplash"));
    }

    #[tokio::test]
    async fn test_filter_merges_into_existing_selection() {
        let response = get_request(
            create_test_app_state(),
            "/filter?year=1999&genres=Sci-Fi",
            Some("application/json"),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(push_url(&response), "/?genres=Sci-Fi&years=1999");

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let view: ListView = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(view.genres_selected.values(), ["Sci-Fi"]);
        assert_eq!(view.years_selected.values(), ["1999"]);
        assert_eq!(view.movies.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_last_genre_returns_whole_catalog() {
        let response = get_request(
            create_test_app_state(),
            "/remove?genre=Drama&genres=Drama",
            Some("application/json"),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(push_url(&response), "/");

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let view: ListView = serde_json::from_slice(&body_bytes).unwrap();
        assert!(view.genres_selected.is_empty());
        assert_eq!(view.movies.len(), 20);
    }

    #[tokio::test]
    async fn test_remove_absent_value_is_noop() {
        let response = get_request(
            create_test_app_state(),
            "/remove?genre=Horror&genres=Crime",
            None,
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(push_url(&response), "/?genres=Crime");
        let body: String = body_string(response).await;
        assert_eq!(body.matches("<li class=\"movie\">").count(), 3);
    }

    #[tokio::test]
    async fn test_unknown_genre_yields_empty_list() {
        let response = get_request(create_test_app_state(), "/filter?genre=Horror", None).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: String = body_string(response).await;
        assert!(body.contains("No movies match the selected filters."));
    }

    #[tokio::test]
    async fn test_malformed_query_returns_bad_request() {
        for uri in ["/?genres=%zz", "/filter?genre=%", "/remove?years=%FF"] {
            let response = get_request(create_test_app_state(), uri, None).await;

            assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
            assert!(
                response.headers()[CONTENT_TYPE]
                    .to_str()
                    .unwrap()
                    .starts_with("text/plain")
            );
            assert_eq!(body_string(response).await, "Invalid query parameters");
        }
    }

    #[tokio::test]
    async fn test_render_failure_returns_internal_error() {
        let app_state: AppState = AppState {
            catalog: Arc::new(Catalog::builtin()),
            renderer: Arc::new(FailingRenderer),
        };

        let response = get_request(app_state, "/filter?genre=Drama", None).await;

        assert_eq!(response.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(response).await.starts_with("Rendering failed"));
    }

    #[tokio::test]
    async fn test_json_path_bypasses_renderer() {
        let app_state: AppState = AppState {
            catalog: Arc::new(Catalog::builtin()),
            renderer: Arc::new(FailingRenderer),
        };

        let response = get_request(app_state, "/", Some("application/json")).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_injected_catalog_is_served() {
        let app_state: AppState = AppState::new(Catalog::new(vec![
            Movie::new("Alone", "Documentary", "2021", "NR"),
        ]));

        let response = get_request(app_state, "/", Some("application/json")).await;

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let view: PageView = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(view.genres, vec!["Documentary"]);
        assert_eq!(view.movies[0].title, "Alone");
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = get_request(create_test_app_state(), "/health", None).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[test]
    fn test_accept_header_negotiation() {
        assert_eq!(
            ResponseFormat::from_accept("application/json"),
            ResponseFormat::Json
        );
        assert_eq!(
            ResponseFormat::from_accept("application/json, text/html;q=0.5"),
            ResponseFormat::Json
        );
        assert_eq!(
            ResponseFormat::from_accept("text/html, application/json;q=0.9"),
            ResponseFormat::Html
        );
        assert_eq!(
            ResponseFormat::from_accept("text/html,*/*"),
            ResponseFormat::Html
        );
    }

    #[test]
    fn test_accept_header_with_zero_quality_rejects_json() {
        assert_eq!(
            ResponseFormat::from_accept("text/html, application/json;q=0"),
            ResponseFormat::Html
        );
        assert_eq!(
            ResponseFormat::from_accept("application/json;q=0"),
            ResponseFormat::Html
        );
        assert_eq!(
            ResponseFormat::from_accept("*/*;q=0.1, application/json; q=0.2"),
            ResponseFormat::Json
        );
    }

    #[tokio::test]
    async fn test_json_refused_by_quality_gets_html() {
        let response = get_request(
            create_test_app_state(),
            "/",
            Some("text/html, application/json;q=0"),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }
}
