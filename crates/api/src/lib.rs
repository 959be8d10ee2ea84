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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
pub mod query;
pub mod render;
mod view;

#[cfg(test)]
mod tests;

use marquee::{Criteria, ToggleAction, ToggleMode, apply_filters, reconcile};
use marquee_domain::{Catalog, Movie};
use tracing::debug;

pub use error::ApiError;
pub use query::{QueryError, SelectionQuery, decode_query};
pub use render::{HtmlRenderer, RenderError, Renderer};
pub use view::{ListView, MovieView, PageView, ROOT_PATH};

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Builds the catalog page for the selection carried in `raw_query`.
///
/// Singular toggle keys are ignored here; only the full selection
/// counts.
///
/// # Arguments
///
/// * `catalog` - The catalog to show
/// * `raw_query` - The request's query string, without the leading `?`
///
/// # Errors
///
/// Returns `ApiError::InvalidQuery` if the query string is malformed.
pub fn show_catalog(catalog: &Catalog, raw_query: Option<&str>) -> ApiResult<PageView> {
    let query: SelectionQuery = decode_query(raw_query)?;
    let movies: Vec<&Movie> = apply_filters(catalog, &query.criteria);
    Ok(PageView::build(catalog, &query.criteria, &movies))
}

/// Applies the single toggled value(s) in `raw_query` to the carried
/// selection and builds the updated list fragment.
///
/// At most one value per field is toggled per request.
///
/// # Arguments
///
/// * `catalog` - The catalog to filter
/// * `raw_query` - The request's query string, without the leading `?`
/// * `mode` - Whether the toggled values are added or removed
///
/// # Errors
///
/// Returns `ApiError::InvalidQuery` if the query string is malformed.
pub fn toggle_selection(
    catalog: &Catalog,
    raw_query: Option<&str>,
    mode: ToggleMode,
) -> ApiResult<ListView> {
    let query: SelectionQuery = decode_query(raw_query)?;
    debug!(
        genre = query.genre.as_deref().unwrap_or_default(),
        year = query.year.as_deref().unwrap_or_default(),
        rating = query.rating.as_deref().unwrap_or_default(),
        %mode,
        "Received toggle values"
    );

    let action: ToggleAction = query.toggle_action(mode);
    let criteria: Criteria = reconcile(query.criteria, &action);
    let movies: Vec<&Movie> = apply_filters(catalog, &criteria);
    Ok(ListView::build(&criteria, &movies))
}
