// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Markup rendering for page and list views.
//!
//! Links carry the selection in their query string. Option links add a
//! value through `/filter`, chips remove one through `/remove`, and both
//! fall back to a plain canonical `href` when scripting is unavailable.

use crate::query::{self, GENRES_KEY, RATINGS_KEY, YEARS_KEY};
use crate::view::{ListView, MovieView, PageView, ROOT_PATH};
use marquee::{Criteria, ToggleAction, ToggleMode, reconcile};
use marquee_domain::{Field, Selection};
use std::fmt::Write;
use thiserror::Error;

/// Path of the add endpoint.
pub const FILTER_PATH: &str = "/filter";
/// Path of the remove endpoint.
pub const REMOVE_PATH: &str = "/remove";

const RESULTS_ID: &str = "results";
const STATE_FORM_ID: &str = "filter-state";

/// Errors raised while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output buffer failed.
    #[error("failed to write markup: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Turns view models into response bodies.
pub trait Renderer: Send + Sync {
    /// Renders the full catalog page.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup cannot be produced.
    fn render_page(&self, view: &PageView) -> Result<String, RenderError>;

    /// Renders the list fragment returned after a toggle.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup cannot be produced.
    fn render_list(&self, view: &ListView) -> Result<String, RenderError>;
}

/// Renders HTML driven by htmx attributes.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new HTML renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render_page(&self, view: &PageView) -> Result<String, RenderError> {
        let criteria: Criteria = view.criteria();
        let mut out: String = String::new();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>Movies</title>")?;
        writeln!(out, "<script src=\"https://unpkg.com/htmx.org@1.9.12\"></script>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>Movies</h1>")?;
        writeln!(out, "<nav class=\"filters\">")?;
        write_options(&mut out, "Genres", Field::Genre, &view.genres, &criteria)?;
        write_options(&mut out, "Years", Field::Year, &view.years, &criteria)?;
        write_options(&mut out, "Ratings", Field::Rating, &view.ratings, &criteria)?;
        writeln!(out, "</nav>")?;
        writeln!(out, "<div id=\"{RESULTS_ID}\">")?;
        write_results(&mut out, &criteria, &view.movies)?;
        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(out)
    }

    fn render_list(&self, view: &ListView) -> Result<String, RenderError> {
        let mut out: String = String::new();
        write_results(&mut out, &view.criteria(), &view.movies)?;
        Ok(out)
    }
}

/// Escapes text for use in HTML content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn toggled_url(criteria: &Criteria, field: Field, value: &str, mode: ToggleMode) -> String {
    let action: ToggleAction = match field {
        Field::Genre => ToggleAction::new(mode).with_genre(value),
        Field::Year => ToggleAction::new(mode).with_year(value),
        Field::Rating => ToggleAction::new(mode).with_rating(value),
    };
    query::canonical_url(ROOT_PATH, &reconcile(criteria.clone(), &action))
}

fn write_link(
    out: &mut String,
    class: &str,
    href: &str,
    hx_get: &str,
    label: &str,
) -> Result<(), RenderError> {
    writeln!(
        out,
        "<a class=\"{class}\" href=\"{}\" hx-get=\"{}\" hx-include=\"#{STATE_FORM_ID}\" hx-target=\"#{RESULTS_ID}\">{}</a>",
        escape_html(href),
        escape_html(hx_get),
        escape_html(label),
    )?;
    Ok(())
}

fn write_options(
    out: &mut String,
    heading: &str,
    field: Field,
    values: &[String],
    criteria: &Criteria,
) -> Result<(), RenderError> {
    writeln!(out, "<section class=\"filter-group\" data-field=\"{field}\">")?;
    writeln!(out, "<h2>{heading}</h2>")?;
    for value in values {
        let class: &str = if criteria.selection(field).contains(value) {
            "option selected"
        } else {
            "option"
        };
        let href: String = toggled_url(criteria, field, value, ToggleMode::Add);
        let hx_get: String = query::toggle_url(FILTER_PATH, field, value, &Criteria::default());
        write_link(out, class, &href, &hx_get, value)?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn write_hidden_inputs(
    out: &mut String,
    key: &str,
    selection: &Selection,
) -> Result<(), RenderError> {
    for value in selection {
        writeln!(
            out,
            "<input type=\"hidden\" name=\"{key}\" value=\"{}\">",
            escape_html(value)
        )?;
    }
    Ok(())
}

fn write_results(
    out: &mut String,
    criteria: &Criteria,
    movies: &[MovieView],
) -> Result<(), RenderError> {
    writeln!(out, "<form id=\"{STATE_FORM_ID}\">")?;
    write_hidden_inputs(out, GENRES_KEY, &criteria.genres)?;
    write_hidden_inputs(out, YEARS_KEY, &criteria.years)?;
    write_hidden_inputs(out, RATINGS_KEY, &criteria.ratings)?;
    writeln!(out, "</form>")?;

    writeln!(out, "<div class=\"active-filters\">")?;
    for field in [Field::Genre, Field::Year, Field::Rating] {
        for value in criteria.selection(field) {
            let href: String = toggled_url(criteria, field, value, ToggleMode::Remove);
            let hx_get: String = query::toggle_url(REMOVE_PATH, field, value, &Criteria::default());
            write_link(out, "chip", &href, &hx_get, value)?;
        }
    }
    writeln!(out, "</div>")?;

    if movies.is_empty() {
        writeln!(out, "<p class=\"empty\">No movies match the selected filters.</p>")?;
        return Ok(());
    }

    writeln!(out, "<ul class=\"movie-list\">")?;
    for movie in movies {
        writeln!(
            out,
            "<li class=\"movie\"><span class=\"title\">{}</span> <span class=\"genre\">{}</span> <span class=\"year\">{}</span> <span class=\"rating\">{}</span></li>",
            escape_html(&movie.title),
            escape_html(&movie.genre),
            escape_html(&movie.year),
            escape_html(&movie.rating),
        )?;
    }
    writeln!(out, "</ul>")?;
    Ok(())
}
