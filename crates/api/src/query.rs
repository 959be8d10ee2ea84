// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Codec between raw query strings and filter state.
//!
//! The full selection travels as repeated keys (`genres`, `years`,
//! `ratings`). The single value being toggled uses the singular keys
//! (`genre`, `year`, `rating`) so the two never collide.

use marquee::{Criteria, ToggleAction, ToggleMode};
use marquee_domain::{Field, Selection};
use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::form_urlencoded;

/// Query key carrying the selected genres.
pub const GENRES_KEY: &str = "genres";
/// Query key carrying the selected years.
pub const YEARS_KEY: &str = "years";
/// Query key carrying the selected ratings.
pub const RATINGS_KEY: &str = "ratings";

/// Returns the repeated key holding the selection for `field`.
#[must_use]
pub const fn selection_key(field: Field) -> &'static str {
    match field {
        Field::Genre => GENRES_KEY,
        Field::Year => YEARS_KEY,
        Field::Rating => RATINGS_KEY,
    }
}

/// Returns the singular key naming the value toggled for `field`.
#[must_use]
pub const fn toggle_key(field: Field) -> &'static str {
    field.as_str()
}

/// Errors raised while decoding a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A `%` was not followed by two hex digits.
    #[error("malformed percent escape in '{segment}'")]
    MalformedEscape {
        /// The offending key or value, still encoded.
        segment: String,
    },
    /// The decoded bytes are not UTF-8.
    #[error("'{segment}' does not decode to UTF-8")]
    InvalidUtf8 {
        /// The offending key or value, still encoded.
        segment: String,
    },
}

/// Filter state decoded from one request's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionQuery {
    /// The full current selection.
    pub criteria: Criteria,
    /// The first `genre` value, if present.
    pub genre: Option<String>,
    /// The first `year` value, if present.
    pub year: Option<String>,
    /// The first `rating` value, if present.
    pub rating: Option<String>,
}

impl SelectionQuery {
    /// Builds the toggle action carried by the singular keys.
    #[must_use]
    pub fn toggle_action(&self, mode: ToggleMode) -> ToggleAction {
        ToggleAction {
            mode,
            genre: self.genre.clone(),
            year: self.year.clone(),
            rating: self.rating.clone(),
        }
    }
}

/// Decodes a raw query string (without the leading `?`).
///
/// Unknown keys are ignored. Repeated selection keys accumulate in
/// order with duplicates dropped. Empty values are skipped for every
/// key. For singular keys the first non-empty occurrence wins.
///
/// # Errors
///
/// Returns an error if any key or value has a malformed percent escape
/// or does not decode to UTF-8.
pub fn decode_query(raw: Option<&str>) -> Result<SelectionQuery, QueryError> {
    let mut query: SelectionQuery = SelectionQuery::default();
    let Some(raw) = raw else {
        return Ok(query);
    };

    for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key: String = decode_component(raw_key)?;
        let value: String = decode_component(raw_value)?;
        if value.is_empty() {
            continue;
        }

        match key.as_str() {
            GENRES_KEY => {
                query.criteria.genres.insert(value);
            }
            YEARS_KEY => {
                query.criteria.years.insert(value);
            }
            RATINGS_KEY => {
                query.criteria.ratings.insert(value);
            }
            "genre" => {
                query.genre.get_or_insert(value);
            }
            "year" => {
                query.year.get_or_insert(value);
            }
            "rating" => {
                query.rating.get_or_insert(value);
            }
            _ => {}
        }
    }

    Ok(query)
}

fn decode_component(segment: &str) -> Result<String, QueryError> {
    let bytes: &[u8] = segment.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        if *byte == b'%' {
            let well_formed: bool = bytes
                .get(index + 1..index + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(QueryError::MalformedEscape {
                    segment: segment.to_string(),
                });
            }
        }
    }

    let spaced: String = segment.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| QueryError::InvalidUtf8 {
            segment: segment.to_string(),
        })
}

fn append_criteria(serializer: &mut form_urlencoded::Serializer<'_, String>, criteria: &Criteria) {
    for field in [Field::Genre, Field::Year, Field::Rating] {
        let selection: &Selection = criteria.selection(field);
        for value in selection {
            serializer.append_pair(selection_key(field), value);
        }
    }
}

/// Encodes `criteria` as a query string, without the leading `?`.
///
/// Keys appear as genres, years, ratings; values keep selection order.
#[must_use]
pub fn encode_criteria(criteria: &Criteria) -> String {
    let mut serializer: form_urlencoded::Serializer<'_, String> =
        form_urlencoded::Serializer::new(String::new());
    append_criteria(&mut serializer, criteria);
    serializer.finish()
}

/// Builds the canonical URL of `criteria` at `path`.
///
/// An unconstrained selection yields the bare path.
#[must_use]
pub fn canonical_url(path: &str, criteria: &Criteria) -> String {
    let query: String = encode_criteria(criteria);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Builds a link that toggles `value` of `field` against the current
/// selection, e.g. `/filter?genre=Drama&genres=Crime`.
#[must_use]
pub fn toggle_url(path: &str, field: Field, value: &str, criteria: &Criteria) -> String {
    let mut serializer: form_urlencoded::Serializer<'_, String> =
        form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(toggle_key(field), value);
    append_criteria(&mut serializer, criteria);
    format!("{path}?{}", serializer.finish())
}
