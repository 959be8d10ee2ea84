// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response format negotiation.
//!
//! Browsers and htmx get rendered markup. Clients that ask for
//! `application/json` get the view model itself.

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT, request::Parts},
};
use std::convert::Infallible;
use tracing::warn;

/// The representation a client asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Rendered HTML.
    Html,
    /// The serialized view model.
    Json,
}

impl ResponseFormat {
    /// Picks a format from the value of an `Accept` header.
    ///
    /// JSON is chosen only when its quality is positive and beats the
    /// best of `text/html` and `*/*`. Ties go to HTML.
    #[must_use]
    pub fn from_accept(accept: &str) -> Self {
        let mut json_quality: f32 = 0.0;
        let mut html_quality: f32 = 0.0;

        for (media_type, quality) in accept.split(',').filter_map(parse_media_range) {
            if media_type.eq_ignore_ascii_case("application/json") {
                json_quality = json_quality.max(quality);
            } else if media_type.eq_ignore_ascii_case("text/html") || media_type == "*/*" {
                html_quality = html_quality.max(quality);
            }
        }

        if json_quality > 0.0 && json_quality > html_quality {
            Self::Json
        } else {
            Self::Html
        }
    }
}

/// Splits one `Accept` entry into its media type and `q` weight.
///
/// A missing or unparsable `q` counts as 1.
fn parse_media_range(item: &str) -> Option<(&str, f32)> {
    let mut parts = item.split(';').map(str::trim);
    let media_type: &str = parts.next().filter(|media_type| !media_type.is_empty())?;
    let quality: f32 = parts
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
        .and_then(|(_, value)| value.trim().parse::<f32>().ok())
        .map_or(1.0, |q| q.clamp(0.0, 1.0));
    Some((media_type, quality))
}

impl<S: Send + Sync> FromRequestParts<S> for ResponseFormat {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(ACCEPT) else {
            return Ok(Self::Html);
        };

        match header.to_str() {
            Ok(accept) => Ok(Self::from_accept(accept)),
            Err(_) => {
                warn!("Ignoring non-ASCII Accept header");
                Ok(Self::Html)
            }
        }
    }
}
