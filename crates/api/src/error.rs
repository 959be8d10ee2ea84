// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::query::QueryError;
use crate::render::RenderError;

/// API-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The query string could not be decoded.
    InvalidQuery {
        /// A description of what was wrong.
        message: String,
    },
    /// The view could not be rendered.
    RenderFailed {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery { message } => write!(f, "Invalid query parameters: {message}"),
            Self::RenderFailed { message } => write!(f, "Rendering failed: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self::InvalidQuery {
            message: err.to_string(),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        Self::RenderFailed {
            message: err.to_string(),
        }
    }
}
