//! Request validation module
//!
//! Maps the loosely-typed query-string parameters of the search endpoint
//! into a strongly-typed [`SearchRequest`]. The search engine itself only
//! ever sees pre-validated inputs; every rejection happens here.

use crate::config::SearchSettings;
use thiserror::Error;

/// Validation failures for search requests.
///
/// `Display` carries the short error code for the response envelope;
/// [`ValidationError::message`] carries the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid query")]
    Query,
    #[error("Limit must be positive and skip must be non-negative")]
    Pagination,
}

impl ValidationError {
    /// Human-readable message for the response envelope
    pub fn message(&self) -> &'static str {
        match self {
            Self::Query => "Query must be at least 2 characters long",
            Self::Pagination => "Invalid pagination parameters",
        }
    }
}

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw query text (normalization happens inside the search engine)
    pub query: String,
    /// Maximum number of results to return, always >= 1
    pub limit: usize,
    /// Number of leading matches to discard
    pub skip: usize,
}

impl SearchRequest {
    /// Validate raw query-string parameters.
    ///
    /// `q` must be present and at least `min_query_len` characters after
    /// trimming. `limit` defaults to `default_limit` and must parse as a
    /// positive integer; `skip` defaults to 0 and must parse as a
    /// non-negative integer.
    pub fn from_params(
        q: Option<&str>,
        limit: Option<&str>,
        skip: Option<&str>,
        settings: &SearchSettings,
    ) -> Result<Self, ValidationError> {
        let query = match q {
            Some(q) if q.trim().chars().count() >= settings.min_query_len => q.to_string(),
            _ => return Err(ValidationError::Query),
        };

        let limit = match limit {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::Pagination)?,
            None => settings.default_limit as i64,
        };
        let skip = match skip {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::Pagination)?,
            None => 0,
        };

        if limit < 1 || skip < 0 {
            return Err(ValidationError::Pagination);
        }

        Ok(Self {
            query,
            limit: limit as usize,
            skip: skip as usize,
        })
    }
}
