use crate::util::{normalize_lower, split_list};
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Echo the preflight's `Access-Control-Request-Headers`.
    #[default]
    MirrorRequest,
    List(Vec<String>),
}

impl AllowedHeaders {
    /// Builds an explicit list, trimming entries and dropping case-insensitive
    /// duplicates. A list with no usable entries falls back to
    /// [`AllowedHeaders::MirrorRequest`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        if deduped.is_empty() {
            Self::MirrorRequest
        } else {
            Self::List(deduped)
        }
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    /// Configured header names, with comma-joined entries split apart.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::MirrorRequest => &[],
            Self::List(values) => values,
        };
        values.iter().flat_map(|value| split_list(value))
    }

    /// Resolves the header value for a preflight carrying `request_headers`.
    pub fn header_value(&self, request_headers: Option<&str>) -> Option<String> {
        match self {
            Self::List(values) => Some(values.join(",")),
            Self::MirrorRequest => request_headers
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
