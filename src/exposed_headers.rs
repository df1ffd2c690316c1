use crate::util::{normalize_lower, split_list};
use std::collections::HashSet;

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
///
/// Empty by default, in which case simple responses carry no expose header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    /// Builds an allow-list from the provided iterator, automatically trimming
    /// whitespace and removing duplicates.
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

        Self { values: deduped }
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Configured header names, with comma-joined entries split apart.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().flat_map(|value| split_list(value))
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
