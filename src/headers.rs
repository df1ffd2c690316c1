use crate::constants::header;
use crate::util::{equals_ignore_case, split_list};
use indexmap::IndexMap;

/// Response headers in the order the policy produced them.
pub type Headers = IndexMap<String, String>;

/// Folds `value` into an existing `Vary` line.
///
/// Existing entries are kept as written. `*` already varies on everything and
/// absorbs any addition; names already listed are not repeated.
pub fn merge_vary(existing: Option<&str>, value: &str) -> String {
    let value = value.trim();
    let existing = existing.map(str::trim).unwrap_or_default();

    if existing.is_empty() {
        return value.to_string();
    }

    if value.is_empty()
        || existing == "*"
        || split_list(existing).any(|entry| equals_ignore_case(entry, value))
    {
        return existing.to_string();
    }

    if value == "*" {
        return value.to_string();
    }

    format!("{existing}, {value}")
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(&value.into());
        } else {
            self.headers.insert(name.to_string(), value.into());
        }
    }

    pub(crate) fn add_vary(&mut self, value: &str) {
        let merged = merge_vary(self.headers.get(header::VARY).map(String::as_str), value);
        if merged.is_empty() {
            self.headers.shift_remove(header::VARY);
        } else {
            self.headers.insert(header::VARY.to_string(), merged);
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
