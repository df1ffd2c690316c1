use crate::constants::method;
use crate::util::split_list;

/// Configuration for the `Access-Control-Allow-Methods` response header.
///
/// Entries are kept in the order given. Method names are case-sensitive, so
/// only exact duplicates are dropped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    ///
    /// A single entry may already be a comma-joined line such as
    /// `"GET, POST"`; it is emitted as written.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() || deduped.contains(&trimmed) {
                continue;
            }
            deduped.push(trimmed);
        }

        Self { values: deduped }
    }

    /// No `Access-Control-Allow-Methods` header is emitted.
    pub fn none() -> Self {
        Self { values: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Individual method names, with comma-joined entries split apart.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.values.iter().flat_map(|value| split_list(value))
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.values
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PATCH,
            method::PUT,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
