use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use crate::util::{is_header_value, is_http_token};
use thiserror::Error;

/// Shape in which the host pipeline invokes the middleware.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallingConvention {
    /// Request, response and continuation passed as separate arguments.
    #[default]
    SplitArguments,
    /// A single context bundling request and response.
    Context,
}

impl CallingConvention {
    /// Maps the `expressify` flag: `true` selects separate arguments.
    pub fn from_expressify(expressify: bool) -> Self {
        if expressify {
            Self::SplitArguments
        } else {
            Self::Context
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Preflight cache lifetime in seconds; `0` leaves the header unset.
    pub max_age: u64,
    pub calling_convention: CallingConvention,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: 0,
            calling_convention: CallingConvention::default(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("maxAge must be a non-negative number of seconds, got {0}")]
    NegativeMaxAge(i64),
    #[error("origin {0:?} is not a usable Access-Control-Allow-Origin value")]
    InvalidOrigin(String),
    #[error("method {0:?} is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP header token")]
    InvalidHeaderName(String),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Origin::Exact(value) = &self.origin
            && (value.trim().is_empty() || !is_header_value(value))
        {
            return Err(ValidationError::InvalidOrigin(value.clone()));
        }

        if let Some(method) = self.methods.methods().find(|method| !is_http_token(method)) {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self
            .allowed_headers
            .names()
            .chain(self.exposed_headers.names())
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
