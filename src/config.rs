//! Deserializable configuration, for options read from files or the
//! environment rather than built in code.

use crate::builder::CorsBuilder;
use crate::cors::Cors;
use crate::options::{CorsOptions, ValidationError};
use serde::Deserialize;

/// A list-valued option given either as one header line or as an array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringOrList::One(value) => vec![value],
            StringOrList::Many(values) => values,
        }
    }
}

/// Every field is optional; anything left out keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CorsConfig {
    pub origins: Option<String>,
    pub allow_methods: Option<StringOrList>,
    pub allow_headers: Option<StringOrList>,
    pub expose_headers: Option<StringOrList>,
    pub credentials: Option<bool>,
    pub max_age: Option<i64>,
    pub expressify: Option<bool>,
}

impl CorsConfig {
    pub fn into_options(self) -> Result<CorsOptions, ValidationError> {
        self.into_builder()?.options()
    }

    fn into_builder(self) -> Result<CorsBuilder, ValidationError> {
        let mut builder = CorsBuilder::new();

        if let Some(origin) = self.origins {
            builder = builder.origin(origin);
        }
        if let Some(methods) = self.allow_methods {
            builder = builder.methods(methods.into_vec());
        }
        if let Some(headers) = self.allow_headers {
            builder = builder.allowed_headers(headers.into_vec());
        }
        if let Some(headers) = self.expose_headers {
            builder = builder.exposed_headers(headers.into_vec());
        }
        if let Some(credentials) = self.credentials {
            builder = builder.credentials(credentials);
        }
        if let Some(max_age) = self.max_age {
            let seconds =
                u64::try_from(max_age).map_err(|_| ValidationError::NegativeMaxAge(max_age))?;
            builder = builder.max_age(seconds);
        }
        if let Some(expressify) = self.expressify {
            builder = builder.expressify(expressify);
        }

        Ok(builder)
    }
}

impl Cors {
    pub fn from_config(config: CorsConfig) -> Result<Self, ValidationError> {
        config.into_builder()?.build()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
