use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::cors::Cors;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CallingConvention, CorsOptions, ValidationError};
use crate::origin::Origin;

/// Collects overrides and lays them over [`CorsOptions::default`] in one step.
///
/// ```
/// use vary_cors::CorsBuilder;
///
/// let cors = CorsBuilder::new()
///     .origin("*")
///     .methods(["GET", "POST"])
///     .max_age(600)
///     .build()
///     .expect("valid CORS configuration");
/// assert_eq!(cors.options().max_age, 600);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CorsBuilder {
    origin: Option<Origin>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
    calling_convention: Option<CallingConvention>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<Origin>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn calling_convention(mut self, convention: CallingConvention) -> Self {
        self.calling_convention = Some(convention);
        self
    }

    pub fn expressify(self, enabled: bool) -> Self {
        self.calling_convention(CallingConvention::from_expressify(enabled))
    }

    /// Merged options, validated.
    pub fn options(self) -> Result<CorsOptions, ValidationError> {
        let CorsOptions {
            origin: default_origin,
            methods: default_methods,
            allowed_headers: default_allowed_headers,
            exposed_headers: default_exposed_headers,
            credentials: default_credentials,
            max_age: default_max_age,
            calling_convention: default_calling_convention,
        } = CorsOptions::default();

        let options = CorsOptions {
            origin: self.origin.unwrap_or(default_origin),
            methods: self.methods.unwrap_or(default_methods),
            allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(default_exposed_headers),
            credentials: self.credentials.unwrap_or(default_credentials),
            max_age: self.max_age.unwrap_or(default_max_age),
            calling_convention: self
                .calling_convention
                .unwrap_or(default_calling_convention),
        };
        options.validate()?;
        Ok(options)
    }

    pub fn build(self) -> Result<Cors, ValidationError> {
        Cors::new(self.options()?)
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
