use crate::constants::PREFLIGHT_STATUS;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, PreflightResult, SimpleResult};
use tracing::debug;

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Decides which headers a request receives and whether it ends here.
    ///
    /// Requests without an `Origin` (or with an empty one) are not
    /// cross-origin and yield [`CorsDecision::NotApplicable`].
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin() else {
            debug!(method = request.method, "no Origin header, skipping CORS");
            return CorsDecision::NotApplicable;
        };

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::with_estimate(6);
        headers.extend(builder.build_origin_headers(origin));
        headers.extend(builder.build_credentials_header());

        if request.is_preflight() {
            headers.extend(builder.build_methods_header());
            headers.extend(builder.build_allowed_headers(request));
            headers.extend(builder.build_max_age_header());

            debug!(
                origin,
                request_method = request.access_control_request_method,
                "answering CORS preflight"
            );
            CorsDecision::Preflight(PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_STATUS,
            })
        } else {
            headers.extend(builder.build_exposed_headers());

            debug!(origin, method = request.method, "decorating cross-origin request");
            CorsDecision::Simple(SimpleResult {
                headers: headers.into_headers(),
            })
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
