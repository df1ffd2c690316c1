#![allow(dead_code)]

use http::{Request, Response};
use vary_cors::constants::{header, method};
use vary_cors::{Cors, CorsBuilder, CorsDecision, Outcome, RequestContext};

pub fn policy() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn cors() -> Cors {
    CorsBuilder::new()
        .build()
        .expect("valid CORS configuration")
}

/// Result of driving a request through [`Cors::handle`] with `http` types.
pub struct Dispatch {
    pub response: Response<String>,
    pub outcome: Outcome<()>,
    pub proceed_calls: usize,
}

#[derive(Default)]
pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    vary: Option<String>,
}

impl RequestBuilder {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    /// `Vary` already present on the response before the policy runs.
    pub fn existing_vary(mut self, vary: impl Into<String>) -> Self {
        self.vary = Some(vary.into());
        self
    }

    pub fn check(&self, cors: &Cors) -> CorsDecision {
        cors.check(&RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        })
    }

    pub fn to_http(&self) -> Request<()> {
        let mut builder = Request::builder().method(self.method.as_str()).uri("/resource");
        if let Some(origin) = &self.origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        if let Some(value) = &self.request_method {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_METHOD, value);
        }
        if let Some(value) = &self.request_headers {
            builder = builder.header(header::ACCESS_CONTROL_REQUEST_HEADERS, value);
        }
        builder.body(()).expect("valid request")
    }

    pub fn dispatch(&self, cors: &Cors) -> Dispatch {
        let request = self.to_http();
        let mut response = Response::new(String::new());
        if let Some(vary) = &self.vary {
            response.headers_mut().insert(
                http::header::VARY,
                vary.parse().expect("valid Vary value"),
            );
        }

        let mut proceed_calls = 0;
        let outcome = cors
            .handle(&request, &mut response, |_, res| {
                proceed_calls += 1;
                *res.body_mut() = "downstream body".to_string();
                Ok::<_, std::convert::Infallible>(())
            })
            .expect("continuation never fails");

        Dispatch {
            response,
            outcome,
            proceed_calls,
        }
    }
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder {
        method: method::GET.into(),
        ..RequestBuilder::default()
    }
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder {
        method: method::OPTIONS.into(),
        request_method: Some(method::GET.into()),
        ..RequestBuilder::default()
    }
}
