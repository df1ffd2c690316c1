//! Seams between the policy and the host pipeline's request and response
//! objects.

use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::merge_vary;

/// Read-only access to an incoming request.
pub trait CorsRequest {
    fn method(&self) -> &str;

    /// Value of the named header. Lookups are case-insensitive.
    fn header(&self, name: &str) -> Option<&str>;

    fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: self.method(),
            origin: self.header(header::ORIGIN),
            access_control_request_method: self.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: self.header(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }
}

/// Mutable access to the response under construction.
pub trait CorsResponse {
    fn header(&self, name: &str) -> Option<&str>;

    /// Replaces any existing value of the named header.
    fn set_header(&mut self, name: &str, value: &str);

    /// Ends the exchange with `status` and an empty body.
    fn end(&mut self, status: u16);

    /// Adds `value` to `Vary` without dropping what other stages put there.
    fn append_vary(&mut self, value: &str) {
        let merged = merge_vary(self.header(header::VARY), value);
        if !merged.is_empty() {
            self.set_header(header::VARY, &merged);
        }
    }
}

/// A combined context bundling the request and its response.
pub trait Exchange {
    type Request: CorsRequest + ?Sized;
    type Response: CorsResponse + ?Sized;

    fn request(&self) -> &Self::Request;

    fn response_mut(&mut self) -> &mut Self::Response;
}
