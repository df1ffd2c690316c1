/// Borrowed view of the request fields the policy reads.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Origin of the request, with an empty header treated as missing.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub fn is_preflight(&self) -> bool {
        self.method == crate::constants::method::OPTIONS
            && self
                .access_control_request_method
                .is_some_and(|value| !value.is_empty())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
