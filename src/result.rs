use crate::headers::Headers;

/// Headers and status for a preflight that ends the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to attach before handing a cross-origin request downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    /// No `Origin` on the request; pass it through untouched.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result) => Some(&result.headers),
            CorsDecision::Simple(result) => Some(&result.headers),
            CorsDecision::NotApplicable => None,
        }
    }

    /// Whether the exchange ends here instead of continuing downstream.
    pub fn terminates(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }
}
