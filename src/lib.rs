//! CORS policy evaluation for any HTTP request pipeline.
//!
//! [`Cors::check`] turns a request's `Origin` and preflight headers into a
//! [`CorsDecision`]. [`Cors::handle`] and [`Cors::handle_context`] apply that
//! decision to a live response and either hand off to the next stage or end
//! a preflight with `204 No Content`.

mod allowed_headers;
mod allowed_methods;
mod builder;
mod config;
pub mod constants;
mod context;
mod cors;
mod exchange;
mod exposed_headers;
mod header_builder;
mod headers;
mod http_adapter;
mod middleware;
mod options;
mod origin;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use builder::CorsBuilder;
pub use config::{CorsConfig, StringOrList};
pub use context::RequestContext;
pub use cors::Cors;
pub use exchange::{CorsRequest, CorsResponse, Exchange};
pub use exposed_headers::ExposedHeaders;
pub use headers::{Headers, merge_vary};
pub use http_adapter::HttpExchange;
pub use middleware::{ContextHandler, CorsMiddleware, Outcome, SplitHandler};
pub use options::{CallingConvention, CorsOptions, ValidationError};
pub use origin::Origin;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
