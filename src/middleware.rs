use crate::constants::header;
use crate::cors::Cors;
use crate::exchange::{CorsRequest, CorsResponse, Exchange};
use crate::options::CallingConvention;
use crate::result::CorsDecision;
use std::sync::Arc;
use tracing::debug;

/// What happened to the exchange after the policy ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The continuation ran and produced `T`.
    Continued(T),
    /// A preflight was answered; the continuation was not called.
    Terminated,
}

impl<T> Outcome<T> {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Outcome::Terminated)
    }

    pub fn into_continued(self) -> Option<T> {
        match self {
            Outcome::Continued(value) => Some(value),
            Outcome::Terminated => None,
        }
    }
}

impl Cors {
    /// Writes a decision onto a live response.
    pub fn apply<R>(&self, decision: &CorsDecision, response: &mut R)
    where
        R: CorsResponse + ?Sized,
    {
        let Some(headers) = decision.headers() else {
            return;
        };

        for (name, value) in headers {
            if name.eq_ignore_ascii_case(header::VARY) {
                response.append_vary(value);
            } else {
                response.set_header(name, value);
            }
        }

        if let CorsDecision::Preflight(result) = decision {
            response.end(result.status);
        }
    }

    /// Separate-arguments entry point.
    ///
    /// Headers are written before `next` runs. Errors from `next` come back
    /// untouched.
    pub fn handle<Req, Res, F, T, E>(
        &self,
        request: &Req,
        response: &mut Res,
        next: F,
    ) -> Result<Outcome<T>, E>
    where
        Req: CorsRequest + ?Sized,
        Res: CorsResponse + ?Sized,
        F: FnOnce(&Req, &mut Res) -> Result<T, E>,
    {
        let decision = self.check(&request.context());
        self.apply(&decision, response);

        if decision.terminates() {
            debug!("preflight answered, pipeline halted");
            return Ok(Outcome::Terminated);
        }

        next(request, response).map(Outcome::Continued)
    }

    /// Combined-context entry point; same policy as [`Cors::handle`].
    pub fn handle_context<C, F, T, E>(&self, ctx: &mut C, next: F) -> Result<Outcome<T>, E>
    where
        C: Exchange + ?Sized,
        F: FnOnce(&mut C) -> Result<T, E>,
    {
        let decision = self.check(&ctx.request().context());
        self.apply(&decision, ctx.response_mut());

        if decision.terminates() {
            debug!("preflight answered, pipeline halted");
            return Ok(Outcome::Terminated);
        }

        next(ctx).map(Outcome::Continued)
    }

    /// Wraps the policy in the handler shape its options ask for.
    pub fn into_middleware(self) -> CorsMiddleware {
        let convention = self.options().calling_convention;
        let cors = Arc::new(self);
        match convention {
            CallingConvention::SplitArguments => {
                CorsMiddleware::SplitArguments(SplitHandler { cors })
            }
            CallingConvention::Context => CorsMiddleware::Context(ContextHandler { cors }),
        }
    }
}

/// Handler invoked as `(request, response, next)`.
#[derive(Debug, Clone)]
pub struct SplitHandler {
    cors: Arc<Cors>,
}

impl SplitHandler {
    pub fn call<Req, Res, F, T, E>(
        &self,
        request: &Req,
        response: &mut Res,
        next: F,
    ) -> Result<Outcome<T>, E>
    where
        Req: CorsRequest + ?Sized,
        Res: CorsResponse + ?Sized,
        F: FnOnce(&Req, &mut Res) -> Result<T, E>,
    {
        self.cors.handle(request, response, next)
    }
}

/// Handler invoked as `(context, next)`.
#[derive(Debug, Clone)]
pub struct ContextHandler {
    cors: Arc<Cors>,
}

impl ContextHandler {
    pub fn call<C, F, T, E>(&self, ctx: &mut C, next: F) -> Result<Outcome<T>, E>
    where
        C: Exchange + ?Sized,
        F: FnOnce(&mut C) -> Result<T, E>,
    {
        self.cors.handle_context(ctx, next)
    }
}

/// The policy packaged for one of the two host calling conventions.
#[derive(Debug, Clone)]
pub enum CorsMiddleware {
    SplitArguments(SplitHandler),
    Context(ContextHandler),
}

impl CorsMiddleware {
    pub fn calling_convention(&self) -> CallingConvention {
        match self {
            CorsMiddleware::SplitArguments(_) => CallingConvention::SplitArguments,
            CorsMiddleware::Context(_) => CallingConvention::Context,
        }
    }

    pub fn as_split(&self) -> Option<&SplitHandler> {
        match self {
            CorsMiddleware::SplitArguments(handler) => Some(handler),
            CorsMiddleware::Context(_) => None,
        }
    }

    pub fn as_context(&self) -> Option<&ContextHandler> {
        match self {
            CorsMiddleware::Context(handler) => Some(handler),
            CorsMiddleware::SplitArguments(_) => None,
        }
    }

    pub fn cors(&self) -> &Cors {
        match self {
            CorsMiddleware::SplitArguments(handler) => &handler.cors,
            CorsMiddleware::Context(handler) => &handler.cors,
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
