//! [`CorsRequest`], [`CorsResponse`] and [`Exchange`] for the `http` crate.

use crate::exchange::{CorsRequest, CorsResponse, Exchange};
use crate::headers::merge_vary;
use http::header::{HeaderName, HeaderValue, VARY};
use http::{HeaderMap, Request, Response, StatusCode};
use tracing::warn;

fn read_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn parse_header(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => Some((name, value)),
        _ => {
            warn!(header = name, value, "dropping CORS header that is not valid HTTP");
            None
        }
    }
}

fn write_header(headers: &mut HeaderMap, name: &str, value: &str) {
    if let Some((name, value)) = parse_header(name, value) {
        headers.insert(name, value);
    }
}

/// Whether a `Vary` field line already lists `value` or `*`.
fn vary_line_covers(line: &HeaderValue, value: &str) -> bool {
    line.as_bytes()
        .split(|byte| *byte == b',')
        .map(<[u8]>::trim_ascii)
        .any(|entry| entry == b"*" || entry.eq_ignore_ascii_case(value.as_bytes()))
}

/// Adds `value` to the `Vary` field lines on `headers`.
///
/// Text lines are folded into one line. When any line is not UTF-8 the
/// existing lines are left untouched and `value` goes on a line of its own.
fn append_vary_lines(headers: &mut HeaderMap, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }

    let lines = headers.get_all(VARY);
    if lines.iter().any(|line| vary_line_covers(line, value)) {
        return;
    }

    let text: Option<Vec<&str>> = lines
        .iter()
        .map(|line| line.to_str().ok().map(str::trim))
        .collect();

    match text {
        Some(parts) => {
            let joined = parts
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            let merged = merge_vary(Some(&joined), value);
            write_header(headers, VARY.as_str(), &merged);
        }
        None => {
            if let Some((name, value)) = parse_header(VARY.as_str(), value) {
                headers.append(name, value);
            }
        }
    }
}

impl<B> CorsRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        read_header(self.headers(), name)
    }
}

impl<B: Default> CorsResponse for Response<B> {
    fn header(&self, name: &str) -> Option<&str> {
        read_header(self.headers(), name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        write_header(self.headers_mut(), name, value);
    }

    fn append_vary(&mut self, value: &str) {
        append_vary_lines(self.headers_mut(), value);
    }

    fn end(&mut self, status: u16) {
        match StatusCode::from_u16(status) {
            Ok(status) => *self.status_mut() = status,
            Err(_) => warn!(status, "ignoring out-of-range status code"),
        }
        *self.body_mut() = B::default();
    }
}

/// An `http` request paired with the response being built for it.
#[derive(Debug)]
pub struct HttpExchange<ReqB, ResB> {
    pub request: Request<ReqB>,
    pub response: Response<ResB>,
}

impl<ReqB, ResB: Default> HttpExchange<ReqB, ResB> {
    /// Pairs `request` with a default `200 OK` response.
    pub fn new(request: Request<ReqB>) -> Self {
        Self {
            request,
            response: Response::new(ResB::default()),
        }
    }

    pub fn into_response(self) -> Response<ResB> {
        self.response
    }
}

impl<ReqB, ResB: Default> Exchange for HttpExchange<ReqB, ResB> {
    type Request = Request<ReqB>;
    type Response = Response<ResB>;

    fn request(&self) -> &Self::Request {
        &self.request
    }

    fn response_mut(&mut self) -> &mut Self::Response {
        &mut self.response
    }
}

#[cfg(test)]
#[path = "http_adapter_test.rs"]
mod http_adapter_test;
