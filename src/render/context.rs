use serde::Serialize;

use crate::http::request::Request;

/// Values exposed to templates.
///
/// Carries only what was received on the wire, never process-internal
/// state. Templates see the variables `method`, `path` and `headers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    /// The request method token
    pub method: String,
    /// The raw request path
    pub path: String,
    /// All request headers as `name: value` lines
    pub headers: String,
}

impl RenderContext {
    pub fn from_request(req: &Request) -> Self {
        Self {
            method: req.method.as_str().to_string(),
            path: req.path.clone(),
            headers: req.headers_formatted(),
        }
    }
}
