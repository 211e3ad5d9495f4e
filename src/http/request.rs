use indexmap::IndexMap;

/// HTTP request methods.
///
/// The server serves GET and HEAD; every other method token is carried
/// as-received and answered with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other method token, kept exactly as it appeared on the wire
    Other(String),
}

impl Method {
    /// Classifies a wire token. Matching is exact: `get` is not `GET`.
    ///
    /// # Example
    ///
    /// ```
    /// # use vellum::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            _ => Method::Other(token.to_string()),
        }
    }

    /// The method token as received on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::Other(token) => token,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Contains the information extracted from the request line and headers.
/// Request bodies are ignored by this server. Immutable after parsing.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, or anything else as-received)
    pub method: Method,
    /// The raw request-target as sent (e.g., "/index.html"), not decoded
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
    /// Request headers in insertion order; a repeated name keeps the last value
    pub headers: IndexMap<String, String>,
}

impl Request {
    /// Retrieves a header value by name, exactly as received.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// All headers rendered as `name: value` pairs joined by newlines,
    /// in the order they appeared on the wire.
    pub fn headers_formatted(&self) -> String {
        self.headers
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
