use indexmap::IndexMap;

use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    InvalidEncoding,
    InvalidRequestLine,
    InvalidHeader,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidEncoding => write!(f, "request is not valid UTF-8"),
            ParseError::InvalidRequestLine => write!(f, "malformed request line"),
            ParseError::InvalidHeader => write!(f, "malformed header line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a request from a single read's worth of bytes.
///
/// The buffer is whatever one bounded read produced; requests that were
/// truncated by the read budget are not reassembled and will usually fail
/// here. Everything after the first empty line (a body) is ignored.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = text.split("\r\n");

    // Request line: exactly three tokens
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let path = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    if parts.next().is_some() {
        return Err(ParseError::InvalidRequestLine);
    }

    // Headers until the first empty line; a repeated name overwrites
    let mut headers = IndexMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}
