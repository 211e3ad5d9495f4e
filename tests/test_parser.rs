use vellum::http::parser::{ParseError, parse_request};
use vellum::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_headers_keep_wire_order() {
    let req = b"GET / HTTP/1.1\r\nB-Header: 2\r\nA-Header: 1\r\nC-Header: 3\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    let names: Vec<&str> = parsed.headers.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["B-Header", "A-Header", "C-Header"]);
}

#[test]
fn test_parse_header_whitespace_trimmed() {
    let req = b"GET / HTTP/1.1\r\nHost:   example.com  \r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
}

#[test]
fn test_parse_header_value_keeps_later_colons() {
    let req = b"GET / HTTP/1.1\r\nReferer: http://example.com/page\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(
        parsed.headers.get("Referer").unwrap(),
        "http://example.com/page"
    );
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.get("X-Tag").unwrap(), "second");
    assert_eq!(parsed.headers.len(), 1);
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_unknown_method_is_not_an_error() {
    // Dispatch rejects these with a 405; the parser just carries the token
    let req = b"BREW /coffee HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
}

#[test]
fn test_parse_method_case_preserved() {
    let req = b"get / HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("get".to_string()));
    assert_eq!(parsed.method.as_str(), "get");
}

#[test]
fn test_parse_request_line_too_few_tokens() {
    let req = b"GET /\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
}

#[test]
fn test_parse_request_line_too_many_tokens() {
    let req = b"GET / HTTP/1.1 extra\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
}

#[test]
fn test_parse_empty_buffer() {
    let result = parse_request(b"");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_invalid_utf8() {
    let req = b"GET / HTTP/1.1\r\nHost: \xff\xfe\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_parse_missing_trailing_blank_line() {
    // A truncated read can end cleanly after a header line; the blank line
    // is not required
    let req = b"GET / HTTP/1.1\r\nHost: example.com";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
}

#[test]
fn test_parse_body_after_blank_line_ignored() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\nthis is not : a header";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
}
