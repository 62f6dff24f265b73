use docserve::http::error::ExchangeError;
use docserve::http::response::{ResponseHead, ResponseHeadBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::HttpVersionNotSupported.as_u16(), 505);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
    assert_eq!(
        StatusCode::HttpVersionNotSupported.reason_phrase(),
        "HTTP Version Not Supported"
    );
}

#[test]
fn test_status_code_from_u16() {
    for code in [200, 400, 403, 404, 405, 505] {
        assert_eq!(StatusCode::from_u16(code).as_u16(), code);
    }
}

#[test]
fn test_status_code_unknown_falls_back_to_ok() {
    for code in [0, 201, 302, 500, 999] {
        assert_eq!(StatusCode::from_u16(code), StatusCode::Ok);
    }
}

#[test]
fn test_status_only_head_bytes() {
    let head = ResponseHead::status_only("HTTP/1.1", StatusCode::NotFound);

    assert_eq!(
        head.to_bytes(),
        b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_vec()
    );
}

#[test]
fn test_status_only_echoes_version() {
    let head = ResponseHead::status_only("HTTP/1.0", StatusCode::Forbidden);
    let text = String::from_utf8(head.to_bytes()).unwrap();

    assert!(text.starts_with("HTTP/1.0 403 Forbidden\r\n"));
}

#[test]
fn test_file_head_keep_alive() {
    let head = ResponseHead::file("HTTP/1.1", "text/html", 42, true);

    assert_eq!(
        String::from_utf8(head.to_bytes()).unwrap(),
        concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: text/html\r\n",
            "Content-Length: 42\r\n",
            "Connection: keep-alive\r\n",
            "\r\n",
        )
    );
}

#[test]
fn test_file_head_close() {
    let head = ResponseHead::file("HTTP/1.0", "image/png", 7, false);

    assert_eq!(head.status, StatusCode::Ok);
    assert_eq!(head.header("Content-Type"), Some("image/png"));
    assert_eq!(head.header("Content-Length"), Some("7"));
    assert_eq!(head.header("Connection"), Some("close"));
}

#[test]
fn test_builder_preserves_header_order() {
    let head = ResponseHeadBuilder::new("HTTP/1.1", StatusCode::Ok)
        .header("B", "2")
        .header("A", "1")
        .build();

    assert_eq!(
        head.to_bytes(),
        b"HTTP/1.1 200 OK\r\nB: 2\r\nA: 1\r\n\r\n".to_vec()
    );
}

#[test]
fn test_exchange_error_statuses() {
    assert_eq!(ExchangeError::MalformedRequest.status(), StatusCode::BadRequest);
    assert_eq!(ExchangeError::MethodNotAllowed.status(), StatusCode::MethodNotAllowed);
    assert_eq!(
        ExchangeError::VersionNotSupported.status(),
        StatusCode::HttpVersionNotSupported
    );
    assert_eq!(ExchangeError::NotFound.status(), StatusCode::NotFound);
    assert_eq!(ExchangeError::Forbidden.status(), StatusCode::Forbidden);
}

#[test]
fn test_exchange_error_session_policy() {
    assert!(ExchangeError::MalformedRequest.ends_session());
    assert!(ExchangeError::MethodNotAllowed.ends_session());
    assert!(ExchangeError::VersionNotSupported.ends_session());
    assert!(!ExchangeError::NotFound.ends_session());
    assert!(!ExchangeError::Forbidden.ends_session());
}
