/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `awsJson1.1` request marshalling and response parsing.

use crate::build_error::BuildError;
use crate::config::Config;
use crate::generic_error::GenericError;
use bytes::Bytes;
use http::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) const CONTENT_TYPE_AWS_JSON_1_1: &str = "application/x-amz-json-1.1";
pub(crate) const TARGET_PREFIX: &str = "AWS242ServiceCatalogService";

const X_AMZ_TARGET: &str = "x-amz-target";
const X_AMZN_ERRORTYPE: &str = "x-amzn-errortype";
const X_AMZN_REQUESTID: &str = "x-amzn-requestid";

pub(crate) fn build_request<T: Serialize>(
    input: &T,
    operation: &'static str,
    config: &Config,
) -> Result<http::Request<Bytes>, BuildError> {
    let endpoint = config.resolve_endpoint().ok_or(BuildError::MissingEndpoint)?;
    let uri = request_uri(&endpoint)?;
    let body = Bytes::from(serde_json::to_vec(input)?);
    let target = format!("{}.{}", TARGET_PREFIX, operation);
    tracing::debug!(
        operation,
        x_amz_target = %target,
        body_len = body.len(),
        "built awsJson1.1 request"
    );
    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, CONTENT_TYPE_AWS_JSON_1_1)
        .header(X_AMZ_TARGET, target)
        .header(CONTENT_LENGTH, body.len().to_string())
        .body(body)?;
    Ok(request)
}

fn request_uri(endpoint: &str) -> Result<http::Uri, BuildError> {
    let invalid = || BuildError::InvalidEndpoint(endpoint.to_owned());
    let base: http::Uri = endpoint.parse().map_err(|_| invalid())?;
    // awsJson requests carry no query string.
    if base.query().is_some() {
        return Err(invalid());
    }
    let scheme = base.scheme().cloned().ok_or_else(invalid)?;
    let authority = base.authority().cloned().ok_or_else(invalid)?;
    let path = base.path().trim_end_matches('/');
    http::Uri::builder()
        .scheme(scheme)
        .authority(authority)
        .path_and_query(format!("{}/", path))
        .build()
        .map_err(|_| invalid())
}

/// Deserializes a 2xx body into `O`, or classifies an error response.
///
/// A body that fails to deserialize goes to `unhandled` along with a
/// [`GenericError`] carrying the response's request id.
pub(crate) fn parse_response<O, E>(
    operation: &'static str,
    response: &http::Response<Bytes>,
    from_generic: impl FnOnce(GenericError) -> E,
    unhandled: impl FnOnce(serde_json::Error, GenericError) -> E,
) -> Result<O, E>
where
    O: DeserializeOwned,
{
    tracing::trace!(operation, status = %response.status(), "parsing response");
    if !response.status().is_success() {
        return Err(from_generic(parse_generic_error(response)));
    }
    let body = response.body();
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|err| {
        tracing::warn!(operation, error = %err, "response body did not match the output shape");
        let meta = GenericError::builder()
            .set_request_id(header_str(response.headers(), X_AMZN_REQUESTID).map(str::to_owned))
            .build();
        unhandled(err, meta)
    })
}

/// Extracts the error code, message and request id from an error response.
pub(crate) fn parse_generic_error(response: &http::Response<Bytes>) -> GenericError {
    let headers = response.headers();
    let body: serde_json::Map<String, serde_json::Value> =
        match serde_json::from_slice(response.body()) {
            Ok(serde_json::Value::Object(body)) => body,
            Ok(_) => Default::default(),
            Err(err) => {
                tracing::warn!(status = %response.status(), error = %err, "error response body is not JSON");
                Default::default()
            }
        };
    let body_str = |key: &str| body.get(key).and_then(serde_json::Value::as_str);
    let code = header_str(headers, X_AMZN_ERRORTYPE)
        .or_else(|| body_str("code"))
        .or_else(|| body_str("__type"))
        .map(sanitize_error_code);
    let message = body_str("message")
        .or_else(|| body_str("Message"))
        .or_else(|| body_str("errorMessage"));
    GenericError::builder()
        .set_code(code.map(str::to_owned))
        .set_message(message.map(str::to_owned))
        .set_request_id(header_str(headers, X_AMZN_REQUESTID).map(str::to_owned))
        .build()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Error codes may arrive as `aws.protocoltests.restjson#FooError:http://internal.amazon.com/...`;
/// only `FooError` identifies the error.
pub(crate) fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

#[cfg(test)]
mod test {
    use super::{build_request, parse_generic_error, parse_response, sanitize_error_code};
    use crate::build_error::BuildError;
    use crate::config::{Config, Region};
    use crate::generic_error::GenericError;
    use bytes::Bytes;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
    struct Shape {
        #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    }

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn sanitize_namespace_and_suffix() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("com.amazonaws.servicecatalog#ResourceNotFoundException"),
            "ResourceNotFoundException"
        );
        assert_eq!(sanitize_error_code("FooError:bar"), "FooError");
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }

    #[test]
    fn endpoint_path_is_kept() {
        let config = Config::builder().endpoint("http://localhost:8080/proxy/").build();
        let request = build_request(&Shape::default(), "ListPortfolios", &config).unwrap();
        assert_eq!(request.uri(), "http://localhost:8080/proxy/");
    }

    #[test]
    fn missing_and_invalid_endpoints() {
        assert!(matches!(
            build_request(&Shape::default(), "ListPortfolios", &Config::default()),
            Err(BuildError::MissingEndpoint)
        ));
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .endpoint("localhost")
            .build();
        assert!(matches!(
            build_request(&Shape::default(), "ListPortfolios", &config),
            Err(BuildError::InvalidEndpoint(endpoint)) if endpoint == "localhost"
        ));
    }

    #[test]
    fn empty_success_body_is_an_empty_object() {
        let parsed: Result<Shape, String> = parse_response(
            "Shape",
            &response(200, ""),
            |_| unreachable!(),
            |e, _| e.to_string(),
        );
        assert_eq!(parsed, Ok(Shape::default()));
    }

    #[test]
    fn malformed_success_body_is_unhandled() {
        let parsed: Result<Shape, String> = parse_response(
            "Shape",
            &response(200, "{\"Id\": 5}"),
            |_| unreachable!(),
            |_, _| "unhandled".to_owned(),
        );
        assert_eq!(parsed, Err("unhandled".to_owned()));
    }

    #[test]
    fn malformed_success_body_keeps_request_id() {
        let response = http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "req-9")
            .body(Bytes::from_static(b"[1, 2]"))
            .unwrap();
        let meta = parse_response::<Shape, GenericError>(
            "Shape",
            &response,
            |_| unreachable!(),
            |_, meta| meta,
        )
        .unwrap_err();
        assert_eq!(meta.request_id(), Some("req-9"));
        assert_eq!(meta.code(), None);
    }

    #[test]
    fn endpoint_query_is_rejected() {
        let config = Config::builder()
            .endpoint("http://localhost:4566/base?x=1")
            .build();
        assert!(matches!(
            build_request(&Shape::default(), "ListPortfolios", &config),
            Err(BuildError::InvalidEndpoint(endpoint)) if endpoint == "http://localhost:4566/base?x=1"
        ));
    }

    #[test]
    fn error_code_from_header_beats_body() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "InvalidParametersException:http://internal.amazon.com/")
            .header("x-amzn-requestid", "req-123")
            .body(Bytes::from_static(
                br#"{"__type": "ResourceNotFoundException", "Message": "bad id"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("InvalidParametersException"));
        assert_eq!(err.message(), Some("bad id"));
        assert_eq!(err.request_id(), Some("req-123"));
    }

    #[test]
    fn error_code_from_body() {
        let err = parse_generic_error(&response(
            400,
            r#"{"__type": "com.amazonaws.servicecatalog#LimitExceededException", "message": "too many"}"#,
        ));
        assert_eq!(err.code(), Some("LimitExceededException"));
        assert_eq!(err.message(), Some("too many"));
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn non_json_error_body() {
        let err = parse_generic_error(&response(503, "<html>Service Unavailable</html>"));
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }
}
