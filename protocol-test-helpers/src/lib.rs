/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use http::Request;
use pretty_assertions::Comparison;
use std::fmt::{self, Debug};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("header `{forbidden}` is forbidden but found value `{found}`")]
    ForbiddenHeader { forbidden: String, found: String },
    #[error("body did not match. {hint}\n{comparison}")]
    BodyDidNotMatch {
        comparison: PrettyString,
        hint: String,
    },
    #[error("expected body to be valid {expected} but it was not: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Multiline diff output that prints without escaping in `Display`.
#[derive(Eq, PartialEq)]
pub struct PrettyString(String);

impl Debug for PrettyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PrettyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Eq, PartialEq)]
struct PrettyStr<'a>(&'a str);

impl Debug for PrettyStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn pretty_comparison(expected: &str, actual: &str) -> PrettyString {
    PrettyString(format!(
        "{}",
        Comparison::new(&PrettyStr(expected), &PrettyStr(actual))
    ))
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

fn header_value<B>(request: &Request<B>, key: &str) -> Option<String> {
    if !request.headers().contains_key(key) {
        return None;
    }
    // Protocol tests store header lists as comma-delimited
    Some(
        request
            .headers()
            .get_all(key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        let actual_value =
            header_value(request, key).ok_or_else(|| ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            })?;
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if let Some(found) = header_value(request, key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
                found,
            });
        }
    }
    Ok(())
}

pub fn require_headers<B>(
    request: &Request<B>,
    required_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in required_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MediaType {
    /// Bodies are compared as JSON documents: key order and whitespace are ignored.
    Json,
    /// Bodies are compared byte for byte.
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/json" | "application/x-amz-json-1.0" | "application/x-amz-json-1.1" => {
                MediaType::Json
            }
            other => MediaType::Other(other.to_string()),
        }
    }
}

pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual = std::str::from_utf8(actual_body.as_ref()).map_err(|e| {
        ProtocolTestFailure::InvalidBodyFormat {
            expected: "UTF-8 encoded text".to_owned(),
            found: e.to_string(),
        }
    })?;
    match media_type {
        MediaType::Json => try_json_eq(expected_body, actual),
        MediaType::Other(_) if expected_body == actual => Ok(()),
        MediaType::Other(_) => Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: pretty_comparison(expected_body, actual),
            hint: "".to_owned(),
        }),
    }
}

fn try_json_eq(expected: &str, actual: &str) -> Result<(), ProtocolTestFailure> {
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{} (expected body)", e),
        })?;
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{}: {}", e, actual),
        })?;
    assert_json_matches_no_panic(&actual_json, &expected_json, Config::new(CompareMode::Strict))
        .map_err(|message| {
            let pretty = |value: &serde_json::Value| {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            };
            ProtocolTestFailure::BodyDidNotMatch {
                comparison: pretty_comparison(&pretty(&expected_json), &pretty(&actual_json)),
                hint: message,
            }
        })
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, require_headers, validate_body, validate_headers, MediaType,
        ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_and_require_headers() {
        let request = Request::builder()
            .uri("/")
            .header("x-amz-target", "AWS242ServiceCatalogService.ListPortfolios")
            .body(())
            .unwrap();
        require_headers(&request, &["X-Amz-Target"]).expect("header names are case insensitive");
        require_headers(&request, &["authorization"]).expect_err("not signed");
        forbid_headers(&request, &["authorization"]).expect("not signed");
        assert_eq!(
            forbid_headers(&request, &["x-amz-target"]),
            Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: "x-amz-target".to_owned(),
                found: "AWS242ServiceCatalogService.ListPortfolios".to_owned(),
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect("inputs matched as JSON");

        let expected = r#"{"PortfolioId": "port-1", "AcceptLanguage": "en"}"#;
        let actual = r#"{"AcceptLanguage":"en","PortfolioId":"port-1"}"#;
        validate_body(actual, expected, MediaType::from("application/x-amz-json-1.1"))
            .expect("key order is ignored");

        let actual = r#"{"AcceptLanguage":"jp","PortfolioId":"port-1"}"#;
        match validate_body(actual, expected, MediaType::Json) {
            Err(ProtocolTestFailure::BodyDidNotMatch { .. }) => {}
            other => panic!("expected a body mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_json_body() {
        let err = validate_body("{\"abc\":", "{}", MediaType::Json).expect_err("truncated");
        assert!(matches!(err, ProtocolTestFailure::InvalidBodyFormat { .. }));
    }

    #[test]
    fn test_validate_non_json_body() {
        let expected = r#"asdf"#;
        let actual = r#"asdf "#;
        validate_body(actual.as_bytes(), expected, MediaType::from("something/else"))
            .expect_err("bodies do not match");

        validate_body(expected.as_bytes(), expected, MediaType::from("something/else"))
            .expect("inputs matched exactly")
    }
}
