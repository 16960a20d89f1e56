/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use pretty_assertions::assert_eq;
use servicecatalog::error::{DeletePortfolioErrorKind, DescribePortfolioErrorKind};
use servicecatalog::input::{DeletePortfolioInput, DescribePortfolioInput};
use servicecatalog::operation::{self, ParseStrictResponse};
use servicecatalog::retry::AwsErrorRetryPolicy;
use servicecatalog::{Config, Instant, Region};
use smithy_types::retry::{ErrorKind, RetryKind};
use std::error::Error;

fn response(status: u16, headers: &[(&str, &str)], body: &'static str) -> http::Response<Bytes> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Bytes::from_static(body.as_bytes())).unwrap()
}

#[test]
fn parse_success_body() {
    let op = DescribePortfolioInput::builder()
        .id("port-1")
        .build()
        .make_operation(
            &Config::builder()
                .region(Region::new("us-west-2"))
                .build(),
        )
        .unwrap();
    let resp = response(
        200,
        &[("x-amzn-requestid", "req-1")],
        r#"{
            "PortfolioDetail": {"Id": "port-1", "DisplayName": "Eng", "CreatedTime": 1576540098},
            "Tags": [{"Key": "team", "Value": "platform"}],
            "Budgets": [{"BudgetName": "b1"}]
        }"#,
    );
    let output = op.parse_response(&resp).expect("success");
    let detail = output.portfolio_detail().unwrap();
    assert_eq!(detail.display_name(), Some("Eng"));
    assert_eq!(
        detail.created_time(),
        Some(&Instant::from_epoch_seconds(1576540098))
    );
    assert_eq!(output.tags().unwrap()[0].key(), Some("team"));
    assert_eq!(output.budgets().unwrap()[0].budget_name(), Some("b1"));
    assert_eq!(output.tag_options(), None);
}

#[test]
fn empty_success_body() {
    let output = operation::DeletePortfolio::new()
        .parse(&response(200, &[], ""))
        .expect("success");
    assert_eq!(output, servicecatalog::output::DeletePortfolioOutput::builder().build());
}

#[test]
fn modeled_error_from_type_field() {
    let resp = response(
        400,
        &[("x-amzn-requestid", "req-2")],
        r#"{"__type": "com.amazonaws.servicecatalog#ResourceInUseException", "Message": "portfolio has products"}"#,
    );
    let err = operation::DeletePortfolio::new()
        .parse(&resp)
        .expect_err("error response");
    assert!(err.is_resource_in_use_error());
    assert!(!err.is_resource_not_found_error());
    assert_eq!(err.code(), Some("ResourceInUseException"));
    assert_eq!(err.message(), Some("portfolio has products"));
    assert_eq!(err.request_id(), Some("req-2"));
    match &err.kind {
        DeletePortfolioErrorKind::ResourceInUseError(inner) => {
            assert_eq!(inner.message(), Some("portfolio has products"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "ResourceInUseError [ResourceInUseException]: portfolio has products"
    );
    assert!(err.source().is_some());
}

#[test]
fn modeled_error_from_header() {
    let resp = response(
        400,
        &[(
            "x-amzn-errortype",
            "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazon.coral.validate/",
        )],
        r#"{"message": "no such portfolio"}"#,
    );
    let err = operation::DescribePortfolio::new()
        .parse(&resp)
        .expect_err("error response");
    assert!(matches!(
        err.kind,
        DescribePortfolioErrorKind::ResourceNotFoundError(_)
    ));
    assert_eq!(err.message(), Some("no such portfolio"));
}

#[test]
fn exception_not_thrown_by_operation_is_unhandled() {
    // DescribePortfolio only models ResourceNotFoundException.
    let resp = response(
        400,
        &[],
        r#"{"__type": "InvalidParametersException", "Message": "bad"}"#,
    );
    let err = operation::DescribePortfolio::new()
        .parse(&resp)
        .expect_err("error response");
    assert!(matches!(err.kind, DescribePortfolioErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("InvalidParametersException"));
    assert_eq!(err.meta().message(), Some("bad"));
    assert_eq!(
        err.to_string(),
        "GenericError [InvalidParametersException]: bad"
    );
}

#[test]
fn malformed_success_body_is_unhandled() {
    let err = operation::DescribePortfolio::new()
        .parse(&response(200, &[], r#"{"PortfolioDetail": "not an object"}"#))
        .expect_err("invalid body");
    assert!(matches!(err.kind, DescribePortfolioErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert!(err
        .source()
        .and_then(|source| source.downcast_ref::<serde_json::Error>())
        .is_some());
}

#[test]
fn malformed_success_body_keeps_request_id() {
    let err = operation::DescribePortfolio::new()
        .parse(&response(
            200,
            &[("x-amzn-requestid", "req-9")],
            r#"{"PortfolioDetail": "not an object"}"#,
        ))
        .expect_err("invalid body");
    assert!(matches!(err.kind, DescribePortfolioErrorKind::Unhandled(_)));
    assert_eq!(err.request_id(), Some("req-9"));
    assert_eq!(err.code(), None);
}

#[test]
fn non_json_error_body() {
    let err = DeletePortfolioInput::builder()
        .id("port-1")
        .build()
        .make_operation(&Config::builder().region(Region::new("us-east-1")).build())
        .unwrap()
        .parse_response(&response(
            503,
            &[("x-amzn-requestid", "req-3")],
            "<html>Service Unavailable</html>",
        ))
        .expect_err("error response");
    assert!(matches!(err.kind, DeletePortfolioErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.request_id(), Some("req-3"));
}

#[test]
fn throttled_responses_are_retryable() {
    let resp = response(
        400,
        &[],
        r#"{"__type": "ThrottlingException", "message": "Rate exceeded"}"#,
    );
    let err = operation::DescribePortfolio::new()
        .parse(&resp)
        .expect_err("error response");
    assert_eq!(
        AwsErrorRetryPolicy::new().classify(&err, &resp),
        RetryKind::Error(ErrorKind::ThrottlingError)
    );

    let resp = response(
        404,
        &[],
        r#"{"__type": "ResourceNotFoundException"}"#,
    );
    let err = operation::DescribePortfolio::new()
        .parse(&resp)
        .expect_err("error response");
    assert_eq!(
        AwsErrorRetryPolicy::new().classify(&err, &resp),
        RetryKind::NotRetryable
    );
}
