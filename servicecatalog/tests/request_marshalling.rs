/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use protocol_test_helpers::{
    assert_ok, forbid_headers, require_headers, validate_body, validate_headers, MediaType,
};
use servicecatalog::error::BuildError;
use servicecatalog::input::{
    CreateProvisionedProductPlanInput, DisableAWSOrganizationsAccessInput, ListPortfoliosInput,
};
use servicecatalog::model::{PortfolioShareType, ProvisionedProductPlanType, Tag};
use servicecatalog::{operation, Config, Region};

fn config() -> Config {
    Config::builder()
        .region(Region::from_static("us-east-1"))
        .build()
}

#[test]
fn accept_portfolio_share_request() {
    let input = operation::AcceptPortfolioShare::builder()
        .accept_language("en")
        .portfolio_id("port-2s6wuabcdefgh")
        .portfolio_share_type(PortfolioShareType::AwsOrganizations)
        .build();
    let op = input.make_operation(&config()).expect("valid request");
    let request = op.request();
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(
        request.uri(),
        "https://servicecatalog.us-east-1.amazonaws.com/"
    );
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "AWS242ServiceCatalogService.AcceptPortfolioShare"),
        ],
    ));
    assert_ok(require_headers(request, &["content-length"]));
    assert_ok(forbid_headers(request, &["authorization", "x-amz-date"]));
    assert_ok(validate_body(
        request.body(),
        r#"{
            "AcceptLanguage": "en",
            "PortfolioId": "port-2s6wuabcdefgh",
            "PortfolioShareType": "AWS_ORGANIZATIONS"
        }"#,
        MediaType::from("application/x-amz-json-1.1"),
    ));
}

#[test]
fn create_provisioned_product_plan_request() {
    let input = CreateProvisionedProductPlanInput::builder()
        .plan_name("p1")
        .plan_type(ProvisionedProductPlanType::Cloudformation)
        .product_id("prod-1")
        .notification_arns("arn:a")
        .notification_arns("arn:b")
        .provisioning_artifact_id("pa-1")
        .idempotency_token("token-1")
        .tags(Tag::builder().key("team").value("platform").build())
        .build();
    let op = input.make_operation(&config()).expect("valid request");
    let (request, _parts) = op.into_request_response();
    assert_ok(validate_headers(
        &request,
        &[(
            "x-amz-target",
            "AWS242ServiceCatalogService.CreateProvisionedProductPlan",
        )],
    ));
    assert_ok(validate_body(
        request.body(),
        r#"{
            "PlanName": "p1",
            "PlanType": "CLOUDFORMATION",
            "ProductId": "prod-1",
            "NotificationArns": ["arn:a", "arn:b"],
            "ProvisioningArtifactId": "pa-1",
            "IdempotencyToken": "token-1",
            "Tags": [{"Key": "team", "Value": "platform"}]
        }"#,
        MediaType::Json,
    ));
    assert_eq!(
        request.headers()["content-length"],
        request.body().len().to_string().as_str()
    );
}

#[test]
fn memberless_input_sends_empty_object() {
    let op = DisableAWSOrganizationsAccessInput::builder()
        .build()
        .make_operation(&config())
        .expect("valid request");
    assert_ok(validate_headers(
        op.request(),
        &[(
            "x-amz-target",
            "AWS242ServiceCatalogService.DisableAWSOrganizationsAccess",
        )],
    ));
    assert_ok(validate_body(op.request().body(), "{}", MediaType::Json));
}

#[test]
fn endpoint_override_and_china_regions() {
    let input = ListPortfoliosInput::builder().page_size(5).build();

    let local = Config::builder().endpoint("http://localhost:4566").build();
    let op = input.make_operation(&local).expect("valid request");
    assert_eq!(op.request().uri(), "http://localhost:4566/");

    let china = Config::builder().region(Region::new("cn-north-1")).build();
    let op = input.make_operation(&china).expect("valid request");
    assert_eq!(
        op.request().uri(),
        "https://servicecatalog.cn-north-1.amazonaws.com.cn/"
    );
}

#[test]
fn missing_region_fails_to_build() {
    let err = ListPortfoliosInput::builder()
        .build()
        .make_operation(&Config::default())
        .expect_err("no endpoint");
    assert!(matches!(err, BuildError::MissingEndpoint), "{:?}", err);
}

#[test]
fn request_can_be_modified_before_dispatch() {
    let mut op = ListPortfoliosInput::builder()
        .build()
        .make_operation(&config())
        .expect("valid request");
    op.request_mut().headers_mut().insert(
        "authorization",
        http::HeaderValue::from_static("AWS4-HMAC-SHA256 Credential=..."),
    );
    assert_ok(require_headers(op.request(), &["authorization"]));
}
