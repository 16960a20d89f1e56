/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use serde_json::json;
use servicecatalog::input::{ListTagOptionsInput, SearchProductsInput};
use servicecatalog::model::{
    ListTagOptionsFilters, PortfolioDetail, ProductViewFilterBy, ProvisionedProductStatus,
    RecordStatus,
};
use servicecatalog::output::{DescribeProvisionedProductOutput, DescribeRecordOutput, ListPortfoliosOutput};
use servicecatalog::Instant;

#[test]
fn acronym_members_keep_their_wire_names() {
    let body = r#"{
        "PortfolioDetails": [{
            "Id": "port-2s6wuabcdefgh",
            "ARN": "arn:aws:catalog:us-east-1:123456789012:portfolio/port-2s6wuabcdefgh",
            "DisplayName": "Engineering",
            "CreatedTime": 1576540098.52,
            "ProviderName": "IT"
        }],
        "NextPageToken": "token-2"
    }"#;
    let output: ListPortfoliosOutput = serde_json::from_str(body).unwrap();
    let detail = &output.portfolio_details().unwrap()[0];
    assert_eq!(
        detail.arn(),
        Some("arn:aws:catalog:us-east-1:123456789012:portfolio/port-2s6wuabcdefgh")
    );
    assert_eq!(
        detail.created_time(),
        Some(&Instant::from_secs_and_nanos(1576540098, 520_000_000))
    );
    assert_eq!(detail.description(), None);
    assert_eq!(output.next_page_token(), Some("token-2"));

    let provisioned: DescribeProvisionedProductOutput = serde_json::from_str(
        r#"{"ProvisionedProductDetail": {"Arn": "arn:pp", "Status": "AVAILABLE", "Type": "CFN_STACK"}}"#,
    )
    .unwrap();
    let detail = provisioned.provisioned_product_detail().unwrap();
    assert_eq!(detail.arn(), Some("arn:pp"));
    assert_eq!(detail.r#type(), Some("CFN_STACK"));
    assert_eq!(detail.status(), Some(&ProvisionedProductStatus::Available));
}

#[test]
fn serialization_uses_wire_names_and_skips_absent_members() {
    let detail = PortfolioDetail::builder()
        .id("port-1")
        .arn("arn:port-1")
        .created_time(Instant::from_epoch_seconds(1576540098))
        .build();
    assert_eq!(
        serde_json::to_value(&detail).unwrap(),
        json!({"Id": "port-1", "ARN": "arn:port-1", "CreatedTime": 1576540098})
    );
}

#[test]
fn unknown_enum_values_are_preserved() {
    let output: DescribeRecordOutput = serde_json::from_str(
        r#"{"RecordDetail": {"RecordId": "rec-1", "Status": "PAUSED"}}"#,
    )
    .unwrap();
    let status = output.record_detail().unwrap().status().unwrap();
    assert_eq!(status, &RecordStatus::Unknown("PAUSED".to_string()));
    assert_eq!(status.as_str(), "PAUSED");
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({"RecordDetail": {"RecordId": "rec-1", "Status": "PAUSED"}})
    );
}

#[test]
fn unknown_members_are_ignored() {
    let output: DescribeRecordOutput = serde_json::from_str(
        r#"{"RecordDetail": {"RecordId": "rec-1", "Status": "IN_PROGRESS_IN_ERROR", "Shiny": true}, "Extra": [1, 2]}"#,
    )
    .unwrap();
    let detail = output.record_detail().unwrap();
    assert_eq!(detail.record_id(), Some("rec-1"));
    assert_eq!(detail.status(), Some(&RecordStatus::InProgressInError));
}

#[test]
fn enum_map_keys_serialize_as_strings() {
    let input = SearchProductsInput::builder()
        .add_filters_entry(ProductViewFilterBy::FullTextSearch, vec!["ec2".to_string()])
        .unwrap()
        .add_filters_entry("Owner", vec!["me".to_string(), "you".to_string()])
        .unwrap()
        .page_size(20)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "Filters": {"FullTextSearch": ["ec2"], "Owner": ["me", "you"]},
            "PageSize": 20
        })
    );
    let parsed: SearchProductsInput = serde_json::from_value(serde_json::to_value(&input).unwrap()).unwrap();
    assert_eq!(parsed, input);
}

#[test]
fn scalars_serialize_natively() {
    let input = ListTagOptionsInput::builder()
        .filters(
            ListTagOptionsFilters::builder()
                .key("cost-center")
                .active(false)
                .build(),
        )
        .page_size(10)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({"Filters": {"Key": "cost-center", "Active": false}, "PageSize": 10})
    );
    assert_eq!(input.filters().unwrap().active(), Some(false));
    assert_eq!(input.page_size(), Some(10));
}

#[test]
fn null_members_are_absent() {
    let detail: PortfolioDetail =
        serde_json::from_str(r#"{"Id": null, "CreatedTime": null}"#).unwrap();
    assert_eq!(detail, PortfolioDetail::builder().build());
}
