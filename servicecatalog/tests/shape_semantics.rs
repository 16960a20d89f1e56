/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use servicecatalog::input::{
    CreateProvisionedProductPlanInput, CreateServiceActionInput, DescribePortfolioInput,
    SearchProductsInput,
};
use servicecatalog::model::{
    ProductViewFilterBy, ProvisionedProductPlanType, ProvisioningArtifactProperties,
    ProvisioningArtifactType, ServiceActionDefinitionKey, ServiceActionDefinitionType, Tag,
};
use servicecatalog::Instant;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn fluent_builder_sets_members() {
    let input = CreateProvisionedProductPlanInput::builder()
        .plan_name("p1")
        .product_id("prod-1")
        .notification_arns("arn:a")
        .notification_arns("arn:b")
        .build();
    assert_eq!(input.plan_name(), Some("p1"));
    assert_eq!(input.product_id(), Some("prod-1"));
    assert_eq!(
        input.notification_arns(),
        Some(&["arn:a".to_string(), "arn:b".to_string()][..])
    );
    assert_eq!(input.plan_type(), None);
    assert_eq!(input.tags(), None);
}

#[test]
fn typed_enum_overload_and_literal_agree() {
    let typed = CreateProvisionedProductPlanInput::builder()
        .plan_type(ProvisionedProductPlanType::Cloudformation)
        .build();
    let literal = CreateProvisionedProductPlanInput::builder()
        .plan_type(ProvisionedProductPlanType::from("CLOUDFORMATION"))
        .build();
    assert_eq!(typed, literal);
    assert_eq!(typed.plan_type().map(|t| t.as_str()), Some("CLOUDFORMATION"));
}

#[test]
fn set_none_clears_member() {
    let builder = DescribePortfolioInput::builder().id("port-1");
    assert_eq!(builder.get_id(), &Some("port-1".to_string()));
    let input = builder.set_id(None).build();
    assert_eq!(input.id(), None);
    assert_eq!(input, DescribePortfolioInput::builder().build());
}

#[test]
fn set_none_clears_collections() {
    let builder = CreateProvisionedProductPlanInput::builder()
        .tags(Tag::builder().key("team").value("platform").build())
        .notification_arns("arn:a")
        .notification_arns("arn:b");
    assert_eq!(builder.get_notification_arns().as_ref().map(Vec::len), Some(2));
    let input = builder.set_tags(None).set_notification_arns(None).build();
    assert_eq!(input.tags(), None);
    assert_eq!(input.notification_arns(), None);

    let properties = ProvisioningArtifactProperties::builder()
        .add_info_entry("LoadTemplateFromURL", "https://s3.amazonaws.com/bucket/template.json")
        .expect("first entry")
        .set_info(None)
        .build();
    assert_eq!(properties.info(), None);

    let input = SearchProductsInput::builder()
        .add_filters_entry(ProductViewFilterBy::Owner, vec!["me".to_string()])
        .expect("first entry")
        .set_filters(None)
        .build();
    assert_eq!(input.filters(), None);
}

#[test]
fn rejected_entry_leaves_a_cloned_builder_intact() {
    let builder = SearchProductsInput::builder()
        .page_size(20)
        .add_filters_entry(ProductViewFilterBy::FullTextSearch, vec!["ec2".to_string()])
        .expect("first entry");
    builder
        .clone()
        .add_filters_entry("FullTextSearch", vec!["s3".to_string()])
        .expect_err("duplicate key");
    let input = builder.build();
    assert_eq!(input.page_size(), Some(20));
    let filters = input.filters().expect("filters set");
    assert_eq!(
        filters.get(&ProductViewFilterBy::FullTextSearch),
        Some(&vec!["ec2".to_string()])
    );
}

#[test]
fn add_entry_rejects_duplicate_keys() {
    let builder = ProvisioningArtifactProperties::builder()
        .add_info_entry("LoadTemplateFromURL", "https://s3.amazonaws.com/bucket/template.json")
        .expect("first entry");
    let err = builder
        .clone()
        .add_info_entry("LoadTemplateFromURL", "https://example.com/other.json")
        .expect_err("duplicate key");
    assert_eq!(err.member(), "info");
    assert_eq!(err.key(), "LoadTemplateFromURL");
    assert_eq!(
        err.to_string(),
        "duplicated keys (LoadTemplateFromURL) are provided for `info`"
    );

    let properties = builder
        .add_info_entry("ImportFromPhysicalId", "arn:aws:cloudformation:stack")
        .expect("distinct key")
        .r#type(ProvisioningArtifactType::CloudFormationTemplate)
        .build();
    let info = properties.info().expect("info set");
    assert_eq!(info.len(), 2);
    assert_eq!(
        info.get("LoadTemplateFromURL").map(String::as_str),
        Some("https://s3.amazonaws.com/bucket/template.json")
    );
}

#[test]
fn add_entry_with_enum_keys() {
    let builder = CreateServiceActionInput::builder()
        .name("restart")
        .definition_type(ServiceActionDefinitionType::SsmAutomation)
        .add_definition_entry(ServiceActionDefinitionKey::Name, "AWS-RestartEC2Instance")
        .expect("first entry")
        .add_definition_entry("Version", "1")
        .expect("second entry");
    let err = builder
        .clone()
        .add_definition_entry("Name", "Other")
        .expect_err("typed and literal keys collide");
    assert_eq!(err.key(), "Name");

    let input = builder.build();
    let definition = input.definition().expect("definition set");
    assert_eq!(
        definition.get(&ServiceActionDefinitionKey::Version).map(String::as_str),
        Some("1")
    );
}

#[test]
fn clear_entries_resets_member() {
    let input = SearchProductsInput::builder()
        .add_filters_entry(ProductViewFilterBy::FullTextSearch, vec!["ec2".to_string()])
        .expect("first entry")
        .clear_filters_entries()
        .build();
    assert_eq!(input.filters(), None);

    let input = SearchProductsInput::builder()
        .add_filters_entry(ProductViewFilterBy::Owner, vec!["me".to_string()])
        .expect("first entry")
        .clear_filters_entries()
        .add_filters_entry(ProductViewFilterBy::Owner, vec!["you".to_string()])
        .expect("cleared map accepts the key again")
        .build();
    let mut expected = HashMap::new();
    expected.insert(ProductViewFilterBy::Owner, vec!["you".to_string()]);
    assert_eq!(input.filters(), Some(&expected));
}

#[test]
fn set_replaces_whole_map() {
    let mut replacement = HashMap::new();
    replacement.insert("a".to_string(), "1".to_string());
    let properties = ProvisioningArtifactProperties::builder()
        .add_info_entry("b", "2")
        .expect("first entry")
        .set_info(Some(replacement.clone()))
        .build();
    assert_eq!(properties.info(), Some(&replacement));
}

#[test]
fn equal_shapes_hash_equal() {
    let a = Tag::builder().key("team").value("platform").build();
    let b = Tag::builder().key("team").value("platform").build();
    let c = Tag::builder().key("team").value("storage").build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);

    let plan = |name: &str| {
        CreateProvisionedProductPlanInput::builder()
            .plan_name(name)
            .tags(a.clone())
            .build()
    };
    assert_eq!(plan("p1"), plan("p1"));
    assert_eq!(hash_of(&plan("p1")), hash_of(&plan("p1")));
    assert_ne!(plan("p1"), plan("p2"));
}

#[test]
fn list_order_matters_for_equality() {
    let forward = CreateProvisionedProductPlanInput::builder()
        .notification_arns("arn:a")
        .notification_arns("arn:b")
        .build();
    let backward = CreateProvisionedProductPlanInput::builder()
        .notification_arns("arn:b")
        .notification_arns("arn:a")
        .build();
    assert_ne!(forward, backward);
}

#[test]
fn display_renders_present_members_only() {
    let input = CreateProvisionedProductPlanInput::builder()
        .plan_name("p1")
        .product_id("prod-1")
        .notification_arns("arn:a")
        .notification_arns("arn:b")
        .build();
    let rendered = input.to_string();
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("display is JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "PlanName": "p1",
            "ProductId": "prod-1",
            "NotificationArns": ["arn:a", "arn:b"],
        })
    );
    assert_eq!(CreateProvisionedProductPlanInput::builder().build().to_string(), "{}");
}

#[test]
fn debug_lists_every_member() {
    let tag = Tag::builder().key("team").build();
    let debug = format!("{:?}", tag);
    assert!(debug.contains("key: Some(\"team\")"), "{}", debug);
    assert!(debug.contains("value: None"), "{}", debug);
}

#[test]
fn clone_is_deep() {
    let original = Tag::builder().key("team").value("platform").build();
    let mut copy = original.clone();
    copy.value = Some("storage".to_string());
    assert_eq!(original.value(), Some("platform"));
    assert_eq!(copy.value(), Some("storage"));
}

#[test]
fn timestamps_compare_by_instant() {
    let detail = |seconds| {
        servicecatalog::model::PortfolioDetail::builder()
            .id("port-1")
            .created_time(Instant::from_epoch_seconds(seconds))
            .build()
    };
    assert_eq!(detail(1576540098), detail(1576540098));
    assert_ne!(detail(1576540098), detail(1576540099));
    assert_eq!(
        detail(1576540098).created_time(),
        Some(&Instant::from_epoch_seconds(1576540098))
    );
}
