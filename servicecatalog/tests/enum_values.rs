/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use servicecatalog::model::{
    AccessLevelFilterKey, ChangeAction, ProvisionedProductStatus, ProvisioningArtifactType,
    Replacement, ServiceActionAssociationErrorCode, Status,
};
use std::str::FromStr;

#[test]
fn known_values_roundtrip() {
    for value in ProvisioningArtifactType::values() {
        let parsed = ProvisioningArtifactType::from(*value);
        assert!(!matches!(parsed, ProvisioningArtifactType::Unknown(_)), "{}", value);
        assert_eq!(parsed.as_str(), *value);
    }
    assert_eq!(
        ProvisioningArtifactType::from("MARKETPLACE_AMI"),
        ProvisioningArtifactType::MarketplaceAmi
    );
    assert_eq!(Replacement::from("TRUE"), Replacement::True);
    assert_eq!(AccessLevelFilterKey::from("Account"), AccessLevelFilterKey::Account);
    assert_eq!(
        ServiceActionAssociationErrorCode::from("DUPLICATE_RESOURCE"),
        ServiceActionAssociationErrorCode::DuplicateResource
    );
}

#[test]
fn values_are_case_sensitive() {
    assert_eq!(
        Status::from("available"),
        Status::Unknown("available".to_string())
    );
    assert_eq!(Status::from("AVAILABLE"), Status::Available);
}

#[test]
fn display_and_serde_use_the_wire_value() {
    assert_eq!(ChangeAction::Modify.to_string(), "MODIFY");
    assert_eq!(
        serde_json::to_string(&ProvisionedProductStatus::UnderChange).unwrap(),
        "\"UNDER_CHANGE\""
    );
    let parsed: ProvisionedProductStatus = serde_json::from_str("\"PLAN_IN_PROGRESS\"").unwrap();
    assert_eq!(parsed, ProvisionedProductStatus::PlanInProgress);
}

proptest! {
    #[test]
    fn any_string_roundtrips(value in ".*") {
        let parsed = ProvisionedProductStatus::from_str(&value).unwrap();
        prop_assert_eq!(parsed.as_str(), value.as_str());
        let json = serde_json::to_string(&parsed).unwrap();
        let back: ProvisionedProductStatus = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, parsed);
    }

    #[test]
    fn unknown_values_stay_unknown(value in "[a-z]{1,12}") {
        prop_assert_eq!(Replacement::from(value.as_str()), Replacement::Unknown(value.clone()));
    }
}
