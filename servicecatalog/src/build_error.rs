/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use thiserror::Error;

/// Failure to turn an operation input into an HTTP request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("failed to serialize the request body: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("no region or endpoint was configured")]
    MissingEndpoint,
    #[error("invalid endpoint `{0}`")]
    InvalidEndpoint(String),
    #[error("failed to construct the HTTP request: {0}")]
    InvalidRequest(#[from] http::Error),
}

/// A map entry was added under a key the map already holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicated keys ({key}) are provided for `{member}`")]
pub struct DuplicateKeyError {
    member: &'static str,
    key: String,
}

impl DuplicateKeyError {
    pub fn new(member: &'static str, key: impl Into<String>) -> Self {
        DuplicateKeyError {
            member,
            key: key.into(),
        }
    }

    /// Name of the map member the entry was added to.
    pub fn member(&self) -> &str {
        self.member
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
