/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This module defines types that describe when to retry given a response.

use std::time::Duration;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout or a request timeout reported
    /// by the service.
    TransientError,

    /// The server explicitly told the client to back off.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but should be retried.
    ServerError,

    /// Doesn't count against any budgets.
    ClientError,
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind` when the error is modeled as retryable.
    ///
    /// Unmodeled errors return `None`; callers then fall back to the error code and status.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum RetryKind {
    /// Retry due to a specific `ErrorKind`
    Error(ErrorKind),

    /// An explicit retry hint from the service (eg. `x-amz-retry-after`).
    ///
    /// The `Duration` is a suggestion and may be ignored by the caller.
    Explicit(Duration),

    /// This response should not be retried
    NotRetryable,
}
