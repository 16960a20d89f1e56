/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classifies failed responses so callers that dispatch requests can decide whether to retry.

use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry classifier that models AWS error codes.
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: [u16; 2] = [400, 408];
// `LimitExceededException` is a modeled quota error for Service Catalog, not throttling.
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }

    pub fn classify<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        };
        if let Some(code) = err.code() {
            if THROTTLING_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        };
        if TRANSIENT_ERROR_STATUS_CODES.contains(&response.status().as_u16()) {
            return RetryKind::Error(ErrorKind::TransientError);
        };
        RetryKind::NotRetryable
    }
}

#[cfg(test)]
mod test {
    use super::AwsErrorRetryPolicy;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    struct UnmodeledError;

    struct CodedError {
        code: &'static str,
    }

    struct ModeledRetries;

    impl ProvideErrorKind for UnmodeledError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    impl ProvideErrorKind for CodedError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.code)
        }
    }

    impl ProvideErrorKind for ModeledRetries {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            Some(ErrorKind::ClientError)
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn not_an_error() {
        let policy = AwsErrorRetryPolicy::new();
        let test_response = http::Response::new("OK");
        assert_eq!(
            policy.classify(&UnmodeledError, &test_response),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_by_response_status() {
        let policy = AwsErrorRetryPolicy::new();
        let test_resp = http::Response::builder()
            .status(408)
            .body("error!")
            .unwrap();
        assert_eq!(
            policy.classify(&UnmodeledError, &test_resp),
            RetryKind::Error(ErrorKind::TransientError)
        );
    }

    #[test]
    fn classify_by_error_code() {
        let test_response = http::Response::new("OK");
        let policy = AwsErrorRetryPolicy::new();

        assert_eq!(
            policy.classify(&CodedError { code: "Throttling" }, &test_response),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            policy.classify(
                &CodedError {
                    code: "RequestTimeout"
                },
                &test_response,
            ),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(
            policy.classify(
                &CodedError {
                    code: "LimitExceededException"
                },
                &test_response,
            ),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_generic() {
        let policy = AwsErrorRetryPolicy::new();
        let err = crate::error::ListPortfoliosError::generic(
            crate::error::GenericError::builder()
                .code("ThrottlingException")
                .build(),
        );
        let test_response = http::Response::builder().status(400).body("").unwrap();
        assert_eq!(
            policy.classify(&err, &test_response),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn test_retry_after_header() {
        let policy = AwsErrorRetryPolicy::new();
        let test_response = http::Response::builder()
            .header("x-amz-retry-after", "5000")
            .body("retry later")
            .unwrap();

        assert_eq!(
            policy.classify(&UnmodeledError, &test_response),
            RetryKind::Explicit(Duration::from_millis(5000))
        );
    }

    #[test]
    fn modeled_kind_beats_code() {
        let policy = AwsErrorRetryPolicy::new();
        let test_response = http::Response::builder().status(408).body("").unwrap();
        assert_eq!(
            policy.classify(&ModeledRetries, &test_response),
            RetryKind::Error(ErrorKind::ClientError)
        );
    }
}
