/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error metadata shared by every operation error: the service's error code,
/// message and request id, as far as the response carried them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericError {
    message: Option<String>,
    code: Option<String>,
    request_id: Option<String>,
}

impl GenericError {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The sanitized error code, e.g. `ResourceNotFoundException`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Builder {
    inner: GenericError,
}

impl Builder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn set_message(mut self, message: Option<String>) -> Self {
        self.inner.message = message;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn set_code(mut self, code: Option<String>) -> Self {
        self.inner.code = code;
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn set_request_id(mut self, request_id: Option<String>) -> Self {
        self.inner.request_id = request_id;
        self
    }

    pub fn build(self) -> GenericError {
        self.inner
    }
}

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GenericError")?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for GenericError {}

#[cfg(test)]
mod test {
    use super::GenericError;

    #[test]
    fn display_includes_code_and_message() {
        let err = GenericError::builder()
            .code("ThrottlingException")
            .message("Rate exceeded")
            .request_id("req-1")
            .build();
        assert_eq!(
            err.to_string(),
            "GenericError [ThrottlingException]: Rate exceeded"
        );
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(GenericError::default().to_string(), "GenericError");
    }
}
