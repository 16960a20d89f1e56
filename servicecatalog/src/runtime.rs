/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;

/// `ParseStrictResponse` parses a fully loaded HTTP response into the operation's output.
///
/// Service Catalog never streams, so every response is read to the end before parsing.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output;
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
}

/// An unsigned HTTP request paired with the handler that parses its response.
///
/// Dispatching the request is up to the caller.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<Bytes>,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<Bytes>, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts { response_handler },
        }
    }

    pub fn request(&self) -> &http::Request<Bytes> {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut http::Request<Bytes> {
        &mut self.request
    }

    pub fn handler(&self) -> &H {
        &self.parts.response_handler
    }

    pub fn into_request_response(self) -> (http::Request<Bytes>, Parts<H>) {
        (self.request, self.parts)
    }
}

impl<H: ParseStrictResponse> Operation<H> {
    /// Parses `response` with this operation's handler.
    pub fn parse_response(&self, response: &http::Response<Bytes>) -> H::Output {
        self.parts.response_handler.parse(response)
    }
}
