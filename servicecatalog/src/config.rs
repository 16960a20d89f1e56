/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

const REGION_ENV_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];

/// The region to send requests to.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Service configuration used when building requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    region: Option<Region>,
    endpoint: Option<String>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Self {
        Self::from_env_fn(|key| std::env::var(key).ok())
    }

    fn from_env_fn(env: impl Fn(&str) -> Option<String>) -> Self {
        let region = REGION_ENV_VARS
            .iter()
            .filter_map(|key| env(key))
            .find(|value| !value.trim().is_empty())
            .map(Region::new);
        tracing::debug!(region = ?region, "loaded region from the environment");
        Config {
            region,
            endpoint: None,
        }
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The endpoint override, if one was configured.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Default Service Catalog endpoint for `region`.
    pub fn endpoint_for_region(region: &Region) -> String {
        let suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        format!("https://servicecatalog.{}.{}", region, suffix)
    }

    /// The endpoint requests are sent to: the override when set, otherwise the
    /// regional endpoint. `None` when neither a region nor an endpoint is configured.
    pub fn resolve_endpoint(&self) -> Option<Cow<'_, str>> {
        match (&self.endpoint, &self.region) {
            (Some(endpoint), _) => Some(Cow::Borrowed(endpoint.as_str())),
            (None, Some(region)) => Some(Cow::Owned(Self::endpoint_for_region(region))),
            (None, None) => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<String>,
}

impl Builder {
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Overrides the regional endpoint, e.g. `http://localhost:8080`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn set_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self.endpoint,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Config, Region};
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn region_env_precedence() {
        let config = Config::from_env_fn(env(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(config.region(), Some(&Region::new("us-west-2")));

        let config = Config::from_env_fn(env(&[("AWS_DEFAULT_REGION", "eu-west-1")]));
        assert_eq!(config.region(), Some(&Region::new("eu-west-1")));

        let config = Config::from_env_fn(env(&[("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "eu-west-1")]));
        assert_eq!(config.region(), Some(&Region::new("eu-west-1")));

        assert_eq!(Config::from_env_fn(env(&[])).region(), None);
    }

    #[test]
    fn regional_endpoints() {
        let config = Config::builder()
            .region(Region::from_static("us-east-1"))
            .build();
        assert_eq!(
            config.resolve_endpoint().as_deref(),
            Some("https://servicecatalog.us-east-1.amazonaws.com")
        );
        assert_eq!(
            Config::endpoint_for_region(&Region::new("cn-north-1")),
            "https://servicecatalog.cn-north-1.amazonaws.com.cn"
        );
    }

    #[test]
    fn endpoint_override_wins() {
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .endpoint("http://localhost:8080")
            .build();
        assert_eq!(config.resolve_endpoint().as_deref(), Some("http://localhost:8080"));
        assert_eq!(Config::default().resolve_endpoint(), None);
    }
}
