//! Blocking HTTP client for the registry's public v1 API.
//!
//! One request per operation, no retries, no caching. Path segments are
//! substituted verbatim, so callers must pass URL-path-safe values.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::index::PackageList;
use crate::mapper::FromObject;
use crate::models::{PackageListing, PackageMetrics, PackageVersion, PackageVersionMetrics};
use reqwest::blocking;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Default timeout for HTTP requests (30 seconds)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default registry host
pub const DEFAULT_BASE_URL: &str = "https://thunderstore.io";

/// Registry API client. Each fetch blocks until the round trip completes and
/// returns a freshly built result; no state is shared between calls.
pub struct Client {
    http: blocking::Client,
    base_url: String,
}

impl Client {
    /// Client against the default registry host.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a specific registry host, with the default timeout.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::build(base_url, HTTP_TIMEOUT)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(
            &config.registry.base_url,
            Duration::from_secs(config.registry.timeout_secs),
        )
    }

    fn build(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every package published in a community.
    ///
    /// Listings are indexed in response order. Each listing's raw `versions`
    /// array is mapped into [`PackageVersion`] records in a second pass over
    /// the built index.
    pub fn fetch_package_list(&self, community: &str) -> Result<PackageList> {
        let url = format!("{}/c/{}/api/v1/package/", self.base_url, community);
        let body = self.get_json(&url)?;

        let items = match body {
            Value::Array(items) => items,
            _ => {
                return Err(Error::UnexpectedBody {
                    url,
                    msg: "expected a JSON array of packages".to_string(),
                });
            }
        };

        let mut list = PackageList::new();
        let mut raw_versions = Vec::with_capacity(items.len());
        for item in &items {
            let obj = item.as_object().ok_or_else(|| Error::UnexpectedBody {
                url: url.clone(),
                msg: "expected every package entry to be a JSON object".to_string(),
            })?;
            list.add(PackageListing::from_object(obj));
            raw_versions.push(obj.get("versions").and_then(Value::as_array));
        }

        for (package, raw) in list.iter_mut().zip(raw_versions) {
            if let Some(raw) = raw {
                package.versions = raw
                    .iter()
                    .filter_map(Value::as_object)
                    .map(PackageVersion::from_object)
                    .collect();
            }
        }

        info!(community, packages = list.len(), "fetched package list");
        Ok(list)
    }

    /// Download count, rating and latest version for one package.
    pub fn fetch_package_metrics(&self, namespace: &str, name: &str) -> Result<PackageMetrics> {
        let url = format!(
            "{}/api/v1/package-metrics/{}/{}/",
            self.base_url, namespace, name
        );
        let obj = self.get_json_object(&url)?;
        Ok(PackageMetrics::from_object(&obj))
    }

    /// Download count for one specific package version.
    pub fn fetch_package_version_metrics(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
    ) -> Result<PackageVersionMetrics> {
        let url = format!(
            "{}/api/v1/package-metrics/{}/{}/{}/",
            self.base_url, namespace, name, version
        );
        let obj = self.get_json_object(&url)?;
        Ok(PackageVersionMetrics::from_object(&obj))
    }

    fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn get_json_object(&self, url: &str) -> Result<serde_json::Map<String, Value>> {
        match self.get_json(url)? {
            Value::Object(obj) => Ok(obj),
            _ => Err(Error::UnexpectedBody {
                url: url.to_string(),
                msg: "expected a JSON object".to_string(),
            }),
        }
    }
}
