use crate::mapper::{self, FromObject};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Usage metrics for one package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageMetrics {
    pub downloads: Option<u64>,
    pub rating_score: Option<u64>,
    pub latest_version: Option<String>,
}

/// Usage metrics for one specific package version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageVersionMetrics {
    pub downloads: Option<u64>,
}

impl FromObject for PackageMetrics {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            downloads: mapper::u64_field(obj, "downloads"),
            rating_score: mapper::u64_field(obj, "rating_score"),
            latest_version: mapper::string_field(obj, "latest_version"),
        }
    }
}

impl FromObject for PackageVersionMetrics {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            downloads: mapper::u64_field(obj, "downloads"),
        }
    }
}
