use crate::mapper::{self, FromObject};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One published package in a community's listing.
///
/// Every scalar field is optional: a key the registry omitted from the
/// response stays `None` rather than taking a fabricated default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageListing {
    /// Display name
    pub name: Option<String>,
    /// `{owner}-{name}` key, unique within a community
    pub full_name: Option<String>,
    /// Team or user that published the package
    pub owner: Option<String>,
    /// Canonical page URL on the registry
    pub package_url: Option<String>,
    pub donation_link: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    /// Server-assigned opaque identifier
    pub uuid4: Option<String>,
    pub rating_score: Option<u64>,
    pub is_pinned: Option<bool>,
    pub is_deprecated: Option<bool>,
    pub has_nsfw_content: Option<bool>,
    pub categories: Vec<String>,
    /// Releases, newest first as returned by the API. Left empty by the
    /// mapper; `Client::fetch_package_list` fills it in a second pass.
    pub versions: Vec<PackageVersion>,
}

/// One release of a package, owned by its parent listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageVersion {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Semantic version string, e.g. `1.0.0`
    pub version_number: Option<String>,
    /// Fully-qualified names of required packages
    pub dependencies: Vec<String>,
    pub download_url: Option<String>,
    pub downloads: Option<u64>,
    pub date_created: Option<String>,
    pub website_url: Option<String>,
    pub is_active: Option<bool>,
    pub uuid4: Option<String>,
}

impl FromObject for PackageListing {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            name: mapper::string_field(obj, "name"),
            full_name: mapper::string_field(obj, "full_name"),
            owner: mapper::string_field(obj, "owner"),
            package_url: mapper::string_field(obj, "package_url"),
            donation_link: mapper::string_field(obj, "donation_link"),
            date_created: mapper::string_field(obj, "date_created"),
            date_updated: mapper::string_field(obj, "date_updated"),
            uuid4: mapper::string_field(obj, "uuid4"),
            rating_score: mapper::u64_field(obj, "rating_score"),
            is_pinned: mapper::bool_field(obj, "is_pinned"),
            is_deprecated: mapper::bool_field(obj, "is_deprecated"),
            has_nsfw_content: mapper::bool_field(obj, "has_nsfw_content"),
            categories: mapper::string_list_field(obj, "categories"),
            versions: Vec::new(),
        }
    }
}

impl FromObject for PackageVersion {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            name: mapper::string_field(obj, "name"),
            full_name: mapper::string_field(obj, "full_name"),
            description: mapper::string_field(obj, "description"),
            icon: mapper::string_field(obj, "icon"),
            version_number: mapper::string_field(obj, "version_number"),
            dependencies: mapper::string_list_field(obj, "dependencies"),
            download_url: mapper::string_field(obj, "download_url"),
            downloads: mapper::u64_field(obj, "downloads"),
            date_created: mapper::string_field(obj, "date_created"),
            website_url: mapper::string_field(obj, "website_url"),
            is_active: mapper::bool_field(obj, "is_active"),
            uuid4: mapper::string_field(obj, "uuid4"),
        }
    }
}
