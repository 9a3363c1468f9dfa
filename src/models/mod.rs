pub mod metrics;
pub mod package;

pub use metrics::{PackageMetrics, PackageVersionMetrics};
pub use package::{PackageListing, PackageVersion};
