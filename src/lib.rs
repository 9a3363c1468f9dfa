pub mod client;
pub mod config;
pub mod error;
pub mod index;
pub mod mapper;
pub mod models;

pub use client::Client;
pub use error::{Error, Result};
pub use index::PackageList;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "thunderstore_client=info".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
