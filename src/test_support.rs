//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::catalog::VersionSource;
use crate::core::placeholder::Placeholder;
use crate::net::NetError;
use crate::net::github::Release;
use crate::net::resolver::Resolver;

/// A resolver for tests that never touch the network. Effects are
/// asserted on directly, so its answers are never awaited by the reducer.
pub struct NoopResolver;

#[async_trait]
impl Resolver for NoopResolver {
    async fn latest_version(&self, _source: &VersionSource) -> Result<String, NetError> {
        Err(NetError::NotFound("noop".to_string()))
    }

    async fn expand(&self, placeholder: &Placeholder, template: &str) -> Result<String, NetError> {
        Ok(placeholder.apply(template, "noop"))
    }

    async fn latest_release(&self, _current: &str) -> Result<Option<Release>, NetError> {
        Ok(None)
    }
}

/// Creates a test App with a NoopResolver, downloading into `downloads/`.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopResolver), PathBuf::from("downloads"))
}
