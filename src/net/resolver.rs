use async_trait::async_trait;
use log::info;

use super::NetError;
use super::github::{self, Release};
use super::scrape;
use crate::core::catalog::VersionSource;
use crate::core::placeholder::Placeholder;

/// Base URLs of every site the resolver talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub github_api: String,
    pub github_web: String,
    pub ubuntu: String,
    pub pop_os_api: String,
    pub mint: String,
    pub artix: String,
    /// Directory the Artix ISO names are relative to.
    pub artix_iso: String,
    pub solus: String,
    pub debian: String,
    pub endeavour: String,
    pub cachy: String,
    pub ghost_spectre: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            github_api: String::from("https://api.github.com"),
            github_web: String::from("https://github.com"),
            ubuntu: String::from("https://releases.ubuntu.com/"),
            pop_os_api: String::from("https://api.pop-os.org"),
            mint: String::from("https://linuxmint.com/download.php"),
            artix: String::from("https://artixlinux.org/download.php"),
            artix_iso: String::from("https://iso.artixlinux.org/iso"),
            solus: String::from("https://getsol.us/download/"),
            debian: String::from("https://www.debian.org/download"),
            endeavour: String::from("https://mirror.moson.org/endeavouros/iso/"),
            cachy: String::from("https://cachyos.org/download/"),
            ghost_spectre: String::from("https://ghostclouds.xyz/wp/w10-pro-aio-x64/"),
        }
    }
}

impl Endpoints {
    /// Every endpoint under one host, for pointing at a mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            github_api: base.to_string(),
            github_web: base.to_string(),
            ubuntu: format!("{base}/ubuntu/"),
            pop_os_api: format!("{base}/pop"),
            mint: format!("{base}/mint/download.php"),
            artix: format!("{base}/artix/download.php"),
            artix_iso: format!("{base}/artix/iso"),
            solus: format!("{base}/solus/download/"),
            debian: format!("{base}/debian/download"),
            endeavour: format!("{base}/endeavour/iso/"),
            cachy: format!("{base}/cachy/download/"),
            ghost_spectre: format!("{base}/ghost/w10-pro-aio-x64/"),
        }
    }
}

/// Network lookups the state machine asks for through effects.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Normalized latest version of a GitHub-released tool.
    async fn latest_version(&self, source: &VersionSource) -> Result<String, NetError>;

    /// Final URL for a link template carrying `placeholder`.
    async fn expand(&self, placeholder: &Placeholder, template: &str) -> Result<String, NetError>;

    /// A release newer than `current`, if one exists.
    async fn latest_release(&self, current: &str) -> Result<Option<Release>, NetError>;
}

pub struct WebResolver {
    client: reqwest::Client,
    endpoints: Endpoints,
    release_repo: String,
}

impl WebResolver {
    pub fn new(client: reqwest::Client, endpoints: Endpoints, release_repo: &str) -> Self {
        Self {
            client,
            endpoints,
            release_repo: release_repo.to_string(),
        }
    }

    async fn scrape(&self, placeholder: &Placeholder) -> Result<String, NetError> {
        let (client, ep) = (&self.client, &self.endpoints);
        match placeholder {
            Placeholder::UbuntuVersion => scrape::fetch_ubuntu(client, ep).await,
            Placeholder::PopOs { build } => scrape::fetch_pop_os(client, ep, build).await,
            Placeholder::MintVersion => scrape::fetch_mint(client, ep).await,
            Placeholder::Artix { edition } => scrape::fetch_artix(client, ep, edition).await,
            Placeholder::Solus { edition } => scrape::fetch_solus(client, ep, edition).await,
            Placeholder::Debian => scrape::fetch_debian(client, ep).await,
            Placeholder::Endeavour => scrape::fetch_endeavour(client, ep).await,
            Placeholder::CachyVersion => scrape::fetch_cachy(client, ep).await,
            Placeholder::GhostSpectre => scrape::fetch_ghost_spectre(client, ep).await,
        }
    }
}

#[async_trait]
impl Resolver for WebResolver {
    async fn latest_version(&self, source: &VersionSource) -> Result<String, NetError> {
        let tag = github::latest_tag(&self.client, &self.endpoints.github_api, &source.repo).await?;
        Ok(source.normalize(&tag))
    }

    async fn expand(&self, placeholder: &Placeholder, template: &str) -> Result<String, NetError> {
        let value = self.scrape(placeholder).await?;
        info!("Resolved {} to {}", placeholder.label(), value);
        Ok(placeholder.apply(template, &value))
    }

    async fn latest_release(&self, current: &str) -> Result<Option<Release>, NetError> {
        github::check_for_update(
            &self.client,
            &self.endpoints.github_api,
            &self.endpoints.github_web,
            &self.release_repo,
            current,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_keeps_paths_distinct() {
        let ep = Endpoints::with_base("http://127.0.0.1:9000/");
        assert_eq!(ep.github_api, "http://127.0.0.1:9000");
        assert_eq!(ep.debian, "http://127.0.0.1:9000/debian/download");
        assert_ne!(ep.mint, ep.artix);
    }

    #[test]
    fn test_default_endpoints_are_https() {
        let ep = Endpoints::default();
        for url in [&ep.github_api, &ep.ubuntu, &ep.pop_os_api, &ep.endeavour, &ep.cachy] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
