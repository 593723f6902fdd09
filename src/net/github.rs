//! GitHub release lookups and version comparison.

use log::{debug, info, warn};
use semver::{Prerelease, Version};
use serde::Deserialize;
use std::cmp::Ordering;

use super::NetError;
use super::client::PAGE_TIMEOUT;

/// A newer XToolBox release offered by the update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Tag with any leading `v` removed.
    pub version: String,
    pub download_url: String,
}

#[derive(Deserialize, Debug)]
struct ReleaseResponse {
    tag_name: String,
}

async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, NetError> {
    debug!("GET {}", url);
    let response = client
        .get(url)
        .header("Accept", "application/vnd.github+json")
        .timeout(PAGE_TIMEOUT)
        .send()
        .await
        .map_err(|e| NetError::Network(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        warn!("GitHub API error: {} from {}", status, url);
        return Err(NetError::Api {
            status,
            url: url.to_string(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| NetError::Parse(e.to_string()))
}

/// Tag of the release GitHub marks as latest for `repo` (`owner/name`).
pub async fn latest_tag(
    client: &reqwest::Client,
    api_base: &str,
    repo: &str,
) -> Result<String, NetError> {
    let url = format!("{api_base}/repos/{repo}/releases/latest");
    let release: ReleaseResponse = get_json(client, &url).await?;
    info!("Latest release of {} is {}", repo, release.tag_name);
    Ok(release.tag_name)
}

/// Tag of the most recently published release, prereleases included.
pub async fn newest_tag(
    client: &reqwest::Client,
    api_base: &str,
    repo: &str,
) -> Result<String, NetError> {
    let url = format!("{api_base}/repos/{repo}/releases");
    let releases: Vec<ReleaseResponse> = get_json(client, &url).await?;
    releases
        .into_iter()
        .next()
        .map(|r| r.tag_name)
        .ok_or_else(|| NetError::NotFound(format!("no releases for {repo}")))
}

/// Asset URL of the self-updating executable.
pub fn update_url(web_base: &str, repo: &str) -> String {
    format!("{web_base}/{repo}/releases/latest/download/XTBox.exe")
}

/// Checks `repo` for a release newer than `current`.
pub async fn check_for_update(
    client: &reqwest::Client,
    api_base: &str,
    web_base: &str,
    repo: &str,
    current: &str,
) -> Result<Option<Release>, NetError> {
    info!("Checking for updates...");
    let tag = newest_tag(client, api_base, repo).await?;
    let version = strip_v(&tag).to_string();
    if is_newer(current, &version) {
        Ok(Some(Release {
            version,
            download_url: update_url(web_base, repo),
        }))
    } else {
        Ok(None)
    }
}

fn strip_v(tag: &str) -> &str {
    tag.trim().trim_start_matches(['v', 'V'])
}

/// Parses `1`, `1.2`, `v1.2.3`, `24.04` or `1.2-beta` into a semver
/// `Version`, padding missing components with 0. Anything with more than
/// three numeric components, or non-numeric ones, yields `None`.
pub fn parse_version(text: &str) -> Option<Version> {
    let text = strip_v(text);
    let (numbers, pre) = match text.find(['-', '+']) {
        Some(i) => (&text[..i], text[i + 1..].trim()),
        None => (text, ""),
    };

    let parts = numbers
        .split('.')
        .map(|p| p.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut version = Version::new(
        parts[0],
        parts.get(1).copied().unwrap_or(0),
        parts.get(2).copied().unwrap_or(0),
    );
    if !pre.is_empty() {
        version.pre = Prerelease::new(pre).ok()?;
    }
    Some(version)
}

/// Orders two version strings numerically when both parse, otherwise as
/// plain strings.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => strip_v(a).cmp(strip_v(b)),
    }
}

pub fn is_newer(current: &str, candidate: &str) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}
