//! # Distro Scrapers
//!
//! Each supported site has a pure `parse_*` function that reads the page
//! HTML (testable offline on captured fixtures) and an async `fetch_*`
//! wrapper that downloads the page and calls it.
//!
//! | Placeholder       | Page read                         | Result                 |
//! |-------------------|-----------------------------------|------------------------|
//! | `%UBUNTUVERSION%` | releases.ubuntu.com               | highest version number |
//! | `%POP%,<build>`   | api.pop-os.org builds API (JSON)  | ISO URL                |
//! | `%MINTVERSION%`   | linuxmint.com/download.php        | version number         |
//! | `%ARTIX%,<ed>`    | artixlinux.org/download.php       | ISO URL                |
//! | `%SOLUS%,<ed>`    | getsol.us/download                | ISO URL                |
//! | `%DEBIAN%`        | debian.org/download               | netinst ISO URL        |
//! | `%ENDEAVOUR%`     | EndeavourOS mirror index          | newest ISO file name   |
//! | `%CACHYVERSION%`  | cachyos.org/download              | release number         |
//! | `%GHOSTSPECTRE%`  | four pages, see `fetch_ghost_spectre` | short link         |

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::NetError;
use super::client::PAGE_TIMEOUT;
use super::github::compare_versions;
use super::html;
use super::resolver::Endpoints;

/// Some sites serve an empty page to non-browser agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Pop!_OS release the builds API is queried for.
pub const POP_OS_RELEASE: &str = "22.04";

static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\d+\.*\d*").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)*").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4}\.\d{2}\.\d{2})").unwrap());
static CACHY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://cdn77\.cachyos\.org/ISO/handheld/([0-9]+)/").unwrap());
static PIXEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Pixel:[a-z|\\0-9]+http://(tinyurl\.com/[a-zA-Z0-9|]+) ").unwrap()
});

const MINT_HEADING_CLASS: &str = "font-weight-bold display-5 display-lg-4 mb-2 mb-md-n0 mt-title";
const GHOST_BUTTON_CLASS: &str = "wpdm-download-link download-on-click btn btn-primary";

fn missing(what: &str) -> NetError {
    NetError::NotFound(what.to_string())
}

// ============================================================================
// Parsers
// ============================================================================

/// Highest version number among the release links.
pub fn parse_ubuntu(page: &str) -> Result<String, NetError> {
    html::elements(page, "a")
        .iter()
        .filter(|a| a.has_class("p-link--inverted"))
        .flat_map(|a| {
            VERSION_RE
                .find_iter(&a.text)
                .map(|m| m.as_str().to_string())
                .collect::<Vec<_>>()
        })
        .max_by(|a, b| compare_versions(a, b))
        .ok_or_else(|| missing("Ubuntu release links"))
}

/// CPU architecture the Pop!_OS API expects for a build name.
pub fn pop_os_arch(build: &str) -> &'static str {
    if build == "raspi" { "arm64" } else { "amd64" }
}

#[derive(Deserialize, Debug)]
struct PopBuild {
    url: String,
}

pub fn parse_pop_os(body: &str) -> Result<String, NetError> {
    serde_json::from_str::<PopBuild>(body)
        .map(|b| b.url)
        .map_err(|e| NetError::Parse(e.to_string()))
}

/// First number in the download page heading.
pub fn parse_mint(page: &str) -> Result<String, NetError> {
    let heading = html::elements(page, "h1")
        .into_iter()
        .find(|h| h.has_class(MINT_HEADING_CLASS))
        .ok_or_else(|| missing("Linux Mint download heading"))?;
    NUMBER_RE
        .find(&heading.text)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| missing("Linux Mint version number"))
}

/// ISO URL of the OpenRC image for `edition` (e.g. `plasma`).
pub fn parse_artix(page: &str, edition: &str, iso_base: &str) -> Result<String, NetError> {
    html::elements(page, "td")
        .into_iter()
        .map(|td| td.text)
        .find(|name| name.ends_with(".iso") && name.contains("openrc") && name.contains(edition))
        .map(|name| format!("{}/{}", iso_base.trim_end_matches('/'), name))
        .ok_or_else(|| missing(&format!("Artix {edition} ISO")))
}

/// Download button whose link mentions `edition` (e.g. `GNOME`).
pub fn parse_solus(page: &str, edition: &str) -> Result<String, NetError> {
    html::elements(page, "a")
        .into_iter()
        .filter(|a| a.has_class("button"))
        .filter_map(|a| a.attrs.get("href").cloned())
        .find(|href| href.contains(edition))
        .ok_or_else(|| missing(&format!("Solus {edition} ISO")))
}

pub fn parse_debian(page: &str) -> Result<String, NetError> {
    html::hrefs(page)
        .into_iter()
        .find(|href| href.contains("amd64-netinst.iso"))
        .ok_or_else(|| missing("Debian netinst ISO"))
}

/// ISO in the mirror index with the newest `YYYY.MM.DD` date.
pub fn parse_endeavour(page: &str) -> Result<String, NetError> {
    html::hrefs(page)
        .into_iter()
        .filter(|href| href.ends_with(".iso"))
        .filter_map(|href| {
            let date = DATE_RE.captures(&href)?.get(1)?.as_str().to_string();
            Some((date, href))
        })
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, href)| href)
        .ok_or_else(|| missing("EndeavourOS ISO"))
}

pub fn parse_cachy(page: &str) -> Result<String, NetError> {
    CACHY_RE
        .captures(page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| missing("CachyOS release"))
}

/// Step 1: link to the download post of the Windows 10 AIO build.
pub fn parse_ghost_spectre_post(page: &str) -> Result<String, NetError> {
    html::hrefs(page)
        .into_iter()
        .find(|href| {
            (href.contains("w10") || href.contains("win10"))
                && href.contains("aio")
                && href.contains("download")
        })
        .ok_or_else(|| missing("Ghost Spectre download post"))
}

/// Step 2: the download button's `data-downloadurl`.
pub fn parse_ghost_spectre_button(page: &str) -> Result<String, NetError> {
    html::elements(page, "a")
        .into_iter()
        .find(|a| a.has_class(GHOST_BUTTON_CLASS))
        .and_then(|a| a.attrs.get("data-downloadurl").cloned())
        .ok_or_else(|| missing("Ghost Spectre download button"))
}

/// Step 3: the `og:url` the redirect page points at.
pub fn parse_og_url(page: &str) -> Result<String, NetError> {
    html::void_elements(page, "meta")
        .into_iter()
        .find(|m| m.attr("property") == Some("og:url"))
        .and_then(|m| m.attrs.get("content").cloned())
        .ok_or_else(|| missing("og:url"))
}

/// Step 4: the PixelDrain short link in the mirror document.
pub fn parse_pixeldrain_link(page: &str) -> Result<String, NetError> {
    PIXEL_RE
        .captures(page)
        .and_then(|c| c.get(1))
        .map(|m| format!("http://{}", m.as_str()))
        .ok_or_else(|| missing("Ghost Spectre mirror link"))
}

// ============================================================================
// Fetchers
// ============================================================================

async fn get_text(
    client: &reqwest::Client,
    url: &str,
    user_agent: Option<&str>,
) -> Result<String, NetError> {
    debug!("Scraping {}", url);
    let mut request = client.get(url).timeout(PAGE_TIMEOUT);
    if let Some(agent) = user_agent {
        request = request.header(reqwest::header::USER_AGENT, agent);
    }
    let response = request
        .send()
        .await
        .map_err(|e| NetError::Network(e.to_string()))?;
    if !response.status().is_success() {
        return Err(NetError::Api {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    response
        .text()
        .await
        .map_err(|e| NetError::Parse(e.to_string()))
}

pub async fn fetch_ubuntu(client: &reqwest::Client, ep: &Endpoints) -> Result<String, NetError> {
    parse_ubuntu(&get_text(client, &ep.ubuntu, None).await?)
}

pub async fn fetch_pop_os(
    client: &reqwest::Client,
    ep: &Endpoints,
    build: &str,
) -> Result<String, NetError> {
    let url = format!(
        "{}/builds/{}/{}?arch={}",
        ep.pop_os_api,
        POP_OS_RELEASE,
        build,
        pop_os_arch(build)
    );
    parse_pop_os(&get_text(client, &url, None).await?)
}

pub async fn fetch_mint(client: &reqwest::Client, ep: &Endpoints) -> Result<String, NetError> {
    parse_mint(&get_text(client, &ep.mint, None).await?)
}

pub async fn fetch_artix(
    client: &reqwest::Client,
    ep: &Endpoints,
    edition: &str,
) -> Result<String, NetError> {
    parse_artix(&get_text(client, &ep.artix, None).await?, edition, &ep.artix_iso)
}

pub async fn fetch_solus(
    client: &reqwest::Client,
    ep: &Endpoints,
    edition: &str,
) -> Result<String, NetError> {
    parse_solus(&get_text(client, &ep.solus, None).await?, edition)
}

pub async fn fetch_debian(client: &reqwest::Client, ep: &Endpoints) -> Result<String, NetError> {
    parse_debian(&get_text(client, &ep.debian, None).await?)
}

pub async fn fetch_endeavour(client: &reqwest::Client, ep: &Endpoints) -> Result<String, NetError> {
    parse_endeavour(&get_text(client, &ep.endeavour, None).await?)
}

pub async fn fetch_cachy(client: &reqwest::Client, ep: &Endpoints) -> Result<String, NetError> {
    parse_cachy(&get_text(client, &ep.cachy, Some(BROWSER_USER_AGENT)).await?)
}

/// Follows the four-page chain from the Ghost Spectre post to its
/// PixelDrain short link.
pub async fn fetch_ghost_spectre(
    client: &reqwest::Client,
    ep: &Endpoints,
) -> Result<String, NetError> {
    let post = parse_ghost_spectre_post(&get_text(client, &ep.ghost_spectre, None).await?)?;
    let button = parse_ghost_spectre_button(&get_text(client, &post, None).await?)?;
    let docs = parse_og_url(&get_text(client, &button, Some(BROWSER_USER_AGENT)).await?)?;
    let link = parse_pixeldrain_link(&get_text(client, &docs, Some(BROWSER_USER_AGENT)).await?)?;
    info!("Ghost Spectre mirror resolved to {}", link);
    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UBUNTU_PAGE: &str = r#"
        <ul>
          <li><a class="p-link--inverted" href="/noble/">Ubuntu 24.04.1 LTS (Noble Numbat)</a></li>
          <li><a class="p-link--inverted" href="/jammy/">Ubuntu 22.04.5 LTS (Jammy Jellyfish)</a></li>
          <li><a class="p-link--inverted" href="/oracular/">Ubuntu 24.10 (Oracular Oriole)</a></li>
          <li><a class="p-link" href="/releases/">Ubuntu 99.04 (not a release link)</a></li>
        </ul>"#;

    #[test]
    fn test_parse_ubuntu_picks_highest_version() {
        assert_eq!(parse_ubuntu(UBUNTU_PAGE).unwrap(), "24.10");
    }

    #[test]
    fn test_parse_ubuntu_without_links() {
        assert!(matches!(parse_ubuntu("<html></html>"), Err(NetError::NotFound(_))));
    }

    #[test]
    fn test_pop_os() {
        assert_eq!(pop_os_arch("raspi"), "arm64");
        assert_eq!(pop_os_arch("nvidia"), "amd64");
        let body = r#"{"build":"3","url":"https://iso.pop-os.org/22.04/amd64/nvidia/3/pop-os.iso","size":123}"#;
        assert_eq!(
            parse_pop_os(body).unwrap(),
            "https://iso.pop-os.org/22.04/amd64/nvidia/3/pop-os.iso"
        );
        assert!(matches!(parse_pop_os("not json"), Err(NetError::Parse(_))));
    }

    #[test]
    fn test_parse_mint() {
        let page = r#"<h1 class="other">Download 99</h1>
            <h1 class="font-weight-bold display-5 display-lg-4 mb-2 mb-md-n0 mt-title">Linux Mint 22 "Wilma"</h1>"#;
        assert_eq!(parse_mint(page).unwrap(), "22");
    }

    #[test]
    fn test_parse_artix() {
        let page = r#"<table>
            <tr><td>artix-plasma-runit-20240701-x86_64.iso</td></tr>
            <tr><td>artix-plasma-openrc-20240701-x86_64.iso</td></tr>
            <tr><td>artix-xfce-openrc-20240701-x86_64.iso</td></tr>
            <tr><td>artix-xfce-openrc-20240701-x86_64.iso.sig</td></tr>
        </table>"#;
        assert_eq!(
            parse_artix(page, "xfce", "https://iso.artixlinux.org/iso").unwrap(),
            "https://iso.artixlinux.org/iso/artix-xfce-openrc-20240701-x86_64.iso"
        );
        assert_eq!(
            parse_artix(page, "plasma", "https://iso.artixlinux.org/iso/").unwrap(),
            "https://iso.artixlinux.org/iso/artix-plasma-openrc-20240701-x86_64.iso"
        );
        assert!(parse_artix(page, "cinnamon", "x").is_err());
    }

    #[test]
    fn test_parse_solus() {
        let page = r#"
            <a class="nav" href="https://cdn.getsol.us/isos/Solus-GNOME-Release.iso">nav</a>
            <a class="button primary" href="https://cdn.getsol.us/isos/Solus-Budgie-Release-2024.iso">Budgie</a>
            <a class="button" href="https://cdn.getsol.us/isos/Solus-GNOME-Release-2024.iso">GNOME</a>"#;
        assert_eq!(
            parse_solus(page, "GNOME").unwrap(),
            "https://cdn.getsol.us/isos/Solus-GNOME-Release-2024.iso"
        );
        assert_eq!(
            parse_solus(page, "Budgie").unwrap(),
            "https://cdn.getsol.us/isos/Solus-Budgie-Release-2024.iso"
        );
    }

    #[test]
    fn test_parse_debian() {
        let page = r#"<a href="/CD/">CD</a>
            <a href="https://cdimage.debian.org/debian-cd/current/amd64/iso-cd/debian-12.7.0-amd64-netinst.iso">64-bit PC netinst iso</a>"#;
        assert_eq!(
            parse_debian(page).unwrap(),
            "https://cdimage.debian.org/debian-cd/current/amd64/iso-cd/debian-12.7.0-amd64-netinst.iso"
        );
    }

    #[test]
    fn test_parse_endeavour_picks_newest_iso() {
        let page = r#"<pre>
            <a href="../">../</a>
            <a href="EndeavourOS_Endeavour-2024.01.25.iso">EndeavourOS_Endeavour-2024.01.25.iso</a>
            <a href="EndeavourOS_Endeavour-2024.06.25.iso.sha512sum">sum</a>
            <a href="EndeavourOS_Endeavour-2024.06.25.iso">EndeavourOS_Endeavour-2024.06.25.iso</a>
            <a href="EndeavourOS_Cassini_Nova-03-2023_R1.iso">old</a>
        </pre>"#;
        assert_eq!(
            parse_endeavour(page).unwrap(),
            "EndeavourOS_Endeavour-2024.06.25.iso"
        );
    }

    #[test]
    fn test_parse_cachy() {
        let page = r#"{"handheld":"https://cdn77.cachyos.org/ISO/handheld/241003/cachyos-handheld-linux-241003.iso"}"#;
        assert_eq!(parse_cachy(page).unwrap(), "241003");
        assert!(parse_cachy("nothing here").is_err());
    }

    #[test]
    fn test_ghost_spectre_chain_parsers() {
        let post = r#"<a href="https://ghostclouds.xyz/wp/about/">About</a>
            <a href="https://ghostclouds.xyz/wp/download/w10-pro-aio-x64-22h2/">Download</a>"#;
        assert_eq!(
            parse_ghost_spectre_post(post).unwrap(),
            "https://ghostclouds.xyz/wp/download/w10-pro-aio-x64-22h2/"
        );

        let button = r#"<a class="wpdm-download-link download-on-click btn btn-primary" rel="nofollow" data-downloadurl="https://ghostclouds.xyz/wp/download/w10?wpdmdl=1">Download</a>"#;
        assert_eq!(
            parse_ghost_spectre_button(button).unwrap(),
            "https://ghostclouds.xyz/wp/download/w10?wpdmdl=1"
        );

        let redirect = r#"<meta property="og:url" content="https://docs.google.com/document/d/abc/edit">"#;
        assert_eq!(
            parse_og_url(redirect).unwrap(),
            "https://docs.google.com/document/d/abc/edit"
        );

        // The document JSON escapes `=` as \u003d
        let doc = r#"Mirrors: Pixel:\u003d12http://tinyurl.com/GhostSpectreW10 more"#;
        assert_eq!(
            parse_pixeldrain_link(doc).unwrap(),
            "http://tinyurl.com/GhostSpectreW10"
        );
    }

    #[test]
    fn test_pixeldrain_link_missing() {
        let doc = r#"Mirrors: Mega:http://tinyurl.com/GhostSpectreW10 more"#;
        assert!(matches!(
            parse_pixeldrain_link(doc),
            Err(NetError::NotFound(_))
        ));
    }
}
