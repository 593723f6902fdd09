//! # URL Placeholders
//!
//! Some catalog URLs cannot be pinned because the distribution renames its
//! images on every release. Those URLs carry a `%TOKEN%` that is resolved by
//! scraping the project's site right before the action runs.
//!
//! Two shapes exist:
//!
//! - **Inline**: `.../%MINTVERSION%/linuxmint-%MINTVERSION%-mate-64bit.iso`,
//!   the scraped value replaces every occurrence of the token.
//! - **Whole URL**: `%POP%,nvidia`, the scraped value *is* the URL and the
//!   text after the comma selects the variant.

const UBUNTU: &str = "%UBUNTUVERSION%";
const POP: &str = "%POP%";
const MINT: &str = "%MINTVERSION%";
const ARTIX: &str = "%ARTIX%";
const SOLUS: &str = "%SOLUS%";
const DEBIAN: &str = "%DEBIAN%";
const ENDEAVOUR: &str = "%ENDEAVOUR%";
const CACHY: &str = "%CACHYVERSION%";
const GHOST_SPECTRE: &str = "%GHOSTSPECTRE%";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    UbuntuVersion,
    PopOs { build: String },
    MintVersion,
    Artix { edition: String },
    Solus { edition: String },
    Debian,
    Endeavour,
    CachyVersion,
    GhostSpectre,
}

/// Text after the first comma of a whole-URL template.
fn variant(url: &str) -> String {
    url.split(',').nth(1).unwrap_or("").trim().to_string()
}

impl Placeholder {
    /// Finds the placeholder in `url`. Tokens are checked in a fixed order
    /// and the first match wins.
    pub fn detect(url: &str) -> Option<Placeholder> {
        if url.contains(UBUNTU) {
            Some(Placeholder::UbuntuVersion)
        } else if url.contains(POP) {
            Some(Placeholder::PopOs { build: variant(url) })
        } else if url.contains(MINT) {
            Some(Placeholder::MintVersion)
        } else if url.contains(ARTIX) {
            Some(Placeholder::Artix { edition: variant(url) })
        } else if url.contains(SOLUS) {
            Some(Placeholder::Solus { edition: variant(url) })
        } else if url.contains(DEBIAN) {
            Some(Placeholder::Debian)
        } else if url.contains(ENDEAVOUR) {
            Some(Placeholder::Endeavour)
        } else if url.contains(CACHY) {
            Some(Placeholder::CachyVersion)
        } else if url.contains(GHOST_SPECTRE) {
            Some(Placeholder::GhostSpectre)
        } else {
            None
        }
    }

    fn token(&self) -> &'static str {
        match self {
            Placeholder::UbuntuVersion => UBUNTU,
            Placeholder::PopOs { .. } => POP,
            Placeholder::MintVersion => MINT,
            Placeholder::Artix { .. } => ARTIX,
            Placeholder::Solus { .. } => SOLUS,
            Placeholder::Debian => DEBIAN,
            Placeholder::Endeavour => ENDEAVOUR,
            Placeholder::CachyVersion => CACHY,
            Placeholder::GhostSpectre => GHOST_SPECTRE,
        }
    }

    /// True when the resolved value replaces the whole URL.
    pub fn is_whole_url(&self) -> bool {
        !matches!(
            self,
            Placeholder::UbuntuVersion
                | Placeholder::MintVersion
                | Placeholder::Endeavour
                | Placeholder::CachyVersion
        )
    }

    /// Builds the final URL from the template and the scraped value.
    pub fn apply(&self, url: &str, value: &str) -> String {
        if self.is_whole_url() {
            value.to_string()
        } else {
            url.replace(self.token(), value)
        }
    }

    /// Human-readable name for status messages.
    pub fn label(&self) -> &'static str {
        match self {
            Placeholder::UbuntuVersion => "Ubuntu release",
            Placeholder::PopOs { .. } => "Pop!_OS build",
            Placeholder::MintVersion => "Linux Mint release",
            Placeholder::Artix { .. } => "Artix ISO",
            Placeholder::Solus { .. } => "Solus ISO",
            Placeholder::Debian => "Debian netinst ISO",
            Placeholder::Endeavour => "EndeavourOS ISO",
            Placeholder::CachyVersion => "CachyOS release",
            Placeholder::GhostSpectre => "Ghost Spectre mirror",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_inline_tokens() {
        let mint = "https://m/iso/stable/%MINTVERSION%/linuxmint-%MINTVERSION%-mate-64bit.iso";
        assert_eq!(Placeholder::detect(mint), Some(Placeholder::MintVersion));
        assert_eq!(
            Placeholder::detect("https://m/%UBUNTUVERSION%/x"),
            Some(Placeholder::UbuntuVersion)
        );
        assert_eq!(
            Placeholder::detect("https://mirror/iso/%ENDEAVOUR%"),
            Some(Placeholder::Endeavour)
        );
        assert_eq!(
            Placeholder::detect("https://c/%CACHYVERSION%/c.iso"),
            Some(Placeholder::CachyVersion)
        );
    }

    #[test]
    fn test_detect_whole_url_tokens_with_variant() {
        assert_eq!(
            Placeholder::detect("%POP%,raspi"),
            Some(Placeholder::PopOs {
                build: "raspi".to_string()
            })
        );
        assert_eq!(
            Placeholder::detect("%ARTIX%,plasma"),
            Some(Placeholder::Artix {
                edition: "plasma".to_string()
            })
        );
        assert_eq!(
            Placeholder::detect("%SOLUS%,GNOME"),
            Some(Placeholder::Solus {
                edition: "GNOME".to_string()
            })
        );
        assert_eq!(Placeholder::detect("%DEBIAN%"), Some(Placeholder::Debian));
        assert_eq!(
            Placeholder::detect("%GHOSTSPECTRE%"),
            Some(Placeholder::GhostSpectre)
        );
    }

    #[test]
    fn test_detect_plain_url() {
        assert_eq!(Placeholder::detect("https://example.com/file.exe"), None);
    }

    #[test]
    fn test_apply_inline_replaces_every_occurrence() {
        let url = "https://m/stable/%MINTVERSION%/linuxmint-%MINTVERSION%-xfce-64bit.iso";
        assert_eq!(
            Placeholder::MintVersion.apply(url, "22"),
            "https://m/stable/22/linuxmint-22-xfce-64bit.iso"
        );
    }

    #[test]
    fn test_apply_whole_url() {
        let p = Placeholder::Debian;
        assert_eq!(
            p.apply("%DEBIAN%", "https://cdimage/debian-12-amd64-netinst.iso"),
            "https://cdimage/debian-12-amd64-netinst.iso"
        );
    }

    #[test]
    fn test_catalog_placeholders_are_detected() {
        let catalog = crate::core::catalog::Catalog::default();
        let mut found = 0;
        for tool in catalog.tools() {
            for index in 0..tool.links.len() {
                if tool.needs_latest() {
                    continue;
                }
                let url = tool.url(index).unwrap();
                if url.starts_with('%') {
                    assert!(Placeholder::detect(&url).is_some(), "{url}");
                    found += 1;
                }
            }
        }
        assert!(found > 0);
    }
}
