//! # Catalog
//!
//! The static software list. Every entry ("tool") is addressed by a short
//! code of the form `<prefix><n>-<page>`, e.g. `d1-1` is the first entry in
//! the Debloat column of page 1.
//!
//! ```text
//! Catalog
//! ├── tools: HashMap<code, Tool>
//! │     └── Tool
//! │          ├── kind: ActionKind          // what selecting it does
//! │          ├── version: Option<VersionSource>
//! │          ├── latest: Option<String>    // cached once resolved
//! │          └── links: Vec<Link>          // one or more download links
//! └── pages: [PageLayout; 3]               // 4 columns per page
//! ```
//!
//! The only mutation after construction is `Tool::record_latest`, which
//! caches the resolved "latest version" string the first time a tool's link
//! is requested.

mod entries;

use std::collections::HashMap;
use std::fmt;

/// Maximum number of rows a page column can display.
pub const ROWS_PER_PAGE: usize = 14;

/// Codes rendered with the yellow `ADV` marker.
const ADVANCED_CODES: &[&str] = &["t1-1", "m6-2", "m7-2", "t3-2", "l4-3", "g2-3", "c6-3"];

/// What happens when a catalog entry is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Streamed download, then optionally open the file.
    Download,
    /// Run the link as a shell command.
    RunShell,
    /// Open the link in the default browser.
    OpenWeb,
    /// Fetch the link into a file without progress reporting.
    Retrieve,
    /// Write the link text itself into a new file.
    WriteFile,
}

impl ActionKind {
    /// Maps the numeric command codes used by the catalog source (1..=5).
    pub fn from_code(code: u8) -> Option<ActionKind> {
        match code {
            1 => Some(ActionKind::Download),
            2 => Some(ActionKind::RunShell),
            3 => Some(ActionKind::OpenWeb),
            4 => Some(ActionKind::Retrieve),
            5 => Some(ActionKind::WriteFile),
            _ => None,
        }
    }

    /// Heading printed above the link list on the info screen.
    pub fn info_heading(self) -> &'static str {
        match self {
            ActionKind::Download => "Download links:",
            ActionKind::RunShell => "Powershell commands:",
            ActionKind::OpenWeb => "Links that will open:",
            ActionKind::Retrieve => "Links that will be retrieved:",
            ActionKind::WriteFile => "Will be written to a new file:",
        }
    }

    /// Whether link URLs of this kind may carry a `%TOKEN%` placeholder.
    pub fn expands_placeholders(self) -> bool {
        matches!(self, ActionKind::Download | ActionKind::OpenWeb)
    }
}

/// How a resolved version string is reshaped before it is spliced into a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFormat {
    #[default]
    Plain,
    /// `1.2.3` becomes `123`
    NoDots,
}

/// Where a tool's "latest version" comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSource {
    /// GitHub `owner/repo` whose latest release tag is used.
    pub repo: String,
    pub format: VersionFormat,
}

impl VersionSource {
    pub fn github(repo: &str) -> Self {
        Self {
            repo: repo.to_string(),
            format: VersionFormat::Plain,
        }
    }

    pub fn without_dots(mut self) -> Self {
        self.format = VersionFormat::NoDots;
        self
    }

    /// Normalizes a release tag: leading `v` removed, then `format` applied.
    pub fn normalize(&self, tag: &str) -> String {
        let version = tag.trim().trim_start_matches(['v', 'V']);
        match self.format {
            VersionFormat::Plain => version.to_string(),
            VersionFormat::NoDots => version.replace('.', ""),
        }
    }
}

/// One download link of a tool.
///
/// URLs that embed a version are stored as fragments; the final URL is the
/// fragments joined with the version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub description: String,
    pub executable: String,
    url_parts: Vec<String>,
}

impl Link {
    /// An empty `description` falls back to `name`.
    pub fn new(name: &str, description: &str, executable: &str, url_parts: &[&str]) -> Self {
        let description = if description.is_empty() {
            name
        } else {
            description
        };
        Self {
            name: name.to_string(),
            description: description.to_string(),
            executable: executable.to_string(),
            url_parts: url_parts.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Joins the URL fragments around `version`.
    pub fn assemble(&self, version: &str) -> String {
        self.url_parts.join(version)
    }

    /// True when the URL has a gap that needs a version.
    pub fn is_versioned(&self) -> bool {
        self.url_parts.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownTool(String),
    LinkOutOfRange { code: String, index: usize, len: usize },
    VersionUnresolved(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownTool(code) => write!(f, "no tool with code {code}"),
            CatalogError::LinkOutOfRange { code, index, len } => {
                write!(f, "{code}: link {index} out of bounds (tool has {len})")
            }
            CatalogError::VersionUnresolved(code) => {
                write!(f, "{code}: latest version has not been resolved yet")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A catalog entry.
#[derive(Debug, Clone)]
pub struct Tool {
    pub name: String,
    pub code: String,
    pub kind: ActionKind,
    pub version: Option<VersionSource>,
    latest: Option<String>,
    pub info: String,
    pub links: Vec<Link>,
}

impl Tool {
    pub fn new(code: &str, name: &str, kind: ActionKind, info: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            kind,
            version: None,
            latest: None,
            info: info.to_string(),
            links: Vec::new(),
        }
    }

    pub fn latest_from(mut self, source: VersionSource) -> Self {
        self.version = Some(source);
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Page number encoded in the code (`d1-2` → 2).
    pub fn page(&self) -> Option<u8> {
        self.code.rsplit('-').next()?.parse().ok()
    }

    /// The part of the code the user types (`d10-1` → `d10`).
    pub fn short_code(&self) -> &str {
        self.code.split('-').next().unwrap_or(&self.code)
    }

    /// Row label shown in the table (`d10-1` → `10`).
    pub fn row_number(&self) -> &str {
        self.short_code().get(1..).unwrap_or("")
    }

    pub fn is_advanced(&self) -> bool {
        ADVANCED_CODES.contains(&self.code.as_str())
    }

    /// Whether the latest version must be fetched before URLs can be built.
    pub fn needs_latest(&self) -> bool {
        self.version.is_some() && self.latest.is_none()
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    /// Caches the resolved latest version. Later calls are ignored.
    pub fn record_latest(&mut self, version: String) {
        if self.latest.is_none() {
            self.latest = Some(version);
        }
    }

    pub fn link_at(&self, index: usize) -> Result<&Link, CatalogError> {
        self.links
            .get(index)
            .ok_or_else(|| CatalogError::LinkOutOfRange {
                code: self.code.clone(),
                index,
                len: self.links.len(),
            })
    }

    /// Final URL of link `index`, with the cached version spliced in.
    pub fn url(&self, index: usize) -> Result<String, CatalogError> {
        let link = self.link_at(index)?;
        if self.needs_latest() {
            return Err(CatalogError::VersionUnresolved(self.code.clone()));
        }
        Ok(link.assemble(self.latest.as_deref().unwrap_or("")))
    }

    pub fn executable(&self, index: usize) -> Result<&str, CatalogError> {
        Ok(&self.link_at(index)?.executable)
    }

    pub fn link_name(&self, index: usize) -> Result<&str, CatalogError> {
        Ok(&self.link_at(index)?.name)
    }

    pub fn description(&self, index: usize) -> Result<&str, CatalogError> {
        Ok(&self.link_at(index)?.description)
    }

    /// Prompt of the multi-choice box for tools with several links.
    pub fn choice_prompt(&self) -> &'static str {
        if self.code.starts_with('l') {
            "Choose your Distro Type"
        } else {
            "Choose Version"
        }
    }
}

/// One column of a page: the code prefix and its category title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub prefix: char,
    pub title: &'static str,
}

impl Column {
    /// Header text, e.g. `[D] Debloat`.
    pub fn header(&self) -> String {
        format!("[{}] {}", self.prefix.to_ascii_uppercase(), self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub number: u8,
    pub columns: [Column; 4],
}

const fn col(prefix: char, title: &'static str) -> Column {
    Column { prefix, title }
}

const PAGES: [PageLayout; 3] = [
    PageLayout {
        number: 1,
        columns: [
            col('d', "Debloat"),
            col('t', "Tweaks"),
            col('a', "Apps"),
            col('c', "Cleaning"),
        ],
    },
    PageLayout {
        number: 2,
        columns: [
            col('l', "Linux"),
            col('w', "Windows"),
            col('m', "Modding"),
            col('a', "Tools"),
        ],
    },
    PageLayout {
        number: 3,
        columns: [
            col('l', "Launchers"),
            col('g', "Game Stores"),
            col('r', "Runtimes"),
            col('a', "Apps"),
        ],
    },
];

/// The whole software table.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: HashMap<String, Tool>,
    pages: Vec<PageLayout>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_tools(entries::all())
    }
}

impl Catalog {
    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self {
            tools: tools.into_iter().map(|t| (t.code.clone(), t)).collect(),
            pages: PAGES.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Tool> {
        self.tools.get_mut(code)
    }

    /// Like `get`, but with a `CatalogError` for unknown codes.
    pub fn tool(&self, code: &str) -> Result<&Tool, CatalogError> {
        self.get(code)
            .ok_or_else(|| CatalogError::UnknownTool(code.to_string()))
    }

    /// Resolves what the user typed on `page` (`d1` on page 1 → `d1-1`).
    pub fn lookup(&self, input: &str, page: u8) -> Option<&Tool> {
        self.tools.get(&format!("{input}-{page}"))
    }

    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    pub fn page_count(&self) -> u8 {
        self.pages.len() as u8
    }

    pub fn layout(&self, page: u8) -> Option<&PageLayout> {
        self.pages.iter().find(|p| p.number == page)
    }

    /// The 14 table rows of `page`; each row holds one optional cell per column.
    pub fn rows(&self, page: u8) -> Vec<[Option<&Tool>; 4]> {
        let Some(layout) = self.layout(page) else {
            return Vec::new();
        };
        (1..=ROWS_PER_PAGE)
            .map(|row| {
                layout
                    .columns
                    .map(|c| self.tools.get(&format!("{}{}-{}", c.prefix, row, page)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versioned_tool() -> Tool {
        Tool::new("d4-1", "Optimizer", ActionKind::Download, "")
            .latest_from(VersionSource::github("hellzerg/optimizer"))
            .link(Link::new(
                "Optimizer",
                "",
                "Optimizer.exe",
                &["https://example.com/Optimizer-", ".exe"],
            ))
    }

    #[test]
    fn test_action_kind_codes() {
        assert_eq!(ActionKind::from_code(1), Some(ActionKind::Download));
        assert_eq!(ActionKind::from_code(2), Some(ActionKind::RunShell));
        assert_eq!(ActionKind::from_code(3), Some(ActionKind::OpenWeb));
        assert_eq!(ActionKind::from_code(4), Some(ActionKind::Retrieve));
        assert_eq!(ActionKind::from_code(5), Some(ActionKind::WriteFile));
        assert_eq!(ActionKind::from_code(0), None);
        assert_eq!(ActionKind::from_code(6), None);
    }

    #[test]
    fn test_link_description_defaults_to_name() {
        let link = Link::new("EchoX", "", "EchoX.bat", &["https://x"]);
        assert_eq!(link.description, "EchoX");
        let link = Link::new("Linux Mint MATE", "MATE", "mint.iso", &["https://x"]);
        assert_eq!(link.description, "MATE");
    }

    #[test]
    fn test_assemble_joins_fragments_with_version() {
        let link = Link::new("a", "", "a", &["https://h/v", "/App-", ".exe"]);
        assert_eq!(link.assemble("1.2"), "https://h/v1.2/App-1.2.exe");
        let single = Link::new("a", "", "a", &["https://h/file.exe"]);
        assert_eq!(single.assemble("9.9"), "https://h/file.exe");
        assert!(!single.is_versioned());
    }

    #[test]
    fn test_url_requires_resolved_version() {
        let mut tool = versioned_tool();
        assert!(tool.needs_latest());
        assert_eq!(
            tool.url(0),
            Err(CatalogError::VersionUnresolved("d4-1".to_string()))
        );

        tool.record_latest("16.7".to_string());
        assert!(!tool.needs_latest());
        assert_eq!(tool.url(0).unwrap(), "https://example.com/Optimizer-16.7.exe");
    }

    #[test]
    fn test_record_latest_only_once() {
        let mut tool = versioned_tool();
        tool.record_latest("1.0".to_string());
        tool.record_latest("2.0".to_string());
        assert_eq!(tool.latest(), Some("1.0"));
    }

    #[test]
    fn test_out_of_range_link_errors() {
        let tool = versioned_tool();
        let err = CatalogError::LinkOutOfRange {
            code: "d4-1".to_string(),
            index: 1,
            len: 1,
        };
        assert_eq!(tool.executable(1), Err(err.clone()));
        assert_eq!(tool.link_name(1), Err(err.clone()));
        assert_eq!(tool.description(1), Err(err.clone()));
        assert_eq!(tool.url(1), Err(err));
    }

    #[test]
    fn test_version_normalize() {
        let plain = VersionSource::github("a/b");
        assert_eq!(plain.normalize("v2.1.0"), "2.1.0");
        assert_eq!(plain.normalize("16.7"), "16.7");
        let no_dots = VersionSource::github("rocksdanister/lively").without_dots();
        assert_eq!(no_dots.normalize("v2.0.7.4"), "2074");
    }

    #[test]
    fn test_code_parts() {
        let tool = Tool::new("d10-1", "CoutX", ActionKind::Download, "");
        assert_eq!(tool.page(), Some(1));
        assert_eq!(tool.short_code(), "d10");
        assert_eq!(tool.row_number(), "10");
    }

    #[test]
    fn test_choice_prompt_depends_on_prefix() {
        let distro = Tool::new("l1-2", "Linux Mint", ActionKind::Download, "");
        let other = Tool::new("c8-1", "ESET", ActionKind::Download, "");
        assert_eq!(distro.choice_prompt(), "Choose your Distro Type");
        assert_eq!(other.choice_prompt(), "Choose Version");
    }

    #[test]
    fn test_lookup_is_page_local() {
        let catalog = Catalog::default();
        assert_eq!(catalog.lookup("d1", 1).map(|t| t.name.as_str()), Some("EchoX"));
        assert!(catalog.lookup("d1", 2).is_none());
        assert_eq!(catalog.lookup("a1", 2).map(|t| t.name.as_str()), Some("Rufus"));
    }

    #[test]
    fn test_rows_have_fixed_shape() {
        let catalog = Catalog::default();
        for page in 1..=catalog.page_count() {
            let rows = catalog.rows(page);
            assert_eq!(rows.len(), ROWS_PER_PAGE);
        }
        let rows = catalog.rows(1);
        assert_eq!(rows[0][0].map(|t| t.code.as_str()), Some("d1-1"));
        assert_eq!(rows[0][3].map(|t| t.code.as_str()), Some("c1-1"));
        assert!(rows[13][0].is_none());
        assert!(catalog.rows(4).is_empty());
    }

    #[test]
    fn test_every_code_fits_its_page_layout() {
        let catalog = Catalog::default();
        for tool in catalog.tools() {
            let page = tool.page().expect("code ends with a page number");
            let layout = catalog.layout(page).expect("page exists");
            let prefix = tool.code.chars().next().unwrap();
            assert!(
                layout.columns.iter().any(|c| c.prefix == prefix),
                "{} has no column on page {}",
                tool.code,
                page
            );
            let row: usize = tool.row_number().parse().unwrap();
            assert!((1..=ROWS_PER_PAGE).contains(&row), "{} row out of range", tool.code);
            assert!(!tool.links.is_empty(), "{} has no links", tool.code);
        }
    }

    #[test]
    fn test_every_entry_returns_its_link_values() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 104);
        for tool in catalog.tools() {
            for (i, link) in tool.links.iter().enumerate() {
                assert_eq!(tool.executable(i), Ok(link.executable.as_str()), "{}", tool.code);
                assert_eq!(tool.link_name(i), Ok(link.name.as_str()), "{}", tool.code);
                assert_eq!(tool.description(i), Ok(link.description.as_str()), "{}", tool.code);
                if !tool.needs_latest() {
                    assert_eq!(tool.url(i), Ok(link.assemble("")), "{}", tool.code);
                }
            }
            let len = tool.links.len();
            let err = CatalogError::LinkOutOfRange {
                code: tool.code.clone(),
                index: len,
                len,
            };
            assert_eq!(tool.executable(len), Err(err.clone()));
            assert_eq!(tool.link_name(len), Err(err.clone()));
            assert_eq!(tool.description(len), Err(err));
        }
    }

    #[test]
    fn test_entry_values_match_construction() {
        let catalog = Catalog::default();
        let mint = catalog.get("l1-2").unwrap();
        assert_eq!(mint.link_name(2), Ok("Linux Mint Xfce"));
        assert_eq!(mint.description(2), Ok("Xfce"));
        assert_eq!(mint.executable(2), Ok("LinuxMint-Xfce.iso"));

        let echo = catalog.get("d1-1").unwrap();
        assert_eq!(echo.description(0), Ok("EchoX"));
        assert_eq!(
            echo.url(0),
            Ok("https://github.com/UnLovedCookie/EchoX/releases/latest/download/EchoX.bat".to_string())
        );
    }

    #[test]
    fn test_column_header() {
        assert_eq!(col('d', "Debloat").header(), "[D] Debloat");
    }

    #[test]
    fn test_advanced_marker() {
        let catalog = Catalog::default();
        assert!(catalog.get("t1-1").unwrap().is_advanced());
        assert!(catalog.get("m6-2").unwrap().is_advanced());
        assert!(!catalog.get("d1-1").unwrap().is_advanced());
    }
}
