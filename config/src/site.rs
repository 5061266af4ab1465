//! Documentation site metadata and navigation sidebar.

use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidebarItem {
    pub label: String,
    /// Absolute path, including the site base.
    pub link: String,
}

impl SidebarItem {
    fn new(label: &str, link: &str) -> Self {
        Self {
            label: label.to_string(),
            link: link.to_string(),
        }
    }
}

/// Sidebar group whose entries are generated from a content directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Autogenerate {
    pub directory: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidebarGroup {
    pub label: String,
    #[serde(default)]
    pub items: Vec<SidebarItem>,
    #[serde(default)]
    pub autogenerate: Option<Autogenerate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupContents<'a> {
    Items(&'a [SidebarItem]),
    Autogenerated(&'a Autogenerate),
}

impl SidebarGroup {
    fn items(label: &str, items: &[(&str, &str)]) -> Self {
        Self {
            label: label.to_string(),
            items: items
                .iter()
                .map(|(label, link)| SidebarItem::new(label, link))
                .collect(),
            autogenerate: None,
        }
    }

    /// A group holds either explicit items or an autogenerated directory.
    pub fn contents(&self) -> Result<GroupContents<'_>, ConfigError> {
        match (self.items.as_slice(), &self.autogenerate) {
            ([], Some(auto)) => Ok(GroupContents::Autogenerated(auto)),
            (items @ [_, ..], None) => Ok(GroupContents::Items(items)),
            ([_, ..], Some(_)) => Err(self.invalid("has both items and autogenerate")),
            ([], None) => Err(self.invalid("has neither items nor autogenerate")),
        }
    }

    fn invalid(&self, reason: &str) -> ConfigError {
        ConfigError::InvalidSidebar {
            label: self.label.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Site metadata.
///
/// ```toml
/// [site]
/// url = "https://roneli.github.io"
/// base = "/fastgql"
/// title = "fastgql"
///
/// [site.social]
/// github = "https://github.com/roneli/fastgql"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub url: String,
    pub base: String,
    pub title: String,
    pub social: BTreeMap<String, String>,
    pub sidebar: Vec<SidebarGroup>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://roneli.github.io".to_string(),
            base: "/fastgql".to_string(),
            title: "fastgql".to_string(),
            social: BTreeMap::from([(
                "github".to_string(),
                "https://github.com/roneli/fastgql".to_string(),
            )]),
            sidebar: vec![
                SidebarGroup::items(
                    "Getting Started",
                    &[
                        ("Introduction", "/fastgql/start/intro"),
                        ("Setup", "/fastgql/start/setup"),
                    ],
                ),
                SidebarGroup::items(
                    "Queries",
                    &[
                        ("Querying", "/fastgql/queries/queries"),
                        ("Filtering", "/fastgql/queries/filtering"),
                        ("Ordering", "/fastgql/queries/ordering"),
                        ("Pagination", "/fastgql/queries/pagination"),
                        ("Aggregation", "/fastgql/queries/aggregation"),
                    ],
                ),
                SidebarGroup::items(
                    "Mutations",
                    &[
                        ("Insert", "/fastgql/mutations/insert"),
                        ("Update", "/fastgql/mutations/update"),
                        ("Delete", "/fastgql/mutations/delete"),
                    ],
                ),
                SidebarGroup::items(
                    "Schema",
                    &[
                        ("Directives", "/fastgql/schema/directives"),
                        ("Schema", "/fastgql/schema/fastgql_schema_fragment"),
                    ],
                ),
                SidebarGroup {
                    label: "Reference".to_string(),
                    items: Vec::new(),
                    autogenerate: Some(Autogenerate {
                        directory: "reference".to_string(),
                    }),
                },
            ],
        }
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn join(base: &Url, path: &str) -> Result<Url, ConfigError> {
    base.join(path).map_err(|source| ConfigError::InvalidUrl {
        url: path.to_string(),
        source,
    })
}

impl SiteConfig {
    pub fn site_url(&self) -> Result<Url, ConfigError> {
        parse_url(&self.url)
    }

    /// Root of the documentation, always ending in `/`.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        join(&self.site_url()?, &self.base_prefix())
    }

    /// Resolves an absolute-path sidebar link against the site origin.
    pub fn page_url(&self, link: &str) -> Result<Url, ConfigError> {
        join(&self.site_url()?, link)
    }

    /// Social links as `host/path`, skipping any that do not parse.
    #[must_use]
    pub fn social_links(&self) -> Vec<String> {
        self.social
            .values()
            .filter_map(|link| Url::parse(link).ok())
            .filter_map(|url| {
                let host = url.host_str()?;
                Some(format!("{host}{}", url.path().trim_end_matches('/')))
            })
            .collect()
    }

    fn base_prefix(&self) -> String {
        match self.base.trim_matches('/') {
            "" => "/".to_string(),
            base => format!("/{base}/"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        let prefix = self.base_prefix();

        for group in &self.sidebar {
            let GroupContents::Items(items) = group.contents()? else {
                continue;
            };
            for item in items {
                if !item.link.starts_with('/') {
                    return Err(group.invalid(&format!(
                        "link {:?} must be an absolute path",
                        item.link
                    )));
                }
                self.page_url(&item.link)?;
                if !item.link.starts_with(&prefix) {
                    tracing::warn!(
                        group = %group.label,
                        link = %item.link,
                        base = %self.base,
                        "Sidebar link is outside the site base"
                    );
                }
            }
        }

        for (name, link) in &self.social {
            if let Err(err) = parse_url(link) {
                tracing::warn!(%name, %link, "Ignoring unparsable social link: {err}");
            }
        }
        Ok(())
    }
}
