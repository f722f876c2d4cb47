//! Content entity types shared by the load and generate stages.
//!
//! The model splits into two layers:
//!
//! - **Value types** (`Tag`, `Link`, `DateString`, `ImageRef`): small reusable
//!   shapes that appear inside richer entities. Each one has exactly one
//!   canonical textual projection (see the method on each type) that the
//!   rendering layer applies everywhere the value appears.
//! - **Entity types** (`Profile`, `Project`, `Publication`, `Post`): aggregate
//!   records describing the site owner, a portfolio entry, an externally
//!   published article, and a blog post.
//!
//! All entities are immutable value data: the load stage builds them once from
//! the content registries, the generate stage borrows them read-only, and
//! nothing mutates them in between.
//!
//! ## Optional fields
//!
//! "Not applicable" is modeled as omission, not as an empty sentinel. A field
//! that is `None` (or an empty list) contributes no section to the render;
//! components never emit empty sections. `deny_unknown_fields` on every
//! entity catches authoring typos at load time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A topical label attached to content.
///
/// Transparent newtype so registries author tags as plain strings:
/// `tags = ["rust", "api-design"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub String);

impl Tag {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A URL reference, optionally with authored display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Link {
    /// Display text for the anchor: the authored label, or derived from the
    /// URL when no label exists (scheme and `www.` stripped, trailing slash
    /// dropped). This is the one canonical label rule; every anchor on the
    /// site goes through it.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        self.url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.")
            .trim_end_matches('/')
            .to_string()
    }

    /// Syntactic URL check applied at load time. Accepts absolute http(s)
    /// URLs and site-internal `/...` paths; everything else is an authoring
    /// error. Internal paths come from the route layout in [`crate::generate`]
    /// and are treated as opaque here.
    pub fn has_valid_url(&self) -> bool {
        (self.url.starts_with("http://") && self.url.len() > "http://".len())
            || (self.url.starts_with("https://") && self.url.len() > "https://".len())
            || self.url.starts_with('/')
    }
}

/// A calendar date serialized as `YYYY-MM-DD`.
///
/// Wraps [`NaiveDate`] so malformed dates are rejected when the registry is
/// parsed, and ordering (used to sort posts and publications) is date
/// ordering rather than string ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateString(pub NaiveDate);

impl fmt::Display for DateString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Canonical projection of a start/end date pair.
///
/// An absent end date means the range is still open:
/// `"2023-01-01 – present"`.
pub fn date_range_text(start: DateString, end: Option<DateString>) -> String {
    match end {
        Some(end) => format!("{start} – {end}"),
        None => format!("{start} – present"),
    }
}

/// A visual asset reference.
///
/// `source` is a path relative to `content/assets/`; the load stage verifies
/// the file exists. `caption` doubles as alt text, so images without one are
/// decorative as far as assistive tech is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageRef {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageRef {
    /// Site-absolute URL of the copied asset.
    pub fn asset_url(&self) -> String {
        format!("/assets/{}", self.source.trim_start_matches('/'))
    }
}

/// The site owner's identity and public metadata.
///
/// Only `first_name` is required. Every other field degrades gracefully when
/// absent: the corresponding section is simply omitted from the render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Ordered intro lines, one paragraph each.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<Link>,
}

impl Profile {
    /// `"Ada Lovelace"`, or just `"Ada"` when no last name is authored,
    /// never a trailing space.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// A portfolio entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    pub start_date: DateString,
    /// Absent = ongoing; the range renders as `"{start} – present"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateString>,
    /// Pointer to the live project or its repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl Project {
    pub fn date_range(&self) -> String {
        date_range_text(self.start_date, self.end_date)
    }
}

/// Known publication outlets.
///
/// Deliberately a closed enumeration rather than a free string: an article
/// claiming an outlet outside this set is an authoring error caught when
/// `publications.toml` is parsed, and adding an outlet is a visible
/// code-level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Publisher {
    Medium,
    DevTo,
    Hashnode,
    Freecodecamp,
    SelfHosted,
}

impl Publisher {
    /// Reader-facing outlet name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Publisher::Medium => "Medium",
            Publisher::DevTo => "DEV",
            Publisher::Hashnode => "Hashnode",
            Publisher::Freecodecamp => "freeCodeCamp",
            Publisher::SelfHosted => "Self-hosted",
        }
    }
}

/// An externally published article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Publication {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<String>,
    pub link: Link,
    pub date: DateString,
    pub publisher: Publisher,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// A blog post loaded from `content/posts/`.
///
/// The date comes from the filename (`YYYY-MM-DD-slug.md`), the title from
/// the first `# heading` in the markdown with the slug (dashes to spaces) as
/// fallback. The body stays raw markdown until the generate stage converts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: DateString,
    pub body: String,
}
