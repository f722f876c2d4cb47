//! Content registry loading and validation.
//!
//! Stage 1 of the folio build pipeline. Reads the content directory into a
//! typed [`Site`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                          # Content root
//! ├── config.toml                   # Site configuration (optional)
//! ├── profile.toml                  # Site owner profile (required)
//! ├── profile.zh.toml               # Alternate profile variants (optional)
//! ├── projects.toml                 # Portfolio entries, in display order
//! ├── publications.toml             # External articles, in display order
//! ├── posts/
//! │   ├── 2024-03-10-inside-the-timeline-api.md
//! │   └── 2023-11-02-hello.md
//! └── assets/                       # Avatar, covers → copied to output
//!     └── avatar.png
//! ```
//!
//! Registries are hand-authored literals: flat ordered sequences (projects,
//! publications) or a single record (profile). Projects and publications keep
//! authored order; posts are sorted newest-first by the date in the filename.
//!
//! ## Validation
//!
//! Every authoring-time shape violation is caught here, before any rendering
//! runs:
//! - missing required file or field, unknown field (typo)
//! - a publisher outside the known set, a malformed date
//! - a malformed URL in any link
//! - an empty tag
//! - an image referencing an asset that does not exist
//! - a post filename that does not follow `YYYY-MM-DD-slug.md`
//!
//! The rendering layer never sees invalid content; its only runtime "failure"
//! mode is entity absence, which renders as nothing.

use crate::config::{self, SiteConfig};
use crate::model::{DateString, ImageRef, Link, Post, Profile, Project, Publication, Tag};
use crate::naming::parse_post_stem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Missing required content file: {0}")]
    MissingFile(PathBuf),
    #[error("Empty tag in {0}")]
    EmptyTag(PathBuf),
    #[error("Malformed URL {url:?} in {path} (expected http(s)://... or a /site-internal path)")]
    MalformedUrl { url: String, path: PathBuf },
    #[error("{path} references missing asset: {asset}")]
    MissingAsset { path: PathBuf, asset: String },
    #[error("Post filename must follow YYYY-MM-DD-slug.md: {0}")]
    BadPostName(PathBuf),
    #[error("Duplicate post slug {slug:?} ({first} and {second})")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Everything the generate stage needs, loaded and validated once.
///
/// Serializes to JSON for the `check --json` content inventory.
#[derive(Debug, Serialize)]
pub struct Site {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    pub posts: Vec<Post>,
    pub config: SiteConfig,
}

/// Wrapper for `projects.toml`: a single `[[projects]]` array.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Wrapper for `publications.toml`: a single `[[publications]]` array.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PublicationsFile {
    #[serde(default)]
    publications: Vec<Publication>,
}

/// Load and validate the whole content directory.
pub fn load(root: &Path) -> Result<Site, ContentError> {
    let config = config::load_config(root)?;

    let profile_path = profile_path(root, &config);
    let profile: Profile = parse_toml_file(&profile_path)?;

    let projects = match read_optional(&root.join("projects.toml"))? {
        Some(text) => parse_toml_str::<ProjectsFile>(&text, &root.join("projects.toml"))?.projects,
        None => Vec::new(),
    };

    let publications = match read_optional(&root.join("publications.toml"))? {
        Some(text) => {
            parse_toml_str::<PublicationsFile>(&text, &root.join("publications.toml"))?.publications
        }
        None => Vec::new(),
    };

    let posts = load_posts(&root.join("posts"))?;

    let site = Site {
        profile,
        projects,
        publications,
        posts,
        config,
    };
    validate(&site, root)?;
    Ok(site)
}

/// Resolve which profile file the build uses.
///
/// The base `profile.toml` is authoritative; `config.profile_variant = "zh"`
/// switches to `profile.zh.toml`. Variants coexist in the content directory
/// so the same content tree can drive differently-localized builds.
fn profile_path(root: &Path, config: &SiteConfig) -> PathBuf {
    match &config.profile_variant {
        Some(variant) => root.join(format!("profile.{variant}.toml")),
        None => root.join("profile.toml"),
    }
}

fn parse_toml_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ContentError::MissingFile(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    parse_toml_str(&text, path)
}

fn parse_toml_str<T: serde::de::DeserializeOwned>(
    text: &str,
    path: &Path,
) -> Result<T, ContentError> {
    toml::from_str(text).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>, ContentError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Load all posts from `content/posts/`, newest first.
///
/// A missing posts directory means the site has no blog yet, not an error.
/// The title comes from the first `# heading` in the markdown, falling back
/// to the slug with dashes converted to spaces.
fn load_posts(dir: &Path) -> Result<Vec<Post>, ContentError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut md_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    md_files.sort();

    let mut posts: Vec<(Post, PathBuf)> = Vec::new();
    for md_path in &md_files {
        let stem = md_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let parsed =
            parse_post_stem(&stem).ok_or_else(|| ContentError::BadPostName(md_path.clone()))?;

        if let Some((_, first)) = posts.iter().find(|(post, _)| post.slug == parsed.slug) {
            return Err(ContentError::DuplicateSlug {
                slug: parsed.slug,
                first: first.clone(),
                second: md_path.clone(),
            });
        }

        let body = fs::read_to_string(md_path)?;
        let title = body
            .lines()
            .find(|line| line.starts_with("# "))
            .map(|line| line.trim_start_matches("# ").trim().to_string())
            .unwrap_or(parsed.display_title);

        posts.push((
            Post {
                slug: parsed.slug,
                title,
                date: DateString(parsed.date),
                body,
            },
            md_path.clone(),
        ));
    }

    let mut posts: Vec<Post> = posts.into_iter().map(|(post, _)| post).collect();
    // Newest first; the filename sort above makes same-day posts stable
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

// ============================================================================
// Validation
// ============================================================================

/// Cross-field checks the type system cannot express: URL syntax, tag
/// non-emptiness, and asset existence.
fn validate(site: &Site, root: &Path) -> Result<(), ContentError> {
    let profile_path = profile_path(root, &site.config);

    for link in &site.profile.social_links {
        check_link(link, &profile_path)?;
    }
    check_tags(&site.profile.tags, &profile_path)?;
    if let Some(avatar) = &site.profile.avatar {
        check_asset(avatar, root, &profile_path)?;
    }

    let projects_path = root.join("projects.toml");
    for project in &site.projects {
        if let Some(link) = &project.link {
            check_link(link, &projects_path)?;
        }
        if let Some(tags) = &project.tags {
            check_tags(tags, &projects_path)?;
        }
        if let Some(cover) = &project.cover {
            check_asset(cover, root, &projects_path)?;
        }
    }

    let publications_path = root.join("publications.toml");
    for publication in &site.publications {
        check_link(&publication.link, &publications_path)?;
        if let Some(tags) = &publication.tags {
            check_tags(tags, &publications_path)?;
        }
    }

    Ok(())
}

fn check_link(link: &Link, path: &Path) -> Result<(), ContentError> {
    if !link.has_valid_url() {
        return Err(ContentError::MalformedUrl {
            url: link.url.clone(),
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn check_tags(tags: &[Tag], path: &Path) -> Result<(), ContentError> {
    if tags.iter().any(|t| t.name().trim().is_empty()) {
        return Err(ContentError::EmptyTag(path.to_path_buf()));
    }
    Ok(())
}

fn check_asset(image: &ImageRef, root: &Path, path: &Path) -> Result<(), ContentError> {
    let asset = root
        .join("assets")
        .join(image.source.trim_start_matches('/'));
    if !asset.is_file() {
        return Err(ContentError::MissingAsset {
            path: path.to_path_buf(),
            asset: image.source.clone(),
        });
    }
    Ok(())
}
