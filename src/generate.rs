//! HTML site generation.
//!
//! Stage 2 of the folio build pipeline. Takes the loaded [`Site`] and writes
//! the final static site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): greeting plus project previews
//! - **Publications** (`/publications/index.html`): external articles by outlet
//! - **Writing index** (`/writing/index.html`): blog listing, newest first
//! - **Post pages** (`/writing/{slug}/index.html`): markdown converted to HTML
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── publications/
//! │   └── index.html
//! ├── writing/
//! │   ├── index.html
//! │   └── inside-the-timeline-api/
//! │       └── index.html
//! └── assets/                # copied from content/assets/
//!     └── avatar.png
//! ```
//!
//! ## CSS
//!
//! The base stylesheet is embedded at compile time; color and layout custom
//! properties are generated from config and prepended, so a config change is
//! a rebuild away from taking effect with no extra files to ship.

use crate::config;
use crate::content::Site;
use crate::model::Post;
use crate::render::{
    base_document, greeting, post_listing, project_preview, publication_entry, site_footer,
    site_header,
};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// What the generate stage wrote, for CLI reporting.
#[derive(Debug)]
pub struct GenerateSummary {
    /// `(page title, output path relative to the output dir)` in write order.
    pub pages: Vec<(String, String)>,
    /// Number of asset files copied.
    pub assets_copied: usize,
}

/// Render the whole site into `output_dir`.
///
/// `assets_dir` is the content asset root (`content/assets/`); it may be
/// absent, in which case nothing is copied.
pub fn generate(
    site: &Site,
    output_dir: &Path,
    assets_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let css = site_css(site);
    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::new();
    let mut write_page =
        |rel: &str, title: String, markup: Markup| -> Result<(), GenerateError> {
            let path = output_dir.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, markup.into_string())?;
            pages.push((title, rel.to_string()));
            Ok(())
        };

    write_page("index.html", "Home".to_string(), render_home(site, &css))?;
    write_page(
        "publications/index.html",
        "Publications".to_string(),
        render_publications_page(site, &css),
    )?;
    write_page(
        "writing/index.html",
        "Writing".to_string(),
        render_writing_index(site, &css),
    )?;
    for post in &site.posts {
        write_page(
            &format!("writing/{}/index.html", post.slug),
            post.title.clone(),
            render_post_page(site, post, &css),
        )?;
    }

    let assets_copied = copy_assets(assets_dir, &output_dir.join("assets"))?;

    Ok(GenerateSummary {
        pages,
        assets_copied,
    })
}

/// Full page CSS: config-driven custom properties, then the embedded base
/// stylesheet.
fn site_css(site: &Site) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&site.config.colors),
        config::generate_theme_css(&site.config.theme),
        CSS_STATIC
    )
}

/// Copy the content asset tree verbatim into the output.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walked path is under its root");
        let target: PathBuf = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Page Renderers
// ============================================================================

fn page_title(site: &Site, section: &str) -> String {
    format!("{} - {}", section, site.config.site_title)
}

/// Home page: greeting, then one preview card per project in authored order.
pub fn render_home(site: &Site, css: &str) -> Markup {
    let content = html! {
        (site_header(&site.config.site_title, "/"))
        main.home-page {
            (greeting(Some(&site.profile)))
            @if !site.projects.is_empty() {
                section.projects {
                    h2 { "Projects" }
                    div.project-grid {
                        @for project in &site.projects {
                            (project_preview(Some(project)))
                        }
                    }
                }
            }
        }
        (site_footer(&site.profile))
    };
    base_document(&site.config.site_title, css, content)
}

/// Publications page: one entry per article in authored order.
pub fn render_publications_page(site: &Site, css: &str) -> Markup {
    let content = html! {
        (site_header(&site.config.site_title, "/publications/"))
        main.publications-page {
            h1 { "Publications" }
            @if site.publications.is_empty() {
                p.empty-note { "Nothing published yet." }
            } @else {
                @for publication in &site.publications {
                    (publication_entry(Some(publication)))
                }
            }
        }
        (site_footer(&site.profile))
    };
    base_document(&page_title(site, "Publications"), css, content)
}

/// Blog listing page, newest first (the load stage established the order).
pub fn render_writing_index(site: &Site, css: &str) -> Markup {
    let content = html! {
        (site_header(&site.config.site_title, "/writing/"))
        main.writing-page {
            h1 { "Writing" }
            @if site.posts.is_empty() {
                p.empty-note { "No posts yet." }
            } @else {
                (post_listing(&site.posts))
            }
        }
        (site_footer(&site.profile))
    };
    base_document(&page_title(site, "Writing"), css, content)
}

/// A single post page: markdown body converted to HTML.
pub fn render_post_page(site: &Site, post: &Post, css: &str) -> Markup {
    let parser = Parser::new(&post.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    let content = html! {
        (site_header(&site.config.site_title, "/writing/"))
        main.post-page {
            p.post-date { span.date-range { (post.date) } }
            article.post-body {
                (PreEscaped(body_html))
            }
        }
        (site_footer(&site.profile))
    };
    base_document(&page_title(site, &post.title), css, content)
}
