//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (project, publication, post) is its semantic identity —
//! title and positional index — with source files shown once per section
//! header rather than per line.
//!
//! # Output Format
//!
//! ## Check / Load
//!
//! ```text
//! Profile
//!     Ada Lovelace — Engineer
//! Projects (projects.toml)
//! 001 Folio (2024-01-15 – present)
//! 002 Timeline Explorer (2023-05-01 – present)
//! Publications (publications.toml)
//! 001 Reverse-engineering a timeline API [Medium, 2024-03-10]
//! Posts
//! 001 Inside a social timeline API (2024-03-10)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Publications → publications/index.html
//! Writing → writing/index.html
//! Inside a social timeline API → writing/inside-the-timeline-api/index.html
//!
//! Generated 5 pages, copied 2 assets
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::content::Site;
use crate::generate::GenerateSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

const INDENT: &str = "    ";

/// Format the loaded content inventory.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    let identity = match &site.profile.position {
        Some(position) => format!("{} — {}", site.profile.full_name(), position),
        None => site.profile.full_name(),
    };
    lines.push(format!("{INDENT}{identity}"));
    if let Some(location) = &site.profile.location {
        lines.push(format!("{INDENT}Location: {location}"));
    }
    if !site.profile.social_links.is_empty() {
        lines.push(format!(
            "{INDENT}Links: {}",
            site.profile
                .social_links
                .iter()
                .map(|l| l.display_label())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if !site.projects.is_empty() {
        lines.push("Projects (projects.toml)".to_string());
        for (i, project) in site.projects.iter().enumerate() {
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                project.name,
                project.date_range()
            ));
        }
    }

    if !site.publications.is_empty() {
        lines.push("Publications (publications.toml)".to_string());
        for (i, publication) in site.publications.iter().enumerate() {
            lines.push(format!(
                "{} {} [{}, {}]",
                format_index(i + 1),
                publication.title,
                publication.publisher.display_name(),
                publication.date
            ));
        }
    }

    if !site.posts.is_empty() {
        lines.push("Posts".to_string());
        for (i, post) in site.posts.iter().enumerate() {
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                post.title,
                post.date
            ));
        }
    }

    lines
}

/// Format the generate-stage report: one `title → path` line per page, then
/// a summary line.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for (title, path) in &summary.pages {
        lines.push(format!("{title} → {path}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, copied {} assets",
        summary.pages.len(),
        summary.assets_copied
    ));
    lines
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{line}");
    }
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{line}");
    }
}
