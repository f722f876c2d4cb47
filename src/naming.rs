//! Post filename parsing for the `YYYY-MM-DD-slug` convention.
//!
//! Blog posts carry their publication date in the filename rather than in
//! front matter, so the filesystem stays the single source of ordering truth:
//!
//! - `2024-03-10-inside-the-timeline-api.md` → date 2024-03-10,
//!   slug `inside-the-timeline-api`
//! - `2023-11-02-hello.md` → date 2023-11-02, slug `hello`
//!
//! The slug doubles as the post URL segment. Dashes in the slug are converted
//! to spaces for the fallback display title, used when the markdown has no
//! `# heading`.

use chrono::NaiveDate;

/// Result of parsing a post file stem like `2024-03-10-inside-the-timeline-api`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPostName {
    /// Publication date from the `YYYY-MM-DD` prefix.
    pub date: NaiveDate,
    /// URL slug: everything after the date prefix, dashes preserved.
    pub slug: String,
    /// Fallback display title: slug with dashes converted to spaces.
    pub display_title: String,
}

/// Parse a post file stem following the `YYYY-MM-DD-slug` convention.
///
/// Returns `None` when the stem has no valid date prefix or the slug part is
/// empty; callers treat that as an authoring error, not as a hidden post.
pub fn parse_post_stem(stem: &str) -> Option<ParsedPostName> {
    // Date prefix is exactly 10 chars; the 11th must be the separating dash.
    if stem.len() < 12 || stem.as_bytes().get(10) != Some(&b'-') {
        return None;
    }
    let date = NaiveDate::parse_from_str(&stem[..10], "%Y-%m-%d").ok()?;
    let slug = &stem[11..];
    if slug.is_empty() || slug.starts_with('-') || slug.ends_with('-') {
        return None;
    }
    Some(ParsedPostName {
        date,
        slug: slug.to_string(),
        display_title: slug.replace('-', " "),
    })
}
