//! Presentational components.
//!
//! Every component here is a pure function from borrowed content to
//! [`Markup`]: no I/O, no retained state, no side effects. Re-invoking a
//! component with the same value produces byte-identical markup.
//!
//! ## Entity component contract
//!
//! Components that take a whole entity accept `Option<&T>` and follow one
//! shape:
//!
//! - `None` → empty markup. Never an error, never a placeholder.
//! - `Some` → a fixed sub-tree of optional sections. A field that is absent
//!   (or an empty list) contributes no section; sections are never emitted
//!   empty.
//! - List fields project to ordered sequences preserving authored order.
//!
//! ## Canonical value projections
//!
//! Each value type has exactly one visual projection, applied everywhere the
//! value appears:
//!
//! | Value | Projection |
//! |-------|-----------|
//! | `Link` | anchor with [`Link::display_label`] text, external links open in a new tab |
//! | start/end `DateString` pair | `span.date-range` with [`date_range_text`] |
//! | `ImageRef` | `figure` with the caption as alt text and `figcaption` |
//! | `Vec<Tag>` | `ul.tag-list` of `li.tag` items |
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! checked templates with automatic XSS escaping.

use crate::model::{
    DateString, ImageRef, Link, Post, Profile, Project, Publication, Tag, date_range_text,
};
use maud::{DOCTYPE, Markup, html};

// ============================================================================
// Page chrome
// ============================================================================

/// Renders the base HTML document structure.
pub fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Site sections that appear in the navigation, in display order.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Publications", "/publications/"),
    ("Writing", "/writing/"),
];

/// Renders the site header: site title linking home plus section navigation
/// with the current section marked.
pub fn site_header(site_title: &str, current: &str) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (site_title) }
            nav.site-nav {
                ul {
                    @for (label, path) in NAV_SECTIONS {
                        li class=[(*path == current).then_some("current")] {
                            a href=(path) { (label) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the footer: the profile's social links, or nothing when the
/// profile has none.
pub fn site_footer(profile: &Profile) -> Markup {
    html! {
        @if !profile.social_links.is_empty() {
            footer.site-footer {
                ul.social-links {
                    @for link in &profile.social_links {
                        li { (link_anchor(link)) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Canonical value projections
// ============================================================================

/// The one anchor rule: authored or derived label, external URLs open in a
/// new tab with `rel="noopener"`, internal paths stay in-tab.
pub fn link_anchor(link: &Link) -> Markup {
    let external = !link.url.starts_with('/');
    html! {
        @if external {
            a href=(link.url) target="_blank" rel="noopener" { (link.display_label()) }
        } @else {
            a href=(link.url) { (link.display_label()) }
        }
    }
}

/// The one date-range rule: `"2023-01-01 – 2024-06-30"`, or
/// `"2023-01-01 – present"` for an open range.
pub fn date_range(start: DateString, end: Option<DateString>) -> Markup {
    html! {
        span.date-range { (date_range_text(start, end)) }
    }
}

/// The one image rule: a figure whose caption doubles as alt text and, when
/// present, as a visible `figcaption`.
pub fn figure_image(image: &ImageRef, class: &str) -> Markup {
    let alt = image.caption.as_deref().unwrap_or("");
    html! {
        figure class=(class) {
            img src=(image.asset_url()) alt=(alt) loading="lazy";
            @if let Some(caption) = &image.caption {
                figcaption { (caption) }
            }
        }
    }
}

/// The one tag-list rule. An empty slice renders nothing; callers never get
/// an empty `ul`.
pub fn tag_list(tags: &[Tag]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul.tag-list {
                @for tag in tags {
                    li.tag { (tag.name()) }
                }
            }
        }
    }
}

/// Collapse rule for optional tag sets: absent and empty both mean "no tags
/// section".
fn present_tags(tags: &Option<Vec<Tag>>) -> &[Tag] {
    tags.as_deref().unwrap_or(&[])
}

// ============================================================================
// Entity components
// ============================================================================

/// Home-page greeting rendered from the profile.
///
/// Sections in order: avatar, name, position, location, intro paragraphs,
/// tags. Absent fields and empty lists contribute nothing.
pub fn greeting(profile: Option<&Profile>) -> Markup {
    let Some(profile) = profile else {
        return html! {};
    };
    html! {
        section.greeting {
            @if let Some(avatar) = &profile.avatar {
                (figure_image(avatar, "avatar"))
            }
            h1.greeting-name { (profile.full_name()) }
            @if let Some(position) = &profile.position {
                p.greeting-position { (position) }
            }
            @if let Some(location) = &profile.location {
                p.greeting-location { (location) }
            }
            @if !profile.summary.is_empty() {
                div.greeting-summary {
                    @for line in &profile.summary {
                        p { (line) }
                    }
                }
            }
            (tag_list(&profile.tags))
        }
    }
}

/// Card preview of a portfolio project.
///
/// Always shows the name and the date range; cover, summary, tags, and the
/// project link appear only when authored.
pub fn project_preview(project: Option<&Project>) -> Markup {
    let Some(project) = project else {
        return html! {};
    };
    html! {
        article.project-preview {
            @if let Some(cover) = &project.cover {
                (figure_image(cover, "project-cover"))
            }
            h3.project-name { (project.name) }
            (date_range(project.start_date, project.end_date))
            @if !project.summary.is_empty() {
                div.project-summary {
                    @for line in &project.summary {
                        p { (line) }
                    }
                }
            }
            (tag_list(present_tags(&project.tags)))
            @if let Some(link) = &project.link {
                p.project-link { (link_anchor(link)) }
            }
        }
    }
}

/// One entry in the publications list: linked title, outlet and date,
/// optional summary and tags.
pub fn publication_entry(publication: Option<&Publication>) -> Markup {
    let Some(publication) = publication else {
        return html! {};
    };
    html! {
        article.publication-entry {
            h3.publication-title {
                a href=(publication.link.url) target="_blank" rel="noopener" {
                    (publication.title)
                }
            }
            p.publication-meta {
                span.publisher { (publication.publisher.display_name()) }
                " · "
                span.date-range { (publication.date) }
            }
            @if !publication.summary.is_empty() {
                div.publication-summary {
                    @for line in &publication.summary {
                        p { (line) }
                    }
                }
            }
            (tag_list(present_tags(&publication.tags)))
        }
    }
}

/// One row in the blog listing: date plus linked title.
pub fn post_listing_item(post: Option<&Post>) -> Markup {
    let Some(post) = post else {
        return html! {};
    };
    html! {
        li.post-item {
            span.date-range { (post.date) }
            a href={ "/writing/" (post.slug) "/" } { (post.title) }
        }
    }
}

/// The blog listing, preserving the order the caller established (the load
/// stage sorts newest-first). Empty input renders nothing.
pub fn post_listing(posts: &[Post]) -> Markup {
    html! {
        @if !posts.is_empty() {
            ul.post-listing {
                @for post in posts {
                    (post_listing_item(Some(post)))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_profile, sample_project, sample_publication};
    use crate::model::Publisher;

    fn date(s: &str) -> DateString {
        DateString(s.parse().unwrap())
    }

    // =========================================================================
    // Entity absence: empty render, not an error
    // =========================================================================

    #[test]
    fn absent_entities_render_nothing() {
        assert_eq!(greeting(None).into_string(), "");
        assert_eq!(project_preview(None).into_string(), "");
        assert_eq!(publication_entry(None).into_string(), "");
        assert_eq!(post_listing_item(None).into_string(), "");
        assert_eq!(post_listing(&[]).into_string(), "");
    }

    // =========================================================================
    // Project preview sections
    // =========================================================================

    #[test]
    fn project_preview_full_entity_has_all_sections() {
        let project = sample_project();
        let html = project_preview(Some(&project)).into_string();

        assert!(html.contains("project-name"));
        assert!(html.contains("Timeline Explorer"));
        assert!(html.contains("project-summary"));
        assert!(html.contains("project-cover"));
        assert!(html.contains("tag-list"));
        assert!(html.contains("date-range"));
    }

    #[test]
    fn minimal_project_scenario() {
        // Demo project: one summary line, no cover, no tags, open-ended range
        let project = Project {
            name: "Demo".to_string(),
            summary: vec!["One line.".to_string()],
            cover: None,
            tags: None,
            start_date: date("2023-01-01"),
            end_date: None,
            link: None,
        };
        let html = project_preview(Some(&project)).into_string();

        assert!(html.contains("Demo"));
        assert!(html.contains("<p>One line.</p>"));
        assert!(html.contains("2023-01-01 – present"));
        assert!(!html.contains("tag-list"));
        assert!(!html.contains("project-cover"));
        assert!(!html.contains("project-link"));
    }

    #[test]
    fn closed_date_range_shows_both_ends() {
        let mut project = sample_project();
        project.end_date = Some(date("2024-06-30"));
        let html = project_preview(Some(&project)).into_string();
        assert!(html.contains("2023-05-01 – 2024-06-30"));
    }

    #[test]
    fn empty_tags_collapse_like_absent_tags() {
        let mut project = sample_project();
        project.tags = Some(vec![]);
        let with_empty = project_preview(Some(&project)).into_string();
        project.tags = None;
        let with_absent = project_preview(Some(&project)).into_string();

        assert!(!with_empty.contains("tag-list"));
        assert_eq!(with_empty, with_absent);
    }

    #[test]
    fn empty_summary_emits_no_summary_section() {
        let mut project = sample_project();
        project.summary = vec![];
        let html = project_preview(Some(&project)).into_string();
        assert!(!html.contains("project-summary"));
    }

    #[test]
    fn summary_lines_preserve_order() {
        let mut project = sample_project();
        project.summary = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let html = project_preview(Some(&project)).into_string();

        let a = html.find("<p>a</p>").unwrap();
        let b = html.find("<p>b</p>").unwrap();
        let c = html.find("<p>c</p>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn rendering_is_idempotent() {
        let project = sample_project();
        let first = project_preview(Some(&project)).into_string();
        let second = project_preview(Some(&project)).into_string();
        assert_eq!(first, second);

        let profile = sample_profile();
        assert_eq!(
            greeting(Some(&profile)).into_string(),
            greeting(Some(&profile)).into_string()
        );
    }

    // =========================================================================
    // Greeting sections
    // =========================================================================

    #[test]
    fn greeting_shows_full_name_and_position() {
        let profile = sample_profile();
        let html = greeting(Some(&profile)).into_string();
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Engineer"));
    }

    #[test]
    fn sparse_profile_scenario() {
        // First name only, empty lists: name renders alone, no empty sections
        let profile = Profile {
            first_name: "Ada".to_string(),
            last_name: None,
            position: Some("Engineer".to_string()),
            summary: vec![],
            avatar: sample_profile().avatar,
            location: None,
            tags: vec![],
            social_links: vec![],
        };
        let html = greeting(Some(&profile)).into_string();

        assert!(html.contains(">Ada</h1>"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("avatar"));
        assert!(!html.contains("greeting-summary"));
        assert!(!html.contains("tag-list"));
        assert!(!html.contains("greeting-location"));
    }

    #[test]
    fn greeting_tags_preserve_order() {
        let mut profile = sample_profile();
        profile.tags = vec![
            Tag("rust".to_string()),
            Tag("api-design".to_string()),
            Tag("writing".to_string()),
        ];
        let html = greeting(Some(&profile)).into_string();
        let rust = html.find("rust").unwrap();
        let api = html.find("api-design").unwrap();
        let writing = html.find("writing").unwrap();
        assert!(rust < api && api < writing);
    }

    // =========================================================================
    // Publication entry
    // =========================================================================

    #[test]
    fn publication_entry_shows_outlet_and_date() {
        let publication = sample_publication();
        let html = publication_entry(Some(&publication)).into_string();
        assert!(html.contains("Medium"));
        assert!(html.contains("2024-03-10"));
        assert!(html.contains("https://medium.com/@ada/timeline"));
    }

    #[test]
    fn publication_outlet_uses_display_name() {
        let mut publication = sample_publication();
        publication.publisher = Publisher::Freecodecamp;
        let html = publication_entry(Some(&publication)).into_string();
        assert!(html.contains("freeCodeCamp"));
    }

    // =========================================================================
    // Canonical projections
    // =========================================================================

    #[test]
    fn link_anchor_derives_label_and_opens_external_in_new_tab() {
        let link = Link {
            url: "https://github.com/ada".to_string(),
            label: None,
        };
        let html = link_anchor(&link).into_string();
        assert!(html.contains(">github.com/ada</a>"));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener""#));
    }

    #[test]
    fn internal_link_stays_in_tab() {
        let link = Link {
            url: "/writing/".to_string(),
            label: Some("Writing".to_string()),
        };
        let html = link_anchor(&link).into_string();
        assert!(html.contains(">Writing</a>"));
        assert!(!html.contains("target"));
    }

    #[test]
    fn figure_caption_is_alt_text_and_figcaption() {
        let image = ImageRef {
            source: "avatar.png".to_string(),
            caption: Some("Ada at a whiteboard".to_string()),
        };
        let html = figure_image(&image, "avatar").into_string();
        assert!(html.contains(r#"alt="Ada at a whiteboard""#));
        assert!(html.contains("<figcaption>Ada at a whiteboard</figcaption>"));
        assert!(html.contains(r#"src="/assets/avatar.png""#));
    }

    #[test]
    fn captionless_figure_has_empty_alt_no_figcaption() {
        let image = ImageRef {
            source: "cover.png".to_string(),
            caption: None,
        };
        let html = figure_image(&image, "project-cover").into_string();
        assert!(html.contains(r#"alt="""#));
        assert!(!html.contains("figcaption"));
    }

    // =========================================================================
    // Chrome
    // =========================================================================

    #[test]
    fn base_document_includes_doctype() {
        let content = html! { p { "test" } };
        let doc = base_document("Test", "body {}", content).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test</title>"));
    }

    #[test]
    fn header_marks_current_section() {
        let html = site_header("Portfolio", "/writing/").into_string();
        assert!(html.contains(r#"class="current""#));
        assert!(html.contains("Publications"));
        assert!(html.contains("Writing"));
    }

    #[test]
    fn footer_lists_social_links() {
        let profile = sample_profile();
        let html = site_footer(&profile).into_string();
        assert!(html.contains("social-links"));
        assert!(html.contains("github.com/ada"));
    }

    #[test]
    fn footer_collapses_without_social_links() {
        let mut profile = sample_profile();
        profile.social_links = vec![];
        assert_eq!(site_footer(&profile).into_string(), "");
    }

    #[test]
    fn markup_is_escaped() {
        let mut project = sample_project();
        project.name = "<script>alert('xss')</script>".to_string();
        let html = project_preview(Some(&project)).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
