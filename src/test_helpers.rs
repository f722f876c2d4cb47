//! Shared test utilities for the folio test suite.
//!
//! Provides a content-tree fixture builder plus in-memory sample entities for
//! component tests that never touch the filesystem.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_content();
//! let site = crate::content::load(tmp.path()).unwrap();
//! assert_eq!(site.profile.first_name, "Ada");
//!
//! let html = crate::render::project_preview(Some(&sample_project())).into_string();
//! assert!(html.contains("Timeline Explorer"));
//! ```

use std::fs;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::content::Site;
use crate::model::{
    DateString, ImageRef, Link, Post, Profile, Project, Publication, Publisher, Tag,
};

// =========================================================================
// Fixture setup
// =========================================================================

const PROFILE_TOML: &str = r#"
first_name = "Ada"
last_name = "Lovelace"
position = "Engineer"
summary = [
    "I build small tools and write about network APIs.",
    "Currently poking at social timeline internals.",
]
location = "London"
tags = ["rust", "api-design"]
avatar = { source = "avatar.png", caption = "Ada at a whiteboard" }
social_links = [
    { url = "https://github.com/ada" },
    { url = "https://fosstodon.org/@ada", label = "Mastodon" },
]
"#;

const PROJECTS_TOML: &str = r#"
[[projects]]
name = "Folio"
summary = ["This site. A single-binary static site generator."]
tags = ["rust", "static-site"]
start_date = "2024-01-15"
link = { url = "https://github.com/ada/folio" }

[[projects]]
name = "Timeline Explorer"
summary = [
    "Visualizes a social timeline API's pagination and entity embedding.",
    "Built while reverse-engineering the response shapes.",
]
cover = { source = "covers/timeline.png", caption = "Timeline Explorer screenshot" }
tags = ["typescript", "api-design"]
start_date = "2023-05-01"
link = { url = "https://github.com/ada/timeline-explorer" }
"#;

const PUBLICATIONS_TOML: &str = r#"
[[publications]]
title = "Reverse-engineering a timeline API"
summary = ["Request and response shapes, cursors, and entity embedding."]
link = { url = "https://medium.com/@ada/timeline" }
date = "2024-03-10"
publisher = "medium"
tags = ["api-design"]

[[publications]]
title = "A field guide to cursor pagination"
link = { url = "https://www.freecodecamp.org/news/cursor-pagination" }
date = "2023-08-20"
publisher = "freecodecamp"
"#;

const POST_TIMELINE_MD: &str = "# Inside a social timeline API\n\n\
How the timeline endpoint *actually* pages: cursors, not offsets.\n\n\
## Sort order\n\nEntries come back newest-first, embedded entities inline.\n";

const POST_HELLO_MD: &str = "# Hello\n\nFirst post.\n";

/// Build a complete, valid content tree in a temp directory.
///
/// Tests get an isolated copy they can mutate (overwrite a registry, delete a
/// file) without affecting other tests.
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::write(root.join("profile.toml"), PROFILE_TOML).unwrap();
    fs::write(root.join("projects.toml"), PROJECTS_TOML).unwrap();
    fs::write(root.join("publications.toml"), PUBLICATIONS_TOML).unwrap();

    fs::create_dir(root.join("posts")).unwrap();
    fs::write(
        root.join("posts/2024-03-10-inside-the-timeline-api.md"),
        POST_TIMELINE_MD,
    )
    .unwrap();
    fs::write(root.join("posts/2023-11-02-hello.md"), POST_HELLO_MD).unwrap();

    fs::create_dir_all(root.join("assets/covers")).unwrap();
    // 1x1 placeholder bytes; the loader only checks existence
    fs::write(root.join("assets/avatar.png"), b"png").unwrap();
    fs::write(root.join("assets/covers/timeline.png"), b"png").unwrap();

    tmp
}

// =========================================================================
// In-memory samples
// =========================================================================

fn date(s: &str) -> DateString {
    DateString(s.parse().unwrap())
}

pub fn sample_profile() -> Profile {
    Profile {
        first_name: "Ada".to_string(),
        last_name: Some("Lovelace".to_string()),
        position: Some("Engineer".to_string()),
        summary: vec![
            "I build small tools and write about network APIs.".to_string(),
            "Currently poking at social timeline internals.".to_string(),
        ],
        avatar: Some(ImageRef {
            source: "avatar.png".to_string(),
            caption: Some("Ada at a whiteboard".to_string()),
        }),
        location: Some("London".to_string()),
        tags: vec![Tag("rust".to_string()), Tag("api-design".to_string())],
        social_links: vec![Link {
            url: "https://github.com/ada".to_string(),
            label: None,
        }],
    }
}

pub fn sample_project() -> Project {
    Project {
        name: "Timeline Explorer".to_string(),
        summary: vec![
            "Visualizes a social timeline API's pagination and entity embedding.".to_string(),
        ],
        cover: Some(ImageRef {
            source: "covers/timeline.png".to_string(),
            caption: None,
        }),
        tags: Some(vec![
            Tag("typescript".to_string()),
            Tag("api-design".to_string()),
        ]),
        start_date: date("2023-05-01"),
        end_date: None,
        link: Some(Link {
            url: "https://github.com/ada/timeline-explorer".to_string(),
            label: Some("Source".to_string()),
        }),
    }
}

pub fn sample_publication() -> Publication {
    Publication {
        title: "Reverse-engineering a timeline API".to_string(),
        summary: vec!["Request and response shapes, cursors, and entity embedding.".to_string()],
        link: Link {
            url: "https://medium.com/@ada/timeline".to_string(),
            label: None,
        },
        date: date("2024-03-10"),
        publisher: Publisher::Medium,
        tags: Some(vec![Tag("api-design".to_string())]),
    }
}

fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            slug: "inside-the-timeline-api".to_string(),
            title: "Inside a social timeline API".to_string(),
            date: date("2024-03-10"),
            body: POST_TIMELINE_MD.to_string(),
        },
        Post {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            date: date("2023-11-02"),
            body: POST_HELLO_MD.to_string(),
        },
    ]
}

/// A fully-populated in-memory site matching the [`setup_content`] fixture.
pub fn sample_site() -> Site {
    Site {
        profile: sample_profile(),
        projects: vec![
            Project {
                name: "Folio".to_string(),
                summary: vec!["This site. A single-binary static site generator.".to_string()],
                cover: None,
                tags: Some(vec![
                    Tag("rust".to_string()),
                    Tag("static-site".to_string()),
                ]),
                start_date: date("2024-01-15"),
                end_date: None,
                link: Some(Link {
                    url: "https://github.com/ada/folio".to_string(),
                    label: None,
                }),
            },
            sample_project(),
        ],
        publications: vec![sample_publication()],
        posts: sample_posts(),
        config: SiteConfig::default(),
    }
}
