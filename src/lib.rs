//! # Folio
//!
//! A minimal static site generator for personal portfolio and blog sites.
//! Your content directory is the data source: TOML registries describe the
//! site owner, their projects, and their published articles; markdown files
//! become blog posts.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Load      content/  →  Site     (registries + markdown → typed data)
//! 2. Generate  Site      →  dist/    (final HTML site)
//! ```
//!
//! The stages are strictly one-directional: the load stage produces an
//! immutable [`content::Site`], the generate stage borrows it read-only, and
//! nothing flows back. This separation exists for two reasons:
//!
//! - **Fail early**: every authoring mistake — a publisher outside the known
//!   set, a malformed date or URL, a missing asset — is caught while loading,
//!   before a single page renders. The rendering layer never sees invalid
//!   content.
//! - **Testability**: rendering is a pure function from data to markup, so
//!   component tests run entirely in memory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Value types (`Tag`, `Link`, `DateString`, `ImageRef`) and entities (`Profile`, `Project`, `Publication`, `Post`) with their canonical projections |
//! | [`content`] | Stage 1 — loads and validates the content registries into a `Site` |
//! | [`naming`] | `YYYY-MM-DD-slug` post filename convention parser |
//! | [`render`] | Presentational maud components: greeting, project previews, publication entries, post listings |
//! | [`generate`] | Stage 2 — assembles pages and writes the final site |
//! | [`config`] | `config.toml` loading, defaults-merging, validation, and CSS variable generation |
//! | [`output`] | CLI output formatting — content inventory and build reports |
//!
//! # Design Decisions
//!
//! ## Typed Registries Over Front Matter
//!
//! Profile, projects, and publications live in TOML files deserialized into
//! closed structs (`deny_unknown_fields` everywhere, `Publisher` as an enum
//! rather than a free string). New-content mistakes are load-time errors with
//! the offending file named, not silently-wrong pages. The one exception is
//! blog posts, which stay plain markdown with the date in the filename: no
//! front matter to parse, the filesystem is the ordering truth.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, interpolation is auto-escaped, and there is no
//! template directory to ship or get out of sync.
//!
//! ## Absence Renders As Nothing
//!
//! Every entity component takes `Option<&T>` and maps `None` to empty markup.
//! Optional fields that are absent (and list fields that are empty)
//! contribute no section; the site never shows an empty shell or a
//! placeholder. The same collapse rule applies uniformly, so content authors
//! control page structure purely by what they write down.
//!
//! ## Profile Variants
//!
//! A content tree can carry several profiles (`profile.toml`,
//! `profile.zh.toml`, ...); `config.toml`'s `profile_variant` key picks which
//! one a build uses. This keeps differently-localized builds on one content
//! tree instead of forking it.

pub mod config;
pub mod content;
pub mod generate;
pub mod model;
pub mod naming;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
