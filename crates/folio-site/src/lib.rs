//! Rendering and output layer for the folio portfolio generator.
//!
//! Renders the compiled-in content into five self-contained HTML pages and
//! writes them into a freshly allocated `Website <n>` directory.

pub mod assets;
pub mod builder;
pub mod output;
pub mod pages;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use pages::Page;
