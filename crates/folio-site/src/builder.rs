//! Site builder.
//!
//! One build renders all five pages into a freshly allocated `Website <n>`
//! directory, alongside empty `images/` and `pdfs/` directories the operator
//! fills afterwards. Previous runs are never touched or overwritten. There is
//! no rollback: if a write fails mid-run the files written so far stay on
//! disk and the error propagates.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_content::{ContentError, EDUCATION, EXPERIENCES, PROJECTS, SITE, VOLUNTEERING};

use crate::assets::PageAssets;
use crate::output;
use crate::pages::{self, Page};
use crate::templates::TemplateEngine;

/// Configuration for generating the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory under which `Website <n>` output folders are allocated
    pub base_dir: PathBuf,

    /// Minify the inline CSS
    pub minify: bool,

    /// Form-submission endpoint for the contact page
    pub form_endpoint: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            minify: true,
            form_endpoint: "https://formspree.io/f/YOUR_FORM_ID_HERE".to_string(),
        }
    }
}

/// Result of a generation run.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages written
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// The allocated output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur while generating the site.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid content: {0}")]
    Content(#[from] ContentError),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Portfolio site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Generate the site into a fresh output directory.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        folio_content::validate()?;

        let base = output::resolve_base_dir(&self.config.base_dir);
        let output_dir = output::next_site_dir(&base);

        // Directories first; files are written into them below.
        fs::create_dir_all(&output_dir).map_err(|e| BuildError::Write(e.to_string()))?;
        for sub in ["images", "pdfs"] {
            fs::create_dir_all(output_dir.join(sub))
                .map_err(|e| BuildError::Write(e.to_string()))?;
        }

        let assets = PageAssets::new(self.config.minify);

        let mut page_count = 0;
        for page in Page::ALL {
            let context = pages::context_for(page, &assets, &self.config.form_endpoint);
            let html = self
                .templates
                .render_page(page.template(), &context)
                .map_err(|e| BuildError::Template(e.to_string()))?;

            fs::write(output_dir.join(page.filename()), html)
                .map_err(|e| BuildError::Write(e.to_string()))?;

            tracing::debug!("Wrote {}", page.filename());
            page_count += 1;
        }

        self.write_manifest(&output_dir)?;

        Ok(BuildResult {
            pages: page_count,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir,
        })
    }

    /// Write `manifest.json`: the generated pages plus every asset filename
    /// the content refers to. Generation never checks that the assets exist;
    /// the manifest tells the operator what to drop into `images/` and
    /// `pdfs/`.
    fn write_manifest(&self, output_dir: &Path) -> Result<(), BuildError> {
        let pages: Vec<&str> = Page::ALL.iter().map(|p| p.filename()).collect();

        let mut images = vec![SITE.home_portrait, SITE.profile_portrait];
        images.extend(PROJECTS.iter().map(|p| p.img));
        images.extend(EXPERIENCES.iter().map(|e| e.logo));

        let mut pdfs: Vec<&str> = PROJECTS.iter().map(|p| p.pdf).collect();
        pdfs.extend(EDUCATION.iter().filter_map(|e| e.certificate));
        pdfs.extend(VOLUNTEERING.iter().filter_map(|v| v.certificate));

        let manifest = serde_json::json!({
            "pages": pages,
            "images": images,
            "pdfs": pdfs,
        });

        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(output_dir.join("manifest.json"), json)
            .map_err(|e| BuildError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::FEATURED_INDICES;
    use tempfile::tempdir;

    fn build_in(base: &Path) -> BuildResult {
        let builder = SiteBuilder::new(BuildConfig {
            base_dir: base.to_path_buf(),
            minify: false,
            ..Default::default()
        });
        builder.build().unwrap()
    }

    #[test]
    fn first_run_creates_website_1_with_all_outputs() {
        let temp = tempdir().unwrap();

        let result = build_in(temp.path());

        assert_eq!(result.pages, 5);
        assert_eq!(result.output_dir, temp.path().join("Website 1"));

        // Exactly the five pages, the manifest and the two asset dirs.
        let mut entries: Vec<String> = fs::read_dir(&result.output_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        assert_eq!(
            entries,
            [
                "casestudies.html",
                "contact.html",
                "experience.html",
                "images",
                "index.html",
                "manifest.json",
                "pdfs",
                "profile.html"
            ]
        );

        // Asset directories exist and are empty.
        for sub in ["images", "pdfs"] {
            let dir = result.output_dir.join(sub);
            assert!(dir.is_dir());
            assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        }
    }

    #[test]
    fn reruns_never_overwrite_previous_output() {
        let temp = tempdir().unwrap();

        let first = build_in(temp.path());
        let marker = first.output_dir.join("index.html");
        let original = fs::read_to_string(&marker).unwrap();

        let second = build_in(temp.path());

        assert_eq!(second.output_dir, temp.path().join("Website 2"));
        assert_ne!(first.output_dir, second.output_dir);
        assert_eq!(fs::read_to_string(&marker).unwrap(), original);
    }

    #[test]
    fn every_project_renders_exactly_once_on_the_case_studies_page() {
        let temp = tempdir().unwrap();
        let result = build_in(temp.path());

        let html = fs::read_to_string(result.output_dir.join("casestudies.html")).unwrap();

        for p in PROJECTS {
            let anchor = format!("<article id=\"{}\"", p.id);
            assert_eq!(html.matches(&anchor).count(), 1, "project {}", p.id);
        }
    }

    #[test]
    fn every_experience_and_competency_renders_once() {
        let temp = tempdir().unwrap();
        let result = build_in(temp.path());

        let experience = fs::read_to_string(result.output_dir.join("experience.html")).unwrap();
        for exp in EXPERIENCES {
            assert_eq!(
                experience.matches(exp.period).count(),
                1,
                "experience {}",
                exp.company
            );
        }

        let profile = fs::read_to_string(result.output_dir.join("profile.html")).unwrap();
        assert_eq!(
            profile.matches("Etnografiske metoder").count(),
            1,
            "competency rendered more than once"
        );
    }

    #[test]
    fn bilingual_fields_emit_both_language_variants() {
        let temp = tempdir().unwrap();
        let result = build_in(temp.path());

        let experience = fs::read_to_string(result.output_dir.join("experience.html")).unwrap();
        assert!(experience.contains("Substitute Teacher"));
        assert!(experience.contains("Lærervikar"));

        let home = fs::read_to_string(result.output_dir.join("index.html")).unwrap();
        assert!(home.contains("Selected Work"));
        assert!(home.contains("Udvalgte Projekter"));
    }

    #[test]
    fn tag_lists_render_one_badge_per_tag() {
        let temp = tempdir().unwrap();
        let result = build_in(temp.path());

        let cases = fs::read_to_string(result.output_dir.join("casestudies.html")).unwrap();
        let home = fs::read_to_string(result.output_dir.join("index.html")).unwrap();

        // "Scopus" appears in narrative text too, but only once as a badge.
        assert_eq!(cases.matches(">Scopus</span>").count(), 1);
        assert_eq!(cases.matches(">Epistemology</span>").count(), 1);

        // The first featured project carries its full tag list on the home page.
        let featured = &PROJECTS[FEATURED_INDICES[0]];
        for tag in featured.tags {
            let badge = format!(">{}</span>", tag);
            assert_eq!(home.matches(&badge).count(), 1, "tag {}", tag);
        }
    }

    #[test]
    fn manifest_lists_every_referenced_asset() {
        let temp = tempdir().unwrap();
        let result = build_in(temp.path());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(result.output_dir.join("manifest.json")).unwrap())
                .unwrap();

        let images = manifest["images"].as_array().unwrap();
        let pdfs = manifest["pdfs"].as_array().unwrap();

        for p in PROJECTS {
            assert!(images.iter().any(|v| v == p.img), "missing image {}", p.img);
            assert!(pdfs.iter().any(|v| v == p.pdf), "missing pdf {}", p.pdf);
        }
        assert_eq!(manifest["pages"].as_array().unwrap().len(), 5);
    }
}
