//! Compiled-in portfolio content.
//!
//! This crate holds the record types and the literal content for the site:
//! projects, work experience, competencies, education, volunteering and the
//! site-wide metadata. Records are declared once as `&'static str` data and
//! never mutated; the renderer consumes them in declaration order.

pub mod bilingual;
pub mod experience;
pub mod profile;
pub mod project;
pub mod site;
pub mod validate;

pub use bilingual::Bilingual;
pub use experience::{Experience, EXPERIENCES};
pub use profile::{Education, Volunteer, COMPETENCIES, EDUCATION, VOLUNTEERING};
pub use project::{Project, FEATURED_INDICES, PROJECTS};
pub use site::{SiteMeta, SITE};
pub use validate::{validate, ContentError};
