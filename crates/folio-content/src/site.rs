//! Site-wide metadata.

use serde::Serialize;

use crate::bilingual::{bi, Bilingual};

/// Owner and branding data shared by every page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteMeta {
    /// Owner name, used in page titles and the footer
    pub owner: &'static str,
    /// Logo text in the nav bar
    pub brand: &'static str,
    /// Accent suffix appended to the brand
    pub brand_suffix: &'static str,
    pub role: Bilingual,
    /// Portrait filename on the home page, under `images/`
    pub home_portrait: &'static str,
    /// Portrait filename on the profile page, under `images/`
    pub profile_portrait: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_handle: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    owner: "Thomas Julsgaard",
    brand: "T_Julsgaard",
    brand_suffix: ".exe",
    role: bi("Techno-Anthropologist", "Teknoantropolog"),
    home_portrait: "Profile.png",
    profile_portrait: "Profile 2.jpeg",
    linkedin_url: "https://www.linkedin.com/in/thomasjulsgaard/",
    linkedin_handle: "/thomasjulsgaard",
    github_url: "https://github.com/T-Julsgaard",
    github_handle: "/T-Julsgaard",
};
