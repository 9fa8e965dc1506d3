//! The five site pages and their render contexts.

use serde::Serialize;

use folio_content::{
    Bilingual, Education, Experience, Project, SiteMeta, Volunteer, COMPETENCIES, EDUCATION,
    EXPERIENCES, FEATURED_INDICES, PROJECTS, SITE, VOLUNTEERING,
};

use crate::assets::PageAssets;

/// The pages of the generated site, in nav order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    CaseStudies,
    Experience,
    Profile,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::CaseStudies,
        Page::Experience,
        Page::Profile,
        Page::Contact,
    ];

    /// Output filename inside the site directory.
    pub fn filename(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::CaseStudies => "casestudies.html",
            Page::Experience => "experience.html",
            Page::Profile => "profile.html",
            Page::Contact => "contact.html",
        }
    }

    /// Built-in template rendering this page.
    pub fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::CaseStudies => "casestudies.html",
            Page::Experience => "experience.html",
            Page::Profile => "profile.html",
            Page::Contact => "contact.html",
        }
    }

    /// Browser-tab title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::CaseStudies => "Case Studies",
            Page::Experience => "Experience",
            Page::Profile => "Profile",
            Page::Contact => "Contact",
        }
    }

    /// Label in the nav bar.
    pub fn nav_label(self) -> Bilingual {
        match self {
            Page::Home => Bilingual::new("Index", "Forside"),
            Page::CaseStudies => Bilingual::new("Case Studies", "Case studier"),
            Page::Experience => Bilingual::new("Work Experience", "Arbejdserfaring"),
            Page::Profile => Bilingual::new("Profile", "Profil"),
            Page::Contact => Bilingual::new("Contact", "Kontakt"),
        }
    }

    /// Extra classes on `<body>`; the contact page centers vertically.
    fn body_class(self) -> &'static str {
        match self {
            Page::Contact => "flex flex-col min-h-screen",
            _ => "",
        }
    }
}

/// A nav-bar entry.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: Bilingual,
    pub active: bool,
}

/// A featured home-page excerpt. Columns alternate down the list.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedExcerpt {
    pub project: Project,
    pub image_first: bool,
}

/// Everything a page template can reach.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub title: &'static str,
    pub body_class: &'static str,
    pub site: SiteMeta,
    pub nav: Vec<NavItem>,
    pub featured: Vec<FeaturedExcerpt>,
    pub projects: &'static [Project],
    pub experiences: &'static [Experience],
    pub competencies: &'static [Bilingual],
    pub education: &'static [Education],
    pub volunteering: &'static [Volunteer],
    pub form_endpoint: String,
    pub assets: PageAssets,
}

/// Build the render context for one page.
///
/// Every page gets the full content set; the templates pick what they show.
pub fn context_for(page: Page, assets: &PageAssets, form_endpoint: &str) -> PageContext {
    let nav = Page::ALL
        .iter()
        .map(|&p| NavItem {
            href: p.filename(),
            label: p.nav_label(),
            active: p == page,
        })
        .collect();

    let featured = FEATURED_INDICES
        .iter()
        .enumerate()
        .map(|(pos, &idx)| FeaturedExcerpt {
            project: PROJECTS[idx],
            image_first: pos % 2 == 0,
        })
        .collect();

    PageContext {
        title: page.title(),
        body_class: page.body_class(),
        site: SITE,
        nav,
        featured,
        projects: PROJECTS,
        experiences: EXPERIENCES,
        competencies: COMPETENCIES,
        education: EDUCATION,
        volunteering: VOLUNTEERING,
        form_endpoint: form_endpoint.to_string(),
        assets: assets.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_has_one_active_entry() {
        let assets = PageAssets::new(false);

        for page in Page::ALL {
            let ctx = context_for(page, &assets, "");
            let active: Vec<_> = ctx.nav.iter().filter(|i| i.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].href, page.filename());
        }
    }

    #[test]
    fn featured_selection_alternates_columns() {
        let assets = PageAssets::new(false);
        let ctx = context_for(Page::Home, &assets, "");

        assert_eq!(ctx.featured.len(), FEATURED_INDICES.len());
        for (pos, f) in ctx.featured.iter().enumerate() {
            assert_eq!(f.project.id, PROJECTS[FEATURED_INDICES[pos]].id);
            assert_eq!(f.image_first, pos % 2 == 0);
        }
    }

    #[test]
    fn filenames_are_the_five_site_pages() {
        let names: Vec<_> = Page::ALL.iter().map(|p| p.filename()).collect();
        assert_eq!(
            names,
            [
                "index.html",
                "casestudies.html",
                "experience.html",
                "profile.html",
                "contact.html"
            ]
        );
    }
}
