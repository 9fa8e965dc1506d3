//! Content validation.
//!
//! The records are literal data, so validation cannot fail at runtime unless
//! an edit broke an invariant. The builder still runs this before writing
//! anything, so a broken record aborts the run instead of shipping a page
//! with a missing translation or a duplicated anchor.

use std::collections::HashSet;

use crate::bilingual::Bilingual;
use crate::project::Project;
use crate::{COMPETENCIES, EDUCATION, EXPERIENCES, PROJECTS, SITE, VOLUNTEERING};

/// Errors raised by a broken content record.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),

    #[error("Missing translation in {0}")]
    IncompleteBilingual(String),
}

/// Check every shipped record against the content invariants.
pub fn validate() -> Result<(), ContentError> {
    validate_projects(PROJECTS)?;

    check(SITE.role, "site role")?;
    for exp in EXPERIENCES {
        check(exp.role, &format!("experience role ({})", exp.company))?;
        check(exp.desc, &format!("experience description ({})", exp.company))?;
    }
    for c in COMPETENCIES {
        check(*c, &format!("competency '{}'", c.en))?;
    }
    for e in EDUCATION {
        check(e.degree, "education degree")?;
        check(e.institution, &format!("education institution ({})", e.degree.en))?;
        if let Some(note) = e.note {
            check(note, &format!("education note ({})", e.degree.en))?;
        }
    }
    for v in VOLUNTEERING {
        check(v.role, "volunteer role")?;
        check(v.organisation, &format!("volunteer organisation ({})", v.role.en))?;
        check(v.period, &format!("volunteer period ({})", v.role.en))?;
    }

    Ok(())
}

/// Reject a duplicated project id anywhere in the list.
fn validate_projects(projects: &[Project]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for p in projects {
        if !seen.insert(p.id) {
            return Err(ContentError::DuplicateProjectId(p.id.to_string()));
        }
    }
    Ok(())
}

fn check(field: Bilingual, what: &str) -> Result<(), ContentError> {
    if field.is_complete() {
        Ok(())
    } else {
        Err(ContentError::IncompleteBilingual(what.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bilingual::bi;
    use pretty_assertions::assert_eq;

    fn project(id: &'static str) -> Project {
        Project {
            id,
            title: "Title",
            subtitle: "Subtitle",
            img: "img.png",
            pdf: "report.pdf",
            tags: &["Tag"],
            summary: "Summary",
            context: "Context",
            methods: "Methods",
            outcomes: "Outcomes",
        }
    }

    #[test]
    fn shipped_content_is_valid() {
        validate().unwrap();
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn duplicated_project_id_is_rejected() {
        let projects = [project("alpha"), project("beta"), project("alpha")];

        let err = validate_projects(&projects).unwrap_err();

        match err {
            ContentError::DuplicateProjectId(id) => assert_eq!(id, "alpha"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn missing_translation_is_rejected() {
        let err = check(bi("Only English", ""), "test field").unwrap_err();

        match err {
            ContentError::IncompleteBilingual(what) => assert_eq!(what, "test field"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
