//! Profile-page records: competencies, education and volunteering.

use serde::Serialize;

use crate::bilingual::{bi, Bilingual};

/// Core competencies, rendered as a grid of skill cards.
pub const COMPETENCIES: &[Bilingual] = &[
    bi("Ethnographic methods", "Etnografiske metoder"),
    bi("Qualitative & quantitative methods", "Kvalitative & kvantitative metoder"),
    bi("User involvement", "Brugerinddragelse"),
    bi("Interviewing", "Interviewteknik"),
    bi("AI alignment", "AI alignment"),
    bi("UI/UX research", "UI/UX research"),
    bi("Human-centered design", "Brugercentreret design"),
    bi(
        "Participatory technology assessment & design",
        "Participatorisk teknologivurdering & design",
    ),
    bi("Data scraping", "Data scraping"),
    bi("Network analysis", "Netværksanalyse"),
    bi("Data visualization", "Datavisualisering"),
    bi("Gephi", "Gephi"),
    bi("Philosophy of technology", "Teknologifilosofi"),
    bi("Life-cycle assessment (LCA)", "Livscyklusvurdering (LCA)"),
    bi("Problem-based learning (PBL)", "Problembaseret læring (PBL)"),
    bi("Adobe Photoshop / Premiere Pro", "Adobe Photoshop / Premiere Pro"),
];

/// An education entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub degree: Bilingual,
    pub institution: Bilingual,
    pub period: &'static str,
    /// Optional remark (grade average, tooling, ...)
    pub note: Option<Bilingual>,
    /// Certificate filename under `pdfs/`, if one is published
    pub certificate: Option<&'static str>,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: bi("BSc, Techno-Anthropology", "BSc, Teknoantropologi"),
        institution: bi("Aalborg University, Copenhagen", "Aalborg Universitet, København"),
        period: "2022 – 2025",
        note: Some(bi(
            "Weighted avg: 11.3 (Danish 7-scale) / ~3.9 GPA equivalent.",
            "Vægtet gennemsnit: 11,3 (7-trins-skala).",
        )),
        certificate: Some("Thomas Julsgaard, BSc, Teknoantropologi [redacted CPR].pdf"),
    },
    Education {
        degree: bi("Film Production", "Film Produktion"),
        institution: bi("Askov Folk High School", "Askov Højskole"),
        period: "2021",
        note: Some(bi(
            "Proficiency in the Adobe Suite (Premiere Pro, Photoshop).",
            "Fortrolig med Adobe-pakken (Premiere Pro, Photoshop).",
        )),
        certificate: None,
    },
    Education {
        degree: bi(
            "IBG / Democracy & Globalization",
            "IBG / Demokrati & Globalisering",
        ),
        institution: bi("Ikast-Brande Gymnasium", "Ikast-Brande Gymnasium"),
        period: "2017 – 2020",
        note: None,
        certificate: None,
    },
];

/// A volunteering entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Volunteer {
    pub role: Bilingual,
    pub organisation: Bilingual,
    /// Display period; bilingual because "Present" is translated
    pub period: Bilingual,
    pub certificate: Option<&'static str>,
}

pub const VOLUNTEERING: &[Volunteer] = &[
    Volunteer {
        role: bi("Vice Chairman", "Næstformand"),
        organisation: bi(
            "Askov Folk High School Student Association",
            "Askov Højskoles elevforening",
        ),
        period: bi("Aug 2022 - Present", "Aug 2022 - Nu"),
        certificate: None,
    },
    Volunteer {
        role: bi("Tutor", "Tutor"),
        organisation: bi("Aalborg University", "Aalborg Universitet"),
        period: bi("Sep 2023 - Dec 2023", "Sep 2023 - Dec 2023"),
        certificate: Some("Tutor certificate 2023.pdf"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competencies_are_bilingual() {
        for c in COMPETENCIES {
            assert!(c.is_complete(), "incomplete competency: {}", c.en);
        }
    }

    #[test]
    fn education_notes_are_bilingual_when_present() {
        for e in EDUCATION {
            assert!(e.degree.is_complete());
            assert!(e.institution.is_complete());
            if let Some(note) = e.note {
                assert!(note.is_complete(), "incomplete note on {}", e.degree.en);
            }
        }
    }
}
