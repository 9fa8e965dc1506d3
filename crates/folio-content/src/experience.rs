//! Work-experience records.

use serde::Serialize;

use crate::bilingual::{bi, Bilingual};

/// A work-experience entry, rendered into the timeline in declaration order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub role: Bilingual,
    pub company: &'static str,
    /// Display period, not parsed
    pub period: &'static str,
    /// Logo filename under `images/`
    pub logo: &'static str,
    /// Rich text; may contain `<br>` breaks and is emitted unescaped
    pub desc: Bilingual,
}

/// All experience entries, newest first.
pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: bi("Co-founder", "Medstifter"),
        company: "Nordic Mining",
        period: "Feb 2024 – Jul 2025",
        logo: "Nordic mining logo.png",
        desc: bi(
            "Developed a model to assess the profitability of flexible data centers in green energy grids. Modeled in collaboration with Energistyrelsen.<br><br>Selected for the AAU Innovator Hub incubation program.",
            "Udviklede model til vurdering af fleksible datacentres bidrag til profitabilitet af grøn energi. Modelleret i samarbejde med Energistyrelsen.<br><br>Optaget i AAU Innovator Hub (inkubationsprogram).",
        ),
    },
    Experience {
        role: bi("Head of Technical Support", "Leder af teknisk support"),
        company: "Introtech Ventures",
        period: "Sep 2024 – Feb 2025",
        logo: "Introtech logo.png",
        desc: bi(
            "Responsible for providing guidance and support to the operating teams, as well as overseeing key initiatives and ensuring task follow-up.<br><br>Provided strategic guidance and advice on growth plans to drive business expansion, assess the competitive landscape, and advise senior management on key initiatives.",
            "Ansvarlig for at yde vejledning og support til driftsteamet samt for at overvåge centrale initiativer og sikre opfølgning på opgaver.<br><br>Ydede strategisk rådgivning og vejledning om vækstplaner med henblik på at drive forretningsudvikling, vurdere konkurrencesituationen og rådgive den øverste ledelse om centrale initiativer.",
        ),
    },
    Experience {
        role: bi("Fundraiser", "Fundraiser"),
        company: "UNICEF",
        period: "Nov 2023 – Jan 2024",
        logo: "Unicef logo.png",
        desc: bi(
            "Direct engagement and fundraising for humanitarian aid initiatives.",
            "Direkte engagement og fundraising til humanitære hjælpeinitiativer.",
        ),
    },
    Experience {
        role: bi("Substitute Teacher", "Lærervikar"),
        company: "Artium",
        period: "Jan 2022 – Jun 2022",
        logo: "Artium logo.PNG",
        desc: bi(
            "Classroom management and educational support.",
            "Klasseledelse og faglig støtte.",
        ),
    },
    Experience {
        role: bi("Social Care Assistant", "Pædagogmedhjælper"),
        company: "Brande Åbo",
        period: "Jan 2021 – Aug 2021",
        logo: "Brande åbo logo.png",
        desc: bi(
            "Pedagogical support and care for residents with physical and mental disabilities.",
            "Pædagogisk støtte og omsorg for beboere med fysiske og psykiske funktionsnedsættelser.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_are_bilingual() {
        for exp in EXPERIENCES {
            assert!(exp.role.is_complete(), "{} role incomplete", exp.company);
            assert!(exp.desc.is_complete(), "{} desc incomplete", exp.company);
        }
    }
}
