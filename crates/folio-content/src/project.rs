//! Case-study project records.

use serde::Serialize;

/// A case-study project.
///
/// Each project is rendered twice at most: as a featured excerpt on the home
/// page (if its index is in [`FEATURED_INDICES`]) and as a full article on
/// the case-studies page. The image and PDF filenames refer to assets the
/// operator drops into `images/` and `pdfs/` next to the generated pages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    /// Stable anchor key, unique across all projects
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Cover image filename under `images/`
    pub img: &'static str,
    /// Report filename under `pdfs/`
    pub pdf: &'static str,
    /// Tag badges, rendered in order
    pub tags: &'static [&'static str],
    pub summary: &'static str,
    pub context: &'static str,
    pub methods: &'static str,
    pub outcomes: &'static str,
}

/// Indices into [`PROJECTS`] shown on the home page, in display order.
/// Columns alternate image-first/text-first down the list.
pub const FEATURED_INDICES: [usize; 3] = [0, 4, 2];

/// All case studies, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: "transcending",
        title: "Transcending the Disciplinary Divide",
        subtitle: "Digital Methods & Interactional Expertise",
        img: "Transcending the disciplinary divide.png",
        pdf: "Transcending the disciplinary divide.pdf",
        tags: &["Network Analysis", "Scopus", "Epistemology"],
        summary: "Investigating how digital methods can guide 'interactional expertise' to bridge gaps between distinct scientific disciplines.",
        context: "Interdisciplinary collaboration is crucial in post-normal science, yet experts often lack a shared language. We explored how to identify 'blind spots' between disciplines.",
        methods: "Co-occurrence network analysis of 1,500 Scopus articles on Bitcoin mining combined with qualitative expert group interviews with energy engineers.",
        outcomes: "Developed a method to visualize disciplinary heterogeneity, allowing Techno-Anthropologists to strategically target where 'bridges' need to be built between experts.",
    },
    Project {
        id: "wegovy",
        title: "Wegovy: a matter of fa(c)t?",
        subtitle: "A Digital Ethnography",
        img: "Wegovy a matter of fact.png",
        pdf: "Wegovy a matter of fact.pdf",
        tags: &["Digital Methods", "Controversy Mapping", "ANT"],
        summary: "Tracing the socio-technical controversies of the weight-loss drug Wegovy across six different digital platforms.",
        context: "Wegovy is not just a medical molecule; it is a cultural phenomenon intervening in concepts of body image, economics, and health policy.",
        methods: "Scraped 150,000+ data points from Reddit, X, Mumsnet, and Scopus. Applied Actor-Network Theory (Latour's 'Matters of Concern') and network visualization.",
        outcomes: "Mapped how the 'fact' of Wegovy mutates across platforms—from a financial asset on X to a lifestyle struggle on Mumsnet—revealing it as a heterogenous network rather than a singular product.",
    },
    Project {
        id: "sorte-boks",
        title: "Den sorte boks i den hvide verden",
        subtitle: "AI in Radiology: A Praxiographic Analysis",
        img: "Den sorte boks i den hvide verden.png",
        pdf: "Den sorte boks i den hvide verden.pdf",
        tags: &["Praxiography", "Clinical AI", "Healthcare"],
        summary: "An investigation into how Artificial Intelligence is practiced differently by developers, administrators, and clinicians.",
        context: "AI is often presented as a solution to healthcare pressure, but 'AI' means different things to a hospital director vs. a radiologist.",
        methods: "Praxiography (Annemarie Mol) based on interviews with actors from RAIT, Radiobotics, and Herlev-Gentofte Hospital.",
        outcomes: "Identified conflicting 'logics' (Market vs. Professional vs. Administrative). Developed a translation tool to help stakeholders align their expectations of AI implementation.",
    },
    Project {
        id: "vr-sion",
        title: "Hvilken VR-sion af dig?",
        subtitle: "Virtual Ethnography in VRChat",
        img: "Hvilken VR-sion af dig.png",
        pdf: "Hvilken VR-sion af dig.pdf",
        tags: &["Virtual Ethnography", "Postphenomenology", "Identity"],
        summary: "Exploring how social identity and bodily experience are reconstructed inside the virtual worlds of VRChat.",
        context: "Social VR is not just a game but a space for identity formation, particularly for socially marginalized individuals.",
        methods: "Avatar-based ethnography and interviews within VRChat, analyzed through Verbeek's postphenomenological framework.",
        outcomes: "Documented the phenomenon of 'Phantom Touch' and how users leverage virtual anonymity to perform and eventually integrate new aspects of their physical identity.",
    },
    Project {
        id: "bussen",
        title: "Så kører bussen, selv",
        subtitle: "Participatory Technology Assessment",
        img: "Så kører bussen, selv.png",
        pdf: "Så kører bussen, selv.pdf",
        tags: &["Autonomous Vehicles", "Citizen Summit", "PTA"],
        summary: "A democratic assessment of self-driving buses, focusing on trust, safety, and social accessibility.",
        context: "The transition to autonomous public transport is often driven by technology, overlooking the social reality of the passengers.",
        methods: "Organized a 'Citizen Summit' (Borgertopmøde) combined with expert interviews (Movia, Holo) to facilitate democratic debate.",
        outcomes: "Concluded that passengers prioritize flexibility and cybersecurity over futuristic 'pods', recommending a gradual implementation strategy to build social trust.",
    },
    Project {
        id: "plantebaseret",
        title: "Meningstilskrivelser af plantebaseret kød",
        subtitle: "Understanding Stigmatization",
        img: "Meningstilskrivelser af plantebaseret kød.png",
        pdf: "Meningstilskrivelser af plantebaseret kød.pdf",
        tags: &["Food Studies", "Mixed Methods", "Stigma"],
        summary: "Investigating the social stigma surrounding plant-based meat alternatives among Danish consumers.",
        context: "Despite climate goals, young Danes struggle to change dietary habits. We investigated the social friction of ordering 'fake meat'.",
        methods: "Mixed methods approach utilizing a quantitative survey (n=954) and qualitative semi-structured interviews.",
        outcomes: "Found a correlation between diet type and felt stigmatization. Omnivores associate meat with 'tradition' and 'masculinity', creating a social barrier for adopting plant-based alternatives.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_indices_are_in_range() {
        for idx in FEATURED_INDICES {
            assert!(idx < PROJECTS.len(), "featured index {} out of range", idx);
        }
    }

    #[test]
    fn every_project_has_tags() {
        for p in PROJECTS {
            assert!(!p.tags.is_empty(), "project {} has no tags", p.id);
        }
    }
}
