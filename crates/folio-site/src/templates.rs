//! Template engine for rendering the portfolio pages.
//!
//! The five page templates extend one base layout which pulls in the shared
//! nav and footer fragments. Bilingual fields are emitted by the `bi` macro
//! as two parallel nodes; the client-side toggle decides which one is
//! visible. All templates are embedded in the binary.

use minijinja::Environment;

use crate::pages::PageContext;

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new engine with the built-in templates loaded.
    pub fn new() -> Self {
        let mut env = Environment::new();

        let templates = [
            ("macros.html", MACROS_TEMPLATE),
            ("base.html", BASE_TEMPLATE),
            ("nav.html", NAV_TEMPLATE),
            ("footer.html", FOOTER_TEMPLATE),
            ("home.html", HOME_TEMPLATE),
            ("casestudies.html", CASESTUDIES_TEMPLATE),
            ("experience.html", EXPERIENCE_TEMPLATE),
            ("profile.html", PROFILE_TEMPLATE),
            ("contact.html", CONTACT_TEMPLATE),
        ];

        for (name, source) in templates {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render a full page document using the named template.
    pub fn render_page(
        &self,
        template: &str,
        context: &PageContext,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const MACROS_TEMPLATE: &str = r##"{% macro bi(t) %}<span class="lang-en">{{ t.en }}</span><span class="lang-da hidden">{{ t.da }}</span>{% endmacro %}
{% macro bi_html(t) %}<span class="lang-en">{{ t.en | safe }}</span><span class="lang-da hidden">{{ t.da | safe }}</span>{% endmacro %}"##;

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }} | {{ site.owner }}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;800&family=Space+Grotesk:wght@400;500;700&display=swap" rel="stylesheet">
  <script>
{{ assets.tailwind_config | safe }}
  </script>
  <style>
{{ assets.inline_css | safe }}
  </style>
</head>
<body class="bg-stone-50 text-stone-900 pt-20{% if body_class %} {{ body_class }}{% endif %}">
  {% include "nav.html" %}
{% block content %}{% endblock %}
  {% include "footer.html" %}
  <script>
{{ assets.shared_js | safe }}
  </script>
{% block scripts %}{% endblock %}
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<nav class="fixed top-0 w-full z-50 bg-white/95 backdrop-blur-md border-b border-stone-200">
    <div class="max-w-6xl mx-auto px-6 h-20 flex justify-between items-center">
      <a href="index.html" class="font-mono font-bold text-lg tracking-tighter group text-stone-900">
        {{ site.brand }}<span class="text-teal-600">{{ site.brand_suffix }}</span>
      </a>

      <div class="hidden md:flex items-center gap-8">
        <div class="flex gap-8">
          {% for item in nav %}
          <a href="{{ item.href }}" class="font-mono text-sm uppercase tracking-widest py-1 transition-all duration-300 {% if item.active %}text-stone-900 border-b-2 border-teal-600 font-semibold{% else %}text-stone-500 hover:text-teal-600{% endif %}">
            <span class="lang-en">{{ item.label.en }}</span><span class="lang-da hidden">{{ item.label.da }}</span>
          </a>
          {% endfor %}
        </div>
        <div class="flex items-center gap-2 font-mono text-xs border border-stone-200 rounded-full px-1 py-1">
          <button onclick="setLang('en')" id="btn-en" class="px-3 py-1 rounded-full transition-colors bg-stone-900 text-white">EN</button>
          <button onclick="setLang('da')" id="btn-da" class="px-3 py-1 rounded-full transition-colors text-stone-500 hover:text-stone-900">DA</button>
        </div>
      </div>

      <div class="md:hidden flex items-center gap-4">
        <div class="flex items-center gap-1 font-mono text-[10px] border border-stone-200 rounded-full px-1 py-1">
          <button onclick="setLang('en')" id="btn-en-mob" class="px-2 py-1 rounded-full transition-colors bg-stone-900 text-white">EN</button>
          <button onclick="setLang('da')" id="btn-da-mob" class="px-2 py-1 rounded-full transition-colors text-stone-500 hover:text-stone-900">DA</button>
        </div>
        <button id="mobile-menu-btn" class="text-stone-900 focus:outline-none">
          <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path></svg>
        </button>
      </div>
    </div>

    <div id="mobile-menu" class="md:hidden bg-white border-b border-stone-200 px-6">
      {% for item in nav %}
      <a href="{{ item.href }}" class="block py-3 border-b border-stone-100 font-mono text-sm uppercase tracking-widest text-stone-600 hover:text-teal-600">
        <span class="lang-en">{{ item.label.en }}</span><span class="lang-da hidden">{{ item.label.da }}</span>
      </a>
      {% endfor %}
    </div>
  </nav>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="bg-stone-900 text-stone-400 py-16 mt-20 relative z-10">
    <div class="max-w-6xl mx-auto px-6 flex flex-col md:flex-row justify-between items-start gap-8">
      <div class="mb-4 md:mb-0">
        <h3 class="font-mono text-stone-100 text-lg mb-2">{{ site.owner }}</h3>
        <p class="font-light text-sm max-w-xs">
          <span class="lang-en">{{ site.role.en }}.</span>
          <span class="lang-da hidden">{{ site.role.da }}.</span>
        </p>
      </div>
      <div class="flex flex-wrap gap-6 font-mono text-sm">
        <a href="contact.html" class="hover:text-teal-400 transition"><span class="lang-en">Contact</span><span class="lang-da hidden">Kontakt</span></a>
      </div>
    </div>
  </footer>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
  <main class="max-w-6xl mx-auto px-6">
    <section class="grid md:grid-cols-2 gap-12 items-start pt-10 md:pt-20 pb-16">
      <div class="order-2 md:order-1 relative z-10 animate-fade-up">
        <p class="font-mono text-teal-700 mb-6 tracking-widest text-sm uppercase font-bold">{{ site.role.en }}</p>
        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight tracking-tighter mb-8 max-w-2xl text-stone-900">
          <span class="lang-en">Bridging the gap<br>between data<br>and <span class="text-transparent bg-clip-text bg-gradient-to-r from-stone-900 to-teal-900">human insight.</span></span>
          <span class="lang-da hidden">Brobygger<br>mellem data og<br><span class="whitespace-nowrap text-transparent bg-clip-text bg-gradient-to-r from-stone-900 to-teal-900">menneskelig indsigt.</span></span>
        </h1>
        <p class="text-lg md:text-xl text-stone-600 max-w-2xl font-light leading-relaxed border-l-2 border-teal-600 pl-6 mt-8">
          <span class="lang-en">My strength lies in speaking both 'developer' and 'user'. I translate complex technical systems into concrete design and organizational strategies.</span>
          <span class="lang-da hidden">Min styrke ligger i at tale både 'udvikler' og 'bruger'. Jeg oversætter komplekse tekniske systemer til konkrete designs og organisatoriske strategier.</span>
        </p>
        <div id="prank-container" class="relative mt-6 w-full max-w-4xl h-96 border border-transparent">
          <button id="runaway-btn" class="hidden md:inline-block bg-stone-900 text-white px-8 py-4 rounded-full font-mono text-xs uppercase tracking-widest shadow-lg cursor-pointer whitespace-nowrap hover:bg-teal-600">
            <span class="lang-en">Hire as unpaid intern</span><span class="lang-da hidden">Ansæt som ulønnet praktikant</span>
          </button>
        </div>
      </div>
      <div class="order-1 md:order-2 flex flex-col justify-center items-center md:items-end animate-fade-up" style="animation-delay: 0.2s;">
        <h2 class="text-xl font-extrabold text-stone-900 mb-2 tracking-tight self-start md:self-end cursor-default">{{ site.owner }}</h2>
        <div class="group relative w-full max-w-md aspect-square">
          <div class="absolute inset-0 border-2 border-stone-800 translate-x-4 translate-y-4 transition-transform duration-500 group-hover:translate-x-2 group-hover:translate-y-2"></div>
          <div class="relative w-full h-full overflow-hidden bg-stone-200 shadow-xl">
            <img src="images/{{ site.home_portrait }}" class="w-full h-full object-cover transition-all duration-700 filter grayscale group-hover:grayscale-0 group-hover:scale-105" alt="{{ site.owner }}">
          </div>
        </div>
      </div>
    </section>

    <section class="pt-2 pb-10">
      <div class="flex justify-between items-end mb-20 reveal border-b border-stone-200 pb-8">
        <h2 class="text-3xl md:text-4xl font-bold text-stone-900">
          <span class="lang-en">Selected Work</span><span class="lang-da hidden">Udvalgte Projekter</span>
        </h2>
      </div>
      {% for f in featured %}
      <div class="group grid md:grid-cols-12 gap-8 md:gap-16 items-center reveal mb-32 last:mb-0">
        <div class="md:col-span-6 {% if f.image_first %}md:order-1{% else %}md:order-2{% endif %} relative">
          <a href="casestudies.html#{{ f.project.id }}" class="block overflow-hidden rounded shadow-lg hover:shadow-2xl transition-all duration-500">
            <div class="relative aspect-[3/4] bg-stone-200">
              <img src="images/{{ f.project.img }}" alt="{{ f.project.title }}" class="absolute inset-0 w-full h-full object-cover transition-transform duration-700 group-hover:scale-105">
            </div>
          </a>
        </div>
        <div class="md:col-span-6 {% if f.image_first %}md:order-2{% else %}md:order-1{% endif %}">
          <div class="flex flex-wrap gap-2 mb-4">
            {% for tag in f.project.tags %}<span class="font-mono text-teal-600 text-xs uppercase tracking-widest border border-teal-600/20 px-2 py-1 rounded">{{ tag }}</span>
            {% endfor %}
          </div>
          <h3 class="text-3xl md:text-4xl font-bold mb-4 leading-tight text-stone-900">{{ f.project.title }}</h3>
          <p class="font-mono text-sm text-stone-400 mb-6 uppercase tracking-wide">{{ f.project.subtitle }}</p>
          <p class="text-stone-600 mb-8 leading-relaxed text-lg font-light">{{ f.project.summary }}</p>
          <a href="casestudies.html#{{ f.project.id }}" class="inline-flex items-center gap-2 border-b border-stone-900 pb-1 font-mono hover:text-teal-600 hover:border-teal-600 transition group-hover:pl-2">
            <span class="lang-en">Read Report</span><span class="lang-da hidden">Læs Rapport</span> <span class="text-lg">&rarr;</span>
          </a>
        </div>
      </div>
      {% endfor %}
      <div class="text-center mt-24 reveal">
        <a href="casestudies.html" class="inline-block px-10 py-4 bg-stone-900 text-stone-50 rounded-full font-mono text-sm hover:bg-teal-600 transition duration-300">
          <span class="lang-en">View All Case Studies</span><span class="lang-da hidden">Se Alle Case Studier</span>
        </a>
      </div>
    </section>
  </main>
{% endblock %}

{% block scripts %}
  <script>
{{ assets.runaway_js | safe }}
  </script>
{% endblock %}"##;

const CASESTUDIES_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
  <main class="max-w-6xl mx-auto px-6 py-20">
    <header class="mb-24 reveal">
      <h1 class="text-4xl md:text-6xl font-bold mb-6 tracking-tight text-stone-900">
        <span class="lang-en">Case Studies</span><span class="lang-da hidden">Case Studier</span>
      </h1>
      <p class="text-xl text-stone-600 font-light max-w-2xl leading-relaxed">
        <span class="lang-en">A collection of research into socio-technical networks, participatory design, and digital ethnography.</span>
        <span class="lang-da hidden">En samling af forskning inden for socio-tekniske netværk, deltagende design og digital etnografi.</span>
      </p>
    </header>
    <div class="space-y-12">
      {% for p in projects %}
      <article id="{{ p.id }}" class="bg-white rounded-xl shadow-sm border border-stone-100 reveal overflow-hidden mb-16 scroll-mt-32 project-card transition-all duration-300">
        <div class="grid md:grid-cols-12">
          <div class="md:col-span-4 bg-stone-100 relative h-64 md:h-auto md:min-h-full group cursor-pointer" onclick="window.open('pdfs/{{ p.pdf }}', '_blank')">
            <img src="images/{{ p.img }}" alt="{{ p.title }}" class="absolute inset-0 w-full h-full object-cover transition-opacity duration-300 group-hover:opacity-90">
            <div class="absolute inset-0 flex items-center justify-center opacity-100 md:opacity-0 md:group-hover:opacity-100 transition-opacity duration-300 bg-stone-900/40">
              <span class="bg-white text-stone-900 px-4 py-2 rounded font-mono text-xs uppercase tracking-widest">
                <span class="lang-en">Read PDF</span><span class="lang-da hidden">Læs PDF</span>
              </span>
            </div>
          </div>
          <div class="md:col-span-8 p-8 md:p-12 flex flex-col justify-center">
            <div class="flex justify-between items-start mb-6">
              <div class="flex flex-wrap gap-2">
                {% for tag in p.tags %}<span class="text-xs font-mono uppercase tracking-wider text-teal-600 bg-teal-50 px-2 py-1 rounded">{{ tag }}</span>
                {% endfor %}
              </div>
              <a href="pdfs/{{ p.pdf }}" target="_blank" class="text-stone-400 hover:text-teal-600 transition">
                <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                  <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z" />
                </svg>
              </a>
            </div>
            <h2 class="text-3xl md:text-4xl font-bold mb-2 text-stone-900">{{ p.title }}</h2>
            <p class="text-lg text-stone-500 mb-8 font-light italic">{{ p.subtitle }}</p>
            <p class="text-stone-800 mb-8 leading-relaxed font-medium">{{ p.summary }}</p>
            <div class="grid md:grid-cols-3 gap-8 pt-8 border-t border-stone-100">
              <div>
                <h4 class="font-mono text-xs font-bold text-stone-900 mb-2 uppercase tracking-wider">
                  <span class="lang-en">Context</span><span class="lang-da hidden">Kontekst</span>
                </h4>
                <p class="text-stone-600 text-sm leading-relaxed">{{ p.context }}</p>
              </div>
              <div>
                <h4 class="font-mono text-xs font-bold text-stone-900 mb-2 uppercase tracking-wider">
                  <span class="lang-en">Methods</span><span class="lang-da hidden">Metoder</span>
                </h4>
                <p class="text-stone-600 text-sm leading-relaxed">{{ p.methods }}</p>
              </div>
              <div>
                <h4 class="font-mono text-xs font-bold text-stone-900 mb-2 uppercase tracking-wider">
                  <span class="lang-en">Outcomes</span><span class="lang-da hidden">Resultater</span>
                </h4>
                <p class="text-stone-600 text-sm leading-relaxed">{{ p.outcomes }}</p>
              </div>
            </div>
            <div class="mt-8 pt-4">
              <a href="pdfs/{{ p.pdf }}" target="_blank" class="inline-block bg-stone-900 text-white px-6 py-3 rounded-md font-mono text-xs uppercase tracking-widest hover:bg-teal-600 transition">
                <span class="lang-en">Download Report</span><span class="lang-da hidden">Download Rapport</span>
              </a>
            </div>
          </div>
        </div>
      </article>
      {% endfor %}
    </div>
  </main>
{% endblock %}"##;

const EXPERIENCE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% from "macros.html" import bi, bi_html %}
  <main class="max-w-5xl mx-auto px-6 py-20">
    <header class="mb-20 reveal text-center">
      <h1 class="text-4xl md:text-6xl font-bold mb-6 text-stone-900">
        <span class="lang-en">Work Experience</span><span class="lang-da hidden">Arbejdserfaring</span>
      </h1>
    </header>
    <div class="relative py-10 max-w-4xl mx-auto">
      {% for exp in experiences %}
      <div class="relative pl-8 md:pl-0 mb-16 reveal">
        <div class="hidden md:block absolute left-[50%] top-0 bottom-0 w-px bg-stone-300 transform -translate-x-1/2"></div>
        <div class="grid md:grid-cols-2 gap-8 md:gap-16 relative">
          <div class="hidden md:block absolute left-[50%] top-2 w-3 h-3 bg-stone-900 rounded-full transform -translate-x-1/2 border-4 border-stone-50"></div>
          <div class="md:text-right md:pr-8 flex flex-col md:items-end items-center">
            <span class="inline-block px-3 py-1 bg-stone-200 text-stone-600 rounded-full text-xs font-mono font-bold mb-4">{{ exp.period }}</span>
            <div class="flex justify-center w-full md:justify-end">
              <img src="images/{{ exp.logo }}" class="exp-logo h-12 w-auto max-w-[120px] object-contain" alt="{{ exp.company }}">
            </div>
          </div>
          <div class="md:pl-8">
            <h3 class="text-2xl font-bold text-stone-900">{{ bi(exp.role) }}</h3>
            <p class="text-teal-700 font-medium mb-3">{{ exp.company }}</p>
            <p class="text-stone-600 leading-relaxed max-w-lg">{{ bi_html(exp.desc) }}</p>
          </div>
        </div>
      </div>
      {% endfor %}
    </div>
  </main>
{% endblock %}"##;

const PROFILE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% from "macros.html" import bi %}
  <main class="max-w-6xl mx-auto px-6 py-20">
    <div class="flex flex-col md:flex-row gap-12 items-stretch mb-24 reveal">
      <div class="md:w-5/12">
        <div class="relative w-full h-full overflow-hidden rounded-lg shadow-lg group min-h-[400px]">
          <img src="images/{{ site.profile_portrait }}" class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105" alt="{{ site.owner }}">
          <div class="absolute inset-0 bg-stone-900/10 group-hover:bg-transparent transition-colors duration-500"></div>
        </div>
      </div>
      <div class="md:w-7/12 flex flex-col justify-between">
        <div class="p-8 bg-stone-100 rounded-xl border-l-4 border-teal-600 h-full flex flex-col justify-center">
          <h3 class="text-lg font-bold uppercase tracking-widest text-stone-500 mb-6">
            <span class="lang-en">Education</span><span class="lang-da hidden">Uddannelse</span>
          </h3>
          {% for edu in education %}
          <div{% if not loop.last %} class="mb-8"{% endif %}>
            <div class="flex justify-between items-baseline mb-2">
              <h4 class="text-xl font-bold text-stone-900">{{ bi(edu.degree) }}</h4>
              <span class="text-sm font-mono text-stone-500">{{ edu.period }}</span>
            </div>
            <p class="text-teal-700 font-medium mb-2">{{ bi(edu.institution) }}</p>
            {% if edu.note %}
            <p class="text-stone-600 text-sm{% if edu.certificate %} mb-4{% endif %}">{{ bi(edu.note) }}</p>
            {% endif %}
            {% if edu.certificate %}
            <a href="pdfs/{{ edu.certificate }}" target="_blank" class="inline-flex items-center gap-2 text-xs font-bold uppercase tracking-widest text-stone-900 border-b border-stone-300 hover:text-teal-600 hover:border-teal-600 transition">
              <svg class="w-4 h-4" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z" /></svg>
              <span class="lang-en">Download Certificate</span><span class="lang-da hidden">Hent Bevis</span>
            </a>
            {% endif %}
          </div>
          {% endfor %}
        </div>
      </div>
    </div>

    <section class="reveal">
      <div class="flex items-center gap-4 mb-8">
        <div class="h-px bg-stone-300 flex-grow"></div>
        <h2 class="font-mono text-sm font-bold uppercase tracking-widest text-stone-400">
          <span class="lang-en">Core Competencies</span><span class="lang-da hidden">Kernekompetencer</span>
        </h2>
        <div class="h-px bg-stone-300 flex-grow"></div>
      </div>
      <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
        {% for skill in competencies %}
        <div class="skill-card p-4 border border-stone-200 rounded-lg bg-white hover:shadow-md flex items-center justify-center text-center">
          <h4 class="font-medium text-stone-800 text-sm">{{ bi(skill) }}</h4>
        </div>
        {% endfor %}
      </div>
    </section>

    <section class="reveal mt-20">
      <h3 class="text-2xl font-bold mb-8 text-center text-stone-900">
        <span class="lang-en">Volunteering</span><span class="lang-da hidden">Frivilligt Arbejde</span>
      </h3>
      <div class="grid md:grid-cols-2 gap-8">
        {% for v in volunteering %}
        <div class="bg-white p-6 rounded-xl border border-stone-200 shadow-sm">
          <div class="flex justify-between items-start mb-2">
            <span class="font-bold text-stone-900">{{ bi(v.role) }}</span>
            <span class="text-xs font-mono text-stone-500">{{ bi(v.period) }}</span>
          </div>
          <p class="text-stone-500 text-sm{% if v.certificate %} mb-3{% endif %}">{{ bi(v.organisation) }}</p>
          {% if v.certificate %}
          <a href="pdfs/{{ v.certificate }}" target="_blank" class="inline-flex items-center gap-1 text-xs font-bold uppercase text-teal-700 hover:text-teal-900">
            <span class="lang-en">Download Certificate</span><span class="lang-da hidden">Hent Bevis</span> &darr;
          </a>
          {% endif %}
        </div>
        {% endfor %}
      </div>
    </section>
  </main>
{% endblock %}"##;

const CONTACT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
  <main class="flex-grow flex items-center justify-center px-6 py-20">
    <div class="max-w-6xl w-full reveal">
      <div class="grid md:grid-cols-2 gap-16 items-start">
        <div>
          <p class="font-mono text-teal-600 mb-6 tracking-widest uppercase">Contact</p>
          <h1 class="text-5xl md:text-6xl font-bold mb-8 tracking-tight text-stone-900 whitespace-nowrap">
            <span class="lang-en">Let's get in touch.</span><span class="lang-da hidden">Lad os tage en snak.</span>
          </h1>
          <p class="text-xl text-stone-600 mb-12 font-light leading-relaxed">
            <span class="lang-en">I am always open to discussing research collaborations, consultancy opportunities, or new projects.</span>
            <span class="lang-da hidden">Jeg er altid åben for at diskutere forskningssamarbejder, konsulentmuligheder eller nye projekter.</span>
          </p>
          <div class="flex flex-col gap-4">
            <a href="{{ site.linkedin_url }}" target="_blank" class="flex items-center gap-4 group p-4 border border-stone-200 rounded-lg bg-white hover:border-teal-500 transition-all duration-300">
              <div class="w-10 h-10 flex items-center justify-center bg-stone-100 rounded-full group-hover:bg-teal-50">
                <svg class="w-5 h-5 text-stone-600 group-hover:text-teal-700" fill="currentColor" viewBox="0 0 24 24"><path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/></svg>
              </div>
              <span class="font-mono text-sm uppercase tracking-wider text-stone-600 group-hover:text-stone-900">{{ site.linkedin_handle }}</span>
            </a>
            <a href="{{ site.github_url }}" target="_blank" class="flex items-center gap-4 group p-4 border border-stone-200 rounded-lg bg-white hover:border-teal-500 transition-all duration-300">
              <div class="w-10 h-10 flex items-center justify-center bg-stone-100 rounded-full group-hover:bg-teal-50">
                <svg class="w-5 h-5 text-stone-600 group-hover:text-teal-700" fill="currentColor" viewBox="0 0 24 24"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/></svg>
              </div>
              <span class="font-mono text-sm uppercase tracking-wider text-stone-600 group-hover:text-stone-900">{{ site.github_handle }}</span>
            </a>
          </div>
        </div>
        <div class="bg-white p-8 rounded-2xl shadow-sm border border-stone-100">
          <form action="{{ form_endpoint | safe }}" method="POST" class="space-y-6">
            <input type="text" name="_gotcha" style="display:none">
            <div class="grid grid-cols-2 gap-6">
              <div>
                <label class="modern-label">
                  <span class="lang-en">Name</span><span class="lang-da hidden">Navn</span>
                </label>
                <input type="text" name="name" required class="modern-input">
              </div>
              <div>
                <label class="modern-label">Email</label>
                <input type="email" name="_replyto" required class="modern-input">
              </div>
            </div>
            <div>
              <label class="modern-label">
                <span class="lang-en">Subject</span><span class="lang-da hidden">Emne</span>
              </label>
              <input type="text" name="subject" class="modern-input">
            </div>
            <div>
              <label class="modern-label">
                <span class="lang-en">Message</span><span class="lang-da hidden">Besked</span>
              </label>
              <textarea name="message" required rows="5" class="modern-input"></textarea>
            </div>
            <button type="submit" class="w-full bg-stone-900 text-white py-4 rounded-lg font-mono text-xs uppercase tracking-widest hover:bg-teal-600 transition-colors duration-300 shadow-lg">
              <span class="lang-en">Send Message</span><span class="lang-da hidden">Send Besked</span>
            </button>
          </form>
        </div>
      </div>
    </div>
  </main>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{self, Page};
    use crate::assets::PageAssets;

    fn render(page: Page) -> String {
        let engine = TemplateEngine::new();
        let assets = PageAssets::new(false);
        let ctx = pages::context_for(page, &assets, "https://formspree.io/f/test");
        engine.render_page(page.template(), &ctx).unwrap()
    }

    #[test]
    fn home_page_has_title_and_shared_chrome() {
        let html = render(Page::Home);

        assert!(html.contains("<title>Home | Thomas Julsgaard</title>"));
        assert!(html.contains("cdn.tailwindcss.com"));
        assert!(html.contains("fonts.googleapis.com"));
        assert!(html.contains("id=\"mobile-menu\""));
        assert!(html.contains("id=\"runaway-btn\""));
    }

    #[test]
    fn nav_marks_only_the_active_page() {
        let html = render(Page::Experience);

        assert_eq!(html.matches("border-b-2 border-teal-600 font-semibold").count(), 1);
    }

    #[test]
    fn experience_descriptions_keep_line_breaks_unescaped() {
        let html = render(Page::Experience);

        assert!(html.contains("Energistyrelsen.<br><br>Selected"));
        assert!(!html.contains("&lt;br&gt;"));
    }

    #[test]
    fn contact_form_posts_to_configured_endpoint() {
        let html = render(Page::Contact);

        assert!(html.contains("action=\"https://formspree.io/f/test\""));
        assert!(html.contains("name=\"_gotcha\""));
    }

    #[test]
    fn bilingual_macro_emits_both_language_nodes() {
        let html = render(Page::Profile);

        assert!(html.contains("<span class=\"lang-en\">Ethnographic methods</span>"));
        assert!(html.contains("<span class=\"lang-da hidden\">Etnografiske metoder</span>"));
    }
}
