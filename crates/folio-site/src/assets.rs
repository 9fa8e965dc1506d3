//! Inline CSS and client-side scripts embedded into every page.

use serde::Serialize;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The inline `<style>` block shared by every page.
    pub fn inline_css() -> String {
        INLINE_CSS.to_string()
    }

    /// The Tailwind CDN configuration object.
    pub fn tailwind_config() -> String {
        TAILWIND_CONFIG.to_string()
    }

    /// Shared page script: language toggle, scroll reveal, mobile menu.
    pub fn shared_js() -> String {
        SHARED_JS.to_string()
    }

    /// Home-page script for the pointer-avoiding button.
    pub fn runaway_js() -> String {
        RUNAWAY_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

/// The asset strings injected into the page templates.
#[derive(Debug, Clone, Serialize)]
pub struct PageAssets {
    pub tailwind_config: String,
    pub inline_css: String,
    pub shared_js: String,
    pub runaway_js: String,
}

impl PageAssets {
    pub fn new(minify: bool) -> Self {
        let css = AssetPipeline::inline_css();
        let inline_css = if minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };

        Self {
            tailwind_config: AssetPipeline::tailwind_config(),
            inline_css,
            shared_js: AssetPipeline::shared_js(),
            runaway_js: AssetPipeline::runaway_js(),
        }
    }
}

const INLINE_CSS: &str = r#"html { scroll-behavior: smooth; }
.reveal { opacity: 0; transform: translateY(30px); transition: all 0.8s cubic-bezier(0.5, 0, 0, 1); }
.reveal.active { opacity: 1; transform: translateY(0); }
.project-card:hover { transform: translateY(-5px); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.05); }
.skill-card { transition: all 0.3s ease; }
.skill-card:hover { border-color: #0d9488; transform: translateY(-3px); }
.hidden { display: none; }
#mobile-menu { transition: max-height 0.3s ease-in-out; max-height: 0; overflow: hidden; }
#mobile-menu.open { max-height: 100vh; }
.exp-logo { transition: transform 0.3s ease; }
.exp-logo:hover { transform: scale(1.05); }
.modern-input { width: 100%; background-color: #fafaf9; border: none; border-radius: 8px; padding: 16px; font-size: 0.95rem; color: #1c1917; box-shadow: inset 0 1px 2px rgba(0,0,0,0.06); transition: all 0.2s ease; }
.modern-input:focus { background-color: #ffffff; box-shadow: 0 0 0 2px #0d9488, 0 4px 6px -1px rgba(0, 0, 0, 0.1); outline: none; }
.modern-label { display: block; font-family: 'Space Grotesk', monospace; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; color: #57534e; margin-bottom: 0.5rem; font-weight: 700; }
#runaway-btn { position: absolute; transition: transform 0.4s cubic-bezier(0.25, 1, 0.5, 1); left: 1.5rem; top: 0; }
"#;

const TAILWIND_CONFIG: &str = r#"tailwind.config = {
  theme: {
    extend: {
      fontFamily: {
        sans: ['Inter', 'sans-serif'],
        mono: ['Space Grotesk', 'monospace'],
      },
      colors: {
        stone: { 50: '#fafaf9', 100: '#f5f5f4', 200: '#e7e5e4', 800: '#292524', 900: '#1c1917' },
        teal: { 600: '#0d9488', 700: '#0f766e', 800: '#115e59', 900: '#134e4a' }
      },
      animation: {
        'fade-up': 'fadeUp 0.8s ease-out forwards',
      },
      keyframes: {
        fadeUp: {
          '0%': { opacity: '0', transform: 'translateY(15px)' },
          '100%': { opacity: '1', transform: 'translateY(0)' },
        }
      }
    }
  }
};
"#;

// Two-state language machine {en, da}, default en, persisted per session.
const SHARED_JS: &str = r#"(function () {
  'use strict';

  function applyLanguage(lang) {
    const showDanish = lang === 'da';

    document.querySelectorAll('.lang-en').forEach(el => el.classList.toggle('hidden', showDanish));
    document.querySelectorAll('.lang-da').forEach(el => el.classList.toggle('hidden', !showDanish));

    const styleButtons = (ids, active) => {
      ids.map(id => document.getElementById(id)).forEach(btn => {
        if (!btn) return;
        btn.classList.toggle('bg-stone-900', active);
        btn.classList.toggle('text-white', active);
        btn.classList.toggle('text-stone-500', !active);
      });
    };
    styleButtons(['btn-da', 'btn-da-mob'], showDanish);
    styleButtons(['btn-en', 'btn-en-mob'], !showDanish);
  }

  window.setLang = function (lang) {
    sessionStorage.setItem('preferredLang', lang);
    applyLanguage(lang);
  };

  document.addEventListener('DOMContentLoaded', () => {
    applyLanguage(sessionStorage.getItem('preferredLang') || 'en');

    const observer = new IntersectionObserver(entries => {
      entries.forEach(entry => {
        if (entry.isIntersecting) entry.target.classList.add('active');
      });
    }, { threshold: 0.1 });
    document.querySelectorAll('.reveal').forEach(el => observer.observe(el));

    const menuBtn = document.getElementById('mobile-menu-btn');
    const mobileMenu = document.getElementById('mobile-menu');
    if (menuBtn && mobileMenu) {
      menuBtn.addEventListener('click', () => mobileMenu.classList.toggle('open'));
    }
  });
})();
"#;

// Offset state lives in one object advanced by a pure step function. The
// overshoot handling multiplies by -0.5 instead of clamping; the bounce is
// part of the intended feel.
const RUNAWAY_JS: &str = r#"(function () {
  'use strict';

  const JUMP_DISTANCE = 150;
  const TRIGGER_RADIUS = 100;
  const COOLDOWN_MS = 400;
  const EDGE_MARGIN = 50;

  function step(state, pointer, button, bounds) {
    let dirX = button.centerX - pointer.x;
    let dirY = button.centerY - pointer.y;
    if (dirX === 0 && dirY === 0) { dirX = 1; dirY = 1; }
    const length = Math.sqrt(dirX * dirX + dirY * dirY);

    let x = state.x + (dirX / length) * JUMP_DISTANCE;
    let y = state.y + (dirY / length) * JUMP_DISTANCE;
    if (Math.abs(x) > bounds.width / 2 - EDGE_MARGIN) x *= -0.5;
    if (Math.abs(y) > bounds.height - EDGE_MARGIN) y *= -0.5;
    return { x: x, y: y };
  }

  document.addEventListener('DOMContentLoaded', () => {
    const btn = document.getElementById('runaway-btn');
    const container = document.getElementById('prank-container');
    if (!btn || !container) return;

    let state = { x: 0, y: 0 };
    let cooldown = false;

    const triggerMove = (pointerX, pointerY) => {
      if (cooldown) return;
      const rect = btn.getBoundingClientRect();
      state = step(
        state,
        { x: pointerX, y: pointerY },
        { centerX: rect.left + rect.width / 2, centerY: rect.top + rect.height / 2 },
        container.getBoundingClientRect()
      );
      btn.style.transform = 'translate(' + state.x + 'px, ' + state.y + 'px)';
      cooldown = true;
      setTimeout(() => { cooldown = false; }, COOLDOWN_MS);
    };

    container.addEventListener('mousemove', e => {
      const rect = btn.getBoundingClientRect();
      const dx = e.clientX - (rect.left + rect.width / 2);
      const dy = e.clientY - (rect.top + rect.height / 2);
      if (Math.sqrt(dx * dx + dy * dy) < TRIGGER_RADIUS) triggerMove(e.clientX, e.clientY);
    });

    const runAway = e => {
      e.preventDefault();
      let x = e.clientX;
      let y = e.clientY;
      if (e.type === 'touchstart' && e.touches.length > 0) {
        x = e.touches[0].clientX;
        y = e.touches[0].clientY;
      }
      triggerMove(x, y);
    };
    btn.addEventListener('click', runAway);
    btn.addEventListener('touchstart', runAway);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_covers_language_and_reveal_classes() {
        let css = AssetPipeline::inline_css();
        assert!(css.contains(".reveal"));
        assert!(css.contains(".hidden"));
        assert!(css.contains("#runaway-btn"));
    }

    #[test]
    fn shared_js_persists_language_choice() {
        let js = AssetPipeline::shared_js();
        assert!(js.contains("sessionStorage.setItem('preferredLang'"));
        assert!(js.contains("sessionStorage.getItem('preferredLang') || 'en'"));
        assert!(js.contains("IntersectionObserver"));
    }

    #[test]
    fn runaway_js_keeps_the_original_tuning() {
        let js = AssetPipeline::runaway_js();
        assert!(js.contains("JUMP_DISTANCE = 150"));
        assert!(js.contains("TRIGGER_RADIUS = 100"));
        assert!(js.contains("COOLDOWN_MS = 400"));
        assert!(js.contains("*= -0.5"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn minified_assets_keep_selectors() {
        let assets = PageAssets::new(true);
        assert!(assets.inline_css.contains(".reveal"));
    }
}
