//! Generation session and the per-generation code cache.
//!
//! A [`GenerationSession`] is an explicit value object owned by the caller:
//! one prompt, the intent derived from it, and the full [`CodeCache`] of
//! generated bundles. Sessions are produced fresh per call; there is no
//! module-level shared state.

use crate::error::Result;
use crate::generators;
use designcraft_core::{CodeBundle, CodeLang, ColorPalette, Intent, StyleKind};
use designcraft_parser::tokenize;

/// Both style variants generated for one component instance.
///
/// Recomputed in full on every generation call; never partially updated.
/// For kinds without a real utility variant the utility slot carries the
/// semantic html/js with an explanatory placeholder comment as css.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCache {
    semantic: CodeBundle,
    utility: CodeBundle,
    utility_supported: bool,
}

impl CodeCache {
    /// Build a cache from both style variants.
    pub fn new(semantic: CodeBundle, utility: CodeBundle, utility_supported: bool) -> Self {
        Self {
            semantic,
            utility,
            utility_supported,
        }
    }

    /// Build a cache for a kind with no utility variant.
    ///
    /// The utility slot reuses the semantic html and js; its css is the
    /// given explanatory placeholder comment.
    pub fn semantic_only(semantic: CodeBundle, placeholder_css: &str) -> Self {
        let utility = CodeBundle::new(
            semantic.html.clone(),
            placeholder_css,
            semantic.js.clone(),
        );
        Self {
            semantic,
            utility,
            utility_supported: false,
        }
    }

    /// The bundle for a style key.
    pub fn bundle(&self, style: StyleKind) -> &CodeBundle {
        match style {
            StyleKind::Semantic => &self.semantic,
            StyleKind::Utility => &self.utility,
        }
    }

    /// The semantic-style bundle. This is what previews render and what
    /// the archive persists.
    pub fn semantic(&self) -> &CodeBundle {
        &self.semantic
    }

    /// The utility-style bundle.
    pub fn utility(&self) -> &CodeBundle {
        &self.utility
    }

    /// Whether the utility bundle is a real alternate style rather than a
    /// placeholder. True only for buttons.
    pub fn utility_supported(&self) -> bool {
        self.utility_supported
    }
}

/// One generation call: the prompt, its interpretation, and the generated
/// code for both style variants.
#[derive(Debug, Clone)]
pub struct GenerationSession {
    prompt: String,
    intent: Intent,
    cache: CodeCache,
}

impl GenerationSession {
    /// Tokenize a prompt and run the matching generator.
    ///
    /// Identical prompt and palette inputs yield byte-identical caches.
    pub fn generate(prompt: &str, palette: &ColorPalette) -> Result<Self> {
        let intent = tokenize(prompt);
        let cache = generators::dispatch(&intent, palette)?;
        Ok(Self {
            prompt: prompt.to_string(),
            intent,
            cache,
        })
    }

    /// The prompt this session was generated from.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The intent derived from the prompt.
    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// The generated code for both style variants.
    pub fn cache(&self) -> &CodeCache {
        &self.cache
    }

    /// Source text for one style key and language tab.
    pub fn code(&self, style: StyleKind, lang: CodeLang) -> &str {
        self.cache.bundle(style).get(lang)
    }

    /// Preview markup: the semantic css in a `<style>` wrapper followed by
    /// the semantic html. The utility css is illustrative and never drives
    /// the preview.
    pub fn preview_html(&self) -> String {
        let semantic = self.cache.semantic();
        format!("<style>{}</style>{}", semantic.css, semantic.html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designcraft_core::ComponentKind;

    fn session(prompt: &str) -> GenerationSession {
        GenerationSession::generate(prompt, &ColorPalette::new()).unwrap()
    }

    #[test]
    fn test_generation_is_idempotent() {
        let prompt = "botão flutuante quadrado verde piscando";
        let first = session(prompt);
        let second = session(prompt);
        assert_eq!(first.cache(), second.cache());
        assert_eq!(first.intent(), second.intent());
    }

    #[test]
    fn test_scenario_floating_square_green_flashing_button() {
        let s = session("botão flutuante quadrado verde piscando");
        assert_eq!(s.intent().kind, ComponentKind::Button);
        assert!(s.intent().flags.floating);
        assert!(s.intent().flags.square);
        assert!(s.intent().flags.flashing);

        let css = s.code(StyleKind::Semantic, CodeLang::Css);
        assert!(css.contains("@keyframes pulse-blink"));
        assert!(css.contains(".dc-button-fab { border-radius: 8px; }"));
        // Square forces the rect shape even though the button floats.
        assert!(s
            .code(StyleKind::Semantic, CodeLang::Html)
            .contains("dc-button-normal"));
    }

    #[test]
    fn test_style_switch_changes_only_css_for_buttons() {
        let s = session("botão verde com sombra");
        assert!(s.cache().utility_supported());
        assert_eq!(
            s.code(StyleKind::Semantic, CodeLang::Html),
            s.code(StyleKind::Utility, CodeLang::Html)
        );
        assert_eq!(
            s.code(StyleKind::Semantic, CodeLang::Js),
            s.code(StyleKind::Utility, CodeLang::Js)
        );
        assert_ne!(
            s.code(StyleKind::Semantic, CodeLang::Css),
            s.code(StyleKind::Utility, CodeLang::Css)
        );
    }

    #[test]
    fn test_composite_card_carries_two_color_tokens() {
        let s = session("card azul com botão vermelho");
        let css = s.code(StyleKind::Semantic, CodeLang::Css);
        assert!(css.contains("#3498db"));
        assert!(css.contains("#e74c3c"));
        assert!(css.contains("--dc-secondary-btn-color"));
    }

    #[test]
    fn test_simple_card_has_one_color_token() {
        let s = session("card verde");
        let css = s.code(StyleKind::Semantic, CodeLang::Css);
        assert!(css.contains("#3cb371"));
        assert!(!css.contains("--dc-secondary-btn-color"));
        assert!(!css.contains("#e74c3c"));
    }

    #[test]
    fn test_unrecognized_prompt_yields_error_bundle() {
        let s = session("tabela de preços");
        assert_eq!(s.intent().kind, ComponentKind::Unrecognized);
        assert!(s
            .code(StyleKind::Semantic, CodeLang::Html)
            .contains("Não reconhecemos este componente"));
        assert!(s.code(StyleKind::Semantic, CodeLang::Css).is_empty());
        assert!(!s.cache().utility_supported());
    }

    #[test]
    fn test_preview_wraps_semantic_css() {
        let s = session("menu vermelho");
        let preview = s.preview_html();
        assert!(preview.starts_with("<style>"));
        assert!(preview.contains(".dc-nav-base"));
        assert!(preview.contains("</style><nav"));
    }

    #[test]
    fn test_semantic_only_cache_reuses_html_and_js() {
        let semantic = CodeBundle::new("<p>x</p>", ".x {}", "// js");
        let cache = CodeCache::semantic_only(semantic, "// sem variante");
        assert!(!cache.utility_supported());
        assert_eq!(cache.utility().html, "<p>x</p>");
        assert_eq!(cache.utility().js, "// js");
        assert_eq!(cache.utility().css, "// sem variante");
    }
}
