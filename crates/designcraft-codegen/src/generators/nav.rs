//! Navigation menu generator. Only the resolved color affects output.

use super::templates::TemplateEngine;
use super::ComponentGenerator;
use crate::error::Result;
use crate::session::CodeCache;
use designcraft_core::{CodeBundle, ColorPalette, ComponentKind, Intent};
use serde::Serialize;

const NAV_HTML: &str = r##"<nav id="dc-generated-component" class="dc-nav-base" style="background-color:{{color_hex}};">
    <a href="#" class="dc-nav-brand">DesignCraft</a>
    <div class="dc-nav-links">
        <a href="#home">Home</a>
        <a href="#about">Sobre</a>
        <a href="#services">Serviços</a>
        <a href="#contact">Contato</a>
    </div>
</nav>"##;

const NAV_CSS: &str = r#".dc-nav-base {
    display: flex; justify-content: space-between; align-items: center;
    padding: 15px 30px; color: white; width: 100%;
}
.dc-nav-brand { font-size: 1.5rem; font-weight: bold; color: white; text-decoration: none; }
.dc-nav-links a {
    color: white; text-decoration: none; margin-left: 20px;
    padding: 5px 10px; border-radius: 4px; transition: background-color 0.3s;
}
.dc-nav-links a:hover { background-color: rgba(255, 255, 255, 0.2); }"#;

const NAV_JS: &str = "// Código JS para menu de navegação não necessário.";

const NAV_PLACEHOLDER: &str = "// Diversidade não implementada para Navegação.";

#[derive(Serialize)]
struct NavData<'a> {
    color_hex: &'a str,
}

/// Navigation menu code generator.
pub struct NavGenerator {
    engine: TemplateEngine<'static>,
}

impl NavGenerator {
    /// Create a new nav generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }
}

impl Default for NavGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGenerator for NavGenerator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Nav
    }

    fn generate(&self, intent: &Intent, palette: &ColorPalette) -> Result<CodeCache> {
        let color = palette.resolve(intent.color_name);
        let data = NavData {
            color_hex: &color.hex,
        };
        let html = self.engine.render_string(NAV_HTML, &data)?;

        let semantic = CodeBundle::new(html, NAV_CSS, NAV_JS);
        Ok(CodeCache::semantic_only(semantic, NAV_PLACEHOLDER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designcraft_core::{ColorName, StyleFlags};

    fn nav_intent(color_name: ColorName) -> Intent {
        Intent {
            kind: ComponentKind::Nav,
            color_name,
            ..Intent::default()
        }
    }

    #[test]
    fn test_nav_is_tinted_by_color() {
        let cache = NavGenerator::new()
            .generate(&nav_intent(ColorName::Vermelho), &ColorPalette::new())
            .unwrap();
        assert!(cache
            .semantic()
            .html
            .contains("background-color:#e74c3c;"));
        assert!(cache.semantic().html.contains("DesignCraft"));
        assert!(cache.semantic().css.contains(".dc-nav-links a:hover"));
        assert!(!cache.utility_supported());
    }

    #[test]
    fn test_flags_do_not_affect_nav_output() {
        let generator = NavGenerator::new();
        let palette = ColorPalette::new();

        let plain = generator
            .generate(&nav_intent(ColorName::Default), &palette)
            .unwrap();

        let mut flagged_intent = nav_intent(ColorName::Default);
        flagged_intent.flags = StyleFlags {
            floating: true,
            flashing: true,
            has_shadow: true,
            ..Default::default()
        };
        let flagged = generator.generate(&flagged_intent, &palette).unwrap();

        assert_eq!(plain, flagged);
    }

    #[test]
    fn test_nav_has_four_links() {
        let cache = NavGenerator::new()
            .generate(&nav_intent(ColorName::Default), &ColorPalette::new())
            .unwrap();
        assert_eq!(cache.semantic().html.matches("dc-nav-links").count(), 1);
        assert_eq!(
            cache
                .semantic()
                .html
                .matches("<a href=\"#")
                .count(),
            5
        );
    }
}
