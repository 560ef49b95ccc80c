//! Button generator, the only kind with a real utility style variant.

use super::templates::TemplateEngine;
use super::ComponentGenerator;
use crate::error::Result;
use crate::session::CodeCache;
use designcraft_core::{CodeBundle, ColorPalette, ColorToken, ComponentKind, Intent, StyleFlags};
use serde::Serialize;

const BUTTON_HTML: &str = r#"<div class="dc-wrapper {{wrapper_class}}">
    <button id="dc-generated-component" class="dc-button-base {{shape_class}}" aria-label="{{action_text}}">
        <span class="{{rotator_class}}">{{upper action_text}}</span>
    </button>
</div>"#;

const BUTTON_JS: &str = "// Código JS para botão não necessário.";

#[derive(Serialize)]
struct ButtonHtmlData<'a> {
    wrapper_class: &'static str,
    shape_class: &'static str,
    rotator_class: &'static str,
    action_text: &'a str,
}

/// Button code generator.
pub struct ButtonGenerator {
    engine: TemplateEngine<'static>,
}

impl ButtonGenerator {
    /// Create a new button generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    /// Shape class: `square` forces the normal (rect) shape even when the
    /// button floats; only a floating non-square button becomes a fab.
    fn shape_class(flags: &StyleFlags) -> &'static str {
        if flags.square || !flags.floating {
            "dc-button-normal"
        } else {
            "dc-button-fab"
        }
    }

    /// Semantic CSS: base rules plus one block per active flag.
    fn semantic_css(flags: &StyleFlags, color: &ColorToken) -> String {
        let soft_rounded = flags.rounded && !flags.square && !flags.floating;
        let normal_radius = if soft_rounded {
            "20px"
        } else if flags.square {
            "0"
        } else {
            "5px"
        };

        let mut blocks = Vec::new();

        blocks.push(format!(
            "/* Design Tokens */\n:root {{ --dc-primary-color: {}; --dc-translucent-color: {}; }}",
            color.rgba_opaque, color.rgba_translucent
        ));

        blocks.push(
            ".dc-button-base {\n    border: none; color: white; font-weight: bold; cursor: pointer;\n    display: flex; justify-content: center; align-items: center;\n    transition: all 0.3s ease-in-out;\n    background-color: var(--dc-primary-color);\n    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.3);\n}"
                .to_string(),
        );

        blocks.push(".dc-button-fab { width: 80px; height: 80px; border-radius: 50%; }".to_string());
        if flags.square && flags.floating {
            blocks.push(".dc-button-fab { border-radius: 8px; }".to_string());
        }

        blocks.push(format!(
            ".dc-button-normal {{\n    width: auto; min-width: 150px; padding: 10px 25px; height: 40px;\n    border-radius: {normal_radius};\n    font-size: 1rem;\n}}"
        ));

        if flags.floating {
            blocks.push(
                ".dc-wrapper-floating { position: absolute; bottom: 30px; right: 30px; z-index: 99; }\n.dc-wrapper-normal { margin: 20px auto; }"
                    .to_string(),
            );
        }

        if flags.translucent {
            blocks.push(
                ".dc-button-base { background-color: var(--dc-translucent-color); backdrop-filter: blur(8px); -webkit-backdrop-filter: blur(8px); }"
                    .to_string(),
            );
        }

        if flags.vertical {
            blocks.push(
                ".dc-text-rotator { display: inline-block; transform: rotate(90deg); white-space: nowrap; font-size: 0.9em; }"
                    .to_string(),
            );
        }

        if flags.flashing {
            blocks.push(format!(
                "@keyframes pulse-blink {{\n    0%, 100% {{ box-shadow: 0 0 0 0 {}; opacity: 1; }}\n    50% {{ box-shadow: 0 0 0 15px rgba(52, 152, 219, 0); opacity: 0.8; }}\n}}\n.dc-button-base {{ animation: pulse-blink 2s infinite cubic-bezier(0.66, 0, 0, 1); }}",
                color.rgba_translucent
            ));
        }

        blocks.push(format!(
            ".dc-button-base:hover {{ transform: scale(1.05); background-color: {}; animation-play-state: paused; }}",
            color.hex
        ));

        blocks.join("\n\n")
    }

    /// Utility-style CSS: an independent decision tree over the same flags,
    /// rendered as a descriptive comment plus an approximating rule.
    /// Intentionally illustrative output, not executable utility markup.
    fn utility_css(flags: &StyleFlags, color: &ColorToken) -> String {
        let bg_class = format!("bg-[{}]", color.hex);
        let hover_class = format!("hover:bg-[{}DD]", color.hex);

        let (size_classes, rounded_classes) = if flags.floating {
            (
                "w-20 h-20",
                if flags.square { "rounded-lg" } else { "rounded-full" },
            )
        } else if flags.rounded {
            ("w-40 h-10 px-6 py-2", "rounded-full")
        } else if flags.square {
            ("w-40 h-10 px-6 py-2", "rounded-none")
        } else {
            ("w-40 h-10 px-6 py-2", "rounded-md")
        };

        let mut classes: Vec<&str> = vec![
            "text-white",
            "font-bold",
            "transition",
            "duration-300",
            "ease-in-out",
            &bg_class,
            &hover_class,
        ];
        if flags.has_shadow {
            classes.push("shadow-lg");
        }
        classes.extend(size_classes.split_whitespace());
        classes.extend(rounded_classes.split_whitespace());

        let utility_classes = classes.join(" ");

        let mapped: Vec<String> = classes
            .iter()
            .filter_map(|class| {
                if class.starts_with("bg-") {
                    Some(format!("    background-color: {};", color.hex))
                } else if class.starts_with("hover:") {
                    Some("    /* Simulação de Hover */".to_string())
                } else if class.starts_with("shadow-") {
                    Some("    box-shadow: 0 10px 15px rgba(0,0,0,0.1);".to_string())
                } else if class.contains("rounded-full") {
                    Some("    border-radius: 9999px;".to_string())
                } else if class.contains("rounded-lg") {
                    Some("    border-radius: 8px;".to_string())
                } else if class.contains("rounded-none") {
                    Some("    border-radius: 0;".to_string())
                } else if class.contains("w-20") {
                    Some("    width: 80px; height: 80px;".to_string())
                } else {
                    None
                }
            })
            .collect();

        format!(
            "/* Diversidade de Código: Estilo Utilitário\n * O HTML deve ser ajustado para usar as classes diretamente.\n * EXEMPLO DE HTML (utility):\n * <button class=\"{utility_classes}\">...</button>\n*/\n\n.btn-utility {{\n{}\n    /* Estilos base para exibição */\n    color: white;\n    cursor: pointer;\n    display: flex; justify-content: center; align-items: center;\n    transition: all 0.3s;\n}}\n\n/* O resto dos estilos (posicionamento, animação) seria injetado via classes utilitárias */",
            mapped.join("\n")
        )
    }
}

impl Default for ButtonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGenerator for ButtonGenerator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
    }

    fn supports_utility_style(&self) -> bool {
        true
    }

    fn generate(&self, intent: &Intent, palette: &ColorPalette) -> Result<CodeCache> {
        let color = palette.resolve(intent.color_name);
        let flags = &intent.flags;

        let data = ButtonHtmlData {
            wrapper_class: if flags.floating {
                "dc-wrapper-floating"
            } else {
                "dc-wrapper-normal"
            },
            shape_class: Self::shape_class(flags),
            rotator_class: if flags.vertical { "dc-text-rotator" } else { "" },
            action_text: &intent.action_text,
        };
        let html = self.engine.render_string(BUTTON_HTML, &data)?;

        let semantic = CodeBundle::new(html.clone(), Self::semantic_css(flags, color), BUTTON_JS);
        let utility = CodeBundle::new(html, Self::utility_css(flags, color), BUTTON_JS);
        Ok(CodeCache::new(semantic, utility, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designcraft_core::ColorName;

    fn generate(intent: &Intent) -> CodeCache {
        ButtonGenerator::new()
            .generate(intent, &ColorPalette::new())
            .unwrap()
    }

    fn button_intent(flags: StyleFlags, color_name: ColorName) -> Intent {
        Intent {
            kind: ComponentKind::Button,
            flags,
            color_name,
            ..Intent::default()
        }
    }

    #[test]
    fn test_default_button_shape() {
        let cache = generate(&button_intent(StyleFlags::default(), ColorName::Default));
        let html = &cache.semantic().html;
        assert!(html.contains("dc-button-normal"));
        assert!(html.contains("dc-wrapper-normal"));
        assert!(html.contains("AÇÃO"));
    }

    #[test]
    fn test_floating_button_becomes_fab() {
        let flags = StyleFlags {
            floating: true,
            ..Default::default()
        };
        let cache = generate(&button_intent(flags, ColorName::Default));
        assert!(cache.semantic().html.contains("dc-button-fab"));
        assert!(cache.semantic().html.contains("dc-wrapper-floating"));
        assert!(cache.semantic().css.contains(".dc-wrapper-floating"));
    }

    #[test]
    fn test_square_forces_rect_shape_but_keeps_fab_override() {
        let flags = StyleFlags {
            floating: true,
            square: true,
            flashing: true,
            ..Default::default()
        };
        let intent = button_intent(flags, ColorName::Verde);
        let cache = generate(&intent);
        let css = &cache.semantic().css;

        // Shape resolves to the rect class; the fab override rule is still emitted.
        assert!(cache.semantic().html.contains("dc-button-normal"));
        assert!(!cache.semantic().html.contains("\"dc-button-base dc-button-fab\""));
        assert!(css.contains(".dc-button-fab { border-radius: 8px; }"));
        assert!(css.contains("@keyframes pulse-blink"));
        assert!(css.contains("rgba(60, 179, 113, 0.7)"));
    }

    #[test]
    fn test_corner_radius_resolution() {
        let soft = StyleFlags {
            rounded: true,
            ..Default::default()
        };
        assert!(generate(&button_intent(soft, ColorName::Default))
            .semantic()
            .css
            .contains("border-radius: 20px;"));

        let square = StyleFlags {
            square: true,
            ..Default::default()
        };
        assert!(generate(&button_intent(square, ColorName::Default))
            .semantic()
            .css
            .contains("border-radius: 0;"));

        assert!(generate(&button_intent(StyleFlags::default(), ColorName::Default))
            .semantic()
            .css
            .contains("border-radius: 5px;"));
    }

    #[test]
    fn test_conditional_blocks_absent_by_default() {
        let cache = generate(&button_intent(StyleFlags::default(), ColorName::Default));
        let css = &cache.semantic().css;
        assert!(!css.contains("pulse-blink"));
        assert!(!css.contains("backdrop-filter"));
        assert!(!css.contains("dc-text-rotator"));
        assert!(css.contains(":hover"));
    }

    #[test]
    fn test_translucent_and_vertical_blocks() {
        let flags = StyleFlags {
            translucent: true,
            vertical: true,
            ..Default::default()
        };
        let cache = generate(&button_intent(flags, ColorName::Vermelho));
        let css = &cache.semantic().css;
        assert!(css.contains("backdrop-filter: blur(8px)"));
        assert!(css.contains("rotate(90deg)"));
        assert!(cache.semantic().html.contains("class=\"dc-text-rotator\""));
    }

    #[test]
    fn test_utility_variant_shares_html_and_js() {
        let flags = StyleFlags {
            floating: true,
            has_shadow: true,
            ..Default::default()
        };
        let cache = generate(&button_intent(flags, ColorName::Verde));
        assert!(cache.utility_supported());
        assert_eq!(cache.semantic().html, cache.utility().html);
        assert_eq!(cache.semantic().js, cache.utility().js);
        assert_ne!(cache.semantic().css, cache.utility().css);
    }

    #[test]
    fn test_utility_decision_tree() {
        let floating_square = StyleFlags {
            floating: true,
            square: true,
            ..Default::default()
        };
        let css = generate(&button_intent(floating_square, ColorName::Default))
            .utility()
            .css
            .clone();
        assert!(css.contains("w-20 h-20"));
        assert!(css.contains("rounded-lg"));
        assert!(css.contains("width: 80px; height: 80px;"));

        let shadowed = StyleFlags {
            has_shadow: true,
            ..Default::default()
        };
        let css = generate(&button_intent(shadowed, ColorName::Default))
            .utility()
            .css
            .clone();
        assert!(css.contains("shadow-lg"));
        assert!(css.contains("box-shadow: 0 10px 15px"));
        assert!(css.contains("rounded-md"));
    }

    #[test]
    fn test_custom_action_text() {
        let mut intent = button_intent(StyleFlags::default(), ColorName::Default);
        intent.action_text = "Comprar Agora".to_string();
        let cache = generate(&intent);
        assert!(cache.semantic().html.contains("COMPRAR AGORA"));
        assert!(cache.semantic().html.contains("aria-label=\"Comprar Agora\""));
    }
}
