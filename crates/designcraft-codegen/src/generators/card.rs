//! Card generator: a simple tinted card, or a composite card with an
//! independently colored secondary action button.

use super::templates::TemplateEngine;
use super::ComponentGenerator;
use crate::error::Result;
use crate::session::CodeCache;
use designcraft_core::{CodeBundle, ColorPalette, ColorToken, ComponentKind, Intent, StyleFlags};
use serde::Serialize;

const SIMPLE_CARD_HTML: &str = r#"<div class="dc-card-wrapper">
    <div id="dc-generated-component" class="dc-card-base{{#if has_shadow}} dc-shadow{{/if}}{{#if skeleton}} dc-skeleton{{/if}}">
        <div class="dc-card-header" style="background-color:{{color_hex}};"></div>
        <h4>{{upper title}}</h4>
        <p>Este é um parágrafo de conteúdo simulado. O card gerado é totalmente responsivo.</p>
        <button class="dc-card-action-btn" style="background-color:{{color_hex}};">Ver Detalhes</button>
    </div>
</div>"#;

const COMPOSITE_CARD_HTML: &str = r#"<div class="dc-card-wrapper">
    <div id="dc-generated-component" class="dc-card-base{{#if has_shadow}} dc-shadow{{/if}}">
        <div class="dc-card-header" style="background-color:{{card_hex}};"></div>
        <h4>{{upper title}}</h4>
        <p>Card principal {{card_name}} com um botão de ação {{button_name}}.</p>
        <button class="dc-card-action-btn dc-secondary-btn" data-color="{{button_name}}">
            {{upper action_text}}
        </button>
    </div>
</div>"#;

const SIMPLE_CARD_JS: &str = "// Código JS para card não necessário.";
const COMPOSITE_CARD_JS: &str = "// Código JS para card composto não necessário.";

const SIMPLE_CARD_PLACEHOLDER: &str = "// Diversidade não implementada para Card Simples.";
const COMPOSITE_CARD_PLACEHOLDER: &str = "// Diversidade não implementada para Card Composto.";

/// Default title rendered when the prompt carries no "título" span.
const DEFAULT_TITLE: &str = "Título Padrão";

#[derive(Serialize)]
struct SimpleCardData<'a> {
    has_shadow: bool,
    skeleton: bool,
    color_hex: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct CompositeCardData<'a> {
    has_shadow: bool,
    card_hex: &'a str,
    card_name: &'a str,
    button_name: &'a str,
    title: &'a str,
    action_text: &'a str,
}

/// Card code generator.
pub struct CardGenerator {
    engine: TemplateEngine<'static>,
}

impl CardGenerator {
    /// Create a new card generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    /// Semantic CSS for the simple card; the skeleton shimmer block is
    /// appended only when flagged.
    fn simple_css(flags: &StyleFlags, color: &ColorToken) -> String {
        let mut blocks = Vec::new();

        blocks.push(format!(
            "/* Design Tokens */\n:root {{ --dc-primary-color: {}; }}",
            color.rgba_opaque
        ));

        blocks.push(
            ".dc-card-wrapper { max-width: 300px; margin: 20px auto; width: 100%; }".to_string(),
        );

        blocks.push(
            ".dc-card-base {\n    background: #ffffff; border-radius: 10px; overflow: hidden;\n    transition: transform 0.3s ease; border: 1px solid #eee;\n}"
                .to_string(),
        );

        blocks.push(".dc-shadow { box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1); }".to_string());
        blocks.push(format!(
            ".dc-card-header {{ height: 100px; background-color: {}; }}",
            color.hex
        ));
        blocks.push(format!(
            ".dc-card-base h4 {{ padding: 15px 20px 5px; color: {}; }}",
            color.hex
        ));
        blocks.push(
            ".dc-card-base p { padding: 0 20px 15px; font-size: 0.9em; color: #555; }".to_string(),
        );

        blocks.push(
            ".dc-card-action-btn { width: calc(100% - 40px); margin: 0 20px 20px; padding: 10px; color: white; border: none; border-radius: 5px; cursor: pointer; }"
                .to_string(),
        );

        if flags.skeleton {
            blocks.push(
                "@keyframes loading-pulse { 0% { background-position: -200px 0; } 100% { background-position: 200px 0; } }\n.dc-card-header, .dc-card-base h4, .dc-card-base p {\n    background-color: #f0f0f0;\n    background-image: linear-gradient(90deg, #f0f0f0 0px, #fafafa 40px, #f0f0f0 80px);\n    background-size: 200px 100%;\n    animation: loading-pulse 1.5s infinite linear;\n}\n.dc-card-header { height: 100px; }\n.dc-card-base h4 { color: transparent; height: 20px; width: 80%; }\n.dc-card-base p { color: transparent; height: 15px; width: 90%; margin: 0 20px 15px; }\n.dc-card-action-btn { display: none; }"
                    .to_string(),
            );
        }

        blocks.push(".dc-card-base:hover { transform: translateY(-5px); }".to_string());

        blocks.join("\n\n")
    }

    /// Semantic CSS for the composite card: two custom properties, one per
    /// color role.
    fn composite_css(card: &ColorToken, button: &ColorToken) -> String {
        format!(
            "/* Design Tokens */\n:root {{\n    --dc-card-color: {};\n    --dc-secondary-btn-color: {};\n}}\n\n.dc-card-wrapper {{ max-width: 300px; margin: 20px auto; width: 100%; }}\n.dc-card-base {{\n    background: #ffffff; border-radius: 10px; overflow: hidden;\n    transition: transform 0.3s ease; border: 1px solid #eee;\n}}\n.dc-shadow {{ box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1); }}\n.dc-card-header {{ height: 100px; background-color: var(--dc-card-color); }}\n.dc-card-base h4 {{ padding: 15px 20px 5px; color: var(--dc-card-color); }}\n.dc-card-base p {{ padding: 0 20px 15px; font-size: 0.9em; color: #555; }}\n\n.dc-card-action-btn {{\n    width: calc(100% - 40px); margin: 0 20px 20px; padding: 10px;\n    color: white; border: none; border-radius: 5px; cursor: pointer;\n    font-weight: bold;\n    transition: background-color 0.3s;\n}}\n\n.dc-secondary-btn {{\n    background-color: var(--dc-secondary-btn-color);\n}}\n.dc-secondary-btn:hover {{\n    filter: brightness(0.9);\n}}",
            card.hex, button.hex
        )
    }
}

impl Default for CardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGenerator for CardGenerator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Card
    }

    fn generate(&self, intent: &Intent, palette: &ColorPalette) -> Result<CodeCache> {
        let primary = palette.resolve(intent.color_name);
        let title = intent.content_title.as_deref().unwrap_or(DEFAULT_TITLE);

        if let Some(secondary_name) = intent.secondary_color_name {
            let secondary = palette.resolve(secondary_name);
            let data = CompositeCardData {
                has_shadow: intent.flags.has_shadow,
                card_hex: &primary.hex,
                card_name: &primary.name,
                button_name: &secondary.name,
                title,
                action_text: &intent.action_text,
            };
            let html = self.engine.render_string(COMPOSITE_CARD_HTML, &data)?;
            let semantic =
                CodeBundle::new(html, Self::composite_css(primary, secondary), COMPOSITE_CARD_JS);
            Ok(CodeCache::semantic_only(semantic, COMPOSITE_CARD_PLACEHOLDER))
        } else {
            let data = SimpleCardData {
                has_shadow: intent.flags.has_shadow,
                skeleton: intent.flags.skeleton,
                color_hex: &primary.hex,
                title,
            };
            let html = self.engine.render_string(SIMPLE_CARD_HTML, &data)?;
            let semantic =
                CodeBundle::new(html, Self::simple_css(&intent.flags, primary), SIMPLE_CARD_JS);
            Ok(CodeCache::semantic_only(semantic, SIMPLE_CARD_PLACEHOLDER))
        }
    }
}
