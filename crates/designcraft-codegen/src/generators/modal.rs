//! Modal generator: overlay, centered content box, tinted header, and a
//! delegated close script.

use super::templates::TemplateEngine;
use super::ComponentGenerator;
use crate::error::Result;
use crate::session::CodeCache;
use designcraft_core::{CodeBundle, ColorPalette, ComponentKind, Intent};
use serde::Serialize;

const MODAL_HTML: &str = r#"<div id="dc-generated-component" class="dc-modal-overlay">
    <div class="dc-modal-content{{#if translucent}} dc-translucent-modal{{/if}}">
        <div class="dc-modal-header" style="background-color:{{color_hex}};">
            <h5>{{title}}</h5>
            <button class="dc-close-btn">&times;</button>
        </div>
        <div class="dc-modal-body">
            <p>Este é um pop-up para exibir informações importantes.</p>
        </div>
    </div>
</div>"#;

// The translucent rule ships in every bundle; the flag only toggles the
// class on the content element.
const MODAL_CSS: &str = r#".dc-modal-overlay {
    position: fixed; top: 0; left: 0; width: 100%; height: 100%;
    background-color: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 1000;
}
.dc-modal-content {
    background-color: #fff; border-radius: 10px; width: 90%; max-width: 500px; box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3); overflow: hidden;
}
.dc-translucent-modal {
    background-color: rgba(255, 255, 255, 0.8); backdrop-filter: blur(10px); -webkit-backdrop-filter: blur(10px);
}
.dc-modal-header {
    padding: 15px; color: white; display: flex; justify-content: space-between; align-items: center;
}
.dc-close-btn { background: none; border: none; color: white; font-size: 1.5rem; cursor: pointer; }
.dc-modal-body { padding: 20px; }"#;

// One document-level listener; safe to re-attach because it targets the
// component by id on each click.
const MODAL_JS: &str = r#"// Código JS para fechar o Modal
document.addEventListener('click', (e) => {
    if (e.target.matches('.dc-close-btn') || e.target.matches('.dc-modal-overlay')) {
        const modal = document.getElementById('dc-generated-component');
        if (modal) modal.style.display = 'none';
    }
});"#;

const MODAL_PLACEHOLDER: &str = "// Diversidade não implementada para Modal.";

/// Title shown when no "título" span was captured, or when the captured
/// span is empty.
const DEFAULT_TITLE: &str = "Título do Modal";

#[derive(Serialize)]
struct ModalData<'a> {
    translucent: bool,
    color_hex: &'a str,
    title: &'a str,
}

/// Modal code generator.
pub struct ModalGenerator {
    engine: TemplateEngine<'static>,
}

impl ModalGenerator {
    /// Create a new modal generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }
}

impl Default for ModalGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGenerator for ModalGenerator {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Modal
    }

    fn generate(&self, intent: &Intent, palette: &ColorPalette) -> Result<CodeCache> {
        let color = palette.resolve(intent.color_name);
        let title = intent
            .content_title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_TITLE);

        let data = ModalData {
            translucent: intent.flags.translucent,
            color_hex: &color.hex,
            title,
        };
        let html = self.engine.render_string(MODAL_HTML, &data)?;

        let semantic = CodeBundle::new(html, MODAL_CSS, MODAL_JS);
        Ok(CodeCache::semantic_only(semantic, MODAL_PLACEHOLDER))
    }
}
