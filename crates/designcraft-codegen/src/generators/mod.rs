//! Code generators for the recognized component kinds.
//!
//! Entries in the registry are ordered by dispatch priority; `dispatch`
//! walks them and returns the first kind match, so a prompt naming several
//! kinds resolves deterministically.

mod button;
mod card;
mod modal;
mod nav;
mod templates;

pub use button::ButtonGenerator;
pub use card::CardGenerator;
pub use modal::ModalGenerator;
pub use nav::NavGenerator;
pub use templates::TemplateEngine;

use crate::error::Result;
use crate::session::CodeCache;
use designcraft_core::{CodeBundle, ColorPalette, ComponentKind, Intent};

/// Common trait for component generators.
///
/// Generators are pure: identical intent and palette inputs yield
/// byte-identical bundles, with no shared state between invocations.
pub trait ComponentGenerator {
    /// Component kind this generator renders.
    fn kind(&self) -> ComponentKind;

    /// Whether this generator can render the utility style variant.
    ///
    /// Callers should branch on this capability rather than inspecting the
    /// utility bundle for placeholder text.
    fn supports_utility_style(&self) -> bool {
        false
    }

    /// Render both style variants for a resolved intent.
    fn generate(&self, intent: &Intent, palette: &ColorPalette) -> Result<CodeCache>;
}

/// The ordered generator registry.
///
/// Entries are listed in dispatch priority order (Card > Button > Modal >
/// Nav); `dispatch` returns the first entry whose kind matches.
pub fn registry() -> Vec<Box<dyn ComponentGenerator>> {
    vec![
        Box::new(CardGenerator::new()),
        Box::new(ButtonGenerator::new()),
        Box::new(ModalGenerator::new()),
        Box::new(NavGenerator::new()),
    ]
}

/// Dispatch an intent to its generator.
///
/// Unmatched kinds (including `Unrecognized`) yield the fixed
/// human-readable error bundles.
pub fn dispatch(intent: &Intent, palette: &ColorPalette) -> Result<CodeCache> {
    for generator in registry() {
        if generator.kind() == intent.kind {
            return generator.generate(intent, palette);
        }
    }
    Ok(unrecognized_cache())
}

/// Fixed error bundles shown for prompts naming no known component.
///
/// The only generation path invoked without a resolved color.
pub fn unrecognized_cache() -> CodeCache {
    let semantic = CodeBundle::new(
        r#"<p style="color:red; text-align:center; padding: 20px;">Não reconhecemos este componente. Tente ser mais explícito (Ex: "Card com botão vermelho")</p>"#,
        "",
        "",
    );
    let utility = CodeBundle::new(
        r#"<p style="color:red; text-align:center; padding: 20px;">Não reconhecemos este componente.</p>"#,
        "",
        "",
    );
    CodeCache::new(semantic, utility, false)
}
