//! Prompt tokenizer for the DesignCraft generation engine.
//!
//! Turns a short Portuguese free-text description into a structured
//! [`Intent`]: component kind, style flags, resolved color, and any quoted
//! text spans. Matching is case-insensitive substring scanning against
//! declarative keyword tables; the tokenizer is total over all inputs and
//! never fails.
//!
//! # Example
//!
//! ```
//! use designcraft_core::ComponentKind;
//! use designcraft_parser::tokenize;
//!
//! let intent = tokenize("botão flutuante quadrado verde piscando");
//! assert_eq!(intent.kind, ComponentKind::Button);
//! assert!(intent.flags.floating);
//! assert!(intent.flags.flashing);
//! ```

mod extract;
mod keywords;
mod suggest;

pub use suggest::{suggest, SUGGESTION_KEYWORDS};

use designcraft_core::{ComponentKind, Intent};

/// Interpret a free-text prompt into a structured [`Intent`].
///
/// Keyword matching runs against a lowercased copy of the prompt; quoted
/// spans are extracted from the original text with case preserved. An empty
/// or unrecognized prompt yields `ComponentKind::Unrecognized` with all
/// flags false.
pub fn tokenize(prompt: &str) -> Intent {
    let lowered = prompt.to_lowercase();

    let kind = keywords::match_kind(&lowered);
    let flags = keywords::match_flags(&lowered);
    let color_name = keywords::match_color(&lowered);

    // Secondary colors apply to composite cards only.
    let secondary_color_name = if kind == ComponentKind::Card {
        keywords::match_secondary_color(&lowered).filter(|secondary| *secondary != color_name)
    } else {
        None
    };

    let action_text = extract::action_text(prompt).unwrap_or_else(|| "Ação".to_string());
    let content_title = extract::content_title(prompt);

    Intent {
        kind,
        flags,
        color_name,
        action_text,
        content_title,
        secondary_color_name,
    }
}
