//! Component code generators for the DesignCraft engine.
//!
//! This crate turns a tokenized [`Intent`](designcraft_core::Intent) into
//! HTML/CSS/JS [`CodeBundle`](designcraft_core::CodeBundle)s, one per style
//! variant. Each recognized component kind has its own generator behind the
//! [`ComponentGenerator`] trait; an ordered registry dispatches intents in
//! priority order (Card > Button > Modal > Nav).
//!
//! # Example
//!
//! ```
//! use designcraft_codegen::GenerationSession;
//! use designcraft_core::{CodeLang, ColorPalette, StyleKind};
//!
//! let palette = ColorPalette::new();
//! let session = GenerationSession::generate("botão verde piscando", &palette)?;
//!
//! let css = session.code(StyleKind::Semantic, CodeLang::Css);
//! assert!(css.contains("pulse-blink"));
//! # Ok::<(), designcraft_codegen::CodegenError>(())
//! ```

pub mod error;
pub mod generators;
pub mod session;

pub use error::{CodegenError, Result};
pub use generators::{
    dispatch, registry, unrecognized_cache, ButtonGenerator, CardGenerator, ComponentGenerator,
    ModalGenerator, NavGenerator, TemplateEngine,
};
pub use session::{CodeCache, GenerationSession};
