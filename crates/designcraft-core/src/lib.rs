//! Core types for the DesignCraft generation engine.
//!
//! This crate provides the foundational types used across all other
//! designcraft crates:
//! - `Intent`: the structured interpretation of a free-text prompt
//! - Color tokens and the fixed color palette
//! - `CodeBundle` and the style/language keys used to address generated code

pub mod intent;
pub mod palette;
pub mod types;

pub use intent::*;
pub use palette::*;
pub use types::*;
