//! Structured interpretation of a free-text prompt.

use crate::palette::ColorName;

/// Component kind requested by a prompt.
///
/// Variants are listed in dispatch priority order: a prompt matching several
/// kind keywords resolves to the first of Card, Button, Modal, Nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComponentKind {
    Card,
    Button,
    Modal,
    Nav,
    Unrecognized,
}

/// Style flags extracted from a prompt.
///
/// Flags are matched independently; combinations are resolved by the
/// generators (e.g. `square` forces the non-floating button shape).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleFlags {
    pub floating: bool,
    pub translucent: bool,
    pub vertical: bool,
    pub flashing: bool,
    pub has_shadow: bool,
    pub rounded: bool,
    pub square: bool,
    pub skeleton: bool,
}

/// The structured result of interpreting a free-text prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intent {
    /// Exactly one kind per prompt.
    pub kind: ComponentKind,
    pub flags: StyleFlags,
    /// Resolved primary color; defaults to the blue entry when no color
    /// keyword matched.
    pub color_name: ColorName,
    /// Text of the first double-quoted span, or "Ação" when absent.
    pub action_text: String,
    /// Text of a quoted span directly preceded by the word "título".
    /// Generators apply their kind-specific default when absent.
    pub content_title: Option<String>,
    /// Card only: a secondary button color different from the primary.
    pub secondary_color_name: Option<ColorName>,
}

impl Default for Intent {
    fn default() -> Self {
        Self {
            kind: ComponentKind::Unrecognized,
            flags: StyleFlags::default(),
            color_name: ColorName::Default,
            action_text: "Ação".to_string(),
            content_title: None,
            secondary_color_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_intent() {
        let intent = Intent::default();
        assert_eq!(intent.kind, ComponentKind::Unrecognized);
        assert_eq!(intent.color_name, ColorName::Default);
        assert_eq!(intent.action_text, "Ação");
        assert!(intent.content_title.is_none());
        assert!(!intent.flags.floating);
    }
}
