//! Declarative keyword tables and the matching reducer.
//!
//! All tables hold lowercase Portuguese keywords; callers lowercase the
//! prompt once before matching.

use designcraft_core::{ColorName, ComponentKind, StyleFlags};

/// Flags addressable by the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlagKey {
    Floating,
    Translucent,
    Vertical,
    Flashing,
    HasShadow,
    Rounded,
    Square,
    Skeleton,
}

/// Flag synonyms: a flag is set when any of its keywords appears.
const FLAG_KEYWORDS: &[(FlagKey, &[&str])] = &[
    (FlagKey::Floating, &["flutuante", "fixo"]),
    (FlagKey::Translucent, &["translucido", "vidro"]),
    (FlagKey::Vertical, &["vertical"]),
    (FlagKey::Flashing, &["piscando", "pulsando"]),
    (FlagKey::HasShadow, &["sombra", "elevação"]),
    (FlagKey::Rounded, &["arredondado", "circular"]),
    (FlagKey::Square, &["quadrado", "retangular"]),
    (FlagKey::Skeleton, &["esquelético", "skeleton"]),
];

/// Kind keywords in dispatch priority order; the first matching row wins.
const KIND_KEYWORDS: &[(ComponentKind, &[&str])] = &[
    (ComponentKind::Card, &["card", "cartão", "perfil"]),
    (ComponentKind::Button, &["botão", "button"]),
    (ComponentKind::Modal, &["modal", "janela popup", "popup"]),
    (ComponentKind::Nav, &["menu", "navegação"]),
];

/// Color keywords in resolution order. "azul" resolves to the default
/// entry; cinza has no keyword and is reachable only through the palette.
const COLOR_KEYWORDS: &[(ColorName, &[&str])] = &[
    (ColorName::Verde, &["verde"]),
    (ColorName::Default, &["azul"]),
    (ColorName::Vermelho, &["vermelho"]),
];

/// Secondary button colors recognized for composite cards, in detection
/// order. Only these two are recognized.
const SECONDARY_BUTTON_COLORS: &[(ColorName, &str)] = &[
    (ColorName::Vermelho, "vermelho"),
    (ColorName::Verde, "verde"),
];

/// True when any synonym appears as a substring of the prompt.
fn any_keyword(prompt: &str, synonyms: &[&str]) -> bool {
    synonyms.iter().any(|keyword| prompt.contains(keyword))
}

/// Scan the flag table against a lowercased prompt.
pub(crate) fn match_flags(prompt: &str) -> StyleFlags {
    let mut flags = StyleFlags::default();
    for (key, synonyms) in FLAG_KEYWORDS {
        if any_keyword(prompt, synonyms) {
            match key {
                FlagKey::Floating => flags.floating = true,
                FlagKey::Translucent => flags.translucent = true,
                FlagKey::Vertical => flags.vertical = true,
                FlagKey::Flashing => flags.flashing = true,
                FlagKey::HasShadow => flags.has_shadow = true,
                FlagKey::Rounded => flags.rounded = true,
                FlagKey::Square => flags.square = true,
                FlagKey::Skeleton => flags.skeleton = true,
            }
        }
    }
    flags
}

/// Resolve the component kind; first matching row of the priority table.
pub(crate) fn match_kind(prompt: &str) -> ComponentKind {
    KIND_KEYWORDS
        .iter()
        .find(|(_, synonyms)| any_keyword(prompt, synonyms))
        .map(|(kind, _)| *kind)
        .unwrap_or(ComponentKind::Unrecognized)
}

/// Resolve the primary color; no keyword match yields the default entry.
pub(crate) fn match_color(prompt: &str) -> ColorName {
    COLOR_KEYWORDS
        .iter()
        .find(|(_, synonyms)| any_keyword(prompt, synonyms))
        .map(|(color, _)| *color)
        .unwrap_or(ColorName::Default)
}

/// Detect a secondary button color for composite cards.
///
/// Requires the word "botão" plus one of the hard-coded secondary colors;
/// the caller clears the result when it equals the primary color.
pub(crate) fn match_secondary_color(prompt: &str) -> Option<ColorName> {
    if !prompt.contains("botão") {
        return None;
    }
    SECONDARY_BUTTON_COLORS
        .iter()
        .find(|(_, keyword)| prompt.contains(keyword))
        .map(|(color, _)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let flags = match_flags("botão flutuante quadrado piscando");
        assert!(flags.floating);
        assert!(flags.square);
        assert!(flags.flashing);
        assert!(!flags.rounded);
    }

    #[test]
    fn test_floating_synonym() {
        assert!(match_flags("botão fixo").floating);
    }

    #[test]
    fn test_kind_priority_card_over_button() {
        assert_eq!(match_kind("card com botão"), ComponentKind::Card);
        assert_eq!(match_kind("botão no modal"), ComponentKind::Button);
        assert_eq!(match_kind("modal com menu"), ComponentKind::Modal);
        assert_eq!(match_kind("menu de navegação"), ComponentKind::Nav);
    }

    #[test]
    fn test_kind_unrecognized() {
        assert_eq!(match_kind("tabela de preços"), ComponentKind::Unrecognized);
    }

    #[test]
    fn test_color_resolution_order() {
        assert_eq!(match_color("verde e vermelho"), ColorName::Verde);
        assert_eq!(match_color("azul e vermelho"), ColorName::Default);
        assert_eq!(match_color("vermelho"), ColorName::Vermelho);
        assert_eq!(match_color("sem cor"), ColorName::Default);
    }

    #[test]
    fn test_gray_has_no_keyword() {
        assert_eq!(match_color("cinza"), ColorName::Default);
    }

    #[test]
    fn test_secondary_requires_botao() {
        assert_eq!(match_secondary_color("card vermelho"), None);
        assert_eq!(
            match_secondary_color("card com botão vermelho"),
            Some(ColorName::Vermelho)
        );
        assert_eq!(
            match_secondary_color("card com botão verde"),
            Some(ColorName::Verde)
        );
    }

    #[test]
    fn test_secondary_detection_order_red_first() {
        assert_eq!(
            match_secondary_color("card com botão verde e vermelho"),
            Some(ColorName::Vermelho)
        );
    }
}
