//! Quoted-span extraction from prompts.

use regex::Regex;
use std::sync::OnceLock;

fn quoted_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)""#).expect("valid quoted-span pattern"))
}

fn titled_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)título "([^"]*)""#).expect("valid title pattern"))
}

/// First double-quoted span in the prompt, case preserved.
pub(crate) fn action_text(prompt: &str) -> Option<String> {
    quoted_span()
        .captures(prompt)
        .map(|captures| captures[1].to_string())
}

/// Quoted span directly preceded by the literal word "título".
pub(crate) fn content_title(prompt: &str) -> Option<String> {
    titled_span()
        .captures(prompt)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_text_first_span() {
        assert_eq!(
            action_text(r#"card com botão vermelho "Comprar Agora""#),
            Some("Comprar Agora".to_string())
        );
        assert_eq!(
            action_text(r#"botão "Salvar" e depois "Cancelar""#),
            Some("Salvar".to_string())
        );
    }

    #[test]
    fn test_action_text_absent() {
        assert_eq!(action_text("botão verde"), None);
    }

    #[test]
    fn test_content_title_requires_titulo() {
        assert_eq!(
            content_title(r#"card com título "Minha Loja""#),
            Some("Minha Loja".to_string())
        );
        assert_eq!(content_title(r#"card com "Minha Loja""#), None);
    }

    #[test]
    fn test_content_title_case_insensitive_marker() {
        assert_eq!(
            content_title(r#"card com Título "Promoções""#),
            Some("Promoções".to_string())
        );
    }

    #[test]
    fn test_empty_quoted_span_is_captured() {
        assert_eq!(action_text(r#"botão """#), Some(String::new()));
        assert_eq!(content_title(r#"modal título """#), Some(String::new()));
    }
}
