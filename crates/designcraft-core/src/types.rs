//! Generated-code value types.

/// Style variant key for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StyleKind {
    /// Hand-authored-looking CSS using custom properties and classes.
    Semantic,
    /// Illustrative CSS approximating a utility-class authoring convention.
    Utility,
}

impl StyleKind {
    /// The key used by the UI style selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Utility => "utility",
        }
    }

    /// Parse a style selector key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "semantic" => Some(Self::Semantic),
            "utility" => Some(Self::Utility),
            _ => None,
        }
    }
}

/// Language tab for the code panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CodeLang {
    Html,
    Css,
    Js,
}

impl CodeLang {
    /// The key used by the UI tab selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Parse a tab selector key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "js" => Some(Self::Js),
            _ => None,
        }
    }
}

/// Generated source text for one style variant of one component instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBundle {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl CodeBundle {
    /// Create a bundle from its three source fields.
    pub fn new(
        html: impl Into<String>,
        css: impl Into<String>,
        js: impl Into<String>,
    ) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            js: js.into(),
        }
    }

    /// Get the field matching a language tab.
    pub fn get(&self, lang: CodeLang) -> &str {
        match lang {
            CodeLang::Html => &self.html,
            CodeLang::Css => &self.css,
            CodeLang::Js => &self.js,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_kind_keys() {
        assert_eq!(StyleKind::from_key("semantic"), Some(StyleKind::Semantic));
        assert_eq!(StyleKind::from_key("utility"), Some(StyleKind::Utility));
        assert_eq!(StyleKind::from_key("tailwind"), None);
        assert_eq!(StyleKind::Utility.as_str(), "utility");
    }

    #[test]
    fn test_code_lang_keys() {
        assert_eq!(CodeLang::from_key("html"), Some(CodeLang::Html));
        assert_eq!(CodeLang::from_key("markup"), None);
    }

    #[test]
    fn test_bundle_field_access() {
        let bundle = CodeBundle::new("<p></p>", ".a {}", "// none");
        assert_eq!(bundle.get(CodeLang::Html), "<p></p>");
        assert_eq!(bundle.get(CodeLang::Css), ".a {}");
        assert_eq!(bundle.get(CodeLang::Js), "// none");
    }
}
