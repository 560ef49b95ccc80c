//! Color tokens and the fixed color palette.

use indexmap::IndexMap;

/// Name of a palette entry.
///
/// `Cinza` exists only in the palette; no prompt keyword maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorName {
    /// The blue default; "azul" in prompts resolves here.
    Default,
    Verde,
    Vermelho,
    Cinza,
}

impl ColorName {
    /// The lookup key for this entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Verde => "verde",
            Self::Vermelho => "vermelho",
            Self::Cinza => "cinza",
        }
    }

    /// Parse a lookup key; unrecognized keys fall back to the default entry.
    pub fn from_key(key: &str) -> Self {
        match key {
            "verde" => Self::Verde,
            "vermelho" => Self::Vermelho,
            "cinza" => Self::Cinza,
            _ => Self::Default,
        }
    }
}

/// A named color with precomputed representations used by the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorToken {
    /// Hex value, e.g. `#3498db`.
    pub hex: String,
    /// Fully opaque `rgba()` form.
    pub rgba_opaque: String,
    /// Translucent `rgba()` form at 0.7 alpha.
    pub rgba_translucent: String,
    /// Display name used inside generated copy, e.g. "azul".
    pub name: String,
}

impl ColorToken {
    /// Create a token from a hex string, precomputing both rgba forms.
    ///
    /// A malformed hex channel falls back to 0 rather than failing; the
    /// palette is built from fixed known-good values.
    pub fn from_hex(hex: &str, name: &str) -> Self {
        let digits = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0)
        };
        let (r, g, b) = (channel(0..2), channel(2..4), channel(4..6));

        Self {
            hex: format!("#{digits}"),
            rgba_opaque: format!("rgba({r}, {g}, {b}, 1)"),
            rgba_translucent: format!("rgba({r}, {g}, {b}, 0.7)"),
            name: name.to_string(),
        }
    }
}

/// The fixed 4-entry color table consumed by the generators.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    tokens: IndexMap<ColorName, ColorToken>,
}

impl ColorPalette {
    /// Build the palette with its four fixed entries.
    pub fn new() -> Self {
        let mut tokens = IndexMap::new();
        tokens.insert(ColorName::Default, ColorToken::from_hex("#3498db", "azul"));
        tokens.insert(ColorName::Verde, ColorToken::from_hex("#3cb371", "verde"));
        tokens.insert(
            ColorName::Vermelho,
            ColorToken::from_hex("#e74c3c", "vermelho"),
        );
        tokens.insert(ColorName::Cinza, ColorToken::from_hex("#95a5a6", "cinza"));
        Self { tokens }
    }

    /// Get a token by name.
    pub fn get(&self, name: ColorName) -> Option<&ColorToken> {
        self.tokens.get(&name)
    }

    /// Get a token by name, falling back to the default entry.
    pub fn resolve(&self, name: ColorName) -> &ColorToken {
        self.tokens
            .get(&name)
            .or_else(|| self.tokens.get(&ColorName::Default))
            .expect("palette always contains the default token")
    }

    /// Iterate over all entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColorName, &ColorToken)> {
        self.tokens.iter()
    }

    /// Number of entries in the palette.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}
