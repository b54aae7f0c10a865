//! Colors.
//!
//! [`HexColor`] is a validated `#RRGGBB` string; [`Palette`] maps semantic
//! names to colors and keeps insertion order.  Both are immutable once
//! built.

use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A color in `#RRGGBB` form.  Case is preserved as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

/// Error for a string that is not a 6-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color: {0:?}")]
pub struct ColorError(String);

impl HexColor {
    /// Validate `s` as `#` followed by exactly six hex digits.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').ok_or_else(|| ColorError(s.into()))?;
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.into()))
        } else {
            Err(ColorError(s.into()))
        }
    }

    /// Wrap a literal known to be well formed.
    pub(crate) fn trusted(s: &str) -> Self {
        debug_assert!(Self::parse(s).is_ok(), "bad color literal {:?}", s);
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `(r, g, b)` components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // Validated in `parse`, so every slice is two hex digits.
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(DeError::custom)
    }
}

/// Errors from building a [`Palette`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("duplicate palette entry: {0}")]
    Duplicate(String),
    #[error("palette entry {name}: {source}")]
    Color { name: String, source: ColorError },
}

/// Ordered mapping from semantic name to color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, HexColor)>,
}

impl Palette {
    /// Build a palette from `(name, "#RRGGBB")` pairs.
    ///
    /// Fails on the first duplicate name or malformed color.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, PaletteError> {
        let mut entries: Vec<(String, HexColor)> = Vec::new();
        for (name, value) in pairs {
            if entries.iter().any(|(n, _)| n == name) {
                return Err(PaletteError::Duplicate(name.into()));
            }
            let color = HexColor::parse(value).map_err(|source| PaletteError::Color {
                name: name.into(),
                source,
            })?;
            entries.push((name.into(), color));
        }
        Ok(Self { entries })
    }

    /// The palette every widget in the default bar draws from.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD
                .iter()
                .map(|(n, c)| (n.to_string(), HexColor::trusted(c)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&HexColor> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Look up a color the descriptor itself refers to.
    ///
    /// Falls back to black so a missing entry cannot break assembly; the
    /// validator still reports palette problems.
    pub(crate) fn color(&self, name: &str) -> HexColor {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| HexColor::trusted("#000000"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HexColor)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, color) in &self.entries {
            map.serialize_entry(name, color)?;
        }
        map.end()
    }
}

const STANDARD: [(&str, &str); 15] = [
    ("flamingo", "#F3CDCD"),
    ("mauve", "#DDB6F2"),
    ("pink", "#f5c2e7"),
    ("maroon", "#DE3163"),
    ("red", "#fd3333"),
    ("orange", "#FF7F00"),
    ("peach", "#FFBF00"),
    ("yellow", "#f6e653"),
    ("green", "#90EE90"),
    ("teal", "#40E0D0"),
    ("blue", "#0000FF"),
    ("sky", "#89dceb"),
    ("white", "#d9e0ee"),
    ("gray", "#6e6c7e"),
    ("black", "#000000"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_cases() {
        assert!(HexColor::parse("#f5c2e7").is_ok());
        assert!(HexColor::parse("#DE3163").is_ok());
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["f5c2e7", "#fff", "#f5c2e7aa", "#g5c2e7", ""] {
            assert!(HexColor::parse(bad).is_err(), "{:?} accepted", bad);
        }
    }

    #[test]
    fn rgb_components() {
        let c = HexColor::parse("#DE3163").unwrap();
        assert_eq!(c.rgb(), (0xde, 0x31, 0x63));
    }

    #[test]
    fn standard_palette_is_well_formed() {
        let p = Palette::standard();
        assert_eq!(p.len(), 15);
        let rebuilt = Palette::from_pairs(p.iter().map(|(n, c)| (n, c.as_str()))).unwrap();
        assert_eq!(rebuilt, p);
        assert_eq!(p.get("gray").map(|c| c.as_str()), Some("#6e6c7e"));
        assert!(p.get("purple").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = Palette::from_pairs([("red", "#ff0000"), ("red", "#fd3333")]).unwrap_err();
        assert_eq!(err, PaletteError::Duplicate("red".into()));
    }

    #[test]
    fn bad_color_names_the_entry() {
        let err = Palette::from_pairs([("sky", "89dceb")]).unwrap_err();
        assert!(matches!(err, PaletteError::Color { ref name, .. } if name == "sky"));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let p = Palette::from_pairs([("b", "#000001"), ("a", "#000002")]).unwrap();
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r##"{"b":"#000001","a":"#000002"}"##
        );
    }
}
