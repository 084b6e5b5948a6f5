//! Presentation attributes for phases.
//!
//! Colours travel through the engine as [`ThemeColor`] tokens. The presentation layer
//! decides what a token looks like; the message catalog's palette maps tokens to the
//! literal value substituted for `{color}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::PhaseKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Night,
    Twilight,
    Dawn,
    Day,
    Dusk,
}

impl ThemeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::Twilight => "twilight",
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name and colour token of one phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhaseStyle {
    pub name: String,
    pub color: ThemeColor,
}

impl PhaseStyle {
    fn builtin(kind: PhaseKind) -> Self {
        let color = match kind {
            PhaseKind::Night => ThemeColor::Night,
            PhaseKind::AstronomicalTwilight
            | PhaseKind::NauticalTwilight
            | PhaseKind::CivilTwilight => ThemeColor::Twilight,
            PhaseKind::Sunrise => ThemeColor::Dawn,
            PhaseKind::Day => ThemeColor::Day,
            PhaseKind::Sunset => ThemeColor::Dusk,
        };
        Self {
            name: kind.display_name().to_string(),
            color,
        }
    }
}

/// Phase styles keyed by [`PhaseKind::as_str`], e.g. `[phases.night]` in TOML.
///
/// Kinds without an entry use a built-in name and colour.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PhaseStyles(BTreeMap<String, PhaseStyle>);

impl PhaseStyles {
    pub fn style_for(&self, kind: PhaseKind) -> PhaseStyle {
        self.0
            .get(kind.as_str())
            .cloned()
            .unwrap_or_else(|| PhaseStyle::builtin(kind))
    }

    /// Keys that do not name any phase kind (usually typos in the catalog).
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !PhaseKind::ALL.iter().any(|kind| kind.as_str() == *key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_styles_cover_every_kind() {
        let styles = PhaseStyles::default();
        assert_eq!(styles.style_for(PhaseKind::Night).color, ThemeColor::Night);
        assert_eq!(styles.style_for(PhaseKind::Day).name, "Day");
        assert_eq!(
            styles.style_for(PhaseKind::NauticalTwilight).color,
            ThemeColor::Twilight
        );
    }

    #[test]
    fn test_configured_style_overrides_builtin() {
        let styles: PhaseStyles = toml::from_str(
            r#"
            [night]
            name = "Natt"
            color = "dusk"

            [midnight]
            name = "Typo"
            color = "night"
            "#,
        )
        .unwrap();

        let night = styles.style_for(PhaseKind::Night);
        assert_eq!(night.name, "Natt");
        assert_eq!(night.color, ThemeColor::Dusk);
        assert_eq!(styles.unknown_keys(), vec!["midnight"]);
    }
}
