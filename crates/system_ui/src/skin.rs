//! Visual skin identifiers consumed through the `data-ui-skin` DOM contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Interchangeable visual skins. Skins change styling only, never behavior.
pub enum UiSkin {
    /// Soft neumorphic surfaces.
    #[default]
    SoftNeumorphic,
    /// Modern adaptive flat surfaces.
    ModernAdaptive,
    /// Classic XP-era chrome.
    #[serde(rename = "classic-xp")]
    ClassicXp,
    /// Classic 95-era chrome.
    #[serde(rename = "classic-95")]
    Classic95,
    /// Monospace terminal styling.
    TerminalMono,
    /// High-contrast accessibility skin.
    HighContrast,
}

impl UiSkin {
    /// Every skin, in display order.
    pub const ALL: [Self; 6] = [
        Self::SoftNeumorphic,
        Self::ModernAdaptive,
        Self::ClassicXp,
        Self::Classic95,
        Self::TerminalMono,
        Self::HighContrast,
    ];

    /// Stable skin id used in DOM attributes and persisted state.
    pub fn id(self) -> &'static str {
        match self {
            Self::SoftNeumorphic => "soft-neumorphic",
            Self::ModernAdaptive => "modern-adaptive",
            Self::ClassicXp => "classic-xp",
            Self::Classic95 => "classic-95",
            Self::TerminalMono => "terminal-mono",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Human-readable skin name.
    pub fn label(self) -> &'static str {
        match self {
            Self::SoftNeumorphic => "Soft Neumorphic",
            Self::ModernAdaptive => "Modern Adaptive",
            Self::ClassicXp => "Classic XP",
            Self::Classic95 => "Classic 95",
            Self::TerminalMono => "Terminal Mono",
            Self::HighContrast => "High Contrast",
        }
    }
}

impl fmt::Display for UiSkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ui skin id `{0}`")]
/// Returned when a skin id does not name a known [`UiSkin`].
pub struct UnknownSkinError(pub String);

impl FromStr for UiSkin {
    type Err = UnknownSkinError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let id = raw.trim();
        Self::ALL
            .into_iter()
            .find(|skin| skin.id() == id)
            .ok_or_else(|| UnknownSkinError(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_parse_back_to_their_skin() {
        for skin in UiSkin::ALL {
            assert_eq!(skin.id().parse::<UiSkin>(), Ok(skin));
        }
        assert_eq!(" classic-95 ".parse::<UiSkin>(), Ok(UiSkin::Classic95));
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "vaporwave".parse::<UiSkin>().unwrap_err();
        assert_eq!(err.to_string(), "unknown ui skin id `vaporwave`");
    }

    #[test]
    fn serde_uses_the_dom_id() {
        for skin in UiSkin::ALL {
            let json = serde_json::to_string(&skin).expect("serialize");
            assert_eq!(json, format!("\"{}\"", skin.id()));
        }
    }
}
