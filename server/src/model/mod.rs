use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the atomic color roles a palette assigns.
///
/// The camelCase key returned by [`ColorRole::as_str`] is used both as the
/// JSON key in the persisted color payload and as the style variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Foreground,
    Card,
    CardForeground,
    Muted,
    MutedForeground,
    Border,
}

impl ColorRole {
    /// Every atomic role, in palette order.
    pub const ALL: [ColorRole; 10] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Card,
        ColorRole::CardForeground,
        ColorRole::Muted,
        ColorRole::MutedForeground,
        ColorRole::Border,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
            ColorRole::Card => "card",
            ColorRole::CardForeground => "cardForeground",
            ColorRole::Muted => "muted",
            ColorRole::MutedForeground => "mutedForeground",
            ColorRole::Border => "border",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of the composite gradient entry in the color payload.
pub const GRADIENT_KEY: &str = "gradient";

/// A complete palette: one value per [`ColorRole`] plus a gradient expression.
///
/// No field is optional. A payload missing any key fails to deserialize, so
/// a partially populated palette can never be constructed from store data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub border: String,
    /// Composite style expression (e.g. `linear-gradient(...)`), not an atomic color
    pub gradient: String,
}

impl ThemeColors {
    /// Value assigned to an atomic role.
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Foreground => &self.foreground,
            ColorRole::Card => &self.card,
            ColorRole::CardForeground => &self.card_foreground,
            ColorRole::Muted => &self.muted,
            ColorRole::MutedForeground => &self.muted_foreground,
            ColorRole::Border => &self.border,
        }
    }

    /// Iterate the atomic roles with their values. Never yields the gradient.
    pub fn atomic(&self) -> impl Iterator<Item = (ColorRole, &str)> + '_ {
        ColorRole::ALL.iter().map(move |role| (*role, self.get(*role)))
    }
}

/// A theme record as persisted in the theme store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeRow {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a theme record that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewThemeRow {
    pub name: String,
    pub colors: ThemeColors,
    pub is_active: bool,
}
