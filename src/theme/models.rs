//! Storefront theme data models
//!
//! This module defines the versioned theme value, the partial-update patch
//! applied by the appearance editor, and the built-in color preset and font
//! catalogs.

use serde::{Deserialize, Serialize};

/// Identifier for one of the built-in storefront font stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontId {
    /// Inter Tight - modern and clean
    Sans,
    /// Playfair Display - elegant and luxurious
    Serif,
    /// JetBrains Mono - technical and precise
    Mono,
}

impl FontId {
    /// Human-readable font name shown in the typography picker
    pub fn display_name(self) -> &'static str {
        match self {
            FontId::Sans => "Inter Tight",
            FontId::Serif => "Playfair Display",
            FontId::Mono => "JetBrains Mono",
        }
    }

    /// CSS class the preview layer applies for this stack
    pub fn css_class(self) -> &'static str {
        match self {
            FontId::Sans => "font-sans",
            FontId::Serif => "font-serif",
            FontId::Mono => "font-mono",
        }
    }

    /// Short description shown under the font name
    pub fn description(self) -> &'static str {
        match self {
            FontId::Sans => "Modern and clean",
            FontId::Serif => "Elegant and luxurious",
            FontId::Mono => "Technical and precise",
        }
    }

    /// All selectable fonts, in picker order
    pub fn all() -> [FontId; 3] {
        [FontId::Sans, FontId::Serif, FontId::Mono]
    }
}

/// A quick-theme color preset selectable from the palette section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    /// Preset name shown as the swatch tooltip
    pub name: &'static str,
    /// Primary accent color
    pub primary: &'static str,
    /// Secondary accent color
    pub secondary: &'static str,
    /// Page background color
    pub background: &'static str,
    /// Card surface color
    pub card: &'static str,
}

/// Built-in quick themes, in swatch order
pub const COLOR_PRESETS: [ColorPreset; 4] = [
    ColorPreset {
        name: "Esmeralda",
        primary: "#10b981",
        secondary: "#34d399",
        background: "#020617",
        card: "#0f172a",
    },
    ColorPreset {
        name: "Océano",
        primary: "#0ea5e9",
        secondary: "#38bdf8",
        background: "#0f172a",
        card: "#1e293b",
    },
    ColorPreset {
        name: "Violeta",
        primary: "#8b5cf6",
        secondary: "#a78bfa",
        background: "#020617",
        card: "#0f172a",
    },
    ColorPreset {
        name: "Rosa Neón",
        primary: "#f43f5e",
        secondary: "#fb7185",
        background: "#000000",
        card: "#111111",
    },
];

/// The versioned storefront theme value
///
/// A flat record of named style attributes. Theme values are compared by
/// structural equality and replaced as whole snapshots; the history manager
/// never mutates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Brand name rendered in the storefront navbar
    pub brand_name: String,
    /// Primary accent color (hex)
    pub primary_color: String,
    /// Secondary accent color (hex)
    pub secondary_color: String,
    /// Page background color (hex)
    pub background_color: String,
    /// Card surface color (hex)
    pub card_color: String,
    /// Selected font stack
    pub font_id: FontId,
    /// Corner radius in pixels (0-30)
    pub border_radius: u8,
    /// Whether card surfaces use the frosted-glass treatment
    pub glassmorphism: bool,
    /// Drop shadow intensity (0.0-1.0)
    pub shadow_intensity: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let preset = COLOR_PRESETS[0];
        Self {
            brand_name: "MagicBuy".to_string(),
            primary_color: preset.primary.to_string(),
            secondary_color: preset.secondary.to_string(),
            background_color: preset.background.to_string(),
            card_color: preset.card.to_string(),
            font_id: FontId::Sans,
            border_radius: 12,
            glassmorphism: true,
            shadow_intensity: 0.2,
        }
    }
}

impl ThemeConfig {
    /// Produce a new theme with this preset's four colors, keeping every
    /// other attribute
    pub fn with_preset(&self, preset: &ColorPreset) -> ThemeConfig {
        ThemeConfig {
            primary_color: preset.primary.to_string(),
            secondary_color: preset.secondary.to_string(),
            background_color: preset.background.to_string(),
            card_color: preset.card.to_string(),
            ..self.clone()
        }
    }

    /// Merge a partial update onto this theme, producing a new value
    ///
    /// Unset patch fields keep their current value. Callers merge before
    /// handing the result to the history manager, which only ever sees
    /// complete snapshots.
    pub fn merged(&self, patch: &ThemePatch) -> ThemeConfig {
        ThemeConfig {
            brand_name: patch.brand_name.clone().unwrap_or_else(|| self.brand_name.clone()),
            primary_color: patch
                .primary_color
                .clone()
                .unwrap_or_else(|| self.primary_color.clone()),
            secondary_color: patch
                .secondary_color
                .clone()
                .unwrap_or_else(|| self.secondary_color.clone()),
            background_color: patch
                .background_color
                .clone()
                .unwrap_or_else(|| self.background_color.clone()),
            card_color: patch.card_color.clone().unwrap_or_else(|| self.card_color.clone()),
            font_id: patch.font_id.unwrap_or(self.font_id),
            border_radius: patch.border_radius.unwrap_or(self.border_radius),
            glassmorphism: patch.glassmorphism.unwrap_or(self.glassmorphism),
            shadow_intensity: patch.shadow_intensity.unwrap_or(self.shadow_intensity),
        }
    }
}

/// A partial theme update from a single editor control
///
/// Every field is optional; only the fields the control touched are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemePatch {
    /// New brand name, if edited
    pub brand_name: Option<String>,
    /// New primary color, if edited
    pub primary_color: Option<String>,
    /// New secondary color, if edited
    pub secondary_color: Option<String>,
    /// New background color, if edited
    pub background_color: Option<String>,
    /// New card color, if edited
    pub card_color: Option<String>,
    /// New font selection, if edited
    pub font_id: Option<FontId>,
    /// New border radius, if edited
    pub border_radius: Option<u8>,
    /// New glassmorphism flag, if toggled
    pub glassmorphism: Option<bool>,
    /// New shadow intensity, if edited
    pub shadow_intensity: Option<f32>,
}

impl ThemePatch {
    /// Patch setting only the primary color
    pub fn primary_color(value: impl Into<String>) -> Self {
        Self {
            primary_color: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch setting only the border radius
    pub fn border_radius(value: u8) -> Self {
        Self {
            border_radius: Some(value),
            ..Self::default()
        }
    }

    /// Patch setting only the font
    pub fn font(value: FontId) -> Self {
        Self {
            font_id: Some(value),
            ..Self::default()
        }
    }

    /// Whether the patch sets no fields at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
