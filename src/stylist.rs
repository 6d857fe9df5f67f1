//! Template generation and theme suggestions
//!
//! The "AI stylist": generates three storefront template proposals from a
//! business brief, and proposes whole-theme restyles from a free-text
//! prompt. Picks are deterministic functions of the input text so the same
//! brief always yields the same proposals; the original product's simulated
//! processing delay is presentation-layer theater and has no counterpart
//! here.

use crate::error::{Result, StoreforgeError};
use crate::theme::{COLOR_PRESETS, FontId, ThemeConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Business vertical selectable in the template generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Fashion,
    Food,
    Tech,
    Beauty,
    Home,
    Sports,
}

impl Industry {
    /// Label shown on the industry picker card
    pub fn label(self) -> &'static str {
        match self {
            Industry::Fashion => "Moda",
            Industry::Food => "Alimentos",
            Industry::Tech => "Tecnología",
            Industry::Beauty => "Belleza",
            Industry::Home => "Hogar",
            Industry::Sports => "Deportes",
        }
    }
}

/// Requested visual tone for the generated templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTone {
    Minimal,
    Futuristic,
    Elegant,
    Vibrant,
    Modern,
    Classic,
}

/// Fallback palette used when a variant index is out of range
const FALLBACK_PALETTE: [&str; 4] = ["#667EEA", "#764BA2", "#F093FB", "#4FACFE"];

/// Three curated 4-color palette variants per industry
fn palette_variants(industry: Industry) -> [[&'static str; 4]; 3] {
    match industry {
        Industry::Fashion => [
            ["#FF6B9D", "#C44569", "#F8B500", "#FFC93C"],
            ["#2D3436", "#DFE6E9", "#FF7675", "#74B9FF"],
            ["#A29BFE", "#6C5CE7", "#FD79A8", "#FDCB6E"],
        ],
        Industry::Food => [
            ["#FF6348", "#FF4757", "#FFA502", "#FFD32A"],
            ["#26DE81", "#20BF6B", "#FC5C65", "#FD9644"],
            ["#D63031", "#E17055", "#FDCB6E", "#6C5CE7"],
        ],
        Industry::Tech => [
            ["#00D2FF", "#3A7BD5", "#667EEA", "#764BA2"],
            ["#0F2027", "#203A43", "#2C5364", "#4CA1AF"],
            ["#667EEA", "#764BA2", "#F093FB", "#4FACFE"],
        ],
        Industry::Beauty => [
            ["#FD79A8", "#FDCB6E", "#E84393", "#6C5CE7"],
            ["#FFB6C1", "#FFC0CB", "#FFD700", "#DDA0DD"],
            ["#E84393", "#FD79A8", "#A29BFE", "#FDCB6E"],
        ],
        Industry::Home => [
            ["#55EFC4", "#00B894", "#81ECEC", "#74B9FF"],
            ["#A8E6CF", "#FFD3B6", "#FFAAA5", "#FF8B94"],
            ["#2ECC71", "#3498DB", "#9B59B6", "#E74C3C"],
        ],
        Industry::Sports => [
            ["#00B894", "#00CEC9", "#0984E3", "#6C5CE7"],
            ["#FF6348", "#FF4757", "#FFA502", "#1E90FF"],
            ["#E74C3C", "#3498DB", "#2ECC71", "#F39C12"],
        ],
    }
}

/// Color palette for one industry variant
///
/// Falls back to a neutral palette for variant indexes beyond the curated
/// three.
pub fn color_palette(industry: Industry, variant: usize) -> [&'static str; 4] {
    palette_variants(industry)
        .get(variant)
        .copied()
        .unwrap_or(FALLBACK_PALETTE)
}

/// A filled-in template generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateBrief {
    /// Name of the business the store is for
    pub business_name: String,
    /// Free-text description of the business
    pub description: String,
    /// Selected vertical
    pub industry: Industry,
    /// Requested tone
    pub tone: StyleTone,
}

impl TemplateBrief {
    fn validate(&self) -> Result<()> {
        if self.business_name.trim().is_empty() {
            return Err(StoreforgeError::Validation(
                "business name is required".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(StoreforgeError::Validation(
                "business description is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A generated storefront template proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Proposal name, derived from the business name
    pub name: String,
    /// Tone carried over from the brief
    pub tone: StyleTone,
    /// Four-color palette for the proposal
    pub colors: [String; 4],
    /// Vertical carried over from the brief
    pub industry: Industry,
    /// One-line pitch shown under the proposal
    pub blurb: String,
}

/// Generate the three template proposals for a brief
///
/// Always produces exactly three variants (Premium, Classic, Bold), each on
/// a different palette variant of the brief's industry. Fails only on an
/// incomplete brief.
pub fn generate_templates(brief: &TemplateBrief) -> Result<Vec<Template>> {
    brief.validate()?;

    let variants = [
        ("Premium", "Premium design with glassmorphism and smooth motion"),
        ("Classic", "Classic, professional design tuned for conversions"),
        ("Bold", "Bold design with vibrant colors and striking type"),
    ];

    let templates = variants
        .iter()
        .enumerate()
        .map(|(variant, (suffix, blurb))| Template {
            name: format!("{} - {suffix}", brief.business_name),
            tone: brief.tone,
            colors: color_palette(brief.industry, variant).map(str::to_string),
            industry: brief.industry,
            blurb: (*blurb).to_string(),
        })
        .collect();

    info!(business = %brief.business_name, industry = ?brief.industry, "Generated template proposals");
    Ok(templates)
}

/// Propose a restyled theme for a free-text prompt
///
/// Picks a color preset, border radius (0-19) and font from a hash of the
/// prompt and merges them over the current theme. Deterministic: the same
/// prompt over the same theme always proposes the same restyle. The result
/// is a complete snapshot ready for `ThemeHistory::apply`; the caller
/// decides whether to commit it.
pub fn suggest_theme(current: &ThemeConfig, prompt: &str) -> ThemeConfig {
    let seed = fnv1a(prompt);
    let preset = &COLOR_PRESETS[(seed % COLOR_PRESETS.len() as u64) as usize];
    let fonts = FontId::all();
    let font = fonts[((seed >> 8) % fonts.len() as u64) as usize];
    let radius = ((seed >> 16) % 20) as u8;

    let mut suggestion = current.with_preset(preset);
    suggestion.font_id = font;
    suggestion.border_radius = radius;
    suggestion
}

/// FNV-1a over the prompt bytes; stable across platforms and runs, unlike
/// `DefaultHasher`
fn fnv1a(text: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    text.bytes().fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
