//! Pure climate classification: free-text climate strings to display colors
//! and fallback emoji.
//!
//! Matching is case-insensitive keyword containment with a fixed precedence
//! order; the first keyword hit wins and unmatched input maps to a defined
//! default. No state, no errors.

use serde::Serialize;

use crate::api::Planet;
use crate::store::ContentCache;

/// Display color token derived from a climate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClimateColor {
    IcyBlue,
    ExtremeHeat,
    HotRed,
    DesertBrown,
    TropicalGreen,
    MurkyDark,
    PollutedGray,
    Metallic,
    EarthLike,
    RockyGray,
    UnknownGray,
}

impl ClimateColor {
    /// CSS gradient class for this token, wire-compatible with the web UI.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::IcyBlue => "bg-gradient-to-br from-cyan-200 via-blue-300 to-blue-400",
            Self::ExtremeHeat => "bg-gradient-to-br from-red-600 via-orange-500 to-yellow-400",
            Self::HotRed => "bg-gradient-to-br from-red-400 via-orange-400 to-red-500",
            Self::DesertBrown => "bg-gradient-to-br from-yellow-700 via-amber-600 to-orange-700",
            Self::TropicalGreen => "bg-gradient-to-br from-emerald-400 via-green-500 to-teal-500",
            Self::MurkyDark => "bg-gradient-to-br from-gray-600 via-slate-700 to-gray-800",
            Self::PollutedGray => "bg-gradient-to-br from-slate-500 via-gray-600 to-stone-700",
            Self::Metallic => "bg-gradient-to-br from-slate-400 via-blue-400 to-indigo-500",
            Self::EarthLike => "bg-gradient-to-br from-blue-400 via-green-400 to-blue-500",
            Self::RockyGray => "bg-gradient-to-br from-stone-500 via-gray-500 to-slate-600",
            Self::UnknownGray => "bg-gradient-to-br from-gray-500 via-gray-600 to-gray-700",
        }
    }
}

/// Map a climate string to its display color token.
///
/// Precedence runs most-specific-first; `arid` only wins when `temperate`
/// is absent, so `"arid, temperate"` renders as earth-like rather than
/// desert.
pub fn color_for(climate: &str) -> ClimateColor {
    let climate = climate.to_lowercase();

    if climate.contains("frozen") || climate.contains("frigid") {
        ClimateColor::IcyBlue
    } else if climate.contains("superheated") {
        ClimateColor::ExtremeHeat
    } else if climate.contains("hot") {
        ClimateColor::HotRed
    } else if climate.contains("arid") && !climate.contains("temperate") {
        ClimateColor::DesertBrown
    } else if climate.contains("tropical") {
        ClimateColor::TropicalGreen
    } else if climate.contains("murky") {
        ClimateColor::MurkyDark
    } else if climate.contains("polluted") {
        ClimateColor::PollutedGray
    } else if climate.contains("artificial") {
        ClimateColor::Metallic
    } else if climate.contains("temperate") || climate.contains("moist") {
        ClimateColor::EarthLike
    } else if climate.contains("windy") || climate.contains("rocky") {
        ClimateColor::RockyGray
    } else {
        ClimateColor::UnknownGray
    }
}

/// Map a climate string to a fallback emoji.
pub fn emoji_for(climate: &str) -> &'static str {
    let climate = climate.to_lowercase();

    if climate.contains("frozen") || climate.contains("frigid") {
        "❄️"
    } else if climate.contains("hot") || climate.contains("arid") {
        "🔥"
    } else if climate.contains("tropical") {
        "🌴"
    } else if climate.contains("temperate") {
        "🌍"
    } else if climate.contains("murky") || climate.contains("polluted") {
        "🌫️"
    } else if climate.contains("artificial") {
        "🏙️"
    } else if climate.contains("gas") {
        "💨"
    } else {
        "🪐"
    }
}

/// Emoji for a planet, preferring a cached AI-generated one when present.
///
/// Cache read failures fall through to the climate emoji; this path never
/// surfaces an error.
pub async fn emoji_for_planet(planet: &Planet, cache: &ContentCache) -> String {
    if let Ok(Some(content)) = cache.get(&planet.url).await {
        if !content.emoji.is_empty() {
            return content.emoji;
        }
    }
    emoji_for(&planet.climate).to_string()
}
