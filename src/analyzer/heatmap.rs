use serde::{Deserialize, Serialize};

/// Three-way heatmap category for a threading ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HeatmapColor {
    /// Good E-core usage (ratio below 0.95)
    Green,
    /// Balanced (0.95 to 1.05 inclusive)
    Yellow,
    /// P-core dominant (ratio above 1.05)
    Red,
}

impl HeatmapColor {
    /// Hex color used by the presentation layer for cell backgrounds.
    pub fn hex(&self) -> &'static str {
        match self {
            HeatmapColor::Green => "#10b981",
            HeatmapColor::Yellow => "#fbbf24",
            HeatmapColor::Red => "#ef4444",
        }
    }
}

/// Classifies a threading ratio for heatmap rendering.
///
/// Boundary values 0.95 and 1.05 are Yellow. A NaN ratio (profile without
/// both core classes) is Yellow by convention.
pub fn classify(ratio: f64) -> HeatmapColor {
    if ratio < 0.95 {
        HeatmapColor::Green
    } else if ratio > 1.05 {
        HeatmapColor::Red
    } else {
        HeatmapColor::Yellow
    }
}
