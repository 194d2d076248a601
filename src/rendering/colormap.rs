use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Default fill for elements the dataset says nothing about.
pub const DEFAULT_BLANK_COLOR: &str = "#c4c4c4";

/// Continuous color scales, anchor tables sampled from the matplotlib
/// palettes of the same names and linearly interpolated in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Plasma,
    Inferno,
    Magma,
    Viridis,
}

const PLASMA: [[u8; 3]; 11] = [
    [13, 8, 135],
    [75, 3, 161],
    [125, 3, 168],
    [168, 13, 155],
    [203, 30, 129],
    [228, 55, 97],
    [246, 82, 66],
    [251, 118, 35],
    [246, 157, 8],
    [232, 197, 0],
    [240, 249, 33],
];

const INFERNO: [[u8; 3]; 11] = [
    [0, 0, 4],
    [22, 11, 57],
    [66, 10, 104],
    [106, 23, 110],
    [147, 38, 103],
    [186, 54, 85],
    [221, 73, 64],
    [243, 106, 39],
    [251, 150, 24],
    [246, 196, 40],
    [252, 255, 164],
];

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const VIRIDIS: [[u8; 3]; 11] = [
    [68, 1, 84],
    [72, 33, 115],
    [64, 67, 135],
    [52, 94, 141],
    [41, 120, 142],
    [32, 144, 140],
    [34, 167, 132],
    [68, 190, 112],
    [121, 209, 81],
    [189, 222, 38],
    [253, 231, 36],
];

impl Palette {
    fn anchors(&self) -> &'static [[u8; 3]] {
        match self {
            Palette::Plasma => &PLASMA,
            Palette::Inferno => &INFERNO,
            Palette::Magma => &MAGMA,
            Palette::Viridis => &VIRIDIS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Plasma => "plasma",
            Palette::Inferno => "inferno",
            Palette::Magma => "magma",
            Palette::Viridis => "viridis",
        }
    }

    /// Samples the scale at `t`, clamped to [0, 1].
    pub fn sample(&self, t: f64) -> RGBColor {
        let anchors = self.anchors();
        let t = t.clamp(0.0, 1.0);

        let position = t * (anchors.len() - 1) as f64;
        let index = (position.floor() as usize).min(anchors.len() - 2);
        let frac = position - index as f64;

        let lo = anchors[index];
        let hi = anchors[index + 1];
        RGBColor(
            lerp(lo[0], hi[0], frac),
            lerp(lo[1], hi[1], frac),
            lerp(lo[2], hi[2], frac),
        )
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Parses "#rrggbb" (leading '#' optional).
pub fn parse_hex(hex: &str) -> Option<RGBColor> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}

/// Linear min/max normalization to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// None when the iterator is empty.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    /// A degenerate range (min == max) maps every value to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_endpoints() {
        // Each scale must start and end exactly on its anchor colors
        assert_eq!(Palette::Plasma.sample(0.0), RGBColor(13, 8, 135));
        assert_eq!(Palette::Plasma.sample(1.0), RGBColor(240, 249, 33));
        assert_eq!(Palette::Inferno.sample(0.0), RGBColor(0, 0, 4));
        assert_eq!(Palette::Inferno.sample(1.0), RGBColor(252, 255, 164));
        assert_eq!(Palette::Magma.sample(1.0), RGBColor(252, 253, 191));
        assert_eq!(Palette::Viridis.sample(0.0), RGBColor(68, 1, 84));
        assert_eq!(Palette::Viridis.sample(1.0), RGBColor(253, 231, 36));
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        assert_eq!(
            Palette::Viridis.sample(-3.0),
            Palette::Viridis.sample(0.0)
        );
        assert_eq!(Palette::Viridis.sample(9.0), Palette::Viridis.sample(1.0));
    }

    #[test]
    fn test_viridis_midpoint_is_greenish() {
        let RGBColor(r, g, b) = Palette::Viridis.sample(0.5);
        assert!(g > r && g > b);
    }

    #[test]
    fn test_scale_normalizes_linearly() {
        let scale = ValueScale::from_values([2.0, 10.0, 6.0]).unwrap();
        assert_eq!(scale.min, 2.0);
        assert_eq!(scale.max, 10.0);
        assert_eq!(scale.normalize(2.0), 0.0);
        assert_eq!(scale.normalize(10.0), 1.0);
        assert_eq!(scale.normalize(6.0), 0.5);
    }

    #[test]
    fn test_degenerate_scale_maps_to_zero() {
        let scale = ValueScale::from_values([4.2, 4.2]).unwrap();
        assert_eq!(scale.normalize(4.2), 0.0);
    }

    #[test]
    fn test_empty_scale() {
        assert_eq!(ValueScale::from_values(std::iter::empty()), None);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#c4c4c4"), Some(RGBColor(196, 196, 196)));
        assert_eq!(parse_hex("ff0080"), Some(RGBColor(255, 0, 128)));
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("zzzzzz"), None);
    }
}
