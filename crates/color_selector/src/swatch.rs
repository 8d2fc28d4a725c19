use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    color::{Hsba, Rgba},
    color_space::DeviceColor,
};

const fn swatch(h: f32, s: f32, b: f32, a: f32) -> Hsba {
    Hsba { h, s, b, a }
}

/// The built-in swatches, in sRGB: ten hues followed by five shades of
/// translucent black and a white.
pub const DEFAULT_SWATCHES: [Hsba; 16] = [
    swatch(0.999, 0.857, 0.878, 1.0),
    swatch(0.066, 1.0, 0.98, 1.0),
    swatch(0.121, 0.976, 0.969, 1.0),
    swatch(0.247, 0.981, 0.827, 1.0),
    swatch(0.462, 0.679, 0.843, 1.0),
    swatch(0.547, 0.8, 1.0, 1.0),
    swatch(0.573, 0.984, 1.0, 1.0),
    swatch(0.703, 0.788, 1.0, 1.0),
    swatch(0.797, 0.862, 0.878, 1.0),
    swatch(0.597, 0.099, 0.475, 1.0),
    swatch(0.0, 0.0, 0.0, 0.1),
    swatch(0.0, 0.0, 0.0, 0.25),
    swatch(0.0, 0.0, 0.0, 0.5),
    swatch(0.0, 0.0, 0.0, 0.75),
    swatch(0.0, 0.0, 0.0, 1.0),
    swatch(0.0, 0.0, 1.0, 1.0),
];

/// Swatch corner radius relative to the swatch width.
const CORNER_RADIUS_RATIO: f32 = 0.3;

/// An ordered list of preset colors.
///
/// Swatches are sRGB colors whatever the picker's working space is, the same
/// convention as hex colors. Use [`Palette::device_color`] to hand one to a
/// [`crate::ColorModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_SWATCHES.iter().map(|hsba| hsba.to_rgba()))
    }
}

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = Rgba>) -> Self {
        Self {
            colors: colors.into_iter().map(Rgba::clamped).collect(),
        }
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, ix: usize) -> Option<Rgba> {
        self.colors.get(ix).copied()
    }

    /// The swatch at `ix`, tagged as sRGB.
    pub fn device_color(&self, ix: usize) -> Option<DeviceColor> {
        self.get(ix)
            .map(|color| DeviceColor::srgb(color.r, color.g, color.b, color.a))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgba> {
        self.colors.iter()
    }

    /// Index of the first swatch equal to `color` within `epsilon`, alpha
    /// included.
    pub fn index_of(&self, color: &Rgba, epsilon: f32) -> Option<usize> {
        self.colors
            .iter()
            .position(|swatch| swatch.approx_eq(color, epsilon))
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// How many swatches fit in a row of `available_width`, at least one.
pub fn grid_columns(available_width: f32, swatch_width: f32, spacing: f32) -> usize {
    let stride = swatch_width + spacing;
    if !(stride.is_finite() && stride > 0.0) || !available_width.is_finite() {
        return 1;
    }
    ((available_width / stride).floor() as usize).max(1)
}

pub fn corner_radius(swatch_width: f32) -> f32 {
    swatch_width.max(0.0) * CORNER_RADIUS_RATIO
}

/// Translucent swatches are drawn over a checkerboard.
pub fn needs_checkerboard(color: &Rgba) -> bool {
    color.a < 1.0
}

/// The outline drawn around a swatch, contrasting with its fill.
pub fn outline_color(color: &Rgba) -> Rgba {
    color.contrasting(Rgba::WHITE, Rgba::BLACK, 0.5)
}
