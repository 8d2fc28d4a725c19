use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::color::{Rgba, rgba};

/// How far outside 0.0..=1.0 a converted channel may land and still count as
/// inside the target gamut.
const GAMUT_EPSILON: f32 = 1e-4;

/// Linear Display P3 to linear sRGB (both D65).
const P3_TO_SRGB: [[f32; 3]; 3] = [
    [1.2249401, -0.2249404, 0.0],
    [-0.0420569, 1.0420571, 0.0],
    [-0.0196376, -0.0786361, 1.0982735],
];

/// Linear sRGB to linear Display P3 (both D65).
const SRGB_TO_P3: [[f32; 3]; 3] = [
    [0.8224621, 0.1775380, 0.0],
    [0.0331941, 0.9668058, 0.0],
    [0.0170827, 0.0723974, 0.9105199],
];

/// The color space a host color is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Gamma-encoded sRGB.
    Srgb,
    /// sRGB primaries without the transfer curve.
    LinearSrgb,
    /// Display P3 primaries with the sRGB transfer curve.
    DisplayP3,
    /// A single white component, sRGB transfer curve.
    Gray,
    /// A color with no usable color-space data, e.g. a pattern or a
    /// catalog color the host could not convert.
    Unmanaged,
}

impl ColorSpace {
    /// The number of color components, alpha excluded.
    ///
    /// Returns `None` for [`ColorSpace::Unmanaged`].
    pub fn color_components(&self) -> Option<usize> {
        match self {
            ColorSpace::Srgb | ColorSpace::LinearSrgb | ColorSpace::DisplayP3 => Some(3),
            ColorSpace::Gray => Some(1),
            ColorSpace::Unmanaged => None,
        }
    }

    fn to_linear_srgb(&self, components: &[f32]) -> Option<[f32; 3]> {
        match self {
            ColorSpace::Srgb => Some([
                srgb_to_linear(components[0]),
                srgb_to_linear(components[1]),
                srgb_to_linear(components[2]),
            ]),
            ColorSpace::LinearSrgb => Some([components[0], components[1], components[2]]),
            ColorSpace::DisplayP3 => Some(mul3(
                &P3_TO_SRGB,
                [
                    srgb_to_linear(components[0]),
                    srgb_to_linear(components[1]),
                    srgb_to_linear(components[2]),
                ],
            )),
            ColorSpace::Gray => {
                let white = srgb_to_linear(components[0]);
                Some([white, white, white])
            }
            ColorSpace::Unmanaged => None,
        }
    }
}

/// The RGB space whose gamma-encoded components an [`Rgba`] holds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkingSpace {
    #[default]
    Srgb,
    DisplayP3,
}

impl WorkingSpace {
    pub fn color_space(&self) -> ColorSpace {
        match self {
            WorkingSpace::Srgb => ColorSpace::Srgb,
            WorkingSpace::DisplayP3 => ColorSpace::DisplayP3,
        }
    }

    /// Encode linear sRGB into this space, `None` when outside its gamut.
    fn encode(&self, linear: [f32; 3]) -> Option<[f32; 3]> {
        let linear = match self {
            WorkingSpace::Srgb => linear,
            WorkingSpace::DisplayP3 => mul3(&SRGB_TO_P3, linear),
        };
        if !linear.iter().all(|c| in_gamut(*c)) {
            return None;
        }
        Some(linear.map(|c| linear_to_srgb(c.clamp(0.0, 1.0))))
    }
}

/// A color handed over by the host, tagged with its own color space.
///
/// Components are stored as the host reported them; nothing is clamped until
/// the color is resolved into a working space.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceColor {
    space: ColorSpace,
    components: SmallVec<[f32; 4]>,
}

impl DeviceColor {
    pub fn new(space: ColorSpace, components: impl IntoIterator<Item = f32>) -> Self {
        Self {
            space,
            components: components.into_iter().collect(),
        }
    }

    pub fn srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            space: ColorSpace::Srgb,
            components: smallvec![r, g, b, a],
        }
    }

    pub fn linear_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            space: ColorSpace::LinearSrgb,
            components: smallvec![r, g, b, a],
        }
    }

    pub fn display_p3(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            space: ColorSpace::DisplayP3,
            components: smallvec![r, g, b, a],
        }
    }

    pub fn gray(white: f32, a: f32) -> Self {
        Self {
            space: ColorSpace::Gray,
            components: smallvec![white, a],
        }
    }

    pub fn unmanaged() -> Self {
        Self {
            space: ColorSpace::Unmanaged,
            components: SmallVec::new(),
        }
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn components(&self) -> &[f32] {
        &self.components
    }

    /// The alpha component, `None` when the host did not supply one.
    pub fn alpha(&self) -> Option<f32> {
        let count = self.space.color_components()?;
        self.components
            .get(count)
            .copied()
            .filter(|a| a.is_finite())
            .map(|a| a.clamp(0.0, 1.0))
    }

    /// Resolve into `target`.
    ///
    /// Returns `None` when the color has no usable color-space data, is missing
    /// components, or lies outside the target gamut. A missing alpha resolves
    /// to fully opaque.
    pub fn resolve(&self, target: WorkingSpace) -> Option<Rgba> {
        let count = self.space.color_components()?;
        let channels = self.components.get(..count)?;
        if channels.iter().any(|c| !c.is_finite()) {
            return None;
        }
        let alpha = self.alpha().unwrap_or(1.0);

        // Same space, no conversion round trip.
        if self.space == target.color_space() {
            if !channels.iter().all(|c| in_gamut(*c)) {
                return None;
            }
            return Some(rgba(channels[0], channels[1], channels[2], alpha));
        }

        let linear = self.space.to_linear_srgb(channels)?;
        let [r, g, b] = target.encode(linear)?;
        Some(rgba(r, g, b, alpha))
    }
}

#[inline]
fn in_gamut(c: f32) -> bool {
    (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&c)
}

fn mul3(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Remove the sRGB transfer curve, mirrored for negative values.
fn srgb_to_linear(c: f32) -> f32 {
    let magnitude = c.abs();
    let linear = if magnitude <= 0.04045 {
        magnitude / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(c)
}

/// Apply the sRGB transfer curve.
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
