use anyhow::anyhow;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
mod tests;

/// Two hues closer than this on the color wheel are the same hue.
pub const HUE_EPSILON: f32 = 1e-4;

/// The BT.709 luma coefficients for red, green and blue.
const LUMA_BT709: [f32; 3] = [0.2126, 0.7152, 0.0722];

#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn opaque() -> f32 {
    1.0
}

/// Distance between two hues on the unit color wheel, in 0.0..=0.5.
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 1.0;
    d.min(1.0 - d)
}

/// A color as hue, saturation, brightness and alpha.
///
/// This is the canonical representation of a picker: every slider and the
/// saturation/brightness plane edit one or two of these fields directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Hsba {
    /// Hue (0.0 to 1.0), one full turn of the color wheel.
    pub h: f32,
    /// Saturation (0.0 to 1.0)
    pub s: f32,
    /// Brightness (0.0 to 1.0)
    pub b: f32,
    /// Alpha (0.0 to 1.0), default is 1.0 (fully opaque)
    #[serde(default = "opaque")]
    pub a: f32,
}

/// Create an Hsba color, every component is clamped to 0.0..=1.0.
pub fn hsba(h: f32, s: f32, b: f32, a: f32) -> Hsba {
    Hsba {
        h: clamp_unit(h),
        s: clamp_unit(s),
        b: clamp_unit(b),
        a: clamp_unit(a),
    }
}

impl Default for Hsba {
    /// Fully saturated, fully bright, opaque red.
    fn default() -> Self {
        hsba(0.0, 1.0, 1.0, 1.0)
    }
}

impl Hsba {
    /// Returns a copy with every component clamped to 0.0..=1.0.
    pub fn clamped(self) -> Self {
        hsba(self.h, self.s, self.b, self.a)
    }

    pub fn with_hue(self, h: f32) -> Self {
        Self {
            h: clamp_unit(h),
            ..self
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: clamp_unit(a),
            ..self
        }
    }

    /// Hue is meaningless when there is no chroma.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.s <= 0.0 || self.b <= 0.0
    }

    /// Convert to gamma-encoded RGB in the same space, alpha passes through.
    pub fn to_rgba(self) -> Rgba {
        let Hsba { h, s, b: v, a } = self.clamped();

        let h6 = (h * 6.0) % 6.0;
        let sector = h6.floor();
        let frac = h6 - sector;

        let c = v * s;
        // Rising edge in even sectors, falling edge in odd ones.
        let x = if sector as u8 % 2 == 0 {
            c * frac
        } else {
            c * (1.0 - frac)
        };
        let m = v - c;

        let (r, g, b) = match sector as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        rgba(r + m, g + m, b + m, a)
    }
}

impl<'de> Deserialize<'de> for Hsba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = HsbaFields::deserialize(deserializer)?;
        Ok(hsba(fields.h, fields.s, fields.b, fields.a))
    }
}

#[derive(Deserialize)]
struct HsbaFields {
    h: f32,
    s: f32,
    b: f32,
    #[serde(default = "opaque")]
    a: f32,
}

/// A gamma-encoded RGB color with alpha, in the working color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Rgba {
    /// Red (0.0 to 1.0)
    pub r: f32,
    /// Green (0.0 to 1.0)
    pub g: f32,
    /// Blue (0.0 to 1.0)
    pub b: f32,
    /// Alpha (0.0 to 1.0), default is 1.0 (fully opaque)
    #[serde(default = "opaque")]
    pub a: f32,
}

/// Create an Rgba color, every component is clamped to 0.0..=1.0.
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba {
    Rgba {
        r: clamp_unit(r),
        g: clamp_unit(g),
        b: clamp_unit(b),
        a: clamp_unit(a),
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl Rgba {
    pub const CLEAR: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Returns a copy with every component clamped to 0.0..=1.0.
    pub fn clamped(self) -> Self {
        rgba(self.r, self.g, self.b, self.a)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: clamp_unit(a),
            ..self
        }
    }

    /// Convert to HSBA, alpha passes through.
    ///
    /// When red, green and blue are equal the saturation is 0 and the hue is
    /// reported as 0. Use [`Rgba::to_hsba_preserving`] to keep a known hue.
    pub fn to_hsba(self) -> Hsba {
        let Rgba { r, g, b, a } = self.clamped();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max <= 0.0 { 0.0 } else { d / max };

        let mut h = 0.0;
        if d > 0.0 {
            h = if max == r {
                ((g - b) / d).rem_euclid(6.0)
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
            if h >= 1.0 {
                h = 0.0;
            }
        }

        hsba(h, s, max, a)
    }

    /// Convert to HSBA, keeping the hue of `previous` where this color does
    /// not define one (no saturation or no brightness), or where the two hues
    /// are the same angle on the color wheel.
    pub fn to_hsba_preserving(self, previous: Hsba) -> Hsba {
        let mut hsba = self.to_hsba();
        if hsba.is_achromatic() || hue_distance(hsba.h, previous.h) <= HUE_EPSILON {
            hsba.h = clamp_unit(previous.h);
        }
        hsba
    }

    /// Perceptual luminance with BT.709 coefficients, taken directly on the
    /// gamma-encoded components.
    pub fn luminance(&self) -> f32 {
        LUMA_BT709[0] * self.r + LUMA_BT709[1] * self.g + LUMA_BT709[2] * self.b
    }

    /// Pick `dark` over a bright color and `light` over a dark one.
    pub fn contrasting<T>(&self, light: T, dark: T, threshold: f32) -> T {
        if self.luminance() > threshold {
            dark
        } else {
            light
        }
    }

    /// Component-wise equality within `epsilon`, alpha included.
    pub fn approx_eq(&self, other: &Rgba, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.a - other.a).abs() <= epsilon
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let channel = |value: f32| (clamp_unit(value) * 255.0).round() as u8;
        let (r, g, b, a) = (
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        );
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl From<Hsba> for Rgba {
    fn from(value: Hsba) -> Self {
        value.to_rgba()
    }
}

impl From<Rgba> for Hsba {
    fn from(value: Rgba) -> Self {
        value.to_hsba()
    }
}

/// Parse a hex color.
///
/// - `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` are supported.
/// - The leading `#` is optional.
impl TryFrom<&str> for Rgba {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("Invalid hex color `{}`", value));
        }

        let channels: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .bytes()
                .map(|c| hex_digit(c) * 17)
                .collect(),
            6 | 8 => hex
                .as_bytes()
                .chunks(2)
                .map(|pair| hex_digit(pair[0]) * 16 + hex_digit(pair[1]))
                .collect(),
            _ => {
                return Err(anyhow!(
                    "Invalid hex color `{}`, expected 3, 4, 6 or 8 digits",
                    value
                ));
            }
        };

        let unit = |c: u8| c as f32 / 255.0;
        let alpha = channels.get(3).copied().map(unit).unwrap_or(1.0);
        Ok(rgba(
            unit(channels[0]),
            unit(channels[1]),
            unit(channels[2]),
            alpha,
        ))
    }
}

fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Rgba accepts a hex string, `{r, g, b, a}` or `{h, s, b, a}`.
impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RgbaRepr {
            Hex(String),
            Components {
                r: f32,
                g: f32,
                b: f32,
                #[serde(default = "opaque")]
                a: f32,
            },
            Hsb(HsbaFields),
        }

        match RgbaRepr::deserialize(deserializer)? {
            RgbaRepr::Hex(hex) => {
                Rgba::try_from(hex.as_str()).map_err(serde::de::Error::custom)
            }
            RgbaRepr::Components { r, g, b, a } => Ok(rgba(r, g, b, a)),
            RgbaRepr::Hsb(fields) => Ok(hsba(fields.h, fields.s, fields.b, fields.a).to_rgba()),
        }
    }
}
