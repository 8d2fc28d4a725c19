use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    color::{Hsba, clamp_unit},
    geometry::{Point, Size, point},
};

/// Fraction of `extent` covered by `position`, clamped to 0.0..=1.0.
///
/// An empty or non-finite extent, or a NaN position, maps to 0.
fn unit_fraction(position: f32, extent: f32) -> f32 {
    if !(extent.is_finite() && extent > 0.0) || position.is_nan() {
        return 0.0;
    }
    clamp_unit(position / extent)
}

/// Hue from a horizontal drag: the left edge is 0, the right edge is 1.
pub fn map_drag_to_hue(pointer_x: f32, width: f32) -> f32 {
    unit_fraction(pointer_x, width)
}

/// Alpha from a horizontal drag: the left edge is transparent.
pub fn map_drag_to_alpha(pointer_x: f32, width: f32) -> f32 {
    unit_fraction(pointer_x, width)
}

/// Saturation grows to the right, brightness decreases downward.
pub fn map_drag_to_sat_bright(
    pointer_x: f32,
    pointer_y: f32,
    width: f32,
    height: f32,
) -> (f32, f32) {
    let saturation = unit_fraction(pointer_x, width);
    let brightness = 1.0 - unit_fraction(pointer_y, height);
    (saturation, brightness)
}

/// Which HSBA fields a control edits when dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DragMapping {
    /// The hue slider.
    Hue,
    /// The alpha slider.
    Alpha,
    /// The saturation/brightness plane.
    SaturationBrightness,
}

impl DragMapping {
    /// Apply a pointer position, relative to the control's top-left corner,
    /// to the fields this mapping owns. Other fields are left untouched.
    pub fn apply(&self, hsba: Hsba, position: Point, bounds: Size) -> Hsba {
        match self {
            DragMapping::Hue => Hsba {
                h: map_drag_to_hue(position.x, bounds.width),
                ..hsba
            },
            DragMapping::Alpha => Hsba {
                a: map_drag_to_alpha(position.x, bounds.width),
                ..hsba
            },
            DragMapping::SaturationBrightness => {
                let (s, b) =
                    map_drag_to_sat_bright(position.x, position.y, bounds.width, bounds.height);
                Hsba { s, b, ..hsba }
            }
        }
    }

    /// Where the indicator for `hsba` is drawn, relative to the control's
    /// top-left corner.
    ///
    /// Slider thumbs are kept fully inside the track and centered
    /// vertically; the plane thumb follows the value to the very edges.
    pub fn thumb_position(&self, hsba: Hsba, bounds: Size, thumb: Size) -> Point {
        match self {
            DragMapping::Hue => slider_thumb(clamp_unit(hsba.h), bounds, thumb),
            DragMapping::Alpha => slider_thumb(clamp_unit(hsba.a), bounds, thumb),
            DragMapping::SaturationBrightness => point(
                clamp_unit(hsba.s) * bounds.width,
                (1.0 - clamp_unit(hsba.b)) * bounds.height,
            ),
        }
    }
}

fn slider_thumb(value: f32, bounds: Size, thumb: Size) -> Point {
    let half = thumb.width / 2.0;
    let x = value * bounds.width;
    // A track narrower than the thumb pins the thumb to its center.
    let x = if bounds.width <= thumb.width {
        bounds.width / 2.0
    } else {
        x.clamp(half, bounds.width - half)
    };
    point(x, bounds.height / 2.0)
}
