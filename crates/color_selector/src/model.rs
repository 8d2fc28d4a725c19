use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    color::{Hsba, Rgba},
    color_space::{DeviceColor, WorkingSpace},
    drag,
};

/// What [`ColorModel::to_hsba`] reports as hue for colors without one
/// (no saturation or no brightness).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HuePolicy {
    /// Always report hue 0.
    Reset,
    /// Keep the previously held hue, so dragging through grey or black and
    /// back does not jump the hue slider to red.
    #[default]
    Preserve,
}

/// Color conversions and gesture mapping for a picker, bound to one working
/// color space.
///
/// Every method is a pure function of its arguments. The host owns the
/// picker state, see [`crate::ColorSelection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorModel {
    working_space: WorkingSpace,
    hue_policy: HuePolicy,
}

impl ColorModel {
    pub fn new(working_space: WorkingSpace) -> Self {
        Self {
            working_space,
            hue_policy: HuePolicy::default(),
        }
    }

    /// Set the hue policy, default: [`HuePolicy::Preserve`]
    pub fn hue_policy(mut self, hue_policy: HuePolicy) -> Self {
        self.hue_policy = hue_policy;
        self
    }

    pub fn working_space(&self) -> WorkingSpace {
        self.working_space
    }

    pub fn policy(&self) -> HuePolicy {
        self.hue_policy
    }

    pub fn to_rgba(&self, hsba: Hsba) -> Rgba {
        hsba.to_rgba()
    }

    /// Convert to HSBA, applying the hue policy against `previous`.
    ///
    /// With [`HuePolicy::Preserve`] and no previous value, colors without a
    /// hue report 0.
    pub fn to_hsba(&self, rgba: Rgba, previous: Option<Hsba>) -> Hsba {
        match (self.hue_policy, previous) {
            (HuePolicy::Preserve, Some(previous)) => rgba.to_hsba_preserving(previous),
            _ => rgba.to_hsba(),
        }
    }

    /// Resolve a host color into the working space.
    pub fn resolve(&self, color: &DeviceColor) -> Option<Rgba> {
        let resolved = color.resolve(self.working_space);
        if resolved.is_none() {
            tracing::warn!(
                "unable to resolve {:?} color into {:?}: {:?}",
                color.space(),
                self.working_space,
                color.components()
            );
        }
        resolved
    }

    /// Tag a working-space color for the host.
    pub fn to_device(&self, rgba: Rgba) -> DeviceColor {
        DeviceColor::new(
            self.working_space.color_space(),
            [rgba.r, rgba.g, rgba.b, rgba.a],
        )
    }

    /// The alpha of a host color, fully opaque when it can't be determined.
    pub fn alpha(&self, color: &DeviceColor) -> f32 {
        color.alpha().unwrap_or(1.0)
    }

    /// BT.709 luminance of the gamma-encoded sRGB components.
    ///
    /// Returns `None` when the color can't be expressed in sRGB.
    pub fn luminance(&self, color: &DeviceColor) -> Option<f32> {
        self.resolve_srgb(color).map(|rgba| rgba.luminance())
    }

    /// `dark` over colors brighter than `threshold`, `light` otherwise.
    ///
    /// Returns `None` when the luminance can't be determined.
    pub fn contrasting_color<T>(
        &self,
        color: &DeviceColor,
        light: T,
        dark: T,
        threshold: f32,
    ) -> Option<T> {
        let luminance = self.luminance(color)?;
        Some(if luminance > threshold { dark } else { light })
    }

    /// Like [`ColorModel::contrasting_color`], with `fallback` for colors
    /// whose luminance can't be determined.
    pub fn contrasting_color_or<T>(
        &self,
        color: &DeviceColor,
        light: T,
        dark: T,
        threshold: f32,
        fallback: T,
    ) -> T {
        self.contrasting_color(color, light, dark, threshold)
            .unwrap_or(fallback)
    }

    /// Component-wise equality in sRGB, alpha included.
    ///
    /// Colors that can't be expressed in sRGB never compare equal.
    pub fn equal(&self, a: &DeviceColor, b: &DeviceColor, epsilon: f32) -> bool {
        match (self.resolve_srgb(a), self.resolve_srgb(b)) {
            (Some(a), Some(b)) => a.approx_eq(&b, epsilon),
            _ => false,
        }
    }

    pub fn map_drag_to_hue(&self, pointer_x: f32, width: f32) -> f32 {
        drag::map_drag_to_hue(pointer_x, width)
    }

    pub fn map_drag_to_alpha(&self, pointer_x: f32, width: f32) -> f32 {
        drag::map_drag_to_alpha(pointer_x, width)
    }

    pub fn map_drag_to_sat_bright(
        &self,
        pointer_x: f32,
        pointer_y: f32,
        width: f32,
        height: f32,
    ) -> (f32, f32) {
        drag::map_drag_to_sat_bright(pointer_x, pointer_y, width, height)
    }

    fn resolve_srgb(&self, color: &DeviceColor) -> Option<Rgba> {
        let resolved = color.resolve(WorkingSpace::Srgb);
        if resolved.is_none() {
            tracing::debug!("{:?} color has no sRGB representation", color.space());
        }
        resolved
    }
}
