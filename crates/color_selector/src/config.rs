use std::{fmt::Display, path::Path};

use anyhow::{Context as _, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    color_space::WorkingSpace,
    geometry::{Size, size},
    model::{ColorModel, HuePolicy},
    swatch::Palette,
};

/// Gap between the two sampler indicators when the alpha slider is shown.
const SAMPLER_RECT_GAP: f32 = 6.0;

/// The size class of the button that opens the picker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ControlSize {
    ExtraLarge,
    Large,
    #[default]
    Regular,
    Small,
    Mini,
}

impl Display for ControlSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlSize::ExtraLarge => write!(f, "extra_large"),
            ControlSize::Large => write!(f, "large"),
            ControlSize::Regular => write!(f, "regular"),
            ControlSize::Small => write!(f, "small"),
            ControlSize::Mini => write!(f, "mini"),
        }
    }
}

impl ControlSize {
    /// Size of the color well inside the button.
    pub fn color_button(&self) -> Size {
        match self {
            ControlSize::ExtraLarge => size(33.0, 18.0),
            ControlSize::Large => size(26.0, 18.0),
            ControlSize::Regular => size(16.0, 16.0),
            ControlSize::Small => size(16.0, 14.0),
            ControlSize::Mini => size(14.0, 12.0),
        }
    }

    pub fn corner_radius(&self) -> f32 {
        match self {
            ControlSize::ExtraLarge => 24.0,
            ControlSize::Large => 12.0,
            ControlSize::Regular | ControlSize::Small | ControlSize::Mini => 4.0,
        }
    }

    /// Horizontal outset of the button around the color well, negative grows.
    pub fn horizontal_inset(&self) -> f32 {
        match self {
            ControlSize::ExtraLarge => -10.0,
            ControlSize::Large => -6.0,
            ControlSize::Regular => -8.0,
            ControlSize::Small => -6.0,
            ControlSize::Mini => -4.0,
        }
    }

    /// Vertical outset of the button around the color well, negative grows.
    pub fn vertical_inset(&self) -> f32 {
        match self {
            ControlSize::ExtraLarge => -4.0,
            ControlSize::Large => -1.0,
            ControlSize::Regular => 0.0,
            ControlSize::Small => 1.0,
            ControlSize::Mini => 2.0,
        }
    }
}

/// Sizing, palette and color handling of a picker.
///
/// Every field is optional in JSON, missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PickerConfig {
    /// Size of the slider thumbs and the plane indicator.
    pub point_size: Size,
    /// Corner radius of the sliders and the plane.
    pub corner_size: f32,
    pub swatch_size: Size,
    pub swatch_spacing: f32,
    /// Size of the eyedropper button.
    pub sampler_size: f32,
    /// Size of the popover.
    pub picker_size: Size,
    pub shows_alpha: bool,
    pub control_size: ControlSize,
    pub working_space: WorkingSpace,
    pub hue_policy: HuePolicy,
    /// sRGB swatches as hex strings, `{r, g, b, a}` or `{h, s, b, a}`.
    pub swatches: Palette,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            point_size: size(10.0, 10.0),
            corner_size: 5.0,
            swatch_size: size(14.0, 14.0),
            swatch_spacing: 4.0,
            sampler_size: 23.0,
            picker_size: size(180.0, 250.0),
            shows_alpha: true,
            control_size: ControlSize::default(),
            working_space: WorkingSpace::default(),
            hue_policy: HuePolicy::default(),
            swatches: Palette::default(),
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse picker config")
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading picker config from {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read picker config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse picker config {}", path.display()))?;

        tracing::info!(
            "Loaded picker config {} with {} swatches",
            path.display(),
            config.swatches.len()
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize picker config")
    }

    /// The color model for this config's working space and hue policy.
    pub fn model(&self) -> ColorModel {
        ColorModel::new(self.working_space).hue_policy(self.hue_policy)
    }

    pub fn palette(&self) -> &Palette {
        &self.swatches
    }

    /// Height of the area showing the sampler indicators, two stacked points
    /// when the alpha slider is shown.
    pub fn sampler_rect_size(&self) -> f32 {
        if self.shows_alpha {
            self.point_size.height * 2.0 + SAMPLER_RECT_GAP
        } else {
            self.point_size.height
        }
    }
}
