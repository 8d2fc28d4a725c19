use crate::{
    color::{Hsba, Rgba, hsba},
    color_space::{DeviceColor, WorkingSpace},
    drag::DragMapping,
    geometry::{Bounds, Point},
    model::ColorModel,
    sampler::SampleOutcome,
    swatch::Palette,
};

/// Swatches within this distance of the selection are highlighted.
const SWATCH_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEvent {
    /// The selected color changed, in the working space.
    Change(Rgba),
}

/// The state of one color picker.
///
/// The host owns this value and feeds it gestures, swatch clicks and
/// eyedropper results. Every mutator returns an event when, and only when,
/// the selected color actually changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSelection {
    hsba: Hsba,
    model: ColorModel,
    shows_alpha: bool,
}

impl ColorSelection {
    /// Start from opaque red.
    pub fn new(model: ColorModel) -> Self {
        Self {
            hsba: Hsba::default(),
            model,
            shows_alpha: true,
        }
    }

    /// Start from the host's current color, `None` meaning no color at all.
    ///
    /// A color that can't be resolved into the model's working space starts
    /// the picker at opaque red, keeping the color's alpha when it has one.
    pub fn from_color(model: ColorModel, color: Option<&DeviceColor>) -> Self {
        let hsba = match color {
            None => hsba(0.0, 0.0, 0.0, 0.0),
            Some(color) => match model.resolve(color) {
                Some(rgba) => model.to_hsba(rgba, None),
                None => {
                    tracing::warn!("initial color is unresolvable, falling back to default");
                    Hsba::default().with_alpha(model.alpha(color))
                }
            },
        };

        Self {
            hsba,
            model,
            shows_alpha: true,
        }
    }

    pub fn hsba(&self) -> Hsba {
        self.hsba
    }

    pub fn rgba(&self) -> Rgba {
        self.model.to_rgba(self.hsba)
    }

    /// The selected color, tagged with the working space for the host.
    pub fn to_device(&self) -> DeviceColor {
        self.model.to_device(self.rgba())
    }

    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    pub fn shows_alpha(&self) -> bool {
        self.shows_alpha
    }

    /// Show or hide the alpha slider. While hidden, alpha drags are ignored.
    pub fn set_shows_alpha(&mut self, shows_alpha: bool) {
        self.shows_alpha = shows_alpha;
    }

    /// Apply a pointer position in window coordinates to the control laid
    /// out at `bounds`.
    ///
    /// Controls that have not been laid out yet (empty bounds) ignore drags.
    pub fn drag(
        &mut self,
        mapping: DragMapping,
        position: Point,
        bounds: Bounds,
    ) -> Option<SelectionEvent> {
        if mapping == DragMapping::Alpha && !self.shows_alpha {
            return None;
        }
        if bounds.size.is_empty() {
            tracing::debug!("ignoring {:?} drag on empty bounds {:?}", mapping, bounds);
            return None;
        }
        let position = bounds.localize(position);
        self.update(mapping.apply(self.hsba, position, bounds.size))
    }

    /// Select an sRGB swatch, converted into the working space.
    pub fn select_swatch(&mut self, palette: &Palette, ix: usize) -> Option<SelectionEvent> {
        let Some(color) = palette.device_color(ix) else {
            tracing::debug!("swatch {} out of range ({} swatches)", ix, palette.len());
            return None;
        };
        self.set_color(&color)
    }

    pub fn apply_sample(&mut self, outcome: SampleOutcome) -> Option<SelectionEvent> {
        match outcome {
            SampleOutcome::Sampled(color) => self.set_color(&color),
            SampleOutcome::Cancelled => None,
        }
    }

    /// Replace the selection with a color assigned by the host.
    ///
    /// Unresolvable colors leave the selection unchanged.
    pub fn set_color(&mut self, color: &DeviceColor) -> Option<SelectionEvent> {
        let rgba = self.model.resolve(color)?;
        self.update(self.model.to_hsba(rgba, Some(self.hsba)))
    }

    pub fn set_hsba(&mut self, hsba: Hsba) -> Option<SelectionEvent> {
        self.update(hsba.clamped())
    }

    /// The swatch matching the selected color, if any.
    ///
    /// Selections outside the sRGB gamut match no swatch.
    pub fn selected_swatch(&self, palette: &Palette) -> Option<usize> {
        let srgb = self.to_device().resolve(WorkingSpace::Srgb)?;
        palette.index_of(&srgb, SWATCH_EPSILON)
    }

    fn update(&mut self, hsba: Hsba) -> Option<SelectionEvent> {
        if self.hsba == hsba {
            return None;
        }
        self.hsba = hsba;
        Some(SelectionEvent::Change(self.rgba()))
    }
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self::new(ColorModel::default())
    }
}
