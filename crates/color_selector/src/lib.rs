mod color;
mod color_space;
mod config;
mod drag;
mod geometry;
#[cfg(feature = "gpui")]
mod gpui_interop;
mod model;
mod sampler;
mod selection;
mod swatch;

pub use color::{HUE_EPSILON, Hsba, Rgba, hsba, hue_distance, rgba};
pub use color_space::{ColorSpace, DeviceColor, WorkingSpace};
pub use config::{ControlSize, PickerConfig};
pub use drag::{DragMapping, map_drag_to_alpha, map_drag_to_hue, map_drag_to_sat_bright};
pub use geometry::{Bounds, Point, Size, bounds, point, size};
pub use model::{ColorModel, HuePolicy};
pub use sampler::{ColorSampler, SampleCallback, SampleFuture, SampleOutcome, sample};
pub use selection::{ColorSelection, SelectionEvent};

pub mod swatches {
    //! Preset colors and swatch grid layout.
    pub use crate::swatch::{
        DEFAULT_SWATCHES, Palette, corner_radius, grid_columns, needs_checkerboard, outline_color,
    };
}

pub use swatch::Palette;
