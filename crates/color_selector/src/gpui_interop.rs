//! Conversions to and from the color types of the `gpui` UI framework.
//!
//! gpui colors are sRGB, so these are only exact for a picker working in
//! [`WorkingSpace::Srgb`](crate::WorkingSpace::Srgb).

use crate::{
    color::{Hsba, Rgba, rgba},
    color_space::DeviceColor,
};

impl From<gpui::Rgba> for Rgba {
    fn from(value: gpui::Rgba) -> Self {
        rgba(value.r, value.g, value.b, value.a)
    }
}

impl From<Rgba> for gpui::Rgba {
    fn from(value: Rgba) -> Self {
        gpui::Rgba {
            r: value.r,
            g: value.g,
            b: value.b,
            a: value.a,
        }
    }
}

impl From<gpui::Hsla> for Hsba {
    fn from(value: gpui::Hsla) -> Self {
        Rgba::from(value.to_rgb()).to_hsba()
    }
}

impl From<Hsba> for gpui::Hsla {
    fn from(value: Hsba) -> Self {
        gpui::Rgba::from(value.to_rgba()).into()
    }
}

impl From<gpui::Hsla> for DeviceColor {
    fn from(value: gpui::Hsla) -> Self {
        let rgb = value.to_rgb();
        DeviceColor::srgb(rgb.r, rgb.g, rgb.b, rgb.a)
    }
}
