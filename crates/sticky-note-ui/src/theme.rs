//! Colors and spacing for the note.
//!
//! The note draws over a fully transparent window, so there is no surface
//! color; text is light and the close control is red.

use gpui::{Rgba, rgb, rgba};

pub const SPACE_1: f32 = 4.0;
pub const SPACE_2: f32 = 8.0;
pub const SPACE_4: f32 = 16.0;

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 13.0;
pub const TEXT_LG: f32 = 15.0;

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 6.0;

pub const CLOSE_BUTTON_SIZE: f32 = 18.0;

pub fn transparent() -> Rgba {
    rgba(0x00000000)
}

pub fn text_white() -> Rgba {
    rgb(0xffffff)
}

/// Completed tasks and secondary text.
pub fn text_muted() -> Rgba {
    rgb(0x8e8e93)
}

pub fn text_placeholder() -> Rgba {
    rgb(0xb0b0b5)
}

/// Close control.
pub fn ember() -> Rgba {
    rgb(0xff3b30)
}

pub fn input_background() -> Rgba {
    with_alpha(rgb(0x1c1c1e), 0.55)
}

pub fn input_border() -> Rgba {
    with_alpha(text_white(), 0.35)
}

pub fn input_border_focused() -> Rgba {
    rgb(0x4a9eff)
}

pub fn row_hover() -> Rgba {
    with_alpha(text_white(), 0.08)
}

pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Rgba { a: alpha, ..color }
}
