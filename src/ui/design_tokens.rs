// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the portfolio page.
//!
//! Layout-oracle constants (card heights, section offsets) live in
//! [`crate::viewport`] because input gating depends on them; everything
//! here is purely visual.

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Diameter of an inactive indicator dot.
    pub const INDICATOR_DOT: f32 = 12.0;
    /// Diameter of the active indicator dot.
    pub const INDICATOR_DOT_ACTIVE: f32 = 16.0;
    /// Width of the indicator rail on the right edge of the slider.
    pub const INDICATOR_RAIL_WIDTH: f32 = 48.0;
}

pub mod typography {
    pub const TITLE: f32 = 48.0;
    pub const HEADING: f32 = 28.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
}
