//! Model a color with the HSL notation in the sRGB color space.

use crate::color::{Component, HasSpace, Space};
use crate::models::rgb::{Encoding, GammaEncoded, LinearLight};

chromix_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space. The
    /// encoding tag tells whether the notation was derived from gamma encoded
    /// or linear light components.
    pub struct Hsl<E: Encoding> {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

impl HasSpace for Hsl<GammaEncoded> {
    const SPACE: Space = Space::Hsl;
}

impl HasSpace for Hsl<LinearLight> {
    const SPACE: Space = Space::DegammaHsl;
}
