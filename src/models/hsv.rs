//! Model a color with the HSV notation in the sRGB color space.

use crate::color::{Component, HasSpace, Space};
use crate::models::rgb::{Encoding, GammaEncoded, LinearLight};

chromix_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv<E: Encoding> {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The value component of the color.
        pub value: Component,
    }
}

impl HasSpace for Hsv<GammaEncoded> {
    const SPACE: Space = Space::Hsv;
}

impl HasSpace for Hsv<LinearLight> {
    const SPACE: Space = Space::DegammaHsv;
}
