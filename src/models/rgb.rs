//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{invert, transform, transform_3x3, Matrix, Transform},
    models::xyz::{ToXyz, Xyz},
};

/// Tags that specify whether RGB components carry the sRGB gamma encoding.
pub mod encoding {
    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding: Clone + Copy + std::fmt::Debug + PartialEq {}

    /// Components are gamma encoded, the form sent to a display.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

pub use encoding::{Encoding, GammaEncoded, LinearLight};

/// Apply the sRGB transfer function to linear light components.
pub fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    })
}

/// Remove the sRGB transfer function from gamma encoded components.
pub fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs < 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

chromix_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl Rgb<GammaEncoded> {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> Rgb<LinearLight> {
        to_linear_light(&self.to_components()).into()
    }
}

impl Rgb<LinearLight> {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb<GammaEncoded> {
        to_gamma_encoded(&self.to_components()).into()
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<GammaEncoded>;

impl HasSpace for Srgb {
    const SPACE: Space = Space::Rgb;
}

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<LinearLight>;

impl HasSpace for SrgbLinear {
    const SPACE: Space = Space::DegammaRgb;
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const SRGB_TO_XYZ: Matrix = [
    [0.4123907992659595,  0.35758433938387796, 0.1804807884018343],
    [0.21263900587151036, 0.7151686787677559,  0.07219231536073371],
    [0.01933081871559185, 0.11919477979462599, 0.9505321522496606],
];

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> Xyz {
        const TO_XYZ: Transform = transform_3x3(&SRGB_TO_XYZ);

        transform(&TO_XYZ, self.to_components()).into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        const FROM_XYZ: Transform = transform_3x3(&invert(&SRGB_TO_XYZ));

        transform(&FROM_XYZ, value.to_components()).into()
    }
}
