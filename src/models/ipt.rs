//! Models for compressed LMS cone responses and the IPT color space built on
//! top of them.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{invert, multiply, transform, transform_3x3, Matrix, Transform},
    models::rgb::{SrgbLinear, SRGB_TO_XYZ},
};

/// Exponent of the IPT cone response non-linearity.
const COMPRESSION: Component = 0.43;

/// Hunt-Pointer-Estevez cone responses, normalized to D65.
#[rustfmt::skip]
const XYZ_TO_LMS: Matrix = [
    [ 0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500,  0.0612],
    [ 0.0,    0.0,     0.9184],
];

const SRGB_TO_LMS: Matrix = multiply(&XYZ_TO_LMS, &SRGB_TO_XYZ);

#[rustfmt::skip]
const LMS_TO_IPT: Matrix = [
    [0.4000,  0.4000,  0.2000],
    [4.4550, -4.8510,  0.3960],
    [0.8056,  0.3572, -1.1628],
];

fn compress(v: Component) -> Component {
    v.signum() * v.abs().powf(COMPRESSION)
}

fn expand(v: Component) -> Component {
    v.signum() * v.abs().powf(1.0 / COMPRESSION)
}

chromix_macros::gen_model! {
    /// Long, medium and short cone responses after the IPT compression.
    pub struct LmsCompressed {
        /// The compressed long wavelength cone response.
        pub long: Component,
        /// The compressed medium wavelength cone response.
        pub medium: Component,
        /// The compressed short wavelength cone response.
        pub short: Component,
    }
}

impl HasSpace for LmsCompressed {
    const SPACE: Space = Space::DegammaLmsCompressed;
}

impl From<SrgbLinear> for LmsCompressed {
    fn from(value: SrgbLinear) -> Self {
        const TO_LMS: Transform = transform_3x3(&SRGB_TO_LMS);

        transform(&TO_LMS, value.to_components())
            .map(compress)
            .into()
    }
}

impl LmsCompressed {
    /// Undo the compression and convert the cone responses to linear light
    /// sRGB.
    pub fn to_linear_light(&self) -> SrgbLinear {
        const FROM_LMS: Transform = transform_3x3(&invert(&SRGB_TO_LMS));

        transform(&FROM_LMS, self.to_components().map(expand)).into()
    }
}

chromix_macros::gen_model! {
    /// A color in the IPT color space.
    pub struct Ipt {
        /// The intensity component.
        pub intensity: Component,
        /// The protan (red to green) component.
        pub protan: Component,
        /// The tritan (yellow to blue) component.
        pub tritan: Component,
    }
}

impl HasSpace for Ipt {
    const SPACE: Space = Space::DegammaIpt;
}

impl From<LmsCompressed> for Ipt {
    fn from(value: LmsCompressed) -> Self {
        const TO_IPT: Transform = transform_3x3(&LMS_TO_IPT);

        transform(&TO_IPT, value.to_components()).into()
    }
}

impl Ipt {
    /// Convert back to compressed cone responses.
    pub fn to_lms_compressed(&self) -> LmsCompressed {
        const FROM_IPT: Transform = transform_3x3(&invert(&LMS_TO_IPT));

        let Components(long, medium, short) = transform(&FROM_IPT, self.to_components());
        LmsCompressed::new(long, medium, short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_has_full_intensity_and_no_hue() {
        let ipt = Ipt::from(LmsCompressed::from(SrgbLinear::new(1.0, 1.0, 1.0)));
        approx::assert_abs_diff_eq!(ipt.intensity, 1.0, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(ipt.protan, 0.0, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(ipt.tritan, 0.0, epsilon = 1.0e-3);
    }

    #[test]
    fn compression_preserves_sign() {
        assert_component_eq!(compress(-1.0), -1.0);
        assert_component_eq!(expand(compress(-0.25)), -0.25);
        assert_eq!(compress(0.0), 0.0);
    }

    #[test]
    fn round_trip_through_ipt() {
        let linear = SrgbLinear::new(0.8, 0.1, 0.35);
        let back = Ipt::from(LmsCompressed::from(linear))
            .to_lms_compressed()
            .to_linear_light();
        assert_component_eq!(back.red, 0.8);
        assert_component_eq!(back.green, 0.1);
        assert_component_eq!(back.blue, 0.35);
    }
}
