//! Models for the rectangular and polar forms of CIE-Lab.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::normalize_hue,
    models::xyz::{ToXyz, Xyz, D65},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

/// Below this chroma the hue of a Lab color is powerless.
const ACHROMATIC: Component = 1.0e-4;

chromix_macros::gen_model! {
    /// A color in the CIE-Lab color space, relative to a D65 white point.
    pub struct Lab {
        /// The lightness component, 0 to 100.
        pub lightness: Component,
        /// The a component (green to red).
        pub a: Component,
        /// The b component (blue to yellow).
        pub b: Component,
    }
}

impl HasSpace for Lab {
    const SPACE: Space = Space::DegammaLab;
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = self.a.hypot(self.b);
        let hue = if chroma < ACHROMATIC {
            Component::NAN
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Lch::new(self.lightness, chroma, hue)
    }
}

impl ToXyz for Lab {
    fn to_xyz(&self) -> Xyz {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(x * D65.0, y * D65.1, z * D65.2)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let adapted = Components(value.x / D65.0, value.y / D65.1, value.z / D65.2);

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

chromix_macros::gen_model! {
    /// A color in the CIE-Lab color space in its cylindrical polar form.
    pub struct Lch {
        /// The lightness component, 0 to 100.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component in degrees.
        pub hue: Component,
    }
}

impl HasSpace for Lch {
    const SPACE: Space = Space::DegammaLch;
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form. A NaN hue is treated as 0.
    pub fn to_rectangular(&self) -> Lab {
        let hue = if self.hue.is_nan() { 0.0 } else { self.hue.to_radians() };
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}
