//! Models for hue, chroma and luma, in polar and Euclidean forms.
//!
//! Unlike CIE-Lch, chroma here is the spread of the RGB components
//! (`max - min`) and luma is the Rec. 709 weighted sum of the RGB components.

use crate::color::{Component, HasSpace, Space};
use crate::math::normalize_hue;
use crate::models::rgb::{Encoding, GammaEncoded, LinearLight};

/// Rec. 709 luma weights for red, green and blue.
pub const LUMA_WEIGHTS: (Component, Component, Component) = (0.2126, 0.7152, 0.0722);

chromix_macros::gen_model! {
    /// A color specified with hue, chroma and luma.
    pub struct Hcl<E: Encoding> {
        /// The hue component of the color in degrees.
        pub hue: Component,
        /// The chroma component of the color.
        pub chroma: Component,
        /// The luma component of the color.
        pub luma: Component,
    }
}

impl HasSpace for Hcl<GammaEncoded> {
    const SPACE: Space = Space::Hcl;
}

impl HasSpace for Hcl<LinearLight> {
    const SPACE: Space = Space::DegammaHcl;
}

impl<E: Encoding> Hcl<E> {
    /// Convert the hue and chroma into coordinates on the chroma plane.
    pub fn to_euclidean(&self) -> EuclideanHcl<E> {
        if self.hue.is_nan() {
            return EuclideanHcl::new(0.0, 0.0, self.luma);
        }

        let hue = self.hue.to_radians();
        EuclideanHcl::new(self.chroma * hue.cos(), self.chroma * hue.sin(), self.luma)
    }
}

chromix_macros::gen_model! {
    /// Hue, chroma and luma with the hue and chroma expressed as Cartesian
    /// coordinates, so that interpolation cuts straight across the hue circle.
    pub struct EuclideanHcl<E: Encoding> {
        /// `chroma * cos(hue)` on the HCL chroma plane. Not the CIE-Lab `a`.
        pub a: Component,
        /// `chroma * sin(hue)` on the HCL chroma plane. Not the CIE-Lab `b`.
        pub b: Component,
        /// The luma component of the color.
        pub luma: Component,
    }
}

impl HasSpace for EuclideanHcl<GammaEncoded> {
    const SPACE: Space = Space::EuclideanHcl;
}

impl HasSpace for EuclideanHcl<LinearLight> {
    const SPACE: Space = Space::DegammaEuclideanHcl;
}

impl<E: Encoding> EuclideanHcl<E> {
    /// Convert the chroma plane coordinates back into hue and chroma. The hue
    /// is NaN (missing) when the coordinates sit on the gray axis.
    pub fn to_hcl(&self) -> Hcl<E> {
        let chroma = self.a.hypot(self.b);
        let hue = if chroma == 0.0 {
            Component::NAN
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Hcl::new(hue, chroma, self.luma)
    }
}
