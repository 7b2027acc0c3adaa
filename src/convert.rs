//! Each color space is modeled with its own type. A [`Color`] is converted by
//! reading it into the model for its space, converting that model to gamma
//! encoded sRGB and from there into the model of the destination space.
//!
//! ```rust
//! use chromix::{Color, Space};
//! let blue = Color::rgb(0.0, 0.0, 1.0, 1.0);
//! let lch = blue.to_space(Space::DegammaLch);
//! let back = lch.to_rgb();
//! assert!((back.components.2 - 1.0).abs() < 1.0e-4);
//! ```

use crate::{
    color::{Color, Space},
    models::{
        EuclideanHcl, Encoding, GammaEncoded, Hcl, Hsl, Hsv, Ipt, Lab, Lch, LinearLight,
        LmsCompressed, Model, Rgb, Srgb, SrgbLinear, ToXyz,
    },
};

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space. Hues that are powerless in the destination space are
    /// marked as missing.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return *self;
        }

        let srgb = self.to_srgb_model();
        let alpha = self.alpha();

        match space {
            S::Rgb => srgb.to_color(alpha),
            S::DegammaRgb => srgb.to_linear_light().to_color(alpha),
            S::EuclideanHcl => srgb.to_hcl().to_euclidean().to_color(alpha),
            S::DegammaEuclideanHcl => srgb
                .to_linear_light()
                .to_hcl()
                .to_euclidean()
                .to_color(alpha),
            S::DegammaLab => Lab::from(srgb.to_linear_light().to_xyz()).to_color(alpha),
            S::DegammaLmsCompressed => LmsCompressed::from(srgb.to_linear_light()).to_color(alpha),
            S::DegammaIpt => {
                Ipt::from(LmsCompressed::from(srgb.to_linear_light())).to_color(alpha)
            }
            S::DegammaLch => Lab::from(srgb.to_linear_light().to_xyz())
                .to_polar()
                .to_color(alpha),
            S::Hsl => srgb.to_hsl().to_color(alpha),
            S::DegammaHsl => srgb.to_linear_light().to_hsl().to_color(alpha),
            S::Hcl => srgb.to_hcl().to_color(alpha),
            S::DegammaHcl => srgb.to_linear_light().to_hcl().to_color(alpha),
            S::Hsv => srgb.to_hsv().to_color(alpha),
            S::DegammaHsv => srgb.to_linear_light().to_hsv().to_color(alpha),
        }
    }

    /// Convert this color to gamma encoded sRGB ([`Space::Rgb`]).
    pub fn to_rgb(&self) -> Self {
        self.to_space(Space::Rgb)
    }

    /// Read this color into the gamma encoded sRGB model.
    fn to_srgb_model(&self) -> Srgb {
        use Space as S;

        macro_rules! model {
            ($m:ty) => {{
                <$m>::to_model(self)
            }};
        }

        match self.space {
            S::Rgb => model!(Srgb),
            S::DegammaRgb => model!(SrgbLinear).to_gamma_encoded(),
            S::EuclideanHcl => model!(EuclideanHcl<GammaEncoded>).to_hcl().to_rgb(),
            S::DegammaEuclideanHcl => model!(EuclideanHcl<LinearLight>)
                .to_hcl()
                .to_rgb()
                .to_gamma_encoded(),
            S::DegammaLab => SrgbLinear::from(model!(Lab).to_xyz()).to_gamma_encoded(),
            S::DegammaLmsCompressed => model!(LmsCompressed)
                .to_linear_light()
                .to_gamma_encoded(),
            S::DegammaIpt => model!(Ipt)
                .to_lms_compressed()
                .to_linear_light()
                .to_gamma_encoded(),
            S::DegammaLch => {
                SrgbLinear::from(model!(Lch).to_rectangular().to_xyz()).to_gamma_encoded()
            }
            S::Hsl => model!(Hsl<GammaEncoded>).to_rgb(),
            S::DegammaHsl => model!(Hsl<LinearLight>).to_rgb().to_gamma_encoded(),
            S::Hcl => model!(Hcl<GammaEncoded>).to_rgb(),
            S::DegammaHcl => model!(Hcl<LinearLight>).to_rgb().to_gamma_encoded(),
            S::Hsv => model!(Hsv<GammaEncoded>).to_rgb(),
            S::DegammaHsv => model!(Hsv<LinearLight>).to_rgb().to_gamma_encoded(),
        }
    }
}

impl<E: Encoding> Rgb<E> {
    /// Convert to the HSL notation, keeping the encoding.
    pub fn to_hsl(&self) -> Hsl<E> {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert to the HSV notation, keeping the encoding.
    pub fn to_hsv(&self) -> Hsv<E> {
        util::rgb_to_hsv(&self.to_components()).into()
    }

    /// Convert to hue, chroma and luma, keeping the encoding.
    pub fn to_hcl(&self) -> Hcl<E> {
        util::rgb_to_hcl(&self.to_components()).into()
    }
}

impl<E: Encoding> Hsl<E> {
    /// Convert this color from the HSL notation back to RGB.
    pub fn to_rgb(&self) -> Rgb<E> {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl<E: Encoding> Hsv<E> {
    /// Convert this color from the HSV notation back to RGB.
    pub fn to_rgb(&self) -> Rgb<E> {
        util::hsv_to_rgb(&self.to_components()).into()
    }
}

impl<E: Encoding> Hcl<E> {
    /// Convert this color from hue, chroma and luma back to RGB.
    pub fn to_rgb(&self) -> Rgb<E> {
        util::hcl_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize, normalize_hue},
        models::LUMA_WEIGHTS,
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. The hue is NaN when all components are equal.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Components(hue, saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(value, value, value);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }

    /// Convert from RGB notation to hue, chroma and luma.
    pub fn rgb_to_hcl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);
        let (wr, wg, wb) = LUMA_WEIGHTS;

        let luma = wr * from.0 + wg * from.1 + wb * from.2;

        Components(hue, max - min, luma)
    }

    /// Convert from hue, chroma and luma to RGB notation.
    pub fn hcl_to_rgb(from: &Components) -> Components {
        let Components(hue, chroma, luma) = from.map(normalize);
        let (wr, wg, wb) = LUMA_WEIGHTS;

        // Place the chroma on the edge of the RGB cube for the hue sector, then
        // shift all components equally until the luma matches.
        let sector = normalize_hue(hue) / 60.0;
        let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

        let Components(red, green, blue) = match sector as u8 {
            0 => Components(chroma, x, 0.0),
            1 => Components(x, chroma, 0.0),
            2 => Components(0.0, chroma, x),
            3 => Components(0.0, x, chroma),
            4 => Components(x, 0.0, chroma),
            _ => Components(chroma, 0.0, x),
        };

        let m = luma - (wr * red + wg * green + wb * blue);

        Components(red + m, green + m, blue + m)
    }
}
