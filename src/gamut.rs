//! Gamut checks and clipping.

use crate::{Color, Component, Space};

#[allow(clippy::manual_range_contains)]
fn in_zero_to_one(value: Component) -> bool {
    value >= 0.0 && value <= 1.0
}

impl Color {
    /// Return a color with each of the components and alpha clipped (clamped
    /// to [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Color {
        Color {
            components: self.components.map(|v| v.clamp(0.0, 1.0)),
            alpha: self.alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Returns true if the color is within its gamut limits.
    ///
    /// RGB based colors have their components checked to be inside [0..1].
    /// Notations derived from RGB are converted to [`Space::Rgb`] before being
    /// checked. Lab, Lch, LMS and IPT have no gamut limits.
    pub fn in_gamut(&self) -> bool {
        match self.space {
            Space::Rgb | Space::DegammaRgb => {
                in_zero_to_one(self.components.0)
                    && in_zero_to_one(self.components.1)
                    && in_zero_to_one(self.components.2)
            }
            Space::Hsl
            | Space::DegammaHsl
            | Space::Hsv
            | Space::DegammaHsv
            | Space::Hcl
            | Space::DegammaHcl
            | Space::EuclideanHcl
            | Space::DegammaEuclideanHcl => self.to_rgb().in_gamut(),
            Space::DegammaLab
            | Space::DegammaLch
            | Space::DegammaLmsCompressed
            | Space::DegammaIpt => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Flags;

    #[test]
    fn clip_clamps_every_channel() {
        let color = Color::rgb(-0.5, 0.5, 1.5, 2.0).clip();
        assert_eq!(color.components.0, 0.0);
        assert_eq!(color.components.1, 0.5);
        assert_eq!(color.components.2, 1.0);
        assert_eq!(color.alpha, 1.0);
        assert_eq!(color.space, Space::Rgb);
    }

    #[test]
    fn clip_keeps_missing_flags() {
        let color = Color::new(Space::Hsl, None, 2.0, 0.5, 1.0).clip();
        assert_eq!(color.flags, Flags::C0_IS_NONE);
        assert_eq!(color.components.1, 1.0);
    }

    #[test]
    fn rgb_gamut() {
        assert!(Color::rgb(0.0, 0.5, 1.0, 1.0).in_gamut());
        assert!(!Color::rgb(0.0, 0.5, 1.0001, 1.0).in_gamut());
        assert!(!Color::new(Space::DegammaRgb, -0.1, 0.5, 0.5, 1.0).in_gamut());
    }

    #[test]
    fn derived_notations_are_checked_in_rgb() {
        assert!(Color::new(Space::Hsv, 200.0, 0.5, 0.5, 1.0).in_gamut());
        // Full chroma blue cannot have the luma of white.
        assert!(!Color::new(Space::Hcl, 240.0, 1.0, 0.9, 1.0).in_gamut());
        assert!(Color::new(Space::DegammaLab, 50.0, 300.0, -300.0, 1.0).in_gamut());
    }
}
