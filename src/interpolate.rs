use num_traits::Float;

use crate::{math::normalize_hue, Color, Component, Space};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Interpolate a component where either side may be missing. A missing
/// component takes the value of the other side.
fn lerp_component(
    left: Option<Component>,
    right: Option<Component>,
    t: Component,
) -> Option<Component> {
    match (left, right) {
        (Some(left), Some(right)) => Some(lerp(left, right, t)),
        (Some(value), None) | (None, Some(value)) => Some(value),
        (None, None) => None,
    }
}

/// Interpolate two hues in degrees along the shorter arc. A difference of
/// exactly 180 degrees is left as is, so swapping the sides only reverses the
/// direction.
fn lerp_hue(left: Option<Component>, right: Option<Component>, t: Component) -> Option<Component> {
    let (Some(mut left), Some(mut right)) = (left, right) else {
        return lerp_component(left, right, t);
    };

    let delta = right - left;
    if delta > 180.0 {
        left += 360.0;
    } else if delta < -180.0 {
        right += 360.0;
    }

    Some(normalize_hue(lerp(left, right, t)))
}

impl Color {
    /// Linearly interpolate from this color to another in the color space
    /// specified using `t` as the progress between them. The result is
    /// expressed in `space`.
    ///
    /// Values of `t` outside `[0, 1]` extrapolate.
    pub fn interpolate(&self, other: &Self, t: Component, space: Space) -> Color {
        let left = self.to_space(space);
        let right = other.to_space(space);

        let hue = space.hue_index();
        let component = |index: usize, l: Option<Component>, r: Option<Component>| {
            if hue == Some(index) {
                lerp_hue(l, r, t)
            } else {
                lerp_component(l, r, t)
            }
        };

        Color::new(
            space,
            component(0, left.c0(), right.c0()),
            component(1, left.c1(), right.c1()),
            component(2, left.c2(), right.c2()),
            lerp_component(left.alpha(), right.alpha(), t),
        )
    }

    /// Interpolate between two colors in `space` and return the result in
    /// gamma encoded sRGB. When `clamp` is set every channel of the result is
    /// clipped to `[0, 1]`, otherwise out of range values are returned as is.
    pub fn lerp(&self, other: &Self, t: Component, space: Space, clamp: bool) -> Color {
        let mixed = self.interpolate(other, t, space).to_rgb();

        if clamp {
            mixed.clip()
        } else {
            mixed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Components};

    #[test]
    fn basic() {
        let left = Color::rgb(0.1, 0.2, 0.3, 1.0);
        let right = Color::rgb(0.5, 0.6, 0.7, 1.0);
        let mixed = left.interpolate(&right, 0.5, Space::Rgb);
        assert_component_eq!(mixed.components.0, 0.3);
        assert_component_eq!(mixed.components.1, 0.4);
        assert_component_eq!(mixed.components.2, 0.5);
        assert_eq!(mixed.alpha, 1.0);
        assert_eq!(mixed.space, Space::Rgb);
    }

    #[test]
    fn blue_to_yellow_in_rgb_is_gray() {
        let blue = Color::rgb(0.0, 0.0, 1.0, 1.0);
        let yellow = Color::rgb(1.0, 1.0, 0.0, 1.0);

        let mixed = blue.lerp(&yellow, 0.5, Space::Rgb, true);
        assert_component_eq!(mixed.components.0, 0.5);
        assert_component_eq!(mixed.components.1, 0.5);
        assert_component_eq!(mixed.components.2, 0.5);
        assert_component_eq!(mixed.alpha, 1.0);
    }

    #[test]
    fn blue_to_yellow_in_hsv_keeps_full_value() {
        let blue = Color::rgb(0.0, 0.0, 1.0, 1.0);
        let yellow = Color::rgb(1.0, 1.0, 0.0, 1.0);

        let hsv = blue.interpolate(&yellow, 0.5, Space::Hsv);
        assert_component_eq!(hsv.components.0, 150.0);
        assert_component_eq!(hsv.components.1, 1.0);
        assert_component_eq!(hsv.components.2, 1.0);

        let mixed = blue.lerp(&yellow, 0.5, Space::Hsv, true);
        assert_component_eq!(mixed.components.0, 0.0);
        assert_component_eq!(mixed.components.1, 1.0);
        assert_component_eq!(mixed.components.2, 0.5);

        let reversed = yellow.interpolate(&blue, 0.5, Space::Hsv);
        assert_component_eq!(reversed.components.0, 150.0);
    }

    #[test]
    fn hue_takes_the_shorter_arc() {
        let left = Color::new(Space::Hsl, 350.0, 1.0, 0.5, 1.0);
        let right = Color::new(Space::Hsl, 10.0, 1.0, 0.5, 1.0);

        let mixed = left.interpolate(&right, 0.5, Space::Hsl);
        assert_component_eq!(mixed.components.0, 0.0);

        let mixed = right.interpolate(&left, 0.25, Space::Hsl);
        assert_component_eq!(mixed.components.0, 5.0);

        let mixed = left.interpolate(&right, 0.25, Space::Hsl);
        assert_component_eq!(mixed.components.0, 355.0);
    }

    #[test]
    fn hue_of_lch_is_the_third_component() {
        let left = Color::new(Space::DegammaLch, 50.0, 30.0, 340.0, 1.0);
        let right = Color::new(Space::DegammaLch, 70.0, 30.0, 20.0, 1.0);

        let mixed = left.interpolate(&right, 0.5, Space::DegammaLch);
        assert_component_eq!(mixed.components.0, 60.0);
        assert_component_eq!(mixed.components.2, 0.0);
    }

    #[test]
    fn missing_hue_takes_the_other_side() {
        let gray = Color::rgb(0.5, 0.5, 0.5, 1.0);
        let red = Color::rgb(1.0, 0.0, 0.0, 1.0);

        for space in [Space::Hsl, Space::Hsv, Space::Hcl, Space::DegammaLch] {
            let mixed = gray.interpolate(&red, 0.5, space);
            let index = space.hue_index().unwrap();
            let hue = [mixed.c0(), mixed.c1(), mixed.c2()][index];
            let red_hue = red.to_space(space);
            let red_hue = [red_hue.c0(), red_hue.c1(), red_hue.c2()][index];
            assert_eq!(hue, red_hue, "{space:?}");
        }
    }

    #[test]
    fn gray_to_gray_stays_gray() {
        let dark = Color::rgb(0.1, 0.1, 0.1, 1.0);
        let light = Color::rgb(0.9, 0.9, 0.9, 1.0);

        for space in Space::ALL {
            for step in 0..=10 {
                let t = step as Component / 10.0;
                let mixed = dark.lerp(&light, t, space, true);
                let Components(r, g, b) = mixed.components;
                assert!(!r.is_nan() && !g.is_nan() && !b.is_nan(), "{space:?}");
                approx::assert_abs_diff_eq!(r, g, epsilon = 1.0e-4);
                approx::assert_abs_diff_eq!(g, b, epsilon = 1.0e-4);
            }
        }
    }

    #[test]
    fn clamp_flag() {
        // Halfway between saturated blue and green in Lch lies well outside
        // the sRGB cube.
        let blue = Color::rgb(0.0, 0.0, 1.0, 1.0);
        let green = Color::rgb(0.0, 1.0, 0.0, 1.0);

        let unclamped = blue.lerp(&green, 0.5, Space::DegammaLch, false);
        assert!(!unclamped.in_gamut());

        let clamped = blue.lerp(&green, 0.5, Space::DegammaLch, true);
        assert!(clamped.in_gamut());
        assert_eq!(
            clamped.components,
            unclamped.components.map(|v| v.clamp(0.0, 1.0))
        );
    }

    #[test]
    fn progress_outside_the_range_extrapolates() {
        let left = Color::rgb(0.2, 0.2, 0.2, 1.0);
        let right = Color::rgb(0.4, 0.4, 0.4, 1.0);

        let mixed = left.lerp(&right, 2.0, Space::Rgb, false);
        assert_component_eq!(mixed.components.0, 0.6);
    }
}
