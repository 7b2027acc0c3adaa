//! Property-based tests for conversion and interpolation.
//!
//! These tests use proptest to generate random colors and verify properties
//! that should hold for every color space.

use approx::assert_abs_diff_eq;
use chromix::{Color, Component, Space};
use proptest::prelude::*;

/// Round trips through the steeper transforms (IPT expansion, the sRGB toe)
/// lose a few single precision ulps, so compare well below 8-bit precision
/// rather than at 16 bits.
#[cfg(not(feature = "f64"))]
const EPSILON: Component = 1.0e-4;

#[cfg(feature = "f64")]
const EPSILON: Component = 1.0e-5;

/// Strategy for generating any supported color space.
fn space_strategy() -> impl Strategy<Value = Space> {
    proptest::sample::select(Space::ALL.to_vec())
}

/// Strategy for generating spaces that carry a hue component.
fn hue_space_strategy() -> impl Strategy<Value = Space> {
    proptest::sample::select(
        Space::ALL
            .into_iter()
            .filter(|space| space.hue_index().is_some())
            .collect::<Vec<_>>(),
    )
}

/// Strategy for generating opaque display colors.
fn rgb_strategy() -> impl Strategy<Value = Color> {
    (0.0..=1.0 as Component, 0.0..=1.0 as Component, 0.0..=1.0 as Component)
        .prop_map(|(r, g, b)| Color::rgb(r, g, b, 1.0))
}

fn assert_same_rgb(actual: &Color, expected: &Color) {
    assert_abs_diff_eq!(actual.components.0, expected.components.0, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.components.1, expected.components.1, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.components.2, expected.components.2, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.alpha, expected.alpha, epsilon = EPSILON);
}

proptest! {
    /// Converting into a space and back returns the original color.
    #[test]
    fn round_trip(color in rgb_strategy(), space in space_strategy()) {
        let back = color.to_space(space).to_rgb();
        prop_assert_eq!(back.space, Space::Rgb);
        assert_same_rgb(&back, &color);
    }

    /// Progress 0 returns the start color and progress 1 the end color.
    #[test]
    fn endpoints(a in rgb_strategy(), b in rgb_strategy(), space in space_strategy()) {
        assert_same_rgb(&a.lerp(&b, 0.0, space, true), &a);
        assert_same_rgb(&a.lerp(&b, 1.0, space, true), &b);
    }

    /// Swapping the endpoints and reversing the progress gives the same color.
    #[test]
    fn symmetry(
        a in rgb_strategy(),
        b in rgb_strategy(),
        t in 0.0..=1.0 as Component,
        space in space_strategy(),
    ) {
        let forward = a.lerp(&b, t, space, false);
        let backward = b.lerp(&a, 1.0 - t, space, false);
        prop_assert!((forward.components.0 - backward.components.0).abs() < 1.0e-3);
        prop_assert!((forward.components.1 - backward.components.1).abs() < 1.0e-3);
        prop_assert!((forward.components.2 - backward.components.2).abs() < 1.0e-3);
    }

    /// A clamped result is always displayable.
    #[test]
    fn clamped_results_are_in_gamut(
        a in rgb_strategy(),
        b in rgb_strategy(),
        t in 0.0..=1.0 as Component,
        space in space_strategy(),
    ) {
        let mixed = a.lerp(&b, t, space, true);
        prop_assert!(mixed.in_gamut());
        prop_assert!((0.0..=1.0).contains(&mixed.alpha));
    }

    /// Mixing two grays never produces NaN and stays gray.
    #[test]
    fn gray_to_gray(
        from in 0.0..=1.0 as Component,
        to in 0.0..=1.0 as Component,
        t in 0.0..=1.0 as Component,
        space in hue_space_strategy(),
    ) {
        let a = Color::rgb(from, from, from, 1.0);
        let b = Color::rgb(to, to, to, 1.0);
        let mixed = a.lerp(&b, t, space, true);
        let chromix::Components(r, g, bl) = mixed.components;
        prop_assert!(!r.is_nan() && !g.is_nan() && !bl.is_nan());
        prop_assert!((r - g).abs() < EPSILON);
        prop_assert!((g - bl).abs() < EPSILON);
    }

    /// Interpolated hues stay inside [0, 360).
    #[test]
    fn hue_stays_normalized(
        a in rgb_strategy(),
        b in rgb_strategy(),
        t in 0.0..=1.0 as Component,
        space in hue_space_strategy(),
    ) {
        let mixed = a.interpolate(&b, t, space);
        let hue = match space.hue_index() {
            Some(0) => mixed.components.0,
            _ => mixed.components.2,
        };
        prop_assert!((0.0..360.0).contains(&hue), "hue {hue} in {space:?}");
    }
}
