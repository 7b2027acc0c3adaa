//! A [`Color`] represents a color expressed in any of the supported color
//! spaces.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`]
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the first component of a [`Color`] is missing.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component of a [`Color`] is missing.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component of a [`Color`] is missing.
        const C2_IS_NONE = 1 << 2;
        /// Set when the alpha component of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

/// The color spaces a [`Color`] can be expressed in and interpolated through.
///
/// Spaces prefixed with `Degamma` remove the sRGB gamma encoding before the
/// space specific transform is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded sRGB, as sent to a display.
    Rgb = 0,
    /// sRGB with the gamma encoding removed (linear light).
    DegammaRgb = 1,
    /// Hue, chroma and luma in Cartesian form: `(C·cos h, C·sin h, luma)`.
    EuclideanHcl = 2,
    /// [`Space::EuclideanHcl`] computed from linear light sRGB.
    DegammaEuclideanHcl = 3,
    /// CIE-Lab relative to a D65 white point.
    DegammaLab = 4,
    /// Cone responses, compressed with the IPT non-linearity.
    DegammaLmsCompressed = 5,
    /// The IPT (intensity, protan, tritan) color space.
    DegammaIpt = 6,
    /// CIE-Lab in its cylindrical polar form (lightness, chroma, hue).
    DegammaLch = 7,
    /// Hue, saturation and lightness of gamma encoded sRGB.
    Hsl = 8,
    /// Hue, saturation and lightness of linear light sRGB.
    DegammaHsl = 9,
    /// Hue, chroma and Rec. 709 luma of gamma encoded sRGB.
    Hcl = 10,
    /// Hue, chroma and Rec. 709 luma of linear light sRGB.
    DegammaHcl = 11,
    /// Hue, saturation and value of gamma encoded sRGB.
    Hsv = 12,
    /// Hue, saturation and value of linear light sRGB.
    DegammaHsv = 13,
}

impl Space {
    /// Every supported space, in declaration order.
    pub const ALL: [Space; 14] = [
        Space::Rgb,
        Space::DegammaRgb,
        Space::EuclideanHcl,
        Space::DegammaEuclideanHcl,
        Space::DegammaLab,
        Space::DegammaLmsCompressed,
        Space::DegammaIpt,
        Space::DegammaLch,
        Space::Hsl,
        Space::DegammaHsl,
        Space::Hcl,
        Space::DegammaHcl,
        Space::Hsv,
        Space::DegammaHsv,
    ];

    /// Returns true if the sRGB gamma encoding is removed before converting
    /// into this space.
    pub fn is_degamma(&self) -> bool {
        !matches!(
            self,
            Space::Rgb | Space::EuclideanHcl | Space::Hsl | Space::Hcl | Space::Hsv
        )
    }

    /// The index of the component holding a hue angle in degrees, if the
    /// space has one.
    pub fn hue_index(&self) -> Option<usize> {
        match self {
            Space::Hsl
            | Space::DegammaHsl
            | Space::Hcl
            | Space::DegammaHcl
            | Space::Hsv
            | Space::DegammaHsv => Some(0),
            Space::DegammaLch => Some(2),
            Space::Rgb
            | Space::DegammaRgb
            | Space::EuclideanHcl
            | Space::DegammaEuclideanHcl
            | Space::DegammaLab
            | Space::DegammaLmsCompressed
            | Space::DegammaIpt => None,
        }
    }

    /// The kebab-case name of the space, as accepted by [`str::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::DegammaRgb => "degamma-rgb",
            Space::EuclideanHcl => "euclidean-hcl",
            Space::DegammaEuclideanHcl => "degamma-euclidean-hcl",
            Space::DegammaLab => "degamma-lab",
            Space::DegammaLmsCompressed => "degamma-lms-compressed",
            Space::DegammaIpt => "degamma-ipt",
            Space::DegammaLch => "degamma-lch",
            Space::Hsl => "hsl",
            Space::DegammaHsl => "degamma-hsl",
            Space::Hcl => "hcl",
            Space::DegammaHcl => "degamma-hcl",
            Space::Hsv => "hsv",
            Space::DegammaHsv => "degamma-hsv",
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Links a color model to the [`Space`] its components are expressed in.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// Struct that can hold a color of any color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The alpha component of the color.
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`]. Each color or alpha component can take values
    /// that can be converted into a [`ComponentDetails`]. This automates the
    /// process of settings values to missing. For example:
    /// ```rust
    /// use chromix::{Color, Space};
    /// let c = Color::new(Space::Hsl, None, 0.0, 0.5, 1.0);
    /// ```
    /// creates a gray with a missing hue.
    pub fn new(
        space: Space,
        c0: impl Into<ComponentDetails>,
        c1: impl Into<ComponentDetails>,
        c2: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let c0 = c0.into().value_and_flag(&mut flags, Flags::C0_IS_NONE);
        let c1 = c1.into().value_and_flag(&mut flags, Flags::C1_IS_NONE);
        let c2 = c2.into().value_and_flag(&mut flags, Flags::C2_IS_NONE);
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            components: Components(c0, c1, c2),
            alpha,
            flags,
            space,
        }
    }

    /// Shorthand for a gamma encoded sRGB color in [`Space::Rgb`].
    pub fn rgb(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self::new(Space::Rgb, red, green, blue, alpha)
    }

    /// Return the first component of the color.
    pub fn c0(&self) -> Option<Component> {
        if self.flags.contains(Flags::C0_IS_NONE) {
            None
        } else {
            Some(self.components.0)
        }
    }

    /// Return the second component of the color.
    pub fn c1(&self) -> Option<Component> {
        if self.flags.contains(Flags::C1_IS_NONE) {
            None
        } else {
            Some(self.components.1)
        }
    }

    /// Return the third component of the color.
    pub fn c2(&self) -> Option<Component> {
        if self.flags.contains(Flags::C2_IS_NONE) {
            None
        } else {
            Some(self.components.2)
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }
}

/// A struct that holds details about a component passed to any of the `new`
/// functions for color models. Any components that can be passed implements
/// a `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Rgb, 0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha, 0.4);
        assert_eq!(c.flags, Flags::empty());
        assert_eq!(c.space, Space::Rgb);

        let c = Color::new(Space::Hsl, None, 0.2, 0.3, 0.4);
        assert_eq!(c.components.0, 0.0);
        assert_eq!(c.c0(), None);
        assert_eq!(c.flags, Flags::C0_IS_NONE);
        assert_eq!(c.space, Space::Hsl);

        let c = Color::new(Space::DegammaLab, 0.1, 0.2, 0.3, None);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha, 0.0);
        assert_eq!(c.alpha(), None);
        assert_eq!(c.flags, Flags::ALPHA_IS_NONE);
    }

    #[test]
    fn test_component_details() {
        let cd = ComponentDetails::from(10.0);
        assert_eq!(cd.value, 10.0);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(Some(20.0));
        assert_eq!(cd.value, 20.0);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(None);
        assert_eq!(cd.value, 0.0);
        assert!(cd.is_none);
    }

    #[test]
    fn degamma_spaces() {
        assert!(!Space::Rgb.is_degamma());
        assert!(!Space::EuclideanHcl.is_degamma());
        assert!(Space::DegammaEuclideanHcl.is_degamma());
        assert!(Space::DegammaIpt.is_degamma());
        assert!(Space::DegammaHsv.is_degamma());
        assert_eq!(
            Space::ALL.iter().filter(|s| s.is_degamma()).count(),
            9,
        );
    }

    #[test]
    fn hue_components() {
        assert_eq!(Space::Hsl.hue_index(), Some(0));
        assert_eq!(Space::DegammaHcl.hue_index(), Some(0));
        assert_eq!(Space::DegammaLch.hue_index(), Some(2));
        assert_eq!(Space::EuclideanHcl.hue_index(), None);
        assert_eq!(Space::DegammaIpt.hue_index(), None);
    }
}
