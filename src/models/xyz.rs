//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// The D65 white point, scaled so that Y is 1.0.
#[allow(clippy::excessive_precision)]
pub const D65: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

/// A color in the CIE-XYZ color space with a D65 white point reference.
///
/// XYZ is only used as an intermediate step and has no [`crate::Space`] of
/// its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    /// The X component of the color.
    pub x: Component,
    /// The Y component of the color.
    pub y: Component,
    /// The Z component of the color.
    pub z: Component,
}

impl Xyz {
    /// Create a new CIE-XYZ color.
    pub fn new(x: Component, y: Component, z: Component) -> Self {
        Self { x, y, z }
    }

    /// Convert this model into generic components.
    pub fn to_components(&self) -> Components {
        Components(self.x, self.y, self.z)
    }
}

impl From<Components> for Xyz {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
