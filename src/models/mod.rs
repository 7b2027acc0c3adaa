//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.
//!
//! Conversions only operate on the 3 color components (no alpha, missing
//! components).
//!
//! NOTE: When a conversion yields a NaN value, the component is powerless and
//!       should be treated as missing.
//! NOTE: The reverse is not the same. Passing a value of NaN to a model will
//!       convert the value to 0.0.
//!
//! ```rust
//! use chromix::models::{Lab, Srgb, ToXyz};
//! let blue_in_lch = Lab::from(
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_linear_light()      // convert to linear light.
//!         .to_xyz(),              // convert to xyz-d65.
//! )
//! .to_polar();                    // convert to lch.
//! ```

use crate::color::{Color, Component};

mod hcl;
mod hsl;
mod hsv;
mod ipt;
mod lab;
mod rgb;
mod xyz;

pub use hcl::*;
pub use hsl::*;
pub use hsv::*;
pub use ipt::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`]. NaN components are marked as
    /// missing.
    fn to_color(&self, alpha: Option<Component>) -> Color;

    /// Read the components of a generic [`Color`] into this model. The color
    /// must already be in the space of the model.
    fn to_model(color: &Color) -> Self;
}
