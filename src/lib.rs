//! chromix converts colors between RGB and a range of perceptual and device
//! color spaces and interpolates between two colors inside any of them.
//!
//! ```rust
//! use chromix::{Color, Space};
//!
//! let blue = Color::rgb(0.0, 0.0, 1.0, 1.0);
//! let yellow = Color::rgb(1.0, 1.0, 0.0, 1.0);
//!
//! // Mix halfway in IPT and get the result back as clamped sRGB.
//! let mixed = blue.lerp(&yellow, 0.5, Space::DegammaIpt, true);
//! assert!(mixed.in_gamut());
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod gamut;
mod interpolate;
mod math;
pub mod models;
mod parse;

pub use color::{Color, Component, ComponentDetails, Components, Flags, HasSpace, Space};
pub use parse::ParseError;
