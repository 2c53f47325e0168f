#![doc = include_str!("../README.md")]

pub use errors::*;
pub use layout::{MipLevel, PyramidLayout};
pub use pixels::{PixelComponent, CHANNELS};
pub use pyramid::PyramidBuffer;

mod errors;
mod layout;
pub mod pixels;
mod pyramid;
