//! Core domain types for colornodes.
//!
//! - `Colour` - 24-bit RGB colour values and hex conversion
//! - `ImageTensor` - the host's normalized image batches
//! - `Value` / `ValueType` - typed values crossing the node boundary

mod colour;
mod tensor;
mod value;

pub use colour::{
    hex_to_rgb, invert_hex, ChannelOrder, Colour, SWATCH_BRIGHTNESS_THRESHOLD,
};
pub use tensor::{ImageTensor, RGB_CHANNELS};
pub use value::{Value, ValueType};
