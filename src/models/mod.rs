mod color;
mod raw_value;
mod text_value;

pub use color::*;
pub use raw_value::*;
pub use text_value::*;
