mod color;
mod newsletter;

pub use color::*;
pub use newsletter::*;
