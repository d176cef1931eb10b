mod documents;
mod health_check;
mod newsletters;

pub mod helpers;

pub use documents::*;
pub use health_check::*;
pub use helpers::*;
pub use newsletters::*;
