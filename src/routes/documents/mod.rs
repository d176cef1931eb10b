mod document;
mod routes;

pub use document::*;
pub use routes::*;
