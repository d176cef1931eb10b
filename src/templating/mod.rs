mod catalog;
mod components;
mod document;
mod extract;

pub use catalog::TemplateCatalog;
pub use components::*;
pub use document::*;
pub use extract::*;
