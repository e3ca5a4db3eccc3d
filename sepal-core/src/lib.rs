mod attributes;
mod escape;
mod options;

pub use attributes::{Attributes, HasAttributes};
pub use escape::{escape, escape_into};
pub use options::{RenderOptions, RenderOptionsBuilder, RenderOptionsBuilderError};
