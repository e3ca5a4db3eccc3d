//! Fluent, escaped attribute strings for HTML tags.
//!
//! The heavy lifting (the write-once accumulator and the escape pass) lives
//! in [`sepal_core`]. This crate adds the mechanical part: per-attribute
//! helper methods generated from static tables, grouped by where the
//! attribute comes from, plus a few free-function constructors.
//!
//! ```
//! use sepal_html::prelude::*;
//!
//! let attrs = factory::id("email")
//!     .class("field")
//!     .r#type("email")
//!     .required_if(true)
//!     .data_test(Some("login-email"));
//! assert_eq!(
//!     attrs.to_string(),
//!     r#" id="email" class="field" type="email" required="required" data-test="login-email""#
//! );
//! ```

pub mod factory;
mod groups;
mod macros;
mod table;

pub use groups::{
    EventAttributes, GlobalAttributes, Html5Attributes, MobileAttributes, EVENT_ATTRIBUTES,
    GLOBAL_ATTRIBUTES, HTML5_ATTRIBUTES, MOBILE_ATTRIBUTES,
};
pub use table::{all, lookup, AttrDef, AttrKind, Standard};

pub mod prelude {
    pub use crate::factory;
    pub use crate::{EventAttributes, GlobalAttributes, Html5Attributes, MobileAttributes};
    pub use sepal_core::{Attributes, HasAttributes, RenderOptions, RenderOptionsBuilder};
}
