//! HTML building helpers
//!
//! Builders on top of the `dom` crate for server-side markup:
//!
//! - [`HtmlFactory`]: single elements (`a`, `meta`, `link`, `script`, any tag)
//! - [`controls::form`]: form inputs and `<select>` with options/groups
//!
//! Everything is synchronous and writes into a caller-owned
//! [`dom::Document`]. The only error a builder returns is the document
//! rejecting a malformed element or attribute name.

pub mod controls;
pub mod factory;

pub use controls::form::{FormElement, FormInput, FormSelect};
pub use factory::HtmlFactory;
