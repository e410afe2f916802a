//! Form controls
//!
//! `FormElement` is the shared handle, `FormInput` configures the common
//! input attribute set on top of it, and `FormSelect` specialises the
//! input into a `<select>` with option helpers.

pub mod element;
pub mod input;
pub mod select;

pub use element::{FormElement, FormElementConfig};
pub use input::{FormInput, FormInputConfig};
pub use select::{FormSelect, SelectConfig};
