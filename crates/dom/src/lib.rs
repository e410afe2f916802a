//! Markup DOM Library
//!
//! Arena-backed document tree used to build HTML on the server.
//!
//! ## Core Design
//!
//! ```text
//! Document ── create_element / set_attribute / append_child
//!    │
//!    └─ DomArena (Vec<DomNode>, NodeId = u32)
//!           ↓
//!     HtmlSerializer → String
//! ```
//!
//! Names are checked on creation, so the only way a builder on top of this
//! crate fails is by passing a malformed element or attribute name.

pub mod arena;
pub mod document;
pub mod error;
pub mod serializer;
pub mod types;
pub mod utils;

pub use arena::DomArena;
pub use document::{Document, DocumentConfig};
pub use error::{DomError, NameKind, Result};
pub use serializer::{HtmlSerializer, MarkupMode, SerializerConfig};
pub use types::*;
