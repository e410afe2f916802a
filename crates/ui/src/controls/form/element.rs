//! Generic form element
//!
//! The base every form control is built from: a document borrow plus the
//! element it created. Specialised controls wrap this instead of
//! inheriting from it.

use dom::{Document, NodeId, Presence, Result};
use serde::{Deserialize, Serialize};

use crate::factory::{set_if_present, HtmlFactory};

/// Attributes applied when a form element is created
///
/// Empty fields are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormElementConfig {
    pub tag: String,
    pub name: String,
    pub value: String,
    pub id: String,
    pub class: String,
    /// Text content of the element
    pub text: String,
}

impl Default for FormElementConfig {
    fn default() -> Self {
        Self {
            tag: "input".to_string(),
            name: String::new(),
            value: String::new(),
            id: String::new(),
            class: String::new(),
            text: String::new(),
        }
    }
}

impl FormElementConfig {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }
}

/// Handle to a form element under construction
#[derive(Debug)]
pub struct FormElement<'d> {
    doc: &'d mut Document,
    element: NodeId,
}

impl<'d> FormElement<'d> {
    /// Create the element described by `config` in `doc`
    pub fn new(doc: &'d mut Document, config: &FormElementConfig) -> Result<Self> {
        let element = HtmlFactory.build_element(
            doc,
            &config.tag,
            Some(config.text.as_str()),
            Some(config.id.as_str()),
            Some(config.class.as_str()),
        )?;
        set_if_present(doc, element, "name", Some(config.name.as_str()))?;
        set_if_present(doc, element, "value", Some(config.value.as_str()))?;

        Ok(Self { doc, element })
    }

    /// The element being built
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Release the document borrow, keeping the element id
    pub fn into_element(self) -> NodeId {
        self.element
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.doc
    }

    /// Set an attribute on the element
    pub fn attr(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.doc.set_attribute(self.element, name, value)?;
        Ok(self)
    }

    /// Set or clear a presence-encoded attribute
    pub fn flag(&mut self, name: &str, presence: Presence) -> Result<&mut Self> {
        self.doc.set_flag(self.element, name, presence)?;
        Ok(self)
    }

    /// Append an existing node as the last child
    pub fn append(&mut self, child: NodeId) -> Result<&mut Self> {
        self.doc.append_child(self.element, child)?;
        Ok(self)
    }
}
