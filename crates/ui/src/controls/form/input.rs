//! Generic form input
//!
//! `<input>` by default; the tag can be overridden (the select builder
//! uses this to produce `<select>` with the same attribute set).

use std::ops::{Deref, DerefMut};

use dom::{Document, NodeId, Presence, Result};
use serde::{Deserialize, Serialize};

use super::element::{FormElement, FormElementConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInputConfig {
    pub tag: String,
    /// Value of the `type` attribute, skipped when empty
    #[serde(rename = "type")]
    pub input_type: String,
    pub name: String,
    pub id: String,
    pub class: String,
    pub value: String,
    pub required: Presence,
}

impl Default for FormInputConfig {
    fn default() -> Self {
        Self {
            tag: "input".to_string(),
            input_type: String::new(),
            name: String::new(),
            id: String::new(),
            class: String::new(),
            value: String::new(),
            required: Presence::Absent,
        }
    }
}

impl FormInputConfig {
    /// An `<input>` of the given type
    pub fn typed(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            ..Default::default()
        }
    }
}

/// Form input under construction
#[derive(Debug)]
pub struct FormInput<'d> {
    inner: FormElement<'d>,
}

impl<'d> FormInput<'d> {
    pub fn new(doc: &'d mut Document, config: &FormInputConfig) -> Result<Self> {
        let element_config = FormElementConfig {
            tag: config.tag.clone(),
            name: config.name.clone(),
            value: config.value.clone(),
            id: config.id.clone(),
            class: config.class.clone(),
            text: String::new(),
        };

        let mut inner = FormElement::new(doc, &element_config)?;
        if !config.input_type.is_empty() {
            inner.attr("type", &config.input_type)?;
        }
        inner.flag("required", config.required)?;

        Ok(Self { inner })
    }

    pub fn into_element(self) -> NodeId {
        self.inner.into_element()
    }
}

impl<'d> Deref for FormInput<'d> {
    type Target = FormElement<'d>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'d> DerefMut for FormInput<'d> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
