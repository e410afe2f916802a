//! Select control with options and option groups

use std::ops::{Deref, DerefMut};

use dom::{Document, NodeId, Presence, Result};
use serde::{Deserialize, Serialize};

use super::element::{FormElement, FormElementConfig};
use super::input::{FormInput, FormInputConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    pub name: String,
    pub id: String,
    pub class: String,
    pub multiple: Presence,
    pub required: Presence,
}

/// `<select>` builder
///
/// Option methods are additive: every call appends after whatever is
/// already there and returns the same builder for chaining.
///
/// ```
/// use dom::Document;
/// use ui::controls::form::{FormSelect, SelectConfig};
///
/// let mut doc = Document::new();
/// let select = FormSelect::new(&mut doc, &SelectConfig::default())?
///     .add_options([("a", "Apple"), ("b", "Banana")], Some("b"))?
///     .element();
/// assert_eq!(doc.element_children(select)?.len(), 2);
/// # Ok::<(), dom::DomError>(())
/// ```
#[derive(Debug)]
pub struct FormSelect<'d> {
    input: FormInput<'d>,
}

impl<'d> FormSelect<'d> {
    pub fn new(doc: &'d mut Document, config: &SelectConfig) -> Result<Self> {
        let input_config = FormInputConfig {
            tag: "select".to_string(),
            input_type: String::new(),
            name: config.name.clone(),
            id: config.id.clone(),
            class: config.class.clone(),
            value: String::new(),
            required: config.required,
        };

        let mut input = FormInput::new(doc, &input_config)?;
        input.flag("multiple", config.multiple)?;

        Ok(Self { input })
    }

    /// Append one `<option>` per `(value, label)` pair, in order
    ///
    /// Every option whose value equals `selected` is marked selected, so
    /// duplicate values are all selected together.
    pub fn add_options<I, V, L>(
        &mut self,
        options: I,
        selected: Option<&str>,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (V, L)>,
        V: AsRef<str>,
        L: AsRef<str>,
    {
        let select = self.input.element();
        let added = append_options(self.input.document_mut(), select, options, selected)?;

        tracing::debug!(select, added, "[FormSelect] Added options");
        Ok(self)
    }

    /// Append one `<optgroup label=..>` per group, each filled like
    /// [`FormSelect::add_options`]
    ///
    /// `selected` is matched inside every group independently.
    pub fn add_options_with_groups<G, K, O, V, L>(
        &mut self,
        groups: G,
        selected: Option<&str>,
    ) -> Result<&mut Self>
    where
        G: IntoIterator<Item = (K, O)>,
        K: AsRef<str>,
        O: IntoIterator<Item = (V, L)>,
        V: AsRef<str>,
        L: AsRef<str>,
    {
        let select = self.input.element();
        let doc = self.input.document_mut();

        for (label, options) in groups {
            let group =
                FormElement::new(doc, &FormElementConfig::new("optgroup"))?.into_element();
            doc.set_attribute(group, "label", label.as_ref())?;

            let added = append_options(doc, group, options, selected)?;
            doc.append_child(select, group)?;

            tracing::debug!(
                select,
                group,
                added,
                label = label.as_ref(),
                "[FormSelect] Added option group"
            );
        }

        Ok(self)
    }

    pub fn into_element(self) -> NodeId {
        self.input.into_element()
    }
}

impl<'d> Deref for FormSelect<'d> {
    type Target = FormElement<'d>;

    fn deref(&self) -> &Self::Target {
        &self.input
    }
}

impl<'d> DerefMut for FormSelect<'d> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.input
    }
}

/// Build `<option>` children under `parent`, returns how many were added
fn append_options<I, V, L>(
    doc: &mut Document,
    parent: NodeId,
    options: I,
    selected: Option<&str>,
) -> Result<usize>
where
    I: IntoIterator<Item = (V, L)>,
    V: AsRef<str>,
    L: AsRef<str>,
{
    let mut added = 0;
    for (value, label) in options {
        let value = value.as_ref();
        let config = FormElementConfig {
            text: label.as_ref().to_string(),
            ..FormElementConfig::new("option")
        };

        // value is written even when empty: without it the label would
        // become the submitted value
        let mut option = FormElement::new(doc, &config)?;
        option
            .attr("value", value)?
            .flag("selected", Presence::from(selected == Some(value)))?;
        let option = option.into_element();

        doc.append_child(parent, option)?;
        added += 1;
    }
    Ok(added)
}
