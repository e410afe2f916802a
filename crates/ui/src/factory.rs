//! HTML element factory
//!
//! Stateless helpers that create one element, set a few attributes and
//! optional text, and hand back its id. Nothing is appended anywhere; the
//! caller decides where the element goes.

use dom::{Document, NodeId, Presence, Result};

/// Builds single elements inside a [`Document`]
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFactory;

impl HtmlFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create `tag` with optional text content, `id` and `class`
    ///
    /// Empty strings count as absent. The tag name is not checked here;
    /// the document rejects malformed names and the error is returned
    /// unchanged.
    pub fn build_element(
        &self,
        doc: &mut Document,
        tag: &str,
        content: Option<&str>,
        id: Option<&str>,
        class: Option<&str>,
    ) -> Result<NodeId> {
        let element = doc.create_element(tag)?;

        if let Some(content) = non_empty(content) {
            doc.set_text_content(element, content)?;
        }
        set_if_present(doc, element, "id", id)?;
        set_if_present(doc, element, "class", class)?;

        tracing::trace!(element, tag, "[HtmlFactory] Built element");
        Ok(element)
    }

    /// Create an `a` element pointing at `href`
    pub fn build_weblink(
        &self,
        doc: &mut Document,
        href: &str,
        target: Option<&str>,
        content: Option<&str>,
        id: Option<&str>,
        class: Option<&str>,
    ) -> Result<NodeId> {
        let link = self.build_element(doc, "a", content, id, class)?;
        doc.set_attribute(link, "href", href)?;
        set_if_present(doc, link, "target", target)?;
        Ok(link)
    }

    /// Create a `meta` element; each non-empty argument becomes an attribute
    pub fn build_meta(
        &self,
        doc: &mut Document,
        name: Option<&str>,
        content: Option<&str>,
        http_equiv: Option<&str>,
        charset: Option<&str>,
    ) -> Result<NodeId> {
        let meta = self.build_element(doc, "meta", None, None, None)?;
        set_if_present(doc, meta, "name", name)?;
        set_if_present(doc, meta, "content", content)?;
        set_if_present(doc, meta, "http-equiv", http_equiv)?;
        set_if_present(doc, meta, "charset", charset)?;
        Ok(meta)
    }

    /// Create a `link` element (stylesheets, icons, ...)
    pub fn build_link(&self, doc: &mut Document, rel: &str, href: &str) -> Result<NodeId> {
        let link = self.build_element(doc, "link", None, None, None)?;
        doc.set_attribute(link, "rel", rel)?;
        doc.set_attribute(link, "href", href)?;
        Ok(link)
    }

    /// Create a `script` element loading `src`
    pub fn build_script(
        &self,
        doc: &mut Document,
        src: &str,
        is_async: Presence,
    ) -> Result<NodeId> {
        let script = self.build_element(doc, "script", None, None, None)?;
        doc.set_attribute(script, "src", src)?;
        doc.set_flag(script, "async", is_async)?;
        Ok(script)
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn set_if_present(
    doc: &mut Document,
    element: NodeId,
    name: &str,
    value: Option<&str>,
) -> Result<()> {
    if let Some(value) = non_empty(value) {
        doc.set_attribute(element, name, value)?;
    }
    Ok(())
}
