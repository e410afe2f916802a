//! Render a small page with a grouped select and print it

use dom::{Document, HtmlSerializer, Presence, SerializerConfig};
use ui::controls::form::{FormInput, FormInputConfig, FormSelect, SelectConfig};
use ui::HtmlFactory;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut doc = Document::new();
    let factory = HtmlFactory::new();

    let html = factory.build_element(&mut doc, "html", None, None, None)?;
    let head = factory.build_element(&mut doc, "head", None, None, None)?;
    let body = factory.build_element(&mut doc, "body", None, None, None)?;
    doc.append_child(doc.root(), html)?;
    doc.append_child(html, head)?;
    doc.append_child(html, body)?;

    let charset = factory.build_meta(&mut doc, None, None, None, Some("utf-8"))?;
    let title = factory.build_element(&mut doc, "title", Some("Order"), None, None)?;
    let style = factory.build_link(&mut doc, "stylesheet", "/static/site.css")?;
    let script = factory.build_script(&mut doc, "/static/app.js", Presence::Present)?;
    for node in [charset, title, style, script] {
        doc.append_child(head, node)?;
    }

    let form = factory.build_element(&mut doc, "form", None, Some("order"), None)?;
    doc.append_child(body, form)?;

    let quantity = FormInput::new(
        &mut doc,
        &FormInputConfig {
            name: "quantity".to_string(),
            value: "1".to_string(),
            required: Presence::Present,
            ..FormInputConfig::typed("number")
        },
    )?
    .into_element();
    doc.append_child(form, quantity)?;

    let config = SelectConfig {
        name: "product".to_string(),
        id: "product".to_string(),
        required: Presence::Present,
        ..Default::default()
    };
    let product = FormSelect::new(&mut doc, &config)?
        .add_options([("", "Choose a product")], None)?
        .add_options_with_groups(
            [
                ("Fruit", vec![("apple", "Apple"), ("pear", "Pear")]),
                ("Vegetables", vec![("leek", "Leek")]),
            ],
            Some("pear"),
        )?
        .element();
    doc.append_child(form, product)?;

    let submit = factory.build_weblink(
        &mut doc,
        "#submit",
        None,
        Some("Order now"),
        None,
        Some("button"),
    )?;
    doc.append_child(form, submit)?;

    let serializer = HtmlSerializer::with_config(SerializerConfig {
        doctype: true,
        indent: Some(2),
        ..Default::default()
    });
    println!("{}", serializer.serialize(&doc)?);

    Ok(())
}
