use std::borrow::Cow;
use std::io::Write;

use crate::error::Result;
use crate::jmx::tree::{ElementProp, Prop, TestElement};

pub const JMX_VERSION: &str = "1.2";
pub const JMX_PROPERTIES: &str = "5.0";
pub const JMETER_VERSION: &str = "5.6.0";

/// Serialize a complete JMX document: XML declaration, `jmeterTestPlan` root,
/// and the plan tree with every element followed by its own hash tree.
pub fn write_document<W: Write>(writer: &mut W, plan: &TestElement) -> Result<()> {
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        writer,
        r#"<jmeterTestPlan version="{JMX_VERSION}" properties="{JMX_PROPERTIES}" jmeter="{JMETER_VERSION}">"#
    )?;
    writeln!(writer, "  <hashTree>")?;
    write_element(writer, plan, 2)?;
    writeln!(writer, "  </hashTree>")?;
    writeln!(writer, "</jmeterTestPlan>")?;
    Ok(())
}

fn write_element<W: Write>(writer: &mut W, element: &TestElement, depth: usize) -> Result<()> {
    let pad = indent(depth);
    writeln!(
        writer,
        r#"{pad}<{tag} guiclass="{gui}" testclass="{test}" testname="{name}" enabled="{enabled}">"#,
        tag = element.tag,
        gui = element.gui_class,
        test = element.test_class,
        name = escape_xml(&element.name),
        enabled = element.enabled,
    )?;
    for prop in &element.props {
        write_prop(writer, prop, depth + 1)?;
    }
    writeln!(writer, "{pad}</{tag}>", tag = element.tag)?;

    // The mandatory sibling: one hashTree per element, empty when childless.
    if element.children.is_empty() {
        writeln!(writer, "{pad}<hashTree/>")?;
    } else {
        writeln!(writer, "{pad}<hashTree>")?;
        for child in &element.children {
            write_element(writer, child, depth + 1)?;
        }
        writeln!(writer, "{pad}</hashTree>")?;
    }
    Ok(())
}

fn write_prop<W: Write>(writer: &mut W, prop: &Prop, depth: usize) -> Result<()> {
    let pad = indent(depth);
    match prop {
        Prop::Str { name, value } => writeln!(
            writer,
            r#"{pad}<stringProp name="{}">{}</stringProp>"#,
            escape_xml(name),
            escape_xml(value)
        )?,
        Prop::Bool { name, value } => writeln!(
            writer,
            r#"{pad}<boolProp name="{}">{value}</boolProp>"#,
            escape_xml(name)
        )?,
        Prop::Element(element) => write_element_prop(writer, element, depth)?,
        Prop::Collection { name, items } => {
            writeln!(
                writer,
                r#"{pad}<collectionProp name="{}">"#,
                escape_xml(name)
            )?;
            for item in items {
                write_element_prop(writer, item, depth + 1)?;
            }
            writeln!(writer, "{pad}</collectionProp>")?;
        }
    }
    Ok(())
}

fn write_element_prop<W: Write>(writer: &mut W, element: &ElementProp, depth: usize) -> Result<()> {
    let pad = indent(depth);
    let mut open = format!(
        r#"{pad}<elementProp name="{}" elementType="{}""#,
        escape_xml(&element.name),
        element.element_type
    );
    if let Some(gui) = element.gui_class {
        open.push_str(&format!(r#" guiclass="{gui}""#));
    }
    if let Some(test) = element.test_class {
        open.push_str(&format!(r#" testclass="{test}""#));
    }
    open.push_str(r#" enabled="true">"#);
    writeln!(writer, "{open}")?;
    for prop in &element.props {
        write_prop(writer, prop, depth + 1)?;
    }
    writeln!(writer, "{pad}</elementProp>")?;
    Ok(())
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
