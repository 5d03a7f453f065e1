use crate::config::ConvertConfig;
use crate::har::Header;
use crate::jmx::{ElementProp, Prop, TestElement};

/// Build the header manager attached under a sampler.
///
/// Headers are copied verbatim and in capture order, minus the names in
/// `skip_headers` (transport-level fields JMeter recomputes itself) and any
/// header with a blank name.
pub fn build_header_manager(headers: &[Header], config: &ConvertConfig) -> TestElement {
    let items: Vec<ElementProp> = headers
        .iter()
        .filter(|h| {
            let name = h.name.trim();
            !name.is_empty() && !config.skip_headers.contains(&name.to_lowercase())
        })
        .map(|h| {
            ElementProp::new("", "Header")
                .prop(Prop::string("Header.name", h.name.as_str()))
                .prop(Prop::string("Header.value", h.value.as_str()))
        })
        .collect();

    TestElement::new(
        "HeaderManager",
        "HeaderPanel",
        "HeaderManager",
        "HTTP Header Manager",
    )
    .prop(Prop::Collection {
        name: "HeaderManager.headers".to_string(),
        items,
    })
}
