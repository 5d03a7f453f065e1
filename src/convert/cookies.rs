use crate::har::Cookie;
use crate::jmx::{ElementProp, Prop, TestElement};

/// Build a cookie manager from recorded request cookies.
///
/// Opt-in pipeline stage: the default assembly leaves cookies to the
/// captured `Cookie` headers and does not invoke this. Values are copied
/// verbatim; a missing path falls back to `/`.
pub fn build_cookie_manager(cookies: &[Cookie]) -> TestElement {
    let items: Vec<ElementProp> = cookies
        .iter()
        .map(|c| {
            ElementProp::new(c.name.as_str(), "Cookie")
                .prop(Prop::string("Cookie.value", c.value.as_str()))
                .prop(Prop::string(
                    "Cookie.domain",
                    c.domain.as_deref().unwrap_or(""),
                ))
                .prop(Prop::string("Cookie.path", c.path.as_deref().unwrap_or("/")))
        })
        .collect();

    TestElement::new(
        "CookieManager",
        "CookiePanel",
        "CookieManager",
        "HTTP Cookie Manager",
    )
    .prop(Prop::Collection {
        name: "CookieManager.cookies".to_string(),
        items,
    })
    .prop(Prop::bool("CookieManager.clearEachIteration", false))
}
