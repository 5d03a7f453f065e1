/// A typed property on a test element.
#[derive(Clone, Debug)]
pub enum Prop {
    Str { name: String, value: String },
    Bool { name: String, value: bool },
    /// A nested single element, e.g. a thread group's loop controller.
    Element(ElementProp),
    /// An ordered collection of nested elements, e.g. argument or header lists.
    Collection { name: String, items: Vec<ElementProp> },
}

impl Prop {
    pub fn string(name: &str, value: impl Into<String>) -> Self {
        Prop::Str {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn bool(name: &str, value: bool) -> Self {
        Prop::Bool {
            name: name.to_string(),
            value,
        }
    }
}

/// A nested `elementProp`. The GUI/test classes are only present on elements
/// JMeter renders with a dedicated panel (e.g. `Arguments`).
#[derive(Clone, Debug)]
pub struct ElementProp {
    pub name: String,
    pub element_type: &'static str,
    pub gui_class: Option<&'static str>,
    pub test_class: Option<&'static str>,
    pub props: Vec<Prop>,
}

impl ElementProp {
    pub fn new(name: impl Into<String>, element_type: &'static str) -> Self {
        Self {
            name: name.into(),
            element_type,
            gui_class: None,
            test_class: None,
            props: Vec::new(),
        }
    }

    pub fn with_classes(mut self, gui_class: &'static str, test_class: &'static str) -> Self {
        self.gui_class = Some(gui_class);
        self.test_class = Some(test_class);
        self
    }

    pub fn prop(mut self, prop: Prop) -> Self {
        self.props.push(prop);
        self
    }
}

/// One node of the test plan: sampler, thread group, header manager, and so
/// on. `children` holds the contents of the element's hash tree.
#[derive(Clone, Debug)]
pub struct TestElement {
    pub tag: &'static str,
    pub gui_class: &'static str,
    pub test_class: &'static str,
    pub name: String,
    pub enabled: bool,
    pub props: Vec<Prop>,
    pub children: Vec<TestElement>,
}

impl TestElement {
    pub fn new(
        tag: &'static str,
        gui_class: &'static str,
        test_class: &'static str,
        name: impl Into<String>,
    ) -> Self {
        Self {
            tag,
            gui_class,
            test_class,
            name: name.into(),
            enabled: true,
            props: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn prop(mut self, prop: Prop) -> Self {
        self.props.push(prop);
        self
    }

    pub fn child(mut self, child: TestElement) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_props_and_children() {
        let element = TestElement::new("ThreadGroup", "ThreadGroupGui", "ThreadGroup", "group")
            .prop(Prop::string("ThreadGroup.num_threads", "1"))
            .prop(Prop::bool("ThreadGroup.scheduler", false))
            .child(TestElement::new(
                "HTTPSamplerProxy",
                "HttpTestSampleGui",
                "HTTPSamplerProxy",
                "001 GET https://example.com/",
            ));

        assert_eq!(element.props.len(), 2);
        assert_eq!(element.children.len(), 1);
        assert!(element.enabled);
    }

    #[test]
    fn element_prop_classes_are_optional() {
        let plain = ElementProp::new("", "Header");
        assert!(plain.gui_class.is_none());

        let panel = ElementProp::new("HTTPsampler.Arguments", "Arguments")
            .with_classes("HTTPArgumentsPanel", "Arguments");
        assert_eq!(panel.gui_class, Some("HTTPArgumentsPanel"));
        assert_eq!(panel.test_class, Some("Arguments"));
    }
}
