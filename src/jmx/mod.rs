//! Typed JMeter test-plan tree and its XML serializer.
//!
//! The JMX format encodes the plan hierarchy as sibling pairs: every test
//! element is immediately followed by one `<hashTree>` holding its children,
//! present even when empty. The model here keeps children inside
//! [`TestElement`] and the writer re-introduces the sibling pairing, so a
//! malformed tree cannot be expressed.

mod tree;
mod writer;

pub use tree::{ElementProp, Prop, TestElement};
pub use writer::{write_document, JMETER_VERSION, JMX_PROPERTIES, JMX_VERSION};
