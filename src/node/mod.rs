//! Node types
//!
//! This module provides `Node` and its payload types. A node carries exactly
//! one `Value`, an ordered list of children and an optional user-data handle.
//!
//! # Key Features
//!
//! - `Value` sum type: the variant is the node kind
//! - Owned payloads release themselves on replacement or drop
//! - First-child fallback: a plain element stands in for its typed first child

mod element;
mod text;
mod value;

pub use element::{CDATA_PREFIX, CDATA_SUFFIX, is_cdata_name, unwrap_cdata, wrap_cdata};
pub use text::TextValue;
pub use value::{CustomValue, NodeKind, Value};

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::handle::{Destructor, Handle};

/// Type alias for children collection.
pub type Children = SmallVec<[Box<Node>; 4]>;

// =============================================================================
// Node
// =============================================================================

/// Node in an XML-like tree
#[derive(Debug)]
pub struct Node {
    /// Active payload
    pub value: Value,
    /// Child nodes
    pub children: Children,
    /// Caller-owned handle, never released by the node
    pub(crate) user_data: Option<Handle>,
}

impl Node {
    /// Create a node holding the given payload
    pub fn new(value: Value) -> Self {
        Self {
            value,
            children: SmallVec::new(),
            user_data: None,
        }
    }

    /// Create an element node
    pub fn new_element(name: impl Into<CompactString>) -> Self {
        Self::new(Value::Element(name.into()))
    }

    /// Create a CDATA node (an element with a CDATA-wrapped name)
    pub fn new_cdata(data: &str) -> Self {
        Self::new(Value::Element(wrap_cdata(data)))
    }

    /// Create an integer node
    pub fn new_integer(integer: i32) -> Self {
        Self::new(Value::Integer(integer))
    }

    /// Create an opaque text node
    pub fn new_opaque(opaque: impl Into<CompactString>) -> Self {
        Self::new(Value::Opaque(opaque.into()))
    }

    /// Create a whitespace-aware text node
    pub fn new_text(whitespace: bool, string: impl Into<CompactString>) -> Self {
        Self::new(Value::Text(TextValue::new(whitespace, string)))
    }

    /// Create a custom data node
    pub fn new_custom(data: Option<Handle>, destroy: Option<Destructor>) -> Self {
        Self::new(Value::Custom(CustomValue::new(data, destroy)))
    }

    /// Add a child node (builder pattern)
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(Box::new(child));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────────────────────

    /// Payload kind
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.value.kind()
    }

    /// Check if this is an element whose name carries the CDATA marker
    pub fn is_cdata(&self) -> bool {
        matches!(&self.value, Value::Element(name) if is_cdata_name(name))
    }

    /// Check if this is an element that is not a CDATA section
    pub fn is_plain_element(&self) -> bool {
        matches!(&self.value, Value::Element(name) if !is_cdata_name(name))
    }

    /// First child, if any
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first().map(|c| &**c)
    }

    /// Mutable first child, if any
    pub fn first_child_mut(&mut self) -> Option<&mut Node> {
        self.children.first_mut().map(|c| &mut **c)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // First-child fallback
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve the node an operation applies to.
    ///
    /// A plain (non-CDATA) element whose first child satisfies `accepts`
    /// stands in for that child; otherwise the node itself is the target.
    /// Only one level is descended.
    pub(crate) fn resolve(&self, accepts: impl Fn(&Node) -> bool) -> &Node {
        match self.first_child() {
            Some(child) if self.is_plain_element() && accepts(child) => child,
            _ => self,
        }
    }

    /// Mutable counterpart of [`Node::resolve`].
    pub(crate) fn resolve_mut(&mut self, accepts: impl Fn(&Node) -> bool) -> &mut Node {
        let descend = self.is_plain_element() && self.first_child().is_some_and(&accepts);
        if descend {
            &mut *self.children[0]
        } else {
            self
        }
    }
}
