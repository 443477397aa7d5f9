//! Node value setters
//!
//! One operation per payload kind. Each setter resolves its target node,
//! checks the target's kind, then releases the old payload and installs the
//! new one. A failed call leaves the node untouched.
//!
//! # Target resolution
//!
//! Every setter except [`Node::set_element`] and [`Node::set_user_data`]
//! accepts a plain element in place of its first child when that child has
//! the matching kind, so callers may pass `<value>42</value>` or `42`
//! interchangeably. CDATA sections are never treated as wrappers.
//!
//! # Custom destructors
//!
//! Replacing a custom payload calls its destructor synchronously before the
//! new handle is installed. Destructors must not mutate the node they were
//! attached to.

use compact_str::CompactString;

use crate::error::{SetError, SetResult};
use crate::format::{FormatArg, render};
use crate::handle::{Destructor, Handle};
use crate::node::{Node, NodeKind, Value, is_cdata_name, wrap_cdata};

fn reject(operation: &'static str, kind: NodeKind) -> SetError {
    trace_event!(operation, %kind, "rejected node value mutation");
    SetError::invalid_target(operation, kind)
}

fn has_kind(kind: NodeKind) -> impl Fn(&Node) -> bool {
    move |node| node.kind() == kind
}

impl Node {
    /// Set the data of a CDATA node.
    ///
    /// The stored name becomes `![CDATA[data]]`. Fails unless the node (or
    /// the first child of a non-CDATA element) is a CDATA element.
    pub fn set_cdata(&mut self, data: &str) -> SetResult<()> {
        let node = self.resolve_mut(Node::is_cdata);
        match &mut node.value {
            Value::Element(name) if is_cdata_name(name.as_str()) => {
                *name = wrap_cdata(data);
                Ok(())
            }
            other => Err(reject("set_cdata", other.kind())),
        }
    }

    /// Set the handle and destructor of a custom node.
    ///
    /// The previous handle is passed to the previous destructor, if both
    /// were set, before the new pair is installed. On failure `destroy` is
    /// dropped without being called.
    pub fn set_custom(&mut self, data: Option<Handle>, destroy: Option<Destructor>) -> SetResult<()> {
        let node = self.resolve_mut(has_kind(NodeKind::Custom));
        match &mut node.value {
            Value::Custom(custom) => {
                custom.replace(data, destroy);
                Ok(())
            }
            other => Err(reject("set_custom", other.kind())),
        }
    }

    /// Set the name of an element node.
    ///
    /// Operates on this node only; there is no first-child fallback. A CDATA
    /// element loses its marker and becomes a plain element named `name`.
    pub fn set_element(&mut self, name: &str) -> SetResult<()> {
        match &mut self.value {
            Value::Element(current) => {
                *current = CompactString::from(name);
                Ok(())
            }
            other => Err(reject("set_element", other.kind())),
        }
    }

    /// Set the value of an integer node.
    pub fn set_integer(&mut self, integer: i32) -> SetResult<()> {
        let node = self.resolve_mut(has_kind(NodeKind::Integer));
        match &mut node.value {
            Value::Integer(current) => {
                *current = integer;
                Ok(())
            }
            other => Err(reject("set_integer", other.kind())),
        }
    }

    /// Set the value of an opaque node.
    pub fn set_opaque(&mut self, opaque: &str) -> SetResult<()> {
        let node = self.resolve_mut(has_kind(NodeKind::Opaque));
        match &mut node.value {
            Value::Opaque(current) => {
                *current = CompactString::from(opaque);
                Ok(())
            }
            other => Err(reject("set_opaque", other.kind())),
        }
    }

    /// Set the value of an opaque node to a formatted string.
    ///
    /// The string is rendered before the node is touched; a rendering
    /// failure leaves the old value in place.
    pub fn set_opaquef(&mut self, format: &str, args: &[FormatArg<'_>]) -> SetResult<()> {
        let node = self.resolve_mut(has_kind(NodeKind::Opaque));
        match &mut node.value {
            Value::Opaque(current) => {
                *current = render(format, args)?;
                Ok(())
            }
            other => Err(reject("set_opaquef", other.kind())),
        }
    }

    /// Set the string and whitespace flag of a text node.
    ///
    /// The whitespace flag is only updated when the call succeeds.
    pub fn set_text(&mut self, whitespace: bool, string: &str) -> SetResult<()> {
        let node = self.resolve_mut(has_kind(NodeKind::Text));
        match &mut node.value {
            Value::Text(text) => {
                text.string = CompactString::from(string);
                text.whitespace = whitespace;
                Ok(())
            }
            other => Err(reject("set_text", other.kind())),
        }
    }

    /// Set a text node to a formatted string.
    ///
    /// Like [`Node::set_text`], neither the string nor the whitespace flag
    /// change unless rendering succeeds.
    pub fn set_textf(&mut self, whitespace: bool, format: &str, args: &[FormatArg<'_>]) -> SetResult<()> {
        let node = self.resolve_mut(has_kind(NodeKind::Text));
        match &mut node.value {
            Value::Text(text) => {
                text.string = render(format, args)?;
                text.whitespace = whitespace;
                Ok(())
            }
            other => Err(reject("set_textf", other.kind())),
        }
    }

    /// Set the user-data handle of any node.
    ///
    /// The previous handle is overwritten, never released. Always succeeds.
    pub fn set_user_data(&mut self, data: Option<Handle>) -> SetResult<()> {
        self.user_data = data;
        Ok(())
    }
}
