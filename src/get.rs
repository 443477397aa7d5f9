//! Node value getters
//!
//! The read side of the setters: each getter resolves its target with the
//! same first-child fallback as the matching setter and returns `None` when
//! the target has the wrong kind.

use crate::handle::Handle;
use crate::node::{Node, NodeKind, Value, unwrap_cdata};

impl Node {
    /// Data of a CDATA node, without the `![CDATA[` / `]]` wrapper.
    pub fn cdata(&self) -> Option<&str> {
        match &self.resolve(Node::is_cdata).value {
            Value::Element(name) => unwrap_cdata(name),
            _ => None,
        }
    }

    /// Handle of a custom node.
    pub fn custom(&self) -> Option<Handle> {
        self.resolve(|n| n.kind() == NodeKind::Custom)
            .value
            .as_custom()
            .and_then(|custom| custom.data())
    }

    /// Name of an element node (no first-child fallback).
    pub fn element(&self) -> Option<&str> {
        self.value.as_element().map(|name| name.as_str())
    }

    /// Value of an integer node.
    pub fn integer(&self) -> Option<i32> {
        self.resolve(|n| n.kind() == NodeKind::Integer)
            .value
            .as_integer()
            .copied()
    }

    /// Value of an opaque node.
    pub fn opaque(&self) -> Option<&str> {
        self.resolve(|n| n.kind() == NodeKind::Opaque)
            .value
            .as_opaque()
            .map(|opaque| opaque.as_str())
    }

    /// String and leading-whitespace flag of a text node.
    pub fn text(&self) -> Option<(&str, bool)> {
        self.resolve(|n| n.kind() == NodeKind::Text)
            .value
            .as_text()
            .map(|text| (text.string.as_str(), text.whitespace))
    }

    /// User-data handle of this node.
    #[inline]
    pub fn user_data(&self) -> Option<Handle> {
        self.user_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_direct() {
        assert_eq!(Node::new_cdata("x").cdata(), Some("x"));
        assert_eq!(Node::new_element("div").element(), Some("div"));
        assert_eq!(Node::new_integer(-3).integer(), Some(-3));
        assert_eq!(Node::new_opaque("raw").opaque(), Some("raw"));
        assert_eq!(Node::new_text(true, "t").text(), Some(("t", true)));
        assert_eq!(Node::new_custom(Handle::new(5), None).custom(), Handle::new(5));
    }

    #[test]
    fn test_get_through_wrapper() {
        let wrap = |child| Node::new_element("w").child(child);

        assert_eq!(wrap(Node::new_cdata("x")).cdata(), Some("x"));
        assert_eq!(wrap(Node::new_integer(1)).integer(), Some(1));
        assert_eq!(wrap(Node::new_opaque("o")).opaque(), Some("o"));
        assert_eq!(wrap(Node::new_text(false, "t")).text(), Some(("t", false)));
        assert_eq!(wrap(Node::new_custom(Handle::new(2), None)).custom(), Handle::new(2));

        // element() never descends
        assert_eq!(wrap(Node::new_element("inner")).element(), Some("w"));
    }

    #[test]
    fn test_get_wrong_kind() {
        let node = Node::new_element("div");
        assert_eq!(node.cdata(), None);
        assert_eq!(node.integer(), None);
        assert_eq!(node.opaque(), None);
        assert_eq!(node.text(), None);
        assert_eq!(node.custom(), None);
        assert_eq!(Node::new_integer(1).element(), None);
    }

    #[test]
    fn test_get_user_data() {
        let mut node = Node::new_integer(1);
        assert_eq!(node.user_data(), None);
        node.set_user_data(Handle::new(42)).unwrap();
        assert_eq!(node.user_data(), Handle::new(42));
    }

    #[test]
    fn test_getters_follow_setters() {
        let mut node = Node::new_element("item").child(Node::new_text(false, ""));
        node.set_textf(true, "%s:%d", &printf_args!["n", 4]).unwrap();
        assert_eq!(node.text(), Some(("n:4", true)));
    }
}
