//! Node payloads
//!
//! `Value` is the sum type holding the one active payload of a node. Its
//! variant is the node's kind, so a node can never carry a string and an
//! integer at the same time.

use std::fmt;

use compact_str::CompactString;

use crate::handle::{Destructor, Handle};

use super::TextValue;

// =============================================================================
// NodeKind
// =============================================================================

/// Payload kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Element (or CDATA-wrapped element) name
    Element,
    /// Signed integer
    Integer,
    /// Raw uninterpreted text
    Opaque,
    /// Whitespace-aware text
    Text,
    /// Externally-owned custom data
    Custom,
}

impl NodeKind {
    /// Lowercase kind name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Integer => "integer",
            Self::Opaque => "opaque",
            Self::Text => "text",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Value
// =============================================================================

/// The payload a node owns
#[derive(Debug)]
pub enum Value {
    /// Element name, possibly CDATA-wrapped
    Element(CompactString),
    /// Signed integer
    Integer(i32),
    /// Raw uninterpreted text
    Opaque(CompactString),
    /// Text with its leading-whitespace flag
    Text(TextValue),
    /// Caller-owned handle and destructor
    Custom(CustomValue),
}

impl Value {
    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_value_accessors!(
        element: CompactString,
        integer: i32,
        opaque: CompactString,
        text: TextValue,
        custom: CustomValue,
    );

    /// Kind tag of this payload
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Integer(_) => NodeKind::Integer,
            Self::Opaque(_) => NodeKind::Opaque,
            Self::Text(_) => NodeKind::Text,
            Self::Custom(_) => NodeKind::Custom,
        }
    }
}

// =============================================================================
// CustomValue
// =============================================================================

/// Custom payload: a caller-owned handle and optional release logic
///
/// The destructor runs when the payload is replaced or dropped, and only if
/// both a handle and a destructor are present.
#[derive(Default)]
pub struct CustomValue {
    data: Option<Handle>,
    destroy: Option<Destructor>,
}

impl CustomValue {
    /// Create a custom payload
    pub fn new(data: Option<Handle>, destroy: Option<Destructor>) -> Self {
        Self { data, destroy }
    }

    /// Stored handle
    #[inline]
    pub fn data(&self) -> Option<Handle> {
        self.data
    }

    /// Check if a destructor is attached
    #[inline]
    pub fn has_destructor(&self) -> bool {
        self.destroy.is_some()
    }

    /// Release the current handle, leaving the payload empty.
    pub(crate) fn release(&mut self) {
        let data = self.data.take();
        let destroy = self.destroy.take();
        if let (Some(data), Some(destroy)) = (data, destroy) {
            trace_event!(handle = %data, "releasing custom payload");
            destroy(data);
        }
    }

    /// Release the current handle, then install the new one.
    pub(crate) fn replace(&mut self, data: Option<Handle>, destroy: Option<Destructor>) {
        self.release();
        self.data = data;
        self.destroy = destroy;
    }
}

impl Drop for CustomValue {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValue")
            .field("data", &self.data)
            .field("destroy", &self.destroy.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counting(calls: &Arc<AtomicUsize>) -> Destructor {
        let calls = Arc::clone(calls);
        Box::new(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_value_accessors() {
        let mut value = Value::Integer(3);
        assert!(value.is_integer());
        assert!(!value.is_element());
        assert_eq!(value.as_integer(), Some(&3));
        assert!(value.as_opaque().is_none());

        *value.as_integer_mut().unwrap() = 4;
        assert_eq!(value.as_integer(), Some(&4));
        assert_eq!(value.kind(), NodeKind::Integer);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Element.to_string(), "element");
        assert_eq!(NodeKind::Custom.to_string(), "custom");
    }

    #[test]
    fn test_custom_drop_releases_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let custom = CustomValue::new(Handle::new(1), Some(counting(&calls)));
        assert!(custom.has_destructor());
        drop(custom);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_without_data_skips_destructor() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut custom = CustomValue::new(None, Some(counting(&calls)));
        custom.replace(Handle::new(2), None);
        assert_eq!(custom.data(), Handle::new(2));
        drop(custom);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_custom_debug_hides_closure() {
        let custom = CustomValue::new(Handle::new(16), Some(Box::new(|_| {})));
        let debug = format!("{custom:?}");
        assert!(debug.contains("<fn>"));
    }
}
