//! xmlnode-set - Type-tagged value mutation for XML-like DOM nodes
//!
//! ## Core Concepts
//!
//! **One payload per node**: a [`Node`] holds exactly one [`Value`] (element
//! name, integer, opaque text, whitespace-aware text or custom data). CDATA
//! sections are elements whose name is wrapped as `![CDATA[...]]`.
//!
//! **Release-then-install**: every setter checks the target's kind, then
//! drops the old payload (running a custom destructor if one was attached)
//! and installs the new one. A failed call leaves the node untouched.
//!
//! **First-child fallback**: setters other than `set_element` and
//! `set_user_data` accept a plain element wrapping a typed first child.
//!
//! ## Modules
//! - `node`: Node, Value and payload types
//! - `set`: one setter per payload kind
//! - `get`: matching getters
//! - `format`: printf-style formatted-allocate helper
//! - `handle`: caller-owned handles and destructors
//! - `error`: error types
//!
//! ## Usage
//!
//! ```
//! use xmlnode_set::{Node, printf_args};
//!
//! let mut value = Node::new_element("value").child(Node::new_text(false, "old"));
//!
//! // Targets the text child through its wrapper
//! value.set_textf(true, "%d-%s", &printf_args![3, "x"]).unwrap();
//! assert_eq!(value.text(), Some(("3-x", true)));
//!
//! // Wrong kind: rejected, nothing changes
//! assert!(value.set_integer(1).is_err());
//! ```
//!
//! ## Features
//! - `tracing` (off by default): emit trace-level events for rejected
//!   mutations and custom destructor calls. Without it the crate never logs.

#[macro_use]
mod macros;

/// Node types: Node, Value, TextValue, CustomValue
pub mod node;

/// Node value setters
pub mod set;

/// Node value getters
pub mod get;

/// Formatted-allocate helper
pub mod format;

/// Caller-owned handles
pub mod handle;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, CustomValue, Node, NodeKind, TextValue, Value, CDATA_PREFIX};

// Handles
pub use handle::{Destructor, Handle};

// Formatting
pub use format::{FormatArg, FormatError};

// Error types
pub use error::{SetError, SetResult};

// =============================================================================
// Tests
// =============================================================================
