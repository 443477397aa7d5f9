//! Prelude module for common imports.
//!
//! ```
//! use xmlnode_set::prelude::*;
//!
//! let mut node = Node::new_integer(1);
//! node.set_integer(2).unwrap();
//! ```

// Node types
pub use crate::node::{CustomValue, Node, NodeKind, TextValue, Value};

// Handles
pub use crate::handle::{Destructor, Handle};

// Formatting
pub use crate::format::{FormatArg, FormatError, render};
pub use crate::printf_args;

// Error
pub use crate::error::{SetError, SetResult};
