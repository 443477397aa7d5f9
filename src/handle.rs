//! Externally-owned handles
//!
//! Custom payloads and user data both reference memory the caller owns. The
//! node only stores the handle; whether anything is released is decided by
//! the caller-supplied [`Destructor`] (custom payloads) or never (user data).

use std::fmt;
use std::num::NonZeroUsize;

/// Opaque, pointer-sized handle to caller-owned data
///
/// A handle is never zero, so `Option<Handle>` stays pointer-sized and
/// `None` plays the role of a null reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(NonZeroUsize);

impl Handle {
    /// Create a handle from a raw value, `None` for zero
    #[inline]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Create a handle from a pointer, `None` for null
    #[inline]
    pub fn from_ptr<T>(ptr: *const T) -> Option<Self> {
        Self::new(ptr as usize)
    }

    /// Raw handle value
    #[inline]
    pub const fn as_raw(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// Caller-supplied release logic for a custom payload
///
/// Invoked at most once, with the handle it was installed alongside.
/// A destructor must not mutate the node it was attached to.
pub type Destructor = Box<dyn FnOnce(Handle) + Send>;
