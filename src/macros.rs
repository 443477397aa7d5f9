//! Accessor and argument-list macros
//!
//! These macros eliminate repetitive match code when working with `Value`.
//! Accessor generation uses `paste` internally for identifier concatenation.

// =============================================================================
// Value accessor generation
// =============================================================================

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with one payload per variant
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Value {
///     // element -> Element, text -> Text
///     impl_value_accessors!(element: CompactString, text: TextValue);
/// }
/// ```
#[macro_export]
macro_rules! impl_value_accessors {
    ($($variant:ident: $ty:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " payload"]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get the " $variant " payload"]
                pub fn [<as_ $variant>](&self) -> Option<&$ty> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Try to get the " $variant " payload mutably"]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut $ty> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

// =============================================================================
// Formatted-value arguments
// =============================================================================

/// Build a `[FormatArg; N]` array from heterogeneous values
///
/// Each expression goes through `FormatArg::from`, so integers, floats,
/// chars and string slices can be mixed freely.
///
/// # Example
/// ```
/// use xmlnode_set::{printf_args, format::render};
///
/// let s = render("%d-%s", &printf_args![3, "x"]).unwrap();
/// assert_eq!(s, "3-x");
/// ```
#[macro_export]
macro_rules! printf_args {
    () => {
        {
            let args: [$crate::format::FormatArg<'static>; 0] = [];
            args
        }
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::format::FormatArg::from($arg)),+]
    };
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Emit a trace-level event when the `tracing` feature is enabled
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}
