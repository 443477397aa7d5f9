//! Element names and the CDATA marker
//!
//! CDATA sections are not a node kind of their own: they are element nodes
//! whose name is wrapped as `![CDATA[...]]`.

use compact_str::{CompactString, format_compact};

/// Prefix that marks an element name as a CDATA section
pub const CDATA_PREFIX: &str = "![CDATA[";

/// Suffix closing a CDATA-wrapped element name
pub const CDATA_SUFFIX: &str = "]]";

/// Check if an element name carries the CDATA marker
#[inline]
pub fn is_cdata_name(name: &str) -> bool {
    name.starts_with(CDATA_PREFIX)
}

/// Wrap data as a CDATA element name
pub fn wrap_cdata(data: &str) -> CompactString {
    format_compact!("{CDATA_PREFIX}{data}{CDATA_SUFFIX}")
}

/// Extract the data from a CDATA element name
///
/// Returns `None` if the name has no CDATA marker. A missing closing
/// `]]` is tolerated; the rest of the name is returned as-is.
pub fn unwrap_cdata(name: &str) -> Option<&str> {
    let data = name.strip_prefix(CDATA_PREFIX)?;
    Some(data.strip_suffix(CDATA_SUFFIX).unwrap_or(data))
}
