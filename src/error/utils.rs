//! Utilities for printing and handling errors.

use crate::utils::MetaData;

use std::fmt;

/// Write meta data information for a line in the input text.
pub(crate) fn write_line_information<W: fmt::Write>(
    buffer: &mut W,
    meta_data: &MetaData,
) -> fmt::Result {
    write!(buffer, "({}) ", meta_data)
}

/// Wrapper to implement From for variants when the variant is simply encapsulated
/// in the enum.
///
/// # Example
/// Running
/// ```ignore
/// impl_from_error![
///     MyError;
///     [Variant, ErrorData]
/// ];
/// ```
/// is identical to running
/// ```ignore
/// impl From<ErrorData> for MyError {
///     fn from(err: ErrorData) -> Self {
///         Self::Variant(err)
///     }
/// }
/// ```
/// The macro can also implement several variants at once:
/// ```ignore
/// impl_from_error![
///     MyError;
///     [Variant1, ErrorData1],
///     [Variant2, ErrorData2]
/// ];
/// ```
macro_rules! impl_from_error {
    ($for_type:ident; $([$variant:ident, $from_type:ident]),+) => {
        $(
            impl From<$from_type> for $for_type {
                fn from(err: $from_type) -> Self {
                    $for_type::$variant(err)
                }
            }
        )*
    }
}
