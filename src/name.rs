//! Type-name normalization shared by the generator and generated code.

use std::borrow::Cow;

/// Separator between nested types in binary type names.
pub const NESTED_SEPARATOR: char = '$';

/// Separator used by normalized type names.
pub const NORMALIZED_SEPARATOR: char = '.';

/// Normalize a runtime type identifier to its dot-separated form.
///
/// Nested-type separators (`$`) and Rust path separators (`::`) both become
/// `.`, so `app::model::Order`, `app.model.Order` and the binary name
/// `app.model.Order$Line` (as `app.model.Order.Line`) all land on the key a
/// generated registry was built with. Borrows when nothing needs rewriting.
///
/// ```
/// use factory_registry::normalize_type_name;
///
/// assert_eq!(normalize_type_name("app::model::Order"), "app.model.Order");
/// assert_eq!(normalize_type_name("app.model.Order$Line"), "app.model.Order.Line");
/// ```
pub fn normalize_type_name(type_name: &str) -> Cow<'_, str> {
    if !type_name.contains(NESTED_SEPARATOR) && !type_name.contains("::") {
        return Cow::Borrowed(type_name);
    }
    Cow::Owned(
        type_name
            .replace("::", ".")
            .replace(NESTED_SEPARATOR, "."),
    )
}
