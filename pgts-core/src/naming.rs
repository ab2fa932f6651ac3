//! Identifier transforms for catalog names.

/// Convert a snake_case catalog identifier to PascalCase.
///
/// Splits on `_`, upper-cases the first character of every segment and joins
/// the segments without a separator. Empty segments contribute nothing, so
/// `"a__b"` becomes `"AB"`. The remainder of each segment is left untouched.
///
/// The transform is applied exactly once to a raw catalog name; feeding an
/// already transformed name back through it is not meaningful.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert an enum label to a TypeScript enum member identifier
/// (e.g., "in progress" -> "IN_PROGRESS").
pub fn to_enum_member(label: &str) -> String {
    label.to_uppercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("order_item"), "OrderItem");
        assert_eq!(to_pascal_case("a"), "A");
        assert_eq!(to_pascal_case("a__b"), "AB");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("_leading"), "Leading");
        assert_eq!(to_pascal_case("trailing_"), "Trailing");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_keeps_non_ascii() {
        assert_eq!(to_pascal_case("über_tabelle"), "ÜberTabelle");
        assert_eq!(to_pascal_case("v2_items"), "V2Items");
    }

    #[test]
    fn test_to_enum_member() {
        assert_eq!(to_enum_member("pending"), "PENDING");
        assert_eq!(to_enum_member("in progress"), "IN_PROGRESS");
        assert_eq!(to_enum_member("Mixed Case"), "MIXED_CASE");
    }
}
