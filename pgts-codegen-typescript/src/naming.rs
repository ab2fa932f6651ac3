//! TypeScript-specific naming.

use pgts_core::to_pascal_case;

use crate::escape_literal;

/// The emitted name of a schema, table or enum type.
pub fn type_name(raw: &str) -> String {
    to_pascal_case(raw)
}

/// An interface property or enum member key, quoted when it is not a
/// plain identifier.
pub fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", escape_literal(name))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(type_name("order_status"), "OrderStatus");
        assert_eq!(type_name("public"), "Public");
    }

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("created_at"), "created_at");
        assert_eq!(property_name("$meta"), "$meta");
        assert_eq!(property_name("first name"), "'first name'");
        assert_eq!(property_name("2fa"), "'2fa'");
        assert_eq!(property_name("x-y"), "'x-y'");
        assert_eq!(property_name("o'clock"), "'o\\'clock'");
        assert_eq!(property_name(""), "''");
    }
}
